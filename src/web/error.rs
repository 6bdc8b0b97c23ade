use crate::services::ServiceError;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

const NOT_FOUND_PAGE: &str = "<!DOCTYPE html><html><head><title>Not Found</title></head><body><h1>Not Found</h1><p>The record you asked for does not exist.</p><p><a href=\"/posts\">Back to posts</a></p></body></html>";

pub struct AppError(anyhow::Error);

impl AppError {
    pub fn not_found() -> Self {
        Self(ServiceError::NotFound.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(ServiceError::NotFound) = self.0.downcast_ref::<ServiceError>() {
            return (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE)).into_response();
        }
        tracing::error!("Application error: {:?}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;
