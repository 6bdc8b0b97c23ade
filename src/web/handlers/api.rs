use crate::models::PostJson;
use crate::services::{categories, posts, ServiceError};
use crate::web::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use std::sync::Arc;

fn json_list<T: serde::Serialize>(data: &[T]) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "data": data,
        "meta": {
            "total": data.len(),
        }
    }))
}

fn json_single<T: serde::Serialize>(data: &T) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "data": data,
    }))
}

fn not_found(msg: &str) -> Response {
    let body = serde_json::json!({
        "error": "Not Found",
        "message": msg,
    });
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

fn internal_error(context: &str, err: ServiceError) -> Response {
    tracing::error!("API {} error: {}", context, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({"error": "Internal server error"})),
    )
        .into_response()
}

/// GET /api/posts
pub async fn list_posts(State(state): State<Arc<AppState>>) -> Response {
    match posts::list_posts(&state.db) {
        Ok(posts) => {
            let data: Vec<PostJson> = posts.iter().map(|p| p.post.as_json()).collect();
            json_list(&data).into_response()
        }
        Err(e) => internal_error("list_posts", e),
    }
}

/// GET /api/posts/:id
pub async fn get_post(State(state): State<Arc<AppState>>, Path(id): Path<i64>) -> Response {
    match posts::get_post(&state.db, id) {
        Ok(post) => json_single(&post.as_json()).into_response(),
        Err(ServiceError::NotFound) => not_found("Post not found"),
        Err(e) => internal_error("get_post", e),
    }
}

/// GET /api/categories
pub async fn list_categories(State(state): State<Arc<AppState>>) -> Response {
    match categories::list_categories(&state.db) {
        Ok(categories) => json_list(&categories).into_response(),
        Err(e) => internal_error("list_categories", e),
    }
}

/// GET /api/categories/:id
pub async fn get_category(State(state): State<Arc<AppState>>, Path(id): Path<i64>) -> Response {
    match categories::get_category(&state.db, id) {
        Ok(category) => json_single(&category).into_response(),
        Err(ServiceError::NotFound) => not_found("Category not found"),
        Err(e) => internal_error("get_category", e),
    }
}
