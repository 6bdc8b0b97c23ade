//! Extractors that load the record named by the `:id` path segment, so a
//! handler receives the record itself or the request ends with a 404.

use crate::models::{Category, Post};
use crate::services::{categories, posts};
use crate::web::error::AppError;
use crate::web::state::AppState;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

async fn path_id(parts: &mut Parts, state: &Arc<AppState>) -> Result<i64, AppError> {
    let Path(id) = Path::<i64>::from_request_parts(parts, state)
        .await
        .map_err(|_| AppError::not_found())?;
    Ok(id)
}

pub struct LoadedPost(pub Post);

impl FromRequestParts<Arc<AppState>> for LoadedPost {
    type Rejection = AppError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        state: &'life1 Arc<AppState>,
    ) -> Pin<Box<dyn Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>>
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let id = path_id(parts, state).await?;
            let post = posts::get_post(&state.db, id)?;
            Ok(LoadedPost(post))
        })
    }
}

pub struct LoadedCategory(pub Category);

impl FromRequestParts<Arc<AppState>> for LoadedCategory {
    type Rejection = AppError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        state: &'life1 Arc<AppState>,
    ) -> Pin<Box<dyn Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>>
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let id = path_id(parts, state).await?;
            let category = categories::get_category(&state.db, id)?;
            Ok(LoadedCategory(category))
        })
    }
}
