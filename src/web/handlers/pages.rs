use crate::web::error::AppResult;
use crate::web::handlers::make_context;
use crate::web::state::AppState;
use axum::extract::{Path, State};
use axum::response::Html;
use std::sync::Arc;

/// GET /salut and GET /salut/:name
pub async fn salut(
    State(state): State<Arc<AppState>>,
    name: Option<Path<String>>,
) -> AppResult<Html<String>> {
    let mut ctx = make_context(&state, None);
    ctx.insert("name", &name.map(|Path(n)| n));

    let html = state.templates.render("salut.html", &ctx)?;
    Ok(Html(html))
}
