use crate::models::{Category, CategoryParams};
use crate::services::{categories, posts, ServiceError};
use crate::services::validation::ValidationErrors;
use crate::web::error::AppResult;
use crate::web::extractors::LoadedCategory;
use crate::web::handlers::make_context;
use crate::web::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct CategoryFormValues {
    name: String,
    slug: String,
}

impl From<&Category> for CategoryFormValues {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            slug: category.slug.clone(),
        }
    }
}

impl CategoryFormValues {
    fn merged(category: &Category, params: &CategoryParams) -> Self {
        Self {
            name: params.name.clone().unwrap_or_else(|| category.name.clone()),
            slug: params.slug.clone().unwrap_or_else(|| category.slug.clone()),
        }
    }
}

impl From<&CategoryParams> for CategoryFormValues {
    fn from(params: &CategoryParams) -> Self {
        Self {
            name: params.name.clone().unwrap_or_default(),
            slug: params.slug.clone().unwrap_or_default(),
        }
    }
}

fn render_form(
    state: &AppState,
    category_id: Option<i64>,
    values: CategoryFormValues,
    errors: &ValidationErrors,
    status: StatusCode,
) -> AppResult<Response> {
    let mut ctx = make_context(state, None);
    ctx.insert("category_id", &category_id);
    ctx.insert("is_new", &category_id.is_none());
    ctx.insert("form", &values);
    ctx.insert("name_errors", errors.get("name"));
    ctx.insert("slug_errors", errors.get("slug"));
    ctx.insert("error_messages", &errors.full_messages());

    let html = state.templates.render("categories/form.html", &ctx)?;
    Ok((status, Html(html)).into_response())
}

/// GET /categories
pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let categories = categories::list_categories(&state.db)?;

    let mut ctx = make_context(&state, None);
    ctx.insert("categories", &categories);

    let html = state.templates.render("categories/index.html", &ctx)?;
    Ok(Html(html))
}

/// GET /categories/:id
pub async fn show(
    State(state): State<Arc<AppState>>,
    LoadedCategory(category): LoadedCategory,
) -> AppResult<Html<String>> {
    let posts = posts::list_posts_in_category(&state.db, category.id)?;

    let mut ctx = make_context(&state, None);
    ctx.insert("category", &category);
    ctx.insert("posts", &posts);

    let html = state.templates.render("categories/show.html", &ctx)?;
    Ok(Html(html))
}

/// GET /categories/new
pub async fn new(State(state): State<Arc<AppState>>) -> AppResult<Response> {
    render_form(
        &state,
        None,
        CategoryFormValues::from(&CategoryParams::default()),
        &ValidationErrors::default(),
        StatusCode::OK,
    )
}

/// POST /categories
pub async fn create(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CategoryParams>,
) -> AppResult<Response> {
    let values = CategoryFormValues::from(&form);
    match categories::create_category(&state.db, form) {
        Ok(id) => Ok(Redirect::to(&format!("/categories/{}", id)).into_response()),
        Err(ServiceError::Invalid(errors)) => render_form(
            &state,
            None,
            values,
            &errors,
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
        Err(e) => Err(e.into()),
    }
}

/// GET /categories/:id/edit
pub async fn edit(
    State(state): State<Arc<AppState>>,
    LoadedCategory(category): LoadedCategory,
) -> AppResult<Response> {
    render_form(
        &state,
        Some(category.id),
        CategoryFormValues::from(&category),
        &ValidationErrors::default(),
        StatusCode::OK,
    )
}

/// PATCH|PUT|POST /categories/:id
///
/// A request without a form body is an update that changes nothing.
pub async fn update(
    State(state): State<Arc<AppState>>,
    LoadedCategory(category): LoadedCategory,
    form: Option<Form<CategoryParams>>,
) -> AppResult<Response> {
    let form = form.map(|Form(form)| form).unwrap_or_default();
    let values = CategoryFormValues::merged(&category, &form);
    match categories::update_category(&state.db, category.id, form) {
        Ok(_) => Ok(Redirect::to("/categories").into_response()),
        Err(ServiceError::Invalid(errors)) => render_form(
            &state,
            Some(category.id),
            values,
            &errors,
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
        Err(e) => Err(e.into()),
    }
}

/// DELETE /categories/:id, POST /categories/:id/delete
pub async fn destroy(
    State(state): State<Arc<AppState>>,
    LoadedCategory(category): LoadedCategory,
) -> AppResult<Redirect> {
    categories::delete_category(&state.db, category.id)?;
    Ok(Redirect::to("/categories"))
}
