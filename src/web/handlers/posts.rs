use crate::models::{Post, PostParams};
use crate::services::{posts, ServiceError};
use crate::services::validation::ValidationErrors;
use crate::web::error::AppResult;
use crate::web::extractors::LoadedPost;
use crate::web::flash::{self, Notice};
use crate::web::handlers::make_context;
use crate::web::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::CookieJar;
use serde::Serialize;
use std::sync::Arc;

/// Values echoed back into the post form.
#[derive(Serialize)]
struct PostFormValues {
    name: String,
    content: String,
    slug: String,
}

impl From<&Post> for PostFormValues {
    fn from(post: &Post) -> Self {
        Self {
            name: post.name.clone(),
            content: post.content.clone(),
            slug: post.slug.clone().unwrap_or_default(),
        }
    }
}

impl PostFormValues {
    /// Submitted values, falling back to the stored post for fields the
    /// request left out.
    fn merged(post: &Post, params: &PostParams) -> Self {
        Self {
            name: params.name.clone().unwrap_or_else(|| post.name.clone()),
            content: params.content.clone().unwrap_or_else(|| post.content.clone()),
            slug: params
                .slug
                .clone()
                .or_else(|| post.slug.clone())
                .unwrap_or_default(),
        }
    }
}

impl From<&PostParams> for PostFormValues {
    fn from(params: &PostParams) -> Self {
        Self {
            name: params.name.clone().unwrap_or_default(),
            content: params.content.clone().unwrap_or_default(),
            slug: params.slug.clone().unwrap_or_default(),
        }
    }
}

fn render_form(
    state: &AppState,
    post_id: Option<i64>,
    values: PostFormValues,
    errors: &ValidationErrors,
    status: StatusCode,
) -> AppResult<Response> {
    let mut ctx = make_context(state, None);
    ctx.insert("post_id", &post_id);
    ctx.insert("is_new", &post_id.is_none());
    ctx.insert("form", &values);
    ctx.insert("name_errors", errors.get("name"));
    ctx.insert("content_errors", errors.get("content"));
    ctx.insert("slug_errors", errors.get("slug"));
    ctx.insert("error_messages", &errors.full_messages());

    let html = state.templates.render("posts/form.html", &ctx)?;
    Ok((status, Html(html)).into_response())
}

/// GET /, GET /posts, GET /articles
pub async fn index(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Html<String>)> {
    let posts = posts::list_posts(&state.db)?;
    let (jar, notice) = flash::take(jar);

    let mut ctx = make_context(&state, notice);
    ctx.insert("posts", &posts);

    let html = state.templates.render("posts/index.html", &ctx)?;
    Ok((jar, Html(html)))
}

/// GET /posts/:id
pub async fn show(
    State(state): State<Arc<AppState>>,
    LoadedPost(post): LoadedPost,
) -> AppResult<Html<String>> {
    let category = posts::category_of(&state.db, &post)?;

    let mut ctx = make_context(&state, None);
    ctx.insert("post", &post);
    ctx.insert("category", &category);

    let html = state.templates.render("posts/show.html", &ctx)?;
    Ok(Html(html))
}

/// GET /posts/new
pub async fn new(State(state): State<Arc<AppState>>) -> AppResult<Response> {
    render_form(
        &state,
        None,
        PostFormValues::from(&PostParams::default()),
        &ValidationErrors::default(),
        StatusCode::OK,
    )
}

/// POST /posts
pub async fn create(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PostParams>,
) -> AppResult<Response> {
    let values = PostFormValues::from(&form);
    match posts::create_post(&state.db, form, state.post_rules()) {
        Ok(id) => Ok(Redirect::to(&format!("/posts/{}", id)).into_response()),
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

/// GET /posts/:id/edit
pub async fn edit(
    State(state): State<Arc<AppState>>,
    LoadedPost(post): LoadedPost,
) -> AppResult<Response> {
    render_form(
        &state,
        Some(post.id),
        PostFormValues::from(&post),
        &ValidationErrors::default(),
        StatusCode::OK,
    )
}

/// PATCH|PUT|POST /posts/:id
///
/// A request without a form body is an update that changes nothing.
pub async fn update(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    LoadedPost(post): LoadedPost,
    form: Option<Form<PostParams>>,
) -> AppResult<Response> {
    let form = form.map(|Form(form)| form).unwrap_or_default();
    let values = PostFormValues::merged(&post, &form);
    match posts::update_post(&state.db, post.id, form, state.post_rules()) {
        Ok(_) => Ok((flash::set(jar, Notice::PostUpdated), Redirect::to("/posts")).into_response()),
        Err(ServiceError::Invalid(errors)) => render_form(
            &state,
            Some(post.id),
            values,
            &errors,
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
        Err(e) => Err(e.into()),
    }
}

/// DELETE /posts/:id, POST /posts/:id/delete
pub async fn destroy(
    State(state): State<Arc<AppState>>,
    LoadedPost(post): LoadedPost,
) -> AppResult<Redirect> {
    posts::delete_post(&state.db, post.id)?;
    Ok(Redirect::to("/posts"))
}
