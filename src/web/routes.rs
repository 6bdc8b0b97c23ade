use super::handlers;
use super::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub fn page_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::posts::index))
        .route("/articles", get(handlers::posts::index))
        .route("/salut", get(handlers::pages::salut))
        .route("/salut/:name", get(handlers::pages::salut))
}

pub fn post_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/posts",
            get(handlers::posts::index).post(handlers::posts::create),
        )
        .route("/posts/new", get(handlers::posts::new))
        .route(
            "/posts/:id",
            get(handlers::posts::show)
                .patch(handlers::posts::update)
                .put(handlers::posts::update)
                .post(handlers::posts::update)
                .delete(handlers::posts::destroy),
        )
        .route("/posts/:id/edit", get(handlers::posts::edit))
        .route("/posts/:id/delete", post(handlers::posts::destroy))
}

pub fn category_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/categories",
            get(handlers::categories::index).post(handlers::categories::create),
        )
        .route("/categories/new", get(handlers::categories::new))
        .route(
            "/categories/:id",
            get(handlers::categories::show)
                .patch(handlers::categories::update)
                .put(handlers::categories::update)
                .post(handlers::categories::update)
                .delete(handlers::categories::destroy),
        )
        .route("/categories/:id/edit", get(handlers::categories::edit))
        .route(
            "/categories/:id/delete",
            post(handlers::categories::destroy),
        )
}

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/posts", get(handlers::api::list_posts))
        .route("/api/posts/:id", get(handlers::api::get_post))
        .route("/api/categories", get(handlers::api::list_categories))
        .route("/api/categories/:id", get(handlers::api::get_category))
}
