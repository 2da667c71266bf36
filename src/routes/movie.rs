//! Movie CRUD routes.

use crate::handlers::movie::{create, delete as delete_handler, list, update};
use crate::routes::frontend_service;
use crate::state::AppState;
use axum::{routing::get, routing::get_service, Router};
use std::path::Path;
use tower_http::limit::RequestBodyLimitLayer;

/// Largest accepted JSON body.
pub const JSON_BODY_LIMIT: usize = 100 * 1024;

/// `GET /movies/:id` has no API handler, so it serves the frontend like any other unmatched GET.
pub fn movie_routes(state: AppState, frontend_dir: &Path) -> Router {
    Router::new()
        .route("/movies", get(list).post(create))
        .route(
            "/movies/:id",
            get_service(frontend_service(frontend_dir))
                .put(update)
                .delete(delete_handler),
        )
        .layer(RequestBodyLimitLayer::new(JSON_BODY_LIMIT))
        .with_state(state)
}
