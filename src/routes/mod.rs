//! Router assembly: API routes first, then the frontend bundle for everything else.

mod common;
mod frontend;
mod movie;

pub use common::common_routes;
pub use frontend::frontend_service;
pub use movie::{movie_routes, JSON_BODY_LIMIT};

use crate::state::AppState;
use axum::Router;
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Full application with the production middleware stack.
pub fn app(state: AppState, frontend_dir: &Path) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(movie_routes(state, frontend_dir))
        .fallback_service(frontend_service(frontend_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
