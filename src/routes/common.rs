//! Common routes: health and readiness.

use crate::handlers::common::{health, ready};
use crate::state::AppState;
use axum::{routing::get, Router};

/// GET /health and GET /ready (store ping).
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state)
}
