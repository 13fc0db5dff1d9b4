pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::judge::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Judge API
        .route("/api/v1/judge", post(handlers::handle_judge))
        .with_state(state)
}
