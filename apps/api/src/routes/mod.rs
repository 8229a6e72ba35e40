pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/analyze-job", post(handlers::handle_analyze_job))
        .route(
            "/api/generate-questions",
            post(handlers::handle_generate_questions),
        )
        .with_state(state)
}
