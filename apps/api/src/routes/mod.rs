pub mod health;
pub mod prompt;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/PromptCalcCLI.txt", get(prompt::prompt_handler))
        .route("/analyze", post(handlers::handle_analyze))
        .with_state(state)
}
