use axum::{extract::State, http::header, response::IntoResponse};
use tracing::debug;

use crate::analysis::prompts::DEFAULT_CLI_PROMPT;
use crate::state::AppState;

/// GET /PromptCalcCLI.txt
///
/// Serves the rubric document callers use as their default `prompt` field.
/// A custom file at the configured path wins; otherwise the embedded default
/// rubric is served verbatim.
pub async fn prompt_handler(State(state): State<AppState>) -> impl IntoResponse {
    let text = match tokio::fs::read_to_string(&state.config.prompt_path).await {
        Ok(custom) => custom,
        Err(_) => {
            debug!(
                "No custom prompt document at {}; serving embedded default",
                state.config.prompt_path
            );
            DEFAULT_CLI_PROMPT.to_string()
        }
    };

    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text)
}
