//! Axum route handler for the analysis endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::compose::compose_prompt;
use crate::analysis::extractor::extract;
use crate::analysis::prompts::ANALYST_SYSTEM;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Rubric/instruction text; callers usually pass GET /PromptCalcCLI.txt.
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub artist_name: String,
    #[serde(default)]
    pub artist_resume: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    /// Raw model reply, returned alongside the extracted fields.
    pub analysis: String,
    pub cli: String,
    pub explanation: String,
    pub category_breakdown: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handler
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze
///
/// Relays the composed artist-evaluation prompt to the model, then recovers
/// score, explanation, and category breakdown from the free-text reply.
/// Extraction is best-effort: a reply missing every marker still produces a
/// 200 with defaulted fields.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("Prompt is required".to_string()));
    }
    if request.artist_resume.trim().is_empty() {
        return Err(AppError::Validation("Artist resume is required".to_string()));
    }
    // Fail before dispatch so a misconfigured server never hits the network
    if state.config.openai_api_key.is_none() {
        return Err(AppError::Config("Missing API key".to_string()));
    }

    info!(
        "Processing analyze request for artist \"{}\" (prompt: {} chars, resume: {} chars)",
        request.artist_name,
        request.prompt.len(),
        request.artist_resume.len()
    );

    let final_prompt = compose_prompt(&request.prompt, &request.artist_name, &request.artist_resume);

    let analysis_text = state.llm.complete(ANALYST_SYSTEM, &final_prompt).await?;

    let parsed = extract(&analysis_text);
    info!("Analysis complete: cli={}", parsed.cli);

    Ok(Json(AnalyzeResponse {
        analysis: analysis_text,
        cli: parsed.cli,
        explanation: parsed.explanation,
        category_breakdown: parsed.category_breakdown,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::llm_client::LlmClient;

    fn test_state(api_key: Option<&str>) -> AppState {
        let config = Config {
            openai_api_key: api_key.map(str::to_string),
            prompt_path: "public/PromptCalcCLI.txt".to_string(),
            port: 5000,
            rust_log: "info".to_string(),
        };
        AppState {
            llm: LlmClient::new(config.openai_api_key.clone()),
            config,
        }
    }

    #[tokio::test]
    async fn test_missing_resume_rejected_before_any_llm_call() {
        let request = AnalyzeRequest {
            prompt: "Score this artist.".to_string(),
            artist_name: "Jane Doe".to_string(),
            artist_resume: String::new(),
        };
        let result = handle_analyze(State(test_state(Some("sk-test"))), Json(request)).await;
        match result {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Artist resume is required"),
            _ => panic!("expected a validation error"),
        }
    }

    #[tokio::test]
    async fn test_missing_prompt_rejected_before_any_llm_call() {
        let request = AnalyzeRequest {
            prompt: String::new(),
            artist_name: String::new(),
            artist_resume: "MFA, two solo shows.".to_string(),
        };
        let result = handle_analyze(State(test_state(Some("sk-test"))), Json(request)).await;
        match result {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Prompt is required"),
            _ => panic!("expected a validation error"),
        }
    }

    #[tokio::test]
    async fn test_missing_api_key_is_config_error_not_llm_call() {
        let request = AnalyzeRequest {
            prompt: "Score this artist.".to_string(),
            artist_name: String::new(),
            artist_resume: "MFA, two solo shows.".to_string(),
        };
        let result = handle_analyze(State(test_state(None)), Json(request)).await;
        match result {
            Err(AppError::Config(msg)) => assert_eq!(msg, "Missing API key"),
            _ => panic!("expected a configuration error"),
        }
    }

    #[test]
    fn test_request_accepts_camel_case_fields() {
        let json = r#"{
            "prompt": "Score this artist.",
            "artistName": "Jane Doe",
            "artistResume": "MFA, two solo shows."
        }"#;
        let request: AnalyzeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.artist_name, "Jane Doe");
        assert_eq!(request.artist_resume, "MFA, two solo shows.");
    }

    #[test]
    fn test_missing_artist_name_defaults_to_empty() {
        let json = r#"{"prompt": "Score.", "artistResume": "Resume."}"#;
        let request: AnalyzeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.artist_name, "");
    }

    #[test]
    fn test_missing_required_fields_deserialize_as_empty() {
        // The handler turns these into 400s; deserialization must not reject
        let request: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        assert!(request.prompt.is_empty());
        assert!(request.artist_resume.is_empty());
    }

    #[test]
    fn test_response_uses_camel_case_breakdown_key() {
        let response = AnalyzeResponse {
            analysis: "raw".to_string(),
            cli: "3.00".to_string(),
            explanation: String::new(),
            category_breakdown: String::new(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"categoryBreakdown\""));
        assert!(json.contains("\"analysis\""));
        assert!(json.contains("\"cli\""));
    }
}
