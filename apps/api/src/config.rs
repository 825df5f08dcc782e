use anyhow::{Context, Result};

/// Application configuration loaded from environment variables once at startup.
/// Components receive this struct explicitly; nothing else reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenAI API key. Absence is a request-time server error rather than a
    /// startup failure, so the prompt endpoint keeps working without a key.
    pub openai_api_key: Option<String>,
    /// Path to a custom rubric document served by GET /PromptCalcCLI.txt.
    /// Falls back to the embedded default rubric when the file is missing.
    pub prompt_path: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            prompt_path: std::env::var("PROMPT_PATH")
                .unwrap_or_else(|_| "public/PromptCalcCLI.txt".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
