use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_API_URL;

/// Application configuration loaded from environment variables.
///
/// The LLM credential is deliberately optional: a missing key is handled at
/// judgment time with a fallback verdict, not a startup failure.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm_api_key: Option<String>,
    pub llm_api_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            llm_api_key: resolve_api_key(),
            llm_api_url: std::env::var("LLM_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Resolves the LLM credential from the supported sources, most specific first.
/// Returns `None` when no source is set — callers fall back at judgment time.
fn resolve_api_key() -> Option<String> {
    ["LLM_API_KEY", "GEMINI_API_KEY", "OPENAI_API_KEY"]
        .iter()
        .find_map(|key| std::env::var(key).ok().filter(|v| !v.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations cannot race each other.
    #[test]
    fn test_api_key_resolution_order() {
        std::env::remove_var("LLM_API_KEY");
        std::env::remove_var("GEMINI_API_KEY");
        std::env::remove_var("OPENAI_API_KEY");
        assert_eq!(resolve_api_key(), None);

        std::env::set_var("OPENAI_API_KEY", "sk-openai");
        assert_eq!(resolve_api_key().as_deref(), Some("sk-openai"));

        std::env::set_var("GEMINI_API_KEY", "sk-gemini");
        assert_eq!(resolve_api_key().as_deref(), Some("sk-gemini"));

        std::env::set_var("LLM_API_KEY", "sk-llm");
        assert_eq!(resolve_api_key().as_deref(), Some("sk-llm"));

        // Blank values do not count as configured.
        std::env::set_var("LLM_API_KEY", "  ");
        assert_eq!(resolve_api_key().as_deref(), Some("sk-gemini"));

        std::env::remove_var("LLM_API_KEY");
        std::env::remove_var("GEMINI_API_KEY");
        std::env::remove_var("OPENAI_API_KEY");
    }
}
