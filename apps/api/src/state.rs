use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no credential is configured — judgments then return the
    /// missing-credential fallback verdict instead of failing at startup.
    pub llm: Option<LlmClient>,
    pub config: Config,
}
