//! Dispute Judgment — assembles the case prompt, makes the single LLM call,
//! and maps every failure to a canned fallback verdict.
//!
//! Flow: build prompt → call LLM (JSON mode) → parse VerdictResult → return.
//! This operation never errors to the caller: a missing credential or any
//! call/parse failure produces a 50/50 "tie" verdict instead.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::judge::prompts::{CASE_PROMPT_TEMPLATE, JUDGE_SYSTEM};
use crate::llm_client::LlmClient;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// A couple's dispute as submitted by the client. Wire format is camelCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseData {
    pub event_description: String,
    pub female_name: String,
    pub female_argument: String,
    pub male_name: String,
    pub male_argument: String,
}

/// Which party the verdict favors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Female,
    Male,
    Tie,
}

/// The structured judgment returned to the caller.
///
/// The prompt instructs the model that the two responsibility percentages sum
/// to 100, but the parsed response is passed through unvalidated — the model's
/// numbers are returned as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictResult {
    pub analysis: String,
    pub female_responsibility: u8,
    pub male_responsibility: u8,
    pub verdict_summary: String,
    pub winner: Winner,
    pub advice: String,
}

impl VerdictResult {
    /// Fallback verdict when no API credential is configured.
    pub fn missing_credential() -> Self {
        VerdictResult {
            analysis: "系统错误：法官的执照丢了！(未配置 API Key)".to_string(),
            female_responsibility: 50,
            male_responsibility: 50,
            verdict_summary: "无法连接到 AI 大脑。".to_string(),
            winner: Winner::Tie,
            advice: "请检查 API配置。".to_string(),
        }
    }

    /// Fallback verdict for every other failure: network error, error status,
    /// empty content, or unparseable model output.
    pub fn unreachable() -> Self {
        VerdictResult {
            analysis: "汪！本法官刚才打了个盹，网络连接好像有点问题。".to_string(),
            female_responsibility: 50,
            male_responsibility: 50,
            verdict_summary: "连接超时或配额不足。".to_string(),
            winner: Winner::Tie,
            advice: "请检查您的 API Key 是否有效，或稍后再试。".to_string(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Judgment pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Judges a dispute. Infallible by contract: every failure path collapses to a
/// fallback verdict, so callers always get a `VerdictResult` to render.
pub async fn judge_case(llm: Option<&LlmClient>, case: &CaseData) -> VerdictResult {
    let Some(llm) = llm else {
        warn!("No LLM credential configured — returning fallback verdict");
        return VerdictResult::missing_credential();
    };

    let prompt = build_case_prompt(case);

    match llm.call_json::<VerdictResult>(&prompt, JUDGE_SYSTEM).await {
        Ok(verdict) => {
            info!(
                "Verdict delivered: winner={:?}, split {}/{}",
                verdict.winner, verdict.female_responsibility, verdict.male_responsibility
            );
            verdict
        }
        Err(e) => {
            warn!("Judgment LLM call failed: {e} — returning fallback verdict");
            VerdictResult::unreachable()
        }
    }
}

/// Builds the per-case user prompt by filling the template with case fields.
fn build_case_prompt(case: &CaseData) -> String {
    CASE_PROMPT_TEMPLATE
        .replace("{event_description}", &case.event_description)
        .replace("{female_name}", &case.female_name)
        .replace("{female_argument}", &case.female_argument)
        .replace("{male_name}", &case.male_name)
        .replace("{male_argument}", &case.male_argument)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
