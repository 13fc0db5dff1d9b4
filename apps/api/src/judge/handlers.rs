//! Axum route handlers for the Judge API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::judge::verdict::{judge_case, CaseData, VerdictResult};
use crate::state::AppState;

/// POST /api/v1/judge
///
/// Judges a couple's dispute. Always responds 200 with a `VerdictResult` once
/// the input passes validation — failure paths inside the judgment collapse to
/// fallback verdicts rather than error responses.
pub async fn handle_judge(
    State(state): State<AppState>,
    Json(case): Json<CaseData>,
) -> Result<Json<VerdictResult>, AppError> {
    if case.event_description.trim().is_empty() {
        return Err(AppError::Validation(
            "eventDescription cannot be empty".to_string(),
        ));
    }

    let verdict = judge_case(state.llm.as_ref(), &case).await;

    Ok(Json(verdict))
}
