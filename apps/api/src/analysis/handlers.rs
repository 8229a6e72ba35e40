//! Axum route handlers for the analysis API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::analysis::questions::generate_interview_prep;
use crate::analysis::skills::analyze_posting;
use crate::errors::AppError;
use crate::models::job::{JobDetails, ModelOutput};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeJobRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateQuestionsRequest {
    pub job_details: JobDetails,
}

/// POST /api/analyze-job
///
/// Fetches the posting, extracts its description and returns the model's
/// structured skills analysis, or `{ raw_output }` if the model did not
/// answer in JSON.
pub async fn handle_analyze_job(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeJobRequest>, JsonRejection>,
) -> Result<Json<ModelOutput>, AppError> {
    let Json(request) =
        payload.map_err(|_| AppError::Validation("URL is required".to_string()))?;
    let url = request.url.unwrap_or_default();

    let output = analyze_posting(&url, &state.fetcher, state.llm.as_ref()).await?;
    Ok(Json(output))
}

/// POST /api/generate-questions
///
/// Takes a previous analysis result and returns interview preparation
/// material under the same JSON-or-raw policy.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    payload: Result<Json<GenerateQuestionsRequest>, JsonRejection>,
) -> Result<Json<ModelOutput>, AppError> {
    let Json(request) = payload.map_err(|e| {
        tracing::debug!("Rejected job details payload: {}", e.body_text());
        AppError::Validation("Invalid job details format".to_string())
    })?;

    let output = generate_interview_prep(&request.job_details, state.llm.as_ref()).await?;
    Ok(Json(output))
}
