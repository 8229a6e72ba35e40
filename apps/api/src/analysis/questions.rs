//! Interview preparation: a previous analysis -> company research,
//! technical/behavioral questions and preparation tips.

use tracing::info;

use crate::analysis::normalizer::normalize;
use crate::analysis::prompts::{fill_template, INTERVIEW_PREP_PROMPT_TEMPLATE};
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::CompletionModel;
use crate::models::job::{JobDetails, ModelOutput};

/// Used in the prompt when the analysis carries no company name.
pub const UNKNOWN_COMPANY: &str = "the company";

pub fn build_interview_prep_prompt(details: &JobDetails) -> Result<String, AppError> {
    let details_json = serde_json::to_string_pretty(details).map_err(anyhow::Error::from)?;
    let company = details.company().unwrap_or(UNKNOWN_COMPANY);

    Ok(fill_template(
        INTERVIEW_PREP_PROMPT_TEMPLATE,
        &[("company", company), ("job_details", details_json.as_str())],
    ))
}

pub async fn generate_interview_prep(
    details: &JobDetails,
    model: &dyn CompletionModel,
) -> Result<ModelOutput, AppError> {
    let prompt = build_interview_prep_prompt(details)?;
    info!(
        "Requesting interview prep for {} at {}",
        details.job_title().unwrap_or("unknown role"),
        details.company().unwrap_or(UNKNOWN_COMPANY)
    );

    let reply = model.complete(JSON_ONLY_SYSTEM, &prompt).await?;
    Ok(normalize(&reply))
}
