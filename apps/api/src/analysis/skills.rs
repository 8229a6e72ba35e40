//! Skills analysis: job posting URL -> structured skills (or raw fallback).

use tracing::{info, warn};

use crate::analysis::normalizer::normalize;
use crate::analysis::prompts::{fill_template, SKILLS_PROMPT_TEMPLATE};
use crate::errors::AppError;
use crate::extraction::text::clip_for_prompt;
use crate::extraction::{extract_description, parse_job_url, JobFetcher};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::CompletionModel;
use crate::models::job::ModelOutput;

/// Fixed instructions plus the posting text. Built fresh for every request.
#[derive(Debug, Clone)]
pub struct AnalysisPrompt {
    pub instructions: &'static str,
    pub job_text: String,
}

impl AnalysisPrompt {
    pub fn for_skills(job_text: &str) -> Self {
        Self {
            instructions: SKILLS_PROMPT_TEMPLATE,
            job_text: clip_for_prompt(job_text),
        }
    }

    pub fn render(&self) -> String {
        fill_template(self.instructions, &[("job_text", self.job_text.as_str())])
    }
}

/// Full pipeline: validate URL, fetch, extract, ask the model, normalize.
pub async fn analyze_posting(
    raw_url: &str,
    fetcher: &JobFetcher,
    model: &dyn CompletionModel,
) -> Result<ModelOutput, AppError> {
    let url = parse_job_url(raw_url)?;
    let page = fetcher.fetch(&url).await?;

    let description = extract_description(&page.raw_html);
    if description.is_empty() {
        warn!("No job description found at {}", url);
        return Err(AppError::ExtractionEmpty);
    }
    info!(
        "Using description from {} strategy for {}",
        description.strategy.unwrap_or("unknown"),
        url
    );

    analyze_description(&description.text, model).await
}

/// Model half of the pipeline, for text that is already extracted.
pub async fn analyze_description(
    job_text: &str,
    model: &dyn CompletionModel,
) -> Result<ModelOutput, AppError> {
    let prompt = AnalysisPrompt::for_skills(job_text).render();
    info!("Requesting skills analysis ({} prompt chars)", prompt.len());

    let reply = model.complete(JSON_ONLY_SYSTEM, &prompt).await?;
    Ok(normalize(&reply))
}
