// Normalizer: extracted text (or a previous analysis) -> fixed prompt ->
// one model call -> JSON object or raw fallback.
// All model calls go through llm_client.

pub mod handlers;
pub mod normalizer;
pub mod prompts;
pub mod questions;
pub mod skills;
