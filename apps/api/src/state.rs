use std::sync::Arc;

use crate::extraction::JobFetcher;
use crate::llm_client::CompletionModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: JobFetcher,
    /// Model backend. `LlmClient` in production, a scripted model in tests.
    pub llm: Arc<dyn CompletionModel>,
}
