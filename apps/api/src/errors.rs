use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::fetcher::FetchError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Model output that fails to parse is never an `AppError`; it degrades to a
/// `raw_output` payload inside the normalizer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Timed out fetching {url}")]
    FetchTimeout { url: String },

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Could not extract a job description from the page")]
    ExtractionEmpty,

    #[error("Model call error: {0}")]
    ModelCall(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Machine-stable code carried in the `error` field of the response body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "invalid_request",
            AppError::FetchTimeout { .. } => "fetch_timeout",
            AppError::Fetch(_) => "fetch_failed",
            AppError::ExtractionEmpty => "extraction_empty",
            AppError::ModelCall(_) => "model_call_failed",
            AppError::Internal(_) => "internal_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::FetchTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            AppError::Fetch(_) => StatusCode::BAD_GATEWAY,
            AppError::ExtractionEmpty => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ModelCall(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::Fetch(msg) | AppError::ModelCall(msg) => {
                msg.clone()
            }
            AppError::FetchTimeout { url } => {
                format!("The job posting at {url} did not respond in time")
            }
            AppError::ExtractionEmpty => {
                "Could not extract a job description from this page. \
                 Try a direct link to the posting."
                    .to_string()
            }
            AppError::Internal(_) => "An internal server error occurred".to_string(),
        }
    }
}

impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Timeout { url } => AppError::FetchTimeout { url },
            other => AppError::Fetch(other.to_string()),
        }
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        AppError::ModelCall(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            e if status.is_server_error() => tracing::error!("{e}"),
            e => tracing::warn!("{e}"),
        }

        let body = Json(json!({
            "error": self.code(),
            "details": self.details(),
        }));

        (status, body).into_response()
    }
}
