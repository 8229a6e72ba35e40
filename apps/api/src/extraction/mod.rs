// Extractor: job posting URL -> best-effort plain-text description.
// One outbound GET, then the ordered strategy chain in `strategies`.

pub mod fetcher;
pub mod strategies;
pub mod text;

use reqwest::Url;

use crate::errors::AppError;

pub use fetcher::JobFetcher;
pub use strategies::extract_description;

/// Plain-text job description. Empty text means extraction failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedDescription {
    pub text: String,
    /// Name of the strategy that produced `text`.
    pub strategy: Option<&'static str>,
}

impl ExtractedDescription {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Checks that `raw` is an absolute http(s) URL with a host.
pub fn parse_job_url(raw: &str) -> Result<Url, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::Validation("URL is required".to_string()));
    }

    let invalid = || {
        AppError::Validation(
            "Invalid URL format. Please provide a complete URL including http:// or https://"
                .to_string(),
        )
    };

    let url = Url::parse(raw).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_job_url_accepts_https() {
        let url = parse_job_url(" https://boards.example.com/jobs/42 ").unwrap();
        assert_eq!(url.host_str(), Some("boards.example.com"));
    }

    #[test]
    fn test_parse_job_url_rejects_missing_scheme() {
        let err = parse_job_url("boards.example.com/jobs/42").unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.starts_with("Invalid URL format")));
    }

    #[test]
    fn test_parse_job_url_rejects_non_http_scheme() {
        assert!(parse_job_url("ftp://example.com/file").is_err());
        assert!(parse_job_url("mailto:jobs@example.com").is_err());
    }

    #[test]
    fn test_parse_job_url_requires_value() {
        let err = parse_job_url("   ").unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "URL is required"));
    }
}
