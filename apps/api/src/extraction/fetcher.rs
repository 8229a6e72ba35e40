use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{Client, Url};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;

/// Desktop browser User-Agent; several job boards refuse obvious bots.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Timed out fetching {url}")]
    Timeout { url: String },

    #[error("Job page returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Request error: {0}")]
    Request(String),
}

/// Raw page body. Lives only for the duration of one request.
#[derive(Debug)]
pub struct FetchResult {
    pub raw_html: String,
}

/// Fetches job posting pages. One GET per call, no retries.
#[derive(Clone)]
pub struct JobFetcher {
    client: Client,
}

impl JobFetcher {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(config.fetch_timeout)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(Self { client })
    }

    pub async fn fetch(&self, url: &Url) -> Result<FetchResult, FetchError> {
        info!("Fetching job post: {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify(url, e))?;

        let status = response.status();
        debug!("Response status: {}", status);
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown status").to_string(),
            });
        }

        let raw_html = response.text().await.map_err(|e| classify(url, e))?;
        debug!("HTML content length: {} bytes", raw_html.len());

        Ok(FetchResult { raw_html })
    }
}

fn classify(url: &Url, err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Request(err.to_string())
    }
}
