//! Ordered description-extraction heuristics.
//!
//! Each strategy is a pure `fn(&Html) -> Option<String>`. They run in the
//! order of `STRATEGIES`; the first non-empty result wins.

use scraper::{Html, Selector};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::extraction::text::{markup_to_text, visible_text};
use crate::extraction::ExtractedDescription;

pub type Strategy = fn(&Html) -> Option<String>;

pub const STRATEGIES: &[(&str, Strategy)] = &[
    ("json_ld", json_ld_description),
    ("og_description", og_description),
    ("known_selectors", known_selectors),
    ("body_text", body_text),
];

/// Job-description containers on common job boards, most specific first.
pub const DESCRIPTION_SELECTORS: &[&str] = &[
    "#jobDescriptionText",
    ".jobs-description__content",
    ".jobs-box__html-content",
    ".description__text",
    "[data-automation='jobAdDetails']",
    ".job-description",
    "#job-description",
    ".posting-page",
    ".job-details",
    "[role='main']",
    "main",
    "article",
];

/// Runs the strategy chain over a raw HTML document.
/// An empty `text` means no strategy found anything.
pub fn extract_description(raw_html: &str) -> ExtractedDescription {
    let document = Html::parse_document(raw_html);

    for (name, strategy) in STRATEGIES {
        if let Some(text) = strategy(&document) {
            let text = text.trim();
            if !text.is_empty() {
                info!("Extracted {} chars via {}", text.chars().count(), name);
                return ExtractedDescription {
                    text: text.to_string(),
                    strategy: Some(*name),
                };
            }
        }
    }

    ExtractedDescription::default()
}

pub fn json_ld_description(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"script[type="application/ld+json"]"#).ok()?;

    document.select(&selector).find_map(|script| {
        let raw: String = script.text().collect();
        match serde_json::from_str::<Value>(raw.trim()) {
            Ok(value) => job_posting_description(&value),
            Err(e) => {
                debug!("Skipping malformed JSON-LD block: {e}");
                None
            }
        }
    })
}

/// Finds the first `JobPosting` node with a non-empty description, looking
/// through top-level arrays and `@graph` containers.
fn job_posting_description(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => items.iter().find_map(job_posting_description),
        Value::Object(node) => {
            let own = is_job_posting(node)
                .then(|| node.get("description").and_then(Value::as_str))
                .flatten()
                .map(markup_to_text)
                .filter(|text| !text.is_empty());
            own.or_else(|| node.get("@graph").and_then(job_posting_description))
        }
        _ => None,
    }
}

fn is_job_posting(node: &Map<String, Value>) -> bool {
    match node.get("@type") {
        Some(Value::String(kind)) => names_job_posting(kind),
        Some(Value::Array(kinds)) => kinds
            .iter()
            .filter_map(Value::as_str)
            .any(names_job_posting),
        _ => false,
    }
}

/// `JobPosting`, also written as an IRI (`http://schema.org/JobPosting`) or
/// a prefixed name (`schema:JobPosting`).
fn names_job_posting(kind: &str) -> bool {
    kind.strip_suffix("JobPosting")
        .is_some_and(|prefix| prefix.is_empty() || prefix.ends_with('/') || prefix.ends_with(':'))
}

pub fn og_description(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"meta[property="og:description"]"#).ok()?;
    document
        .select(&selector)
        .filter_map(|meta| meta.value().attr("content"))
        .map(str::trim)
        .find(|content| !content.is_empty())
        .map(str::to_string)
}

pub fn known_selectors(document: &Html) -> Option<String> {
    DESCRIPTION_SELECTORS.iter().find_map(|selector_str| {
        let selector = Selector::parse(selector_str).ok()?;
        document
            .select(&selector)
            .map(visible_text)
            .find(|text| !text.is_empty())
    })
}

pub fn body_text(document: &Html) -> Option<String> {
    let selector = Selector::parse("body").ok()?;
    let text = match document.select(&selector).next() {
        Some(body) => visible_text(body),
        None => visible_text(document.root_element()),
    };
    (!text.is_empty()).then_some(text)
}
