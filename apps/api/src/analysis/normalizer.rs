//! Model output normalization.
//!
//! Three terminal outcomes, tried in order:
//! 1. `Direct`: the whole reply parses as a JSON object.
//! 2. `Embedded`: the span from the first `{` to the last `}` parses as one.
//! 3. `Raw`: neither worked; the reply is returned untouched as `raw_output`.
//!
//! None of these is an error. Callers always get something renderable.

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::models::job::{FallbackResult, ModelOutput};

#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Direct(Map<String, Value>),
    Embedded(Map<String, Value>),
    Raw(String),
}

impl ParseOutcome {
    pub fn stage(&self) -> &'static str {
        match self {
            ParseOutcome::Direct(_) => "direct",
            ParseOutcome::Embedded(_) => "embedded",
            ParseOutcome::Raw(_) => "raw",
        }
    }
}

impl From<ParseOutcome> for ModelOutput {
    fn from(outcome: ParseOutcome) -> Self {
        match outcome {
            ParseOutcome::Direct(object) | ParseOutcome::Embedded(object) => {
                ModelOutput::Structured(object)
            }
            ParseOutcome::Raw(raw_output) => ModelOutput::Fallback(FallbackResult { raw_output }),
        }
    }
}

pub fn parse_model_output(text: &str) -> ParseOutcome {
    if let Some(object) = parse_object(text) {
        return ParseOutcome::Direct(object);
    }
    if let Some(object) = embedded_object(text).and_then(parse_object) {
        return ParseOutcome::Embedded(object);
    }
    ParseOutcome::Raw(text.to_string())
}

/// Parses a model reply into the response handed back to the caller.
pub fn normalize(text: &str) -> ModelOutput {
    let outcome = parse_model_output(text);
    match &outcome {
        ParseOutcome::Raw(_) => warn!(
            "Model reply is not JSON, returning raw_output ({} chars)",
            text.chars().count()
        ),
        other => info!("Model reply parsed via {} stage", other.stage()),
    }
    outcome.into()
}

fn parse_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(object)) => Some(object),
        _ => None,
    }
}

/// Widest brace-delimited span: first `{` through last `}`.
fn embedded_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clean_json_round_trips_exactly() {
        let reply = r#"{"job_title":"Data Engineer","required_skills":{"technical_skills":["SQL","Spark"],"education":[]},"benefits":null,"team_size":12}"#;
        let outcome = parse_model_output(reply);
        assert_eq!(outcome.stage(), "direct");

        let output = ModelOutput::from(outcome);
        let expected: Value = serde_json::from_str(reply).unwrap();
        assert_eq!(serde_json::to_value(&output).unwrap(), expected);
    }

    #[test]
    fn test_whitespace_around_clean_json_is_direct() {
        let outcome = parse_model_output("\n  {\"job_title\": \"X\"}\n");
        assert_eq!(outcome.stage(), "direct");
    }

    #[test]
    fn test_embedded_json_is_extracted() {
        let reply = "Here is the data: {\"job_title\": \"X\"} extra trailing text";
        let outcome = parse_model_output(reply);
        assert_eq!(outcome.stage(), "embedded");
        assert_eq!(
            serde_json::to_value(ModelOutput::from(outcome)).unwrap(),
            json!({"job_title": "X"})
        );
    }

    #[test]
    fn test_fenced_json_is_extracted() {
        let reply = "```json\n{\"company\": \"Acme\", \"salary\": \"$120k\"}\n```";
        let output = normalize(reply);
        assert_eq!(
            serde_json::to_value(output).unwrap(),
            json!({"company": "Acme", "salary": "$120k"})
        );
    }

    #[test]
    fn test_nested_braces_use_outermost_span() {
        let reply = "Result: {\"required_skills\": {\"soft_skills\": [\"Communication\"]}} done";
        let outcome = parse_model_output(reply);
        assert_eq!(outcome.stage(), "embedded");
    }

    #[test]
    fn test_prose_without_braces_falls_back_to_raw() {
        let reply = "I could not find a job description on that page.";
        let output = normalize(reply);
        assert_eq!(
            output,
            ModelOutput::Fallback(FallbackResult {
                raw_output: reply.to_string()
            })
        );
    }

    #[test]
    fn test_unparseable_braces_fall_back_to_raw() {
        let reply = "Skills: {Rust, Go} and {Python}";
        assert_eq!(
            parse_model_output(reply),
            ParseOutcome::Raw(reply.to_string())
        );
    }

    #[test]
    fn test_json_array_is_not_structured_output() {
        let reply = "[\"Rust\", \"Go\"]";
        assert_eq!(parse_model_output(reply).stage(), "raw");
    }

    #[test]
    fn test_reversed_braces_are_ignored() {
        assert!(embedded_object("} nothing here {").is_none());
    }
}
