use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Skills breakdown inside an analyzed posting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequiredSkills {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soft_skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<String>>,
}

/// Structured analysis of a posting. Every field is optional: absence means
/// "not found". Unknown fields are carried through untouched in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredSkills {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_skills: Option<RequiredSkills>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Model output that could not be read as a JSON object, returned as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackResult {
    pub raw_output: String,
}

/// What the normalizer hands back: a JSON object exactly as the model wrote
/// it, or the raw text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModelOutput {
    Structured(Map<String, Value>),
    Fallback(FallbackResult),
}

/// Inbound job details for question generation: a previous analysis result,
/// either shape. `Object` takes any other JSON object, since analysis returns
/// model objects untouched and their field types are not guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobDetails {
    Fallback(FallbackResult),
    Structured(StructuredSkills),
    Object(Map<String, Value>),
}

impl JobDetails {
    pub fn company(&self) -> Option<&str> {
        let company = match self {
            JobDetails::Structured(skills) => skills.company.as_deref(),
            JobDetails::Object(object) => object.get("company").and_then(Value::as_str),
            JobDetails::Fallback(_) => None,
        };
        company.map(str::trim).filter(|c| !c.is_empty())
    }

    pub fn job_title(&self) -> Option<&str> {
        match self {
            JobDetails::Structured(skills) => skills.job_title.as_deref(),
            JobDetails::Object(object) => object.get("job_title").and_then(Value::as_str),
            JobDetails::Fallback(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_structured_skills_all_fields_optional() {
        let skills: StructuredSkills = serde_json::from_str("{}").unwrap();
        assert_eq!(skills, StructuredSkills::default());
        assert_eq!(serde_json::to_value(&skills).unwrap(), json!({}));
    }

    #[test]
    fn test_structured_skills_preserves_unknown_fields() {
        let input = json!({
            "job_title": "Platform Engineer",
            "required_skills": {"technical_skills": ["Kubernetes"]},
            "seniority": "senior"
        });
        let skills: StructuredSkills = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(skills.extra["seniority"], "senior");
        assert_eq!(serde_json::to_value(&skills).unwrap(), input);
    }

    #[test]
    fn test_job_details_prefers_fallback_when_raw_output_present() {
        let details: JobDetails =
            serde_json::from_value(json!({"raw_output": "free text analysis"})).unwrap();
        assert!(matches!(details, JobDetails::Fallback(_)));
        assert_eq!(details.company(), None);
    }

    #[test]
    fn test_job_details_structured_company() {
        let details: JobDetails =
            serde_json::from_value(json!({"job_title": "SRE", "company": " Acme "})).unwrap();
        assert_eq!(details.company(), Some("Acme"));
        assert_eq!(details.job_title(), Some("SRE"));
    }

    #[test]
    fn test_job_details_accepts_loosely_typed_analysis() {
        let input = json!({
            "job_title": "SRE",
            "company": "Acme",
            "salary": 150000,
            "benefits": "Health insurance"
        });
        let details: JobDetails = serde_json::from_value(input.clone()).unwrap();
        assert!(matches!(details, JobDetails::Object(_)));
        assert_eq!(details.company(), Some("Acme"));
        assert_eq!(details.job_title(), Some("SRE"));
        assert_eq!(serde_json::to_value(&details).unwrap(), input);
    }

    #[test]
    fn test_job_details_rejects_non_objects() {
        assert!(serde_json::from_value::<JobDetails>(json!("just text")).is_err());
        assert!(serde_json::from_value::<JobDetails>(json!(["SRE"])).is_err());
    }

    #[test]
    fn test_model_output_serializes_without_wrapper() {
        let fallback = ModelOutput::Fallback(FallbackResult {
            raw_output: "prose".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&fallback).unwrap(),
            json!({"raw_output": "prose"})
        );

        let mut map = Map::new();
        map.insert("job_title".to_string(), json!("X"));
        let structured = ModelOutput::Structured(map);
        assert_eq!(
            serde_json::to_value(&structured).unwrap(),
            json!({"job_title": "X"})
        );
    }
}
