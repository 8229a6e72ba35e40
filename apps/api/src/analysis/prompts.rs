// All LLM prompt templates for the analysis module, filled by `fill_template`.
// The system instruction is shared: llm_client::prompts::JSON_ONLY_SYSTEM.

/// Skills analysis prompt. Replace `{job_text}` before sending.
pub const SKILLS_PROMPT_TEMPLATE: &str = r#"You are an expert at analyzing job descriptions and extracting key information.
Read the job description below and identify the job title, company, location
(remote, hybrid, onsite, city), salary information, required skills by category,
preferred (but not required) skills, and benefits.

Return a JSON object with this EXACT schema (no extra fields):
{
  "job_title": "Senior Backend Engineer",
  "company": "Acme Corp",
  "location": "Remote (US)",
  "salary": "$150,000 - $180,000",
  "required_skills": {
    "technical_skills": ["Go", "PostgreSQL"],
    "soft_skills": ["Written communication"],
    "education": ["BS in Computer Science or equivalent"],
    "experience": ["5+ years building distributed systems"]
  },
  "preferred_skills": ["Kubernetes"],
  "benefits": ["Health insurance", "401(k) matching"]
}

Rules:
- Omit a field entirely when the posting does not mention it. Do NOT guess.
- Use short phrases for list items, one skill or requirement per item.
- Do NOT make up data that is not explicitly present in the job description.

JOB DESCRIPTION:
{job_text}"#;

/// Interview preparation prompt.
/// Replace: {company}, {job_details}
pub const INTERVIEW_PREP_PROMPT_TEMPLATE: &str = r#"You are a master interview preparation coach.
Using the job analysis below, prepare a candidate for an interview at {company}.

Return a JSON object with this EXACT schema (no extra fields):
{
  "job_title": "Senior Backend Engineer",
  "company_research": {
    "company_overview": "What the company does, its products and services",
    "culture_and_values": "Culture and stated values",
    "interview_process": "Known interview stages, if any",
    "recent_news": "Recent developments relevant to a candidate"
  },
  "technical_questions": [
    {"question": "How would you design ...?", "difficulty": "Medium", "answer_tips": "Cover ..."}
  ],
  "behavioral_questions": [
    {"question": "Tell me about a time ...", "difficulty": "Easy", "answer_tips": "Use the STAR method ..."}
  ],
  "preparation_tips": [
    {"title": "Review the stack", "description": "Actionable advice ..."}
  ]
}

Rules:
- Exactly 5 technical_questions targeting the required technical skills.
- Exactly 5 behavioral_questions assessing soft skills and culture fit.
- "difficulty" is one of "Easy", "Medium", "Hard"; include all three levels.
- Exactly 5 preparation_tips tailored to this role and company.
- If you know little about the company, say so in company_research instead of inventing facts.

JOB ANALYSIS:
{job_details}"#;

/// Substitutes `{key}` placeholders in one left-to-right pass. Inserted values
/// are never rescanned, so a value containing `{job_details}` stays literal.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let placeholder = values.iter().find(|(key, _)| {
            tail[1..]
                .strip_prefix(key)
                .is_some_and(|after| after.starts_with('}'))
        });
        match placeholder {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 2..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
