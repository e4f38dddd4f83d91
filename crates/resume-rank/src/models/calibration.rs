//! Calibration: the job requisition's structured requirements record.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

fn default_experience_type() -> String {
    "total".to_string()
}

fn default_tenure_filter() -> String {
    "none".to_string()
}

/// The requirements record a recruiter calibrates for one requisition.
///
/// Immutable for the duration of a scoring call. Every numeric field is
/// coerced best-effort on deserialization: JSON numbers and numeric strings
/// are accepted, anything else becomes absent and the engine substitutes its
/// documented default. Deserializing a calibration never fails on a malformed
/// value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Calibration {
    pub requisition_name: String,
    pub role: String,
    pub location: String,
    pub job_description: String,
    pub hiring_company: String,
    pub job_locations: Vec<String>,
    pub job_titles: Vec<String>,
    pub companies: Vec<String>,
    pub industries: Vec<String>,
    pub ideal_candidate: String,
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient_int")]
    pub years_experience_min: Option<i64>,
    #[serde(deserialize_with = "lenient_int")]
    pub years_experience_max: Option<i64>,
    /// "total" | "relevant"
    #[serde(default = "default_experience_type")]
    pub years_experience_type: String,
    pub seniority_levels: Vec<String>,
    pub schools: Vec<String>,
    pub degrees: Vec<String>,
    #[serde(deserialize_with = "lenient_int")]
    pub graduation_year_min: Option<i64>,
    #[serde(deserialize_with = "lenient_int")]
    pub graduation_year_max: Option<i64>,
    pub relocation_allowed: bool,
    /// Onsite | Hybrid | Remote Within Country | Remote Globally
    pub workplace_type: String,
    /// none | 6months | 1year | 2years
    #[serde(default = "default_tenure_filter")]
    pub exclude_short_tenure: String,
    #[serde(deserialize_with = "lenient_int")]
    pub scoring_weight_skills: Option<i64>,
    #[serde(deserialize_with = "lenient_int")]
    pub scoring_weight_titles: Option<i64>,
    #[serde(deserialize_with = "lenient_int")]
    pub scoring_weight_work: Option<i64>,
    #[serde(deserialize_with = "lenient_int")]
    pub scoring_weight_education: Option<i64>,
    #[serde(deserialize_with = "lenient_int")]
    pub scoring_weight_experience: Option<i64>,
    #[serde(deserialize_with = "lenient_int")]
    pub scoring_weight_context: Option<i64>,
}

impl Default for Calibration {
    fn default() -> Self {
        Calibration {
            requisition_name: String::new(),
            role: String::new(),
            location: String::new(),
            job_description: String::new(),
            hiring_company: String::new(),
            job_locations: Vec::new(),
            job_titles: Vec::new(),
            companies: Vec::new(),
            industries: Vec::new(),
            ideal_candidate: String::new(),
            skills: Vec::new(),
            years_experience_min: None,
            years_experience_max: None,
            years_experience_type: default_experience_type(),
            seniority_levels: Vec::new(),
            schools: Vec::new(),
            degrees: Vec::new(),
            graduation_year_min: None,
            graduation_year_max: None,
            relocation_allowed: false,
            workplace_type: String::new(),
            exclude_short_tenure: default_tenure_filter(),
            scoring_weight_skills: None,
            scoring_weight_titles: None,
            scoring_weight_work: None,
            scoring_weight_education: None,
            scoring_weight_experience: None,
            scoring_weight_context: None,
        }
    }
}

/// Best-effort integer coercion: accepts integers, floats (truncated), and
/// numeric strings; anything else deserializes to `None` instead of erroring.
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_int))
}

fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Trims, drops blanks, and de-duplicates a term list case-insensitively.
/// The first casing seen wins and input order is preserved.
pub fn clean_terms(values: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for raw in values {
        let term = raw.trim();
        if term.is_empty() {
            continue;
        }
        if seen.insert(term.to_lowercase()) {
            out.push(term.to_string());
        }
    }
    out
}
