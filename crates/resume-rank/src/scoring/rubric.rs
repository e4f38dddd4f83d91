//! Rubric aggregation: runs every category scorer over the chunked resume
//! and assembles the final ranking payload.

use std::collections::HashSet;

use tracing::debug;

use super::chunker::{chunk_text, CHUNK_OVERLAP, WORDS_PER_CHUNK};
use super::context_terms::derive_context_terms;
use super::experience::{format_years, score_experience};
use super::matcher::score_term_metric;
use super::weights::resolve_weights;
use crate::models::calibration::{clean_terms, Calibration};
use crate::models::ranking::{RankingPayload, RankingSubMetric};

/// How many derived context terms the context sub-metric displays.
const CONTEXT_DISPLAY_TERMS: usize = 4;

/// Scores a resume against a calibration, deterministically.
///
/// Never fails: missing term lists rate neutral, unknown experience rates
/// low-neutral, and empty resume text simply matches nothing.
pub fn score_resume(calibration: &Calibration, resume_text: &str) -> RankingPayload {
    let chunks = chunk_text(resume_text, WORDS_PER_CHUNK, CHUNK_OVERLAP);
    debug!(chunks = chunks.len(), "scoring resume with rule-based rubric");

    let role = calibration.role.trim().to_string();
    let skills = clean_terms(&calibration.skills);
    let mut titles = clean_terms(&calibration.job_titles);
    if titles.is_empty() && !role.is_empty() {
        titles = vec![role.clone()];
    }
    let companies = clean_terms(&calibration.companies);
    let industries = clean_terms(&calibration.industries);
    let schools = clean_terms(&calibration.schools);
    let degrees = clean_terms(&calibration.degrees);

    let skills_metric = score_term_metric(&chunks, &skills, "skills");
    let titles_metric = score_term_metric(&chunks, &titles, "titles");

    let company_keys: HashSet<String> = companies.iter().map(|t| t.to_lowercase()).collect();
    let work_terms: Vec<String> = companies
        .iter()
        .cloned()
        .chain(
            industries
                .iter()
                .filter(|t| !company_keys.contains(&t.to_lowercase()))
                .cloned(),
        )
        .collect();
    let work_metric = score_term_metric(&chunks, &work_terms, "work");

    let schools_metric = score_term_metric(&chunks, &schools, "schools");
    let degrees_metric = score_term_metric(&chunks, &degrees, "degrees");
    let experience_metric = score_experience(&chunks, calibration);
    let context_terms = derive_context_terms(
        &role,
        &skills,
        &calibration.job_description,
        &calibration.ideal_candidate,
    );
    let context_metric = score_term_metric(&chunks, &context_terms, "context");

    let industry_keys: HashSet<String> = industries.iter().map(|t| t.to_lowercase()).collect();
    let work_matches_companies: Vec<String> = work_metric
        .matched_terms
        .iter()
        .filter(|t| company_keys.contains(&t.to_lowercase()))
        .cloned()
        .collect();
    let work_matches_industries: Vec<String> = work_metric
        .matched_terms
        .iter()
        .filter(|t| industry_keys.contains(&t.to_lowercase()))
        .cloned()
        .collect();

    // education merges the separate school and degree passes
    let education_rating = schools_metric.rating.max(degrees_metric.rating);
    let mut education_terms = schools_metric.matched_terms.clone();
    education_terms.extend(
        degrees_metric
            .matched_terms
            .iter()
            .filter(|t| !schools_metric.matched_terms.contains(*t))
            .cloned(),
    );
    let mut education_evidence = schools_metric.evidence.clone();
    education_evidence.extend(
        degrees_metric
            .evidence
            .iter()
            .filter(|e| !schools_metric.evidence.contains(*e))
            .cloned(),
    );

    let experience_terms: Vec<String> = experience_metric
        .years
        .map(|y| vec![format!("{} years", format_years(y))])
        .unwrap_or_default();

    let metrics = resolve_weights(calibration);
    let mut sub_metrics = Vec::with_capacity(metrics.len());
    let mut total_points: i64 = 0;
    for spec in &metrics {
        let (rating, matched, evidence) = match spec.key {
            "skills" => (
                skills_metric.rating,
                skills_metric.matched_terms.clone(),
                skills_metric.evidence.clone(),
            ),
            "titles" => (
                titles_metric.rating,
                titles_metric.matched_terms.clone(),
                titles_metric.evidence.clone(),
            ),
            "work" => (
                work_metric.rating,
                work_metric.matched_terms.clone(),
                work_metric.evidence.clone(),
            ),
            "education" => (
                education_rating,
                education_terms.clone(),
                education_evidence.clone(),
            ),
            "experience" => (
                experience_metric.rating,
                experience_terms.clone(),
                experience_metric.evidence.clone(),
            ),
            _ => (
                context_metric.rating,
                context_terms
                    .iter()
                    .take(CONTEXT_DISPLAY_TERMS)
                    .cloned()
                    .collect(),
                context_metric.evidence.clone(),
            ),
        };
        let earned = ((rating as f64 / 5.0) * spec.weight as f64).round() as i64;
        total_points += earned;
        let rationale = build_rationale(spec.key, rating, &matched, spec.weight);
        sub_metrics.push(RankingSubMetric {
            key: spec.key.to_string(),
            label: spec.label.to_string(),
            rating,
            points_earned: earned as u32,
            points_possible: spec.weight,
            matched_terms: matched,
            evidence: evidence.into_iter().take(3).collect(),
            rationale,
        });
    }

    let total_score = total_points.clamp(0, 100) as u32;
    let summary = build_summary(
        total_score,
        &skills_metric.matched_terms,
        &titles_metric.matched_terms,
        &work_matches_companies,
        experience_metric.years,
    );

    RankingPayload {
        total_score,
        experience_years: experience_metric.years,
        summary,
        matched_skills: skills_metric.matched_terms,
        matched_titles: titles_metric.matched_terms,
        matched_companies: work_matches_companies,
        matched_industries: work_matches_industries,
        matched_schools: schools_metric.matched_terms,
        matched_degrees: degrees_metric.matched_terms,
        sub_metrics,
    }
}

fn build_rationale(key: &str, rating: u8, matched_terms: &[String], points_possible: u32) -> String {
    if matched_terms.is_empty() && key != "experience" {
        return format!(
            "Limited direct evidence found in parsed resume text. {rating}/5 for this criterion."
        );
    }
    if key == "experience" {
        return match matched_terms.first() {
            Some(first) => format!("Detected {first} against target experience band. {rating}/5."),
            None => format!("Unable to confidently extract years of experience. {rating}/5."),
        };
    }
    let earned = ((rating as f64 / 5.0) * points_possible as f64).round() as i64;
    let plural = if matched_terms.len() != 1 { "s" } else { "" };
    format!(
        "Matched {} signal term{plural}; awarded {earned}/{points_possible} points.",
        matched_terms.len()
    )
}

fn build_summary(
    total_score: u32,
    matched_skills: &[String],
    matched_titles: &[String],
    matched_companies: &[String],
    experience_years: Option<f64>,
) -> String {
    let mut highlights: Vec<String> = Vec::new();
    if !matched_skills.is_empty() {
        let plural = if matched_skills.len() != 1 { "es" } else { "" };
        highlights.push(format!("{} skill match{plural}", matched_skills.len()));
    }
    if !matched_titles.is_empty() {
        let plural = if matched_titles.len() != 1 { "es" } else { "" };
        highlights.push(format!("{} title match{plural}", matched_titles.len()));
    }
    if !matched_companies.is_empty() {
        let plural = if matched_companies.len() != 1 { "es" } else { "" };
        highlights.push(format!("{} company match{plural}", matched_companies.len()));
    }
    if let Some(years) = experience_years {
        highlights.push(format!("{} years experience detected", format_years(years)));
    }
    if highlights.is_empty() {
        return format!(
            "Overall candidate match {total_score}% using resume-to-requisition retrieval scoring."
        );
    }
    format!(
        "{}. Overall candidate match {total_score}%.",
        highlights.join(", ")
    )
}
