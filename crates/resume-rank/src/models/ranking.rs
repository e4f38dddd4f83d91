//! Ranking output models consumed by the orchestration and storage layers.

use serde::{Deserialize, Serialize};

/// One scored rubric category.
///
/// `points_earned` is proportional to `rating / 5 * points_possible`, so the
/// six sub-metrics always sum to the payload's `total_score` before clamping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingSubMetric {
    pub key: String,
    pub label: String,
    /// 1-5 qualitative rating for this category.
    pub rating: u8,
    pub points_earned: u32,
    pub points_possible: u32,
    pub matched_terms: Vec<String>,
    /// Up to three snippets justifying the rating.
    pub evidence: Vec<String>,
    pub rationale: String,
}

/// Full ranking returned for one candidate against one calibration.
/// Self-contained and serializable; persisted verbatim by the storage layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingPayload {
    /// 0-100; the clamped sum of sub-metric points.
    pub total_score: u32,
    /// Inferred total years of experience, when a signal was found.
    pub experience_years: Option<f64>,
    pub summary: String,
    pub matched_skills: Vec<String>,
    pub matched_titles: Vec<String>,
    pub matched_companies: Vec<String>,
    pub matched_industries: Vec<String>,
    pub matched_schools: Vec<String>,
    pub matched_degrees: Vec<String>,
    pub sub_metrics: Vec<RankingSubMetric>,
}

/// Lifecycle of a scoring job as tracked by the orchestration layer.
///
/// The engine never transitions this status; it is part of the persistence
/// contract so stored rankings and the payload share one vocabulary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
}
