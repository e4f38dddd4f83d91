//! Rubric categories and weight resolution.

use crate::models::calibration::Calibration;

/// One rubric category with its share of the 100-point total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub weight: u32,
}

/// Default category weights; sum to 100.
pub const DEFAULT_METRICS: [MetricSpec; 6] = [
    MetricSpec {
        key: "skills",
        label: "Skill Relevance",
        weight: 28,
    },
    MetricSpec {
        key: "titles",
        label: "Title Relevance",
        weight: 18,
    },
    MetricSpec {
        key: "work",
        label: "Work Relevance",
        weight: 16,
    },
    MetricSpec {
        key: "education",
        label: "School Relevance",
        weight: 10,
    },
    MetricSpec {
        key: "experience",
        label: "Experience Relevance",
        weight: 16,
    },
    MetricSpec {
        key: "context",
        label: "JD/Ideal Candidate Relevance",
        weight: 12,
    },
];

/// Resolves the six category weights for a calibration.
///
/// When no custom weight is set, or the custom weights sum to nothing, the
/// defaults apply. Otherwise each present value (absent treated as zero) is
/// normalized to `round(100 * v / sum)` and clamped to [0, 100]; any
/// rounding residual lands on the largest normalized weight (first on ties)
/// so the result always sums to exactly 100.
pub fn resolve_weights(calibration: &Calibration) -> [MetricSpec; 6] {
    let raw = [
        calibration.scoring_weight_skills,
        calibration.scoring_weight_titles,
        calibration.scoring_weight_work,
        calibration.scoring_weight_education,
        calibration.scoring_weight_experience,
        calibration.scoring_weight_context,
    ];
    if raw.iter().all(Option::is_none) {
        return DEFAULT_METRICS;
    }
    let values: Vec<i64> = raw.iter().map(|v| v.unwrap_or(0)).collect();
    let total: i64 = values.iter().sum();
    if total <= 0 {
        return DEFAULT_METRICS;
    }

    let mut normalized: Vec<i64> = values
        .iter()
        .map(|v| ((100.0 * *v as f64 / total as f64).round() as i64).clamp(0, 100))
        .collect();
    let diff = 100 - normalized.iter().sum::<i64>();
    if diff != 0 {
        let mut idx = 0;
        for i in 1..normalized.len() {
            if normalized[i] > normalized[idx] {
                idx = i;
            }
        }
        normalized[idx] = (normalized[idx] + diff).max(0);
    }

    let mut resolved = DEFAULT_METRICS;
    for (spec, weight) in resolved.iter_mut().zip(&normalized) {
        spec.weight = *weight as u32;
    }
    resolved
}
