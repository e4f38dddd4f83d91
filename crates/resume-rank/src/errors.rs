use thiserror::Error;

/// Errors surfaced through the [`Scorer`](crate::scoring::Scorer) seam.
///
/// The rule-based engine itself never fails: malformed calibration values are
/// coerced with documented defaults and garbage resume text degrades to
/// neutral ratings. Errors originate only in model-backed providers, and the
/// model-backed scorer swallows them by falling back to the rule-based
/// engine, so callers normally never see one.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("model provider error: {0}")]
    Provider(String),
}
