//! Scoring backends.
//!
//! The deterministic rule-based rubric engine is the always-available
//! default. A model-backed scorer can be layered on top through the
//! [`StructuredScoreProvider`] seam; it degrades to the rule-based engine
//! whenever the provider is missing, fails, or returns nothing usable, so a
//! ranking is always produced.

pub mod chunker;
pub mod context_terms;
pub mod evidence;
pub mod experience;
pub mod matcher;
pub mod rubric;
pub mod weights;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::{EngineConfig, ScorerBackend};
use crate::errors::ScoreError;
use crate::models::calibration::Calibration;
use crate::models::ranking::RankingPayload;

/// A scoring backend. Implement this to swap scorers without touching
/// callers; carried as `Arc<dyn Scorer>`.
pub trait Scorer: Send + Sync {
    fn score(
        &self,
        calibration: &Calibration,
        resume_text: &str,
    ) -> Result<RankingPayload, ScoreError>;

    /// Stable backend label recorded alongside stored rankings.
    fn backend(&self) -> &'static str;
}

/// Pure rule-based scorer: lexical matching, evidence retrieval, experience
/// inference, and weighted rubric aggregation. Deterministic and infallible.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedScorer;

impl Scorer for RuleBasedScorer {
    fn score(
        &self,
        calibration: &Calibration,
        resume_text: &str,
    ) -> Result<RankingPayload, ScoreError> {
        Ok(rubric::score_resume(calibration, resume_text))
    }

    fn backend(&self) -> &'static str {
        "rule-based"
    }
}

/// Seam to an external structured-output model collaborator.
///
/// `Ok(None)` means the provider produced nothing usable; the model-backed
/// scorer treats that, and any error, as a signal to fall back.
pub trait StructuredScoreProvider: Send + Sync {
    fn score_structured(
        &self,
        calibration: &Calibration,
        resume_text: &str,
    ) -> Result<Option<RankingPayload>, ScoreError>;
}

/// Model-backed scorer with rule-based fallback.
///
/// Blank resume text never reaches the provider; there is nothing for a
/// model to read, and the rule-based engine already degrades cleanly.
pub struct ModelBackedScorer {
    provider: Arc<dyn StructuredScoreProvider>,
    fallback: RuleBasedScorer,
}

impl ModelBackedScorer {
    pub fn new(provider: Arc<dyn StructuredScoreProvider>) -> Self {
        Self {
            provider,
            fallback: RuleBasedScorer,
        }
    }
}

impl Scorer for ModelBackedScorer {
    fn score(
        &self,
        calibration: &Calibration,
        resume_text: &str,
    ) -> Result<RankingPayload, ScoreError> {
        if !resume_text.trim().is_empty() {
            match self.provider.score_structured(calibration, resume_text) {
                Ok(Some(payload)) => return Ok(payload),
                Ok(None) => {
                    debug!("model provider returned no payload; falling back to rule-based scoring")
                }
                Err(err) => {
                    warn!("model provider failed: {err}; falling back to rule-based scoring")
                }
            }
        }
        self.fallback.score(calibration, resume_text)
    }

    fn backend(&self) -> &'static str {
        "model-backed"
    }
}

/// Builds the configured scorer.
///
/// Selecting the model-backed backend without wiring a provider degrades to
/// the rule-based default rather than failing.
pub fn build_scorer(
    config: &EngineConfig,
    provider: Option<Arc<dyn StructuredScoreProvider>>,
) -> Arc<dyn Scorer> {
    match (config.scorer_backend, provider) {
        (ScorerBackend::ModelBacked, Some(provider)) => Arc::new(ModelBackedScorer::new(provider)),
        (ScorerBackend::ModelBacked, None) => {
            warn!("model-backed scoring selected but no provider wired; using rule-based scorer");
            Arc::new(RuleBasedScorer)
        }
        (ScorerBackend::RuleBased, _) => Arc::new(RuleBasedScorer),
    }
}
