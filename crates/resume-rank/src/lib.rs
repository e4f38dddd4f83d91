//! Deterministic resume-to-requisition ranking engine.
//!
//! Scores a plain-text resume against a calibration record (the structured
//! requirements of a job requisition) and returns an explainable
//! [`RankingPayload`]: six weighted sub-metrics with 1-5 ratings, matched
//! terms, evidence snippets, a one-line rationale each, and a 0-100 total.
//!
//! The rule-based engine is a pure synchronous function of its two inputs.
//! Identical calibration and resume text always produce identical output, so
//! calls may run concurrently across candidates with no coordination.
//! Collaborating services own the HTTP surface, persistence, PDF-to-text
//! extraction, and any model transport; this crate only consumes
//! already-resolved text.

pub mod config;
pub mod errors;
pub mod models;
pub mod scoring;

pub use config::{EngineConfig, ScorerBackend};
pub use errors::ScoreError;
pub use models::calibration::Calibration;
pub use models::ranking::{RankingPayload, RankingSubMetric, ScoringStatus};
pub use scoring::{
    build_scorer, ModelBackedScorer, RuleBasedScorer, Scorer, StructuredScoreProvider,
};
