use anyhow::{bail, Result};

/// Environment variable selecting the scoring backend.
const SCORER_BACKEND_ENV: &str = "RANK_SCORER_BACKEND";

/// Which scoring backend the embedding application should run.
///
/// `RuleBased` is the always-available default; `ModelBacked` additionally
/// requires the caller to wire a structured-output provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScorerBackend {
    #[default]
    RuleBased,
    ModelBacked,
}

impl ScorerBackend {
    pub(crate) fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "rule" | "rule-based" | "rule_based" => Some(ScorerBackend::RuleBased),
            "model" | "model-backed" | "model_backed" => Some(ScorerBackend::ModelBacked),
            _ => None,
        }
    }
}

/// Engine configuration loaded from environment variables, with defaults for
/// everything that is absent. An unset environment is fully valid.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineConfig {
    pub scorer_backend: ScorerBackend,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let scorer_backend = match std::env::var(SCORER_BACKEND_ENV) {
            Ok(raw) => match ScorerBackend::parse(&raw) {
                Some(backend) => backend,
                None => bail!(
                    "{SCORER_BACKEND_ENV} must be 'rule-based' or 'model-backed', got '{raw}'"
                ),
            },
            Err(_) => ScorerBackend::default(),
        };

        Ok(EngineConfig { scorer_backend })
    }
}
