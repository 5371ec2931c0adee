pub mod quiz;
pub mod report;

use std::fmt;
use thiserror::Error;

pub use quiz::{QuizAnswer, QuizItem, QuizOutcome};
pub use report::{PathwayReport, RoadmapSection, SkillScores};

// --- Skills ---

/// Split the comma-separated skills field into a skill list.
///
/// Entries are trimmed and blank entries dropped. Order, casing and
/// duplicates are kept as the user typed them.
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// --- Model settings ---

pub const DEFAULT_PROVIDER: &str = "google";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("an API key is required to use the model")]
    MissingCredential,
}

/// Connection settings for the hosted model.
///
/// Never persisted: the key is supplied by the user at runtime and lives only
/// as long as the front end keeps it.
#[derive(Clone, PartialEq, Eq)]
pub struct ModelSettings {
    pub provider: String,
    pub api_key: String,
    pub model: String,
}

impl ModelSettings {
    /// Settings for the fixed provider and model, authenticated with `api_key`.
    pub fn for_key(api_key: impl Into<String>) -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
            api_key: api_key.into().trim().to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn require_credential(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            Err(ConfigError::MissingCredential)
        } else {
            Ok(())
        }
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self::for_key("")
    }
}

// Mask the key so settings can be logged safely.
impl fmt::Debug for ModelSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelSettings")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("has_key", &!self.api_key.is_empty())
            .finish()
    }
}
