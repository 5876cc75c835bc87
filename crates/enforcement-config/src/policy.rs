use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Policy constants document (`enforcement.yaml`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolicyConstants {
    /// Dependency scores strictly above this trigger a REWRITE.
    #[serde(default = "default_dependency_score_threshold")]
    pub dependency_score_threshold: f64,

    /// Region code that is blocked outright.
    #[serde(default = "default_restricted_region")]
    pub restricted_region: String,
}

fn default_dependency_score_threshold() -> f64 {
    0.7
}

fn default_restricted_region() -> String {
    "RESTRICTED".to_string()
}

impl Default for PolicyConstants {
    fn default() -> Self {
        Self {
            dependency_score_threshold: default_dependency_score_threshold(),
            restricted_region: default_restricted_region(),
        }
    }
}

impl PolicyConstants {
    /// Reject thresholds that cannot be compared.
    pub fn validate(&self) -> Result<()> {
        if !self.dependency_score_threshold.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "dependency_score_threshold".into(),
                value: self.dependency_score_threshold,
            });
        }
        Ok(())
    }
}
