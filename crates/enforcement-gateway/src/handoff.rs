//! Handoff to the downstream behavioral validator.
//!
//! The validator double-checks tone and phrasing of ALLOW and REWRITE
//! outcomes. [`HandoffDecision`] has no BLOCK variant, so a blocked call
//! cannot be expressed as a handoff at all.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::response::LiveDecision;

/// Decisions the validator may receive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandoffDecision {
    Allow,
    Rewrite,
}

impl HandoffDecision {
    /// `None` for BLOCK.
    pub fn from_live(decision: LiveDecision) -> Option<Self> {
        match decision {
            LiveDecision::Allow => Some(HandoffDecision::Allow),
            LiveDecision::Rewrite => Some(HandoffDecision::Rewrite),
            LiveDecision::Block => None,
        }
    }
}

/// Payload sent to the validator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorHandoff {
    pub decision: HandoffDecision,
    pub rewrite_class: Option<String>,
    pub trace_id: String,
    pub enforcement_decision_id: String,
}

/// Validator verdict on a handed-off decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationVerdict {
    Safe,
    Unsafe,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HandoffError {
    #[error("behavioral validator unavailable: {0}")]
    Unavailable(String),

    #[error("behavioral validator rejected handoff: {0}")]
    Rejected(String),
}

/// Downstream behavioral validator.
pub trait BehaviorValidator: Send + Sync {
    fn validate(&self, handoff: &ValidatorHandoff) -> Result<ValidationVerdict, HandoffError>;
}

/// Stand-in validator that reports every handoff as safe.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeterministicValidator;

impl BehaviorValidator for DeterministicValidator {
    fn validate(&self, _handoff: &ValidatorHandoff) -> Result<ValidationVerdict, HandoffError> {
        Ok(ValidationVerdict::Safe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_has_no_handoff_form() {
        assert_eq!(HandoffDecision::from_live(LiveDecision::Block), None);
        assert_eq!(
            HandoffDecision::from_live(LiveDecision::Allow),
            Some(HandoffDecision::Allow)
        );
        assert_eq!(
            HandoffDecision::from_live(LiveDecision::Rewrite),
            Some(HandoffDecision::Rewrite)
        );
    }

    #[test]
    fn stub_reports_safe() {
        let handoff = ValidatorHandoff {
            decision: HandoffDecision::Rewrite,
            rewrite_class: Some("REMOVE_MANIPULATION".into()),
            trace_id: "t".into(),
            enforcement_decision_id: "e".into(),
        };
        assert_eq!(
            DeterministicValidator.validate(&handoff),
            Ok(ValidationVerdict::Safe)
        );
    }
}
