use serde::{Deserialize, Serialize};

use crate::action::{Action, ReasonCode};

/// One evaluator's vote for one call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatorResult {
    pub name: String,
    pub triggered: bool,
    pub action: Action,
    /// Set only when `triggered`.
    pub code: Option<ReasonCode>,
}

impl EvaluatorResult {
    /// Untriggered vote: EXECUTE with no reason code.
    pub fn pass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            triggered: false,
            action: Action::Execute,
            code: None,
        }
    }

    /// Triggered vote with its action and reason code.
    pub fn triggered(name: impl Into<String>, action: Action, code: ReasonCode) -> Self {
        Self {
            name: name.into(),
            triggered: true,
            action,
            code: Some(code),
        }
    }
}
