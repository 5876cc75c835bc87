use enforcement_types::Action;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason on every response produced by a completed enforcement pass.
pub const SUCCESS_REASON: &str = "DETERMINISTIC_ENFORCEMENT_APPLIED";

/// Reason on every fail-closed response.
pub const FAIL_CLOSED_REASON: &str = "ENFORCEMENT_FAILURE_FAIL_CLOSED";

/// External decision vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LiveDecision {
    Allow,
    Rewrite,
    Block,
}

impl LiveDecision {
    /// Wire name of the variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            LiveDecision::Allow => "ALLOW",
            LiveDecision::Rewrite => "REWRITE",
            LiveDecision::Block => "BLOCK",
        }
    }
}

impl From<Action> for LiveDecision {
    fn from(action: Action) -> Self {
        match action {
            Action::Execute => LiveDecision::Allow,
            Action::Rewrite => LiveDecision::Rewrite,
            Action::Block => LiveDecision::Block,
        }
    }
}

impl fmt::Display for LiveDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The only per-call detail exposed to callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEntry {
    pub decision: LiveDecision,
    pub rewrite_class: Option<String>,
}

/// Outbound gateway response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnforcementResponse {
    pub decision: LiveDecision,
    pub reason: String,
    /// Empty for BLOCK, one entry otherwise.
    pub evaluator_trace: Vec<TraceEntry>,
    pub enforcement_decision_id: String,
}

impl EnforcementResponse {
    pub(crate) fn applied(
        enforcement_decision_id: String,
        decision: LiveDecision,
        rewrite_class: Option<&str>,
    ) -> Self {
        let evaluator_trace = match decision {
            LiveDecision::Block => Vec::new(),
            _ => vec![TraceEntry {
                decision,
                rewrite_class: rewrite_class.map(str::to_string),
            }],
        };
        Self {
            decision,
            reason: SUCCESS_REASON.to_string(),
            evaluator_trace,
            enforcement_decision_id,
        }
    }

    pub(crate) fn fail_closed(enforcement_decision_id: String) -> Self {
        Self {
            decision: LiveDecision::Block,
            reason: FAIL_CLOSED_REASON.to_string(),
            evaluator_trace: Vec::new(),
            enforcement_decision_id,
        }
    }

    /// Whether this is the fail-closed response.
    pub fn is_fail_closed(&self) -> bool {
        self.reason == FAIL_CLOSED_REASON
    }
}
