use serde::{Deserialize, Serialize};

use crate::action::Action;

/// Trace id reported when the kill switch short-circuits a call.
pub const KILL_SWITCH_TRACE_ID: &str = "KILL_SWITCH_ACTIVE";

/// Structured hints for softening content, emitted only on REWRITE.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteGuidance {
    pub rewrite_class: String,
    pub hints: Vec<String>,
}

impl RewriteGuidance {
    /// Guidance for a rewrite class with its hints.
    pub fn new<I, S>(rewrite_class: impl Into<String>, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rewrite_class: rewrite_class.into(),
            hints: hints.into_iter().map(Into::into).collect(),
        }
    }
}

/// Outcome of one enforcement call.
///
/// Construction goes through [`execute`](Self::execute),
/// [`rewrite`](Self::rewrite) and [`block`](Self::block), so guidance is
/// present exactly when the decision is REWRITE. Evaluator internals are
/// never carried here; the trace id is the only handle back to them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnforcementDecision {
    decision: Action,
    trace_id: String,
    rewrite_guidance: Option<RewriteGuidance>,
}

impl EnforcementDecision {
    /// EXECUTE decision.
    pub fn execute(trace_id: impl Into<String>) -> Self {
        Self {
            decision: Action::Execute,
            trace_id: trace_id.into(),
            rewrite_guidance: None,
        }
    }

    /// REWRITE decision carrying its guidance.
    pub fn rewrite(trace_id: impl Into<String>, guidance: RewriteGuidance) -> Self {
        Self {
            decision: Action::Rewrite,
            trace_id: trace_id.into(),
            rewrite_guidance: Some(guidance),
        }
    }

    /// BLOCK decision.
    pub fn block(trace_id: impl Into<String>) -> Self {
        Self {
            decision: Action::Block,
            trace_id: trace_id.into(),
            rewrite_guidance: None,
        }
    }

    /// BLOCK with the kill-switch sentinel trace id.
    pub fn kill_switch() -> Self {
        Self::block(KILL_SWITCH_TRACE_ID)
    }

    /// Final action.
    pub fn decision(&self) -> Action {
        self.decision
    }

    /// Trace id keying the audit record.
    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    /// Guidance, present only for REWRITE.
    pub fn rewrite_guidance(&self) -> Option<&RewriteGuidance> {
        self.rewrite_guidance.as_ref()
    }

    /// Rewrite class of the guidance, if any.
    pub fn rewrite_class(&self) -> Option<&str> {
        self.rewrite_guidance
            .as_ref()
            .map(|g| g.rewrite_class.as_str())
    }

    /// Whether this decision came from the kill switch.
    pub fn is_kill_switch(&self) -> bool {
        self.decision == Action::Block && self.trace_id == KILL_SWITCH_TRACE_ID
    }
}
