use std::fmt;

use serde::{Deserialize, Serialize};

/// Action an evaluator votes for, and the engine's final decision.
///
/// The derived ordering is the decision priority: `Block` dominates
/// `Rewrite`, which dominates `Execute`. Variant order must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Execute,
    Rewrite,
    Block,
}

impl Action {
    /// Wire name of the variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Execute => "EXECUTE",
            Action::Rewrite => "REWRITE",
            Action::Block => "BLOCK",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason code attached to a triggered evaluator vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    AgeRestrictionViolation,
    RegionPolicyBlock,
    CriticalSafetyRisk,
    SexualContentEscalation,
    EmotionalDependencyRisk,
    ManipulativeBehaviorDetected,
    PlatformPolicyRewrite,
    LowKarmaConfidence,
}

impl ReasonCode {
    /// Wire name of the variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::AgeRestrictionViolation => "AGE_RESTRICTION_VIOLATION",
            ReasonCode::RegionPolicyBlock => "REGION_POLICY_BLOCK",
            ReasonCode::CriticalSafetyRisk => "CRITICAL_SAFETY_RISK",
            ReasonCode::SexualContentEscalation => "SEXUAL_CONTENT_ESCALATION",
            ReasonCode::EmotionalDependencyRisk => "EMOTIONAL_DEPENDENCY_RISK",
            ReasonCode::ManipulativeBehaviorDetected => "MANIPULATIVE_BEHAVIOR_DETECTED",
            ReasonCode::PlatformPolicyRewrite => "PLATFORM_POLICY_REWRITE",
            ReasonCode::LowKarmaConfidence => "LOW_KARMA_CONFIDENCE",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_is_block_rewrite_execute() {
        assert!(Action::Block > Action::Rewrite);
        assert!(Action::Rewrite > Action::Execute);
        assert_eq!(
            [Action::Execute, Action::Block, Action::Rewrite].iter().max(),
            Some(&Action::Block)
        );
    }

    #[test]
    fn wire_names_match_display() {
        for action in [Action::Execute, Action::Rewrite, Action::Block] {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action));
        }
        let json = serde_json::to_string(&ReasonCode::LowKarmaConfidence).unwrap();
        assert_eq!(json, "\"LOW_KARMA_CONFIDENCE\"");
    }
}
