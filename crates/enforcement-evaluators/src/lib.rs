//! # enforcement-evaluators
//!
//! Eight independent policy checks, each voting EXECUTE, REWRITE or BLOCK
//! with a reason code. Evaluators are pure: no I/O, no shared state, no
//! mutation of the input. They see the request snapshot and the config
//! snapshot for the current call and nothing else.
//!
//! | Evaluator | Trigger | Action | Code |
//! |---|---|---|---|
//! | `age_compliance` | age gate BLOCKED | BLOCK | `AGE_RESTRICTION_VIOLATION` |
//! | `region_restriction` | region is the restricted code | BLOCK | `REGION_POLICY_BLOCK` |
//! | `platform_policy` | `PLATFORM_VIOLATION` flag | REWRITE | `PLATFORM_POLICY_REWRITE` |
//! | `safety_risk` | `HIGH_RISK` flag | BLOCK | `CRITICAL_SAFETY_RISK` |
//! | `dependency_tone` | dependency score above limit | REWRITE | `EMOTIONAL_DEPENDENCY_RISK` |
//! | `sexual_escalation` | `SEXUAL_ESCALATION` flag | BLOCK | `SEXUAL_CONTENT_ESCALATION` |
//! | `emotional_manipulation` | `EMOTIONAL_MANIPULATION` flag | REWRITE | `MANIPULATIVE_BEHAVIOR_DETECTED` |
//! | `karma_confidence` | karma below resolved threshold | REWRITE | `LOW_KARMA_CONFIDENCE` |
//!
//! [`EvaluatorSet::standard`] registers them in exactly this order. The order
//! is part of the contract: rewrite guidance is taken from the first
//! triggered REWRITE code in registration order.

#![deny(unsafe_code)]

pub mod error;
pub mod evaluators;
pub mod flags;
pub mod set;

use enforcement_config::ConfigSnapshot;
use enforcement_types::{EnforcementInput, EvaluatorResult};

pub use error::EvaluatorError;
pub use evaluators::{
    AgeComplianceEvaluator, DependencyToneEvaluator, EmotionalManipulationEvaluator,
    KarmaConfidenceEvaluator, PlatformPolicyEvaluator, RegionRestrictionEvaluator,
    SafetyRiskEvaluator, SexualEscalationEvaluator,
};
pub use set::EvaluatorSet;

/// A single-method policy check.
pub trait Evaluator: Send + Sync {
    /// Stable name recorded in the audit log.
    fn name(&self) -> &str;

    /// Vote on one request. Must be pure and must not block.
    fn evaluate(
        &self,
        input: &EnforcementInput,
        config: &ConfigSnapshot,
    ) -> Result<EvaluatorResult, EvaluatorError>;
}
