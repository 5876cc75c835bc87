//! The eight standard evaluators.

mod access;
mod dependency;
mod karma;
mod risk_flags;

pub use access::{AgeComplianceEvaluator, RegionRestrictionEvaluator};
pub use dependency::DependencyToneEvaluator;
pub use karma::KarmaConfidenceEvaluator;
pub use risk_flags::{
    EmotionalManipulationEvaluator, PlatformPolicyEvaluator, SafetyRiskEvaluator,
    SexualEscalationEvaluator,
};
