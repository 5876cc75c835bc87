use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Age gate verdict supplied by the upstream collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgeGateStatus {
    Allowed,
    Blocked,
}

/// Emotional signals derived upstream from the raw text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmotionalOutput {
    #[serde(default)]
    pub tone: String,
    pub dependency_score: f64,
}

impl EmotionalOutput {
    /// Signals with the given tone and dependency score.
    pub fn new(tone: impl Into<String>, dependency_score: f64) -> Self {
        Self {
            tone: tone.into(),
            dependency_score,
        }
    }
}

impl Default for EmotionalOutput {
    fn default() -> Self {
        Self::new("neutral", 0.0)
    }
}

/// Immutable snapshot of one enforcement request.
///
/// Built once per request and only ever handed out by shared reference;
/// nothing downstream of construction mutates it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnforcementInput {
    pub intent: String,
    pub emotional_output: EmotionalOutput,
    pub age_gate_status: AgeGateStatus,
    /// Region code; `RESTRICTED` is reserved.
    pub region_policy: String,
    pub platform_policy: String,
    /// External trust signal in [-1, 1].
    pub karma_score: f64,
    pub risk_flags: BTreeSet<String>,
}

impl EnforcementInput {
    /// Start building a snapshot for `intent`.
    pub fn builder(intent: impl Into<String>) -> EnforcementInputBuilder {
        EnforcementInputBuilder::new(intent)
    }

    /// Whether a risk tag was raised upstream.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.risk_flags.contains(flag)
    }

    /// Reject snapshots the evaluators cannot judge.
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.karma_score.is_finite() {
            return Err(InputError::KarmaNotFinite);
        }
        if !(-1.0..=1.0).contains(&self.karma_score) {
            return Err(InputError::KarmaOutOfRange(self.karma_score));
        }
        if !self.emotional_output.dependency_score.is_finite() {
            return Err(InputError::DependencyNotFinite);
        }
        Ok(())
    }
}

/// Builder for [`EnforcementInput`].
///
/// Defaults describe a benign request: neutral tone, zero dependency,
/// age gate allowed, region `IN`, platform `YOUTUBE`, karma 0, no flags.
#[derive(Clone, Debug)]
pub struct EnforcementInputBuilder {
    input: EnforcementInput,
}

impl EnforcementInputBuilder {
    /// Builder with benign defaults for everything but the intent.
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            input: EnforcementInput {
                intent: intent.into(),
                emotional_output: EmotionalOutput::default(),
                age_gate_status: AgeGateStatus::Allowed,
                region_policy: "IN".into(),
                platform_policy: "YOUTUBE".into(),
                karma_score: 0.0,
                risk_flags: BTreeSet::new(),
            },
        }
    }

    /// Replace the emotional signals.
    pub fn emotional_output(mut self, output: EmotionalOutput) -> Self {
        self.input.emotional_output = output;
        self
    }

    /// Set the dependency score only.
    pub fn dependency_score(mut self, score: f64) -> Self {
        self.input.emotional_output.dependency_score = score;
        self
    }

    /// Set the age gate verdict.
    pub fn age_gate_status(mut self, status: AgeGateStatus) -> Self {
        self.input.age_gate_status = status;
        self
    }

    /// Set the region code.
    pub fn region_policy(mut self, region: impl Into<String>) -> Self {
        self.input.region_policy = region.into();
        self
    }

    /// Set the platform code.
    pub fn platform_policy(mut self, platform: impl Into<String>) -> Self {
        self.input.platform_policy = platform.into();
        self
    }

    /// Set the karma signal.
    pub fn karma_score(mut self, karma: f64) -> Self {
        self.input.karma_score = karma;
        self
    }

    /// Add one risk flag.
    pub fn risk_flag(mut self, flag: impl Into<String>) -> Self {
        self.input.risk_flags.insert(flag.into());
        self
    }

    /// Add several risk flags.
    pub fn risk_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input.risk_flags.extend(flags.into_iter().map(Into::into));
        self
    }

    /// Finish the snapshot.
    pub fn build(self) -> EnforcementInput {
        self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_are_benign() {
        let input = EnforcementInput::builder("hello").build();
        assert_eq!(input.age_gate_status, AgeGateStatus::Allowed);
        assert_eq!(input.region_policy, "IN");
        assert!(input.risk_flags.is_empty());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn karma_outside_range_rejected() {
        let input = EnforcementInput::builder("x").karma_score(1.5).build();
        assert_eq!(input.validate(), Err(InputError::KarmaOutOfRange(1.5)));

        let input = EnforcementInput::builder("x").karma_score(f64::NAN).build();
        assert_eq!(input.validate(), Err(InputError::KarmaNotFinite));
    }

    #[test]
    fn karma_bounds_are_inclusive() {
        for karma in [-1.0, 1.0] {
            let input = EnforcementInput::builder("x").karma_score(karma).build();
            assert!(input.validate().is_ok());
        }
    }

    #[test]
    fn non_finite_dependency_rejected() {
        let input = EnforcementInput::builder("x")
            .dependency_score(f64::INFINITY)
            .build();
        assert_eq!(input.validate(), Err(InputError::DependencyNotFinite));
    }

    #[test]
    fn duplicate_flags_collapse() {
        let input = EnforcementInput::builder("x")
            .risk_flags(["HIGH_RISK", "HIGH_RISK"])
            .build();
        assert_eq!(input.risk_flags.len(), 1);
        assert!(input.has_flag("HIGH_RISK"));
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let input = EnforcementInput::builder("stay")
            .age_gate_status(AgeGateStatus::Blocked)
            .risk_flag("SEXUAL_ESCALATION")
            .build();
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["age_gate_status"], "BLOCKED");
        let back: EnforcementInput = serde_json::from_value(json).unwrap();
        assert_eq!(back, input);
    }
}
