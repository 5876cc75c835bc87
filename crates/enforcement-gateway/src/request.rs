use enforcement_types::{AgeGateStatus, EmotionalOutput, EnforcementInput};
use serde::{Deserialize, Serialize};

/// Inbound enforcement request.
///
/// Parsing is strict: `meta.emotional_output.dependency_score` and
/// `meta.risk_flags` must be present and non-null, and `age_state` must be
/// `ALLOWED` or `BLOCKED`. Only `tone` and `karma_signal` may be omitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnforcementRequest {
    pub text: String,
    pub meta: RequestMeta,
    pub age_state: AgeGateStatus,
    pub region_state: String,
    pub platform_policy_state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub karma_signal: Option<f64>,
}

/// Signals supplied by the upstream collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequestMeta {
    pub emotional_output: EmotionalOutput,
    pub risk_flags: Vec<String>,
}

impl EnforcementRequest {
    /// Build the engine's input snapshot. An absent karma signal is 0.0.
    pub fn to_input(&self) -> EnforcementInput {
        EnforcementInput::builder(self.text.clone())
            .emotional_output(self.meta.emotional_output.clone())
            .age_gate_status(self.age_state)
            .region_policy(self.region_state.clone())
            .platform_policy(self.platform_policy_state.clone())
            .karma_score(self.karma_signal.unwrap_or(0.0))
            .risk_flags(self.meta.risk_flags.iter().cloned())
            .build()
    }
}
