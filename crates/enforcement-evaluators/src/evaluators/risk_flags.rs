use enforcement_config::ConfigSnapshot;
use enforcement_types::{Action, EnforcementInput, EvaluatorResult, ReasonCode};

use crate::error::EvaluatorError;
use crate::flags;
use crate::Evaluator;

fn vote_on_flag(
    name: &str,
    input: &EnforcementInput,
    flag: &str,
    action: Action,
    code: ReasonCode,
) -> EvaluatorResult {
    if input.has_flag(flag) {
        EvaluatorResult::triggered(name, action, code)
    } else {
        EvaluatorResult::pass(name)
    }
}

/// Blocks on the `HIGH_RISK` flag. Karma never softens this.
#[derive(Debug, Default, Clone, Copy)]
pub struct SafetyRiskEvaluator;

impl Evaluator for SafetyRiskEvaluator {
    fn name(&self) -> &str {
        "safety_risk"
    }

    fn evaluate(
        &self,
        input: &EnforcementInput,
        _config: &ConfigSnapshot,
    ) -> Result<EvaluatorResult, EvaluatorError> {
        Ok(vote_on_flag(
            self.name(),
            input,
            flags::HIGH_RISK,
            Action::Block,
            ReasonCode::CriticalSafetyRisk,
        ))
    }
}

/// Blocks on the `SEXUAL_ESCALATION` flag.
#[derive(Debug, Default, Clone, Copy)]
pub struct SexualEscalationEvaluator;

impl Evaluator for SexualEscalationEvaluator {
    fn name(&self) -> &str {
        "sexual_escalation"
    }

    fn evaluate(
        &self,
        input: &EnforcementInput,
        _config: &ConfigSnapshot,
    ) -> Result<EvaluatorResult, EvaluatorError> {
        Ok(vote_on_flag(
            self.name(),
            input,
            flags::SEXUAL_ESCALATION,
            Action::Block,
            ReasonCode::SexualContentEscalation,
        ))
    }
}

/// Requests a rewrite on the `EMOTIONAL_MANIPULATION` flag.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmotionalManipulationEvaluator;

impl Evaluator for EmotionalManipulationEvaluator {
    fn name(&self) -> &str {
        "emotional_manipulation"
    }

    fn evaluate(
        &self,
        input: &EnforcementInput,
        _config: &ConfigSnapshot,
    ) -> Result<EvaluatorResult, EvaluatorError> {
        Ok(vote_on_flag(
            self.name(),
            input,
            flags::EMOTIONAL_MANIPULATION,
            Action::Rewrite,
            ReasonCode::ManipulativeBehaviorDetected,
        ))
    }
}

/// Requests a rewrite on the `PLATFORM_VIOLATION` flag.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformPolicyEvaluator;

impl Evaluator for PlatformPolicyEvaluator {
    fn name(&self) -> &str {
        "platform_policy"
    }

    fn evaluate(
        &self,
        input: &EnforcementInput,
        _config: &ConfigSnapshot,
    ) -> Result<EvaluatorResult, EvaluatorError> {
        Ok(vote_on_flag(
            self.name(),
            input,
            flags::PLATFORM_VIOLATION,
            Action::Rewrite,
            ReasonCode::PlatformPolicyRewrite,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluators::test_support::{config, input};

    fn vote(evaluator: &dyn Evaluator, flag: &str) -> EvaluatorResult {
        evaluator
            .evaluate(&input().risk_flag(flag).build(), &config())
            .unwrap()
    }

    #[test]
    fn each_flag_triggers_its_own_evaluator() {
        let cases: [(&dyn Evaluator, &str, Action, ReasonCode); 4] = [
            (&SafetyRiskEvaluator, flags::HIGH_RISK, Action::Block, ReasonCode::CriticalSafetyRisk),
            (
                &SexualEscalationEvaluator,
                flags::SEXUAL_ESCALATION,
                Action::Block,
                ReasonCode::SexualContentEscalation,
            ),
            (
                &EmotionalManipulationEvaluator,
                flags::EMOTIONAL_MANIPULATION,
                Action::Rewrite,
                ReasonCode::ManipulativeBehaviorDetected,
            ),
            (
                &PlatformPolicyEvaluator,
                flags::PLATFORM_VIOLATION,
                Action::Rewrite,
                ReasonCode::PlatformPolicyRewrite,
            ),
        ];

        for (evaluator, flag, action, code) in cases {
            let result = vote(evaluator, flag);
            assert!(result.triggered, "{} should trigger", evaluator.name());
            assert_eq!(result.action, action);
            assert_eq!(result.code, Some(code));
        }
    }

    #[test]
    fn unrelated_flag_passes() {
        let result = vote(&SafetyRiskEvaluator, flags::PLATFORM_VIOLATION);
        assert!(!result.triggered);
        assert_eq!(result.action, Action::Execute);
    }
}
