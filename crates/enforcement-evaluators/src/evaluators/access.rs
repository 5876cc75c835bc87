use enforcement_config::ConfigSnapshot;
use enforcement_types::{Action, AgeGateStatus, EnforcementInput, EvaluatorResult, ReasonCode};

use crate::error::EvaluatorError;
use crate::Evaluator;

/// Blocks when the upstream age gate refused the user.
#[derive(Debug, Default, Clone, Copy)]
pub struct AgeComplianceEvaluator;

impl Evaluator for AgeComplianceEvaluator {
    fn name(&self) -> &str {
        "age_compliance"
    }

    fn evaluate(
        &self,
        input: &EnforcementInput,
        _config: &ConfigSnapshot,
    ) -> Result<EvaluatorResult, EvaluatorError> {
        if input.age_gate_status == AgeGateStatus::Blocked {
            return Ok(EvaluatorResult::triggered(
                self.name(),
                Action::Block,
                ReasonCode::AgeRestrictionViolation,
            ));
        }
        Ok(EvaluatorResult::pass(self.name()))
    }
}

/// Blocks requests from the reserved restricted region.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegionRestrictionEvaluator;

impl Evaluator for RegionRestrictionEvaluator {
    fn name(&self) -> &str {
        "region_restriction"
    }

    fn evaluate(
        &self,
        input: &EnforcementInput,
        config: &ConfigSnapshot,
    ) -> Result<EvaluatorResult, EvaluatorError> {
        if input.region_policy == config.policy().restricted_region {
            return Ok(EvaluatorResult::triggered(
                self.name(),
                Action::Block,
                ReasonCode::RegionPolicyBlock,
            ));
        }
        Ok(EvaluatorResult::pass(self.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluators::test_support::{config, input};

    #[test]
    fn age_blocked_votes_block() {
        let result = AgeComplianceEvaluator
            .evaluate(
                &input().age_gate_status(AgeGateStatus::Blocked).build(),
                &config(),
            )
            .unwrap();
        assert!(result.triggered);
        assert_eq!(result.action, Action::Block);
        assert_eq!(result.code, Some(ReasonCode::AgeRestrictionViolation));
    }

    #[test]
    fn age_allowed_passes() {
        let result = AgeComplianceEvaluator
            .evaluate(&input().build(), &config())
            .unwrap();
        assert_eq!(result, EvaluatorResult::pass("age_compliance"));
    }

    #[test]
    fn restricted_region_votes_block() {
        let result = RegionRestrictionEvaluator
            .evaluate(&input().region_policy("RESTRICTED").build(), &config())
            .unwrap();
        assert_eq!(result.action, Action::Block);
        assert_eq!(result.code, Some(ReasonCode::RegionPolicyBlock));

        let result = RegionRestrictionEvaluator
            .evaluate(&input().region_policy("EU").build(), &config())
            .unwrap();
        assert!(!result.triggered);
    }
}
