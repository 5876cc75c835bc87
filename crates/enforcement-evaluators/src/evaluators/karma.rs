use enforcement_config::ConfigSnapshot;
use enforcement_types::{Action, EnforcementInput, EvaluatorResult, ReasonCode};

use crate::error::EvaluatorError;
use crate::Evaluator;

/// Requests a supportive-tone rewrite when karma is below the threshold
/// resolved for the request's region and the active environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct KarmaConfidenceEvaluator;

impl Evaluator for KarmaConfidenceEvaluator {
    fn name(&self) -> &str {
        "karma_confidence"
    }

    fn evaluate(
        &self,
        input: &EnforcementInput,
        config: &ConfigSnapshot,
    ) -> Result<EvaluatorResult, EvaluatorError> {
        let threshold = config.runtime().karma_threshold_for(&input.region_policy);
        if !threshold.is_finite() {
            return Err(EvaluatorError::NonFiniteSignal {
                evaluator: self.name().into(),
                field: "karma_confidence_threshold".into(),
            });
        }

        if input.karma_score < threshold {
            return Ok(EvaluatorResult::triggered(
                self.name(),
                Action::Rewrite,
                ReasonCode::LowKarmaConfidence,
            ));
        }
        Ok(EvaluatorResult::pass(self.name()))
    }
}
