use enforcement_config::ConfigSnapshot;
use enforcement_types::{Action, EnforcementInput, EvaluatorResult, ReasonCode};

use crate::error::EvaluatorError;
use crate::Evaluator;

/// Requests a rewrite when the dependency score is strictly above the
/// configured limit (0.7 by default).
#[derive(Debug, Default, Clone, Copy)]
pub struct DependencyToneEvaluator;

impl Evaluator for DependencyToneEvaluator {
    fn name(&self) -> &str {
        "dependency_tone"
    }

    fn evaluate(
        &self,
        input: &EnforcementInput,
        config: &ConfigSnapshot,
    ) -> Result<EvaluatorResult, EvaluatorError> {
        let score = input.emotional_output.dependency_score;
        if !score.is_finite() {
            return Err(EvaluatorError::NonFiniteSignal {
                evaluator: self.name().into(),
                field: "dependency_score".into(),
            });
        }

        if score > config.policy().dependency_score_threshold {
            return Ok(EvaluatorResult::triggered(
                self.name(),
                Action::Rewrite,
                ReasonCode::EmotionalDependencyRisk,
            ));
        }
        Ok(EvaluatorResult::pass(self.name()))
    }
}
