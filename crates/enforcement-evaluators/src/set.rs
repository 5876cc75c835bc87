use std::fmt;
use std::sync::Arc;

use enforcement_config::ConfigSnapshot;
use enforcement_types::{EnforcementInput, EvaluatorResult};

use crate::error::EvaluatorError;
use crate::evaluators::{
    AgeComplianceEvaluator, DependencyToneEvaluator, EmotionalManipulationEvaluator,
    KarmaConfidenceEvaluator, PlatformPolicyEvaluator, RegionRestrictionEvaluator,
    SafetyRiskEvaluator, SexualEscalationEvaluator,
};
use crate::Evaluator;

/// Fixed, ordered sequence of evaluators.
///
/// A plain sequence, never a map: registration order decides which rewrite
/// class wins when several REWRITE votes trigger.
#[derive(Clone)]
pub struct EvaluatorSet {
    evaluators: Vec<Arc<dyn Evaluator>>,
}

impl EvaluatorSet {
    /// Custom sequence, evaluated in the given order.
    pub fn new(evaluators: Vec<Arc<dyn Evaluator>>) -> Self {
        Self { evaluators }
    }

    /// The eight standard evaluators. Among REWRITE votes the precedence is
    /// platform, dependency, manipulation, karma.
    pub fn standard() -> Self {
        Self::new(vec![
            Arc::new(AgeComplianceEvaluator),
            Arc::new(RegionRestrictionEvaluator),
            Arc::new(PlatformPolicyEvaluator),
            Arc::new(SafetyRiskEvaluator),
            Arc::new(DependencyToneEvaluator),
            Arc::new(SexualEscalationEvaluator),
            Arc::new(EmotionalManipulationEvaluator),
            Arc::new(KarmaConfidenceEvaluator),
        ])
    }

    /// Run every evaluator in order. The first error aborts the pass; no
    /// partial result set is ever returned.
    pub fn evaluate_all(
        &self,
        input: &EnforcementInput,
        config: &ConfigSnapshot,
    ) -> Result<Vec<EvaluatorResult>, EvaluatorError> {
        self.evaluators
            .iter()
            .map(|evaluator| evaluator.evaluate(input, config))
            .collect()
    }

    /// Evaluator names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.evaluators.iter().map(|e| e.name()).collect()
    }

    /// Number of registered evaluators.
    pub fn len(&self) -> usize {
        self.evaluators.len()
    }

    /// Whether no evaluators are registered.
    pub fn is_empty(&self) -> bool {
        self.evaluators.is_empty()
    }
}

impl Default for EvaluatorSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for EvaluatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvaluatorSet")
            .field("evaluators", &self.names())
            .finish()
    }
}
