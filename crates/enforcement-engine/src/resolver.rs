use enforcement_types::{Action, EvaluatorResult};

/// Collapse evaluator votes into one decision.
///
/// BLOCK if any vote is BLOCK, else REWRITE if any vote is REWRITE, else
/// EXECUTE. The result does not depend on vote order or on how many
/// evaluators voted EXECUTE; an empty vote list resolves to EXECUTE.
pub fn resolve(results: &[EvaluatorResult]) -> Action {
    results
        .iter()
        .map(|r| r.action)
        .max()
        .unwrap_or(Action::Execute)
}
