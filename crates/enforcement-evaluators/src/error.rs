use thiserror::Error;

/// An evaluator could not produce a vote. Any such error fails the whole call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluatorError {
    #[error("evaluator {evaluator}: {field} is not a finite number")]
    NonFiniteSignal { evaluator: String, field: String },

    #[error("evaluator {evaluator} failed: {reason}")]
    Failed { evaluator: String, reason: String },
}
