use enforcement_evaluators::EvaluatorError;
use enforcement_types::InputError;
use thiserror::Error;

/// Faults that abort an enforcement call. None of these ever yields a
/// partial decision.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnforcementError {
    #[error("invalid enforcement input: {0}")]
    InvalidInput(#[from] InputError),

    #[error(transparent)]
    Evaluator(#[from] EvaluatorError),

    #[error("REWRITE resolved but no triggered code maps to a rewrite class: {codes:?}")]
    MissingRewriteGuidance { codes: Vec<String> },
}
