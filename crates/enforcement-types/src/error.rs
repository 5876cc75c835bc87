use thiserror::Error;

/// Rejections raised while validating an [`EnforcementInput`](crate::EnforcementInput).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("karma score {0} is outside [-1, 1]")]
    KarmaOutOfRange(f64),

    #[error("karma score is not a finite number")]
    KarmaNotFinite,

    #[error("dependency score is not a finite number")]
    DependencyNotFinite,
}
