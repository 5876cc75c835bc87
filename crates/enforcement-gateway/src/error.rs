use enforcement_config::ConfigError;
use enforcement_engine::EnforcementError;
use thiserror::Error;

use crate::handoff::HandoffError;

/// Faults inside the gateway. Every variant ends in the same fail-closed
/// response; the text only ever reaches the diagnostic log.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("malformed request payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("configuration unavailable: {0}")]
    Config(#[from] ConfigError),

    #[error("enforcement failed: {0}")]
    Enforcement(#[from] EnforcementError),

    #[error("validator handoff failed: {0}")]
    Handoff(#[from] HandoffError),
}

impl GatewayError {
    /// Short tag for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Malformed(_) => "malformed_request",
            GatewayError::Config(_) => "config_fault",
            GatewayError::Enforcement(_) => "engine_fault",
            GatewayError::Handoff(_) => "handoff_fault",
        }
    }
}
