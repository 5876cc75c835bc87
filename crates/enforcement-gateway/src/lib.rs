//! # enforcement-gateway
//!
//! The single external boundary in front of the enforcement engine.
//!
//! - Parses the inbound request strictly; anything malformed fails closed
//! - Maps internal actions to the external vocabulary
//!   (EXECUTE → ALLOW, REWRITE → REWRITE, BLOCK → BLOCK)
//! - Mints an `enforcement_decision_id` per call, independent of the
//!   engine's trace id
//! - Hands ALLOW/REWRITE outcomes to the downstream behavioral validator;
//!   BLOCK never leaves the gateway
//! - Collapses every fault into one response: BLOCK with
//!   [`FAIL_CLOSED_REASON`] and an empty trace

#![deny(unsafe_code)]

pub mod error;
pub mod gateway;
pub mod handoff;
pub mod request;
pub mod response;

pub use error::GatewayError;
pub use gateway::EnforcementGateway;
pub use handoff::{
    BehaviorValidator, DeterministicValidator, HandoffDecision, HandoffError, ValidationVerdict,
    ValidatorHandoff,
};
pub use request::{EnforcementRequest, RequestMeta};
pub use response::{
    EnforcementResponse, LiveDecision, TraceEntry, FAIL_CLOSED_REASON, SUCCESS_REASON,
};
