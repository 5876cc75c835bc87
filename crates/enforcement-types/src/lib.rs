//! # enforcement-types
//!
//! Data model shared by every enforcement crate.
//!
//! - [`EnforcementInput`] — immutable snapshot of one decision request
//! - [`EvaluatorResult`] — one evaluator's vote for one call
//! - [`EnforcementDecision`] — the engine's outcome, carrying a trace id and,
//!   for REWRITE only, [`RewriteGuidance`]
//!
//! Decision priority is encoded in the [`Action`] ordering:
//! `Execute < Rewrite < Block`.

#![deny(unsafe_code)]

pub mod action;
pub mod decision;
pub mod error;
pub mod input;
pub mod result;

pub use action::{Action, ReasonCode};
pub use decision::{EnforcementDecision, RewriteGuidance, KILL_SWITCH_TRACE_ID};
pub use error::InputError;
pub use input::{AgeGateStatus, EmotionalOutput, EnforcementInput, EnforcementInputBuilder};
pub use result::EvaluatorResult;
