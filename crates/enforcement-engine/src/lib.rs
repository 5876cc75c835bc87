//! # enforcement-engine
//!
//! Orchestrates one enforcement call:
//!
//! 1. **Kill switch**: when set, answer BLOCK with the sentinel trace id and
//!    run nothing else
//! 2. **Trace id**: fresh UUID per call
//! 3. **Evaluators**: the fixed ordered set, all of them, every time
//! 4. **Resolve**: BLOCK > REWRITE > EXECUTE, independent of vote order
//! 5. **Guidance**: on REWRITE, from the first triggered code with a known
//!    rewrite class
//! 6. **Audit**: append one record; a write failure never reaches the caller
//! 7. **Decision**: decision, trace id, and guidance (REWRITE only)
//!
//! Apart from the trace id and the best-effort audit append, a call is a
//! pure function of the input snapshot and the config snapshot.
//! [`Replayer`] uses that to re-run logged inputs and detect drift.

#![deny(unsafe_code)]

pub mod audit;
pub mod engine;
pub mod error;
pub mod replay;
pub mod resolver;
pub mod rewrite;

pub use audit::{
    AuditError, AuditLogger, AuditRecord, AuditSink, JsonlAuditSink, MemoryAuditSink,
};
pub use engine::{EnforcementEngine, ENGINE_VERSION};
pub use error::EnforcementError;
pub use replay::{RegressionSummary, ReplayError, ReplayReport, Replayer};
pub use resolver::resolve;
pub use rewrite::{generate_rewrite_guidance, guidance_for};
