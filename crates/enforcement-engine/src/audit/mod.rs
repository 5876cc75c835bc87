//! Append-only audit trail.
//!
//! One [`AuditRecord`] per enforcement call, keyed by trace id. Storage sits
//! behind [`AuditSink`] (append + iterate) so backends swap without touching
//! the engine. [`AuditLogger`] is the engine's only way in and it never
//! propagates a sink failure.

mod logger;
mod record;
mod sink;

pub use logger::AuditLogger;
pub use record::AuditRecord;
pub use sink::{AuditError, AuditSink, JsonlAuditSink, MemoryAuditSink};
