use std::sync::Arc;

use tracing::{debug, error};

use super::record::AuditRecord;
use super::sink::AuditSink;

/// Fault-tolerant front for an [`AuditSink`].
///
/// `record` has no error path: a failed append is reported on the tracing
/// channel and the enforcement call carries on with its decision.
#[derive(Clone)]
pub struct AuditLogger {
    sink: Arc<dyn AuditSink>,
}

impl AuditLogger {
    /// Create a logger writing to `sink`.
    pub fn new(sink: Arc<dyn AuditSink>) -> Self {
        Self { sink }
    }

    /// The underlying sink.
    pub fn sink(&self) -> &Arc<dyn AuditSink> {
        &self.sink
    }

    /// Append one record, logging any failure instead of returning it.
    pub fn record(&self, record: &AuditRecord) {
        match self.sink.append(record) {
            Ok(()) => debug!(
                trace_id = %record.trace_id,
                decision = %record.final_decision,
                "Audit record appended"
            ),
            Err(e) => error!(
                trace_id = %record.trace_id,
                error = %e,
                "Audit write failed; decision unaffected"
            ),
        }
    }
}
