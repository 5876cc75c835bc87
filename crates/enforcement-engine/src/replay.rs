//! Deterministic replay of audited calls.
//!
//! Replay re-runs a logged input snapshot through the current engine and the
//! given config, then compares the fresh decision with the logged one. A
//! mismatch means evaluator logic or configuration has drifted since the
//! original call.

use std::sync::Arc;

use enforcement_config::ConfigSnapshot;
use enforcement_types::Action;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::audit::{AuditError, AuditRecord, AuditSink};
use crate::engine::EnforcementEngine;
use crate::error::EnforcementError;

/// Errors from a replay run.
#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("trace not found in audit log: {0}")]
    TraceNotFound(String),

    #[error(transparent)]
    Audit(#[from] AuditError),

    #[error("replayed enforcement failed: {0}")]
    Enforcement(#[from] EnforcementError),
}

/// Outcome of replaying one audited call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReplayReport {
    pub original_trace_id: String,
    pub original_decision: Action,
    pub replayed_decision: Action,
    pub original_rewrite_class: Option<String>,
    pub replayed_rewrite_class: Option<String>,
    /// Same decision and same rewrite class.
    pub deterministic_match: bool,
}

/// Outcome of replaying the whole audit log.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RegressionSummary {
    pub total: usize,
    pub matched: usize,
    /// Trace ids whose replay diverged.
    pub mismatched: Vec<String>,
    /// Trace ids the current engine could not decide at all.
    pub errored: Vec<String>,
}

impl RegressionSummary {
    /// Every replayed trace reproduced its audited outcome.
    pub fn is_clean(&self) -> bool {
        self.mismatched.is_empty() && self.errored.is_empty()
    }
}

/// Replays audit records through an engine.
pub struct Replayer {
    engine: Arc<EnforcementEngine>,
    sink: Arc<dyn AuditSink>,
}

impl Replayer {
    /// Replay records from the engine's own audit sink.
    pub fn new(engine: Arc<EnforcementEngine>) -> Self {
        let sink = engine.audit_sink().clone();
        Self { engine, sink }
    }

    /// Replay records from a different sink, e.g. a log shipped from
    /// another host.
    pub fn with_sink(engine: Arc<EnforcementEngine>, sink: Arc<dyn AuditSink>) -> Self {
        Self { engine, sink }
    }

    /// Replay one trace. Does not write to the audit log.
    pub fn replay(
        &self,
        trace_id: &str,
        config: &ConfigSnapshot,
    ) -> Result<ReplayReport, ReplayError> {
        let record = self
            .sink
            .find(trace_id)?
            .ok_or_else(|| ReplayError::TraceNotFound(trace_id.to_string()))?;
        self.replay_record(&record, config)
    }

    /// Replay every record in log order.
    ///
    /// A record the engine fails on is listed in `errored` and the sweep
    /// continues; only an unreadable audit log aborts it.
    pub fn replay_all(&self, config: &ConfigSnapshot) -> Result<RegressionSummary, ReplayError> {
        let mut summary = RegressionSummary::default();
        for record in self.sink.records()? {
            summary.total += 1;
            match self.replay_record(&record, config) {
                Ok(report) if report.deterministic_match => summary.matched += 1,
                Ok(report) => summary.mismatched.push(report.original_trace_id),
                Err(e) => {
                    warn!(trace_id = %record.trace_id, error = %e, "Replay failed");
                    summary.errored.push(record.trace_id);
                }
            }
        }
        info!(
            total = summary.total,
            matched = summary.matched,
            mismatched = summary.mismatched.len(),
            errored = summary.errored.len(),
            "Replay regression complete"
        );
        Ok(summary)
    }

    fn replay_record(
        &self,
        record: &AuditRecord,
        config: &ConfigSnapshot,
    ) -> Result<ReplayReport, ReplayError> {
        let replayed = self.engine.enforce_unaudited(&record.input_snapshot, config)?;
        let replayed_rewrite_class = replayed.rewrite_class().map(str::to_string);

        let deterministic_match = replayed.decision() == record.final_decision
            && replayed_rewrite_class == record.rewrite_class;

        if !deterministic_match {
            warn!(
                trace_id = %record.trace_id,
                original = %record.final_decision,
                replayed = %replayed.decision(),
                "Replay diverged from audited decision"
            );
        }

        Ok(ReplayReport {
            original_trace_id: record.trace_id.clone(),
            original_decision: record.final_decision,
            replayed_decision: replayed.decision(),
            original_rewrite_class: record.rewrite_class.clone(),
            replayed_rewrite_class,
            deterministic_match,
        })
    }
}
