use std::sync::Arc;

use chrono::Utc;
use enforcement_config::ConfigSnapshot;
use enforcement_evaluators::EvaluatorSet;
use enforcement_types::{Action, EnforcementDecision, EnforcementInput};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::audit::{AuditLogger, AuditRecord, AuditSink};
use crate::error::EnforcementError;
use crate::resolver::resolve;
use crate::rewrite::generate_rewrite_guidance;

/// Version stamped on every audit record.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The enforcement engine.
///
/// Holds no per-call state: the evaluator set is fixed at construction and
/// the config snapshot arrives with each call, so one engine can serve any
/// number of threads at once.
pub struct EnforcementEngine {
    evaluators: EvaluatorSet,
    audit: AuditLogger,
}

impl EnforcementEngine {
    /// Engine with the standard evaluators.
    pub fn new(sink: Arc<dyn AuditSink>) -> Self {
        Self::with_evaluators(EvaluatorSet::standard(), sink)
    }

    /// Engine with a custom evaluator set.
    pub fn with_evaluators(evaluators: EvaluatorSet, sink: Arc<dyn AuditSink>) -> Self {
        Self {
            evaluators,
            audit: AuditLogger::new(sink),
        }
    }

    /// The registered evaluators.
    pub fn evaluators(&self) -> &EvaluatorSet {
        &self.evaluators
    }

    /// The sink audit records are appended to.
    pub fn audit_sink(&self) -> &Arc<dyn AuditSink> {
        self.audit.sink()
    }

    /// Decide on one request and append its audit record.
    pub fn enforce(
        &self,
        input: &EnforcementInput,
        config: &ConfigSnapshot,
    ) -> Result<EnforcementDecision, EnforcementError> {
        self.run(input, config, true)
    }

    /// Same decision path as [`enforce`](Self::enforce) without touching the
    /// audit log. Used by replay so re-runs do not add records.
    pub fn enforce_unaudited(
        &self,
        input: &EnforcementInput,
        config: &ConfigSnapshot,
    ) -> Result<EnforcementDecision, EnforcementError> {
        self.run(input, config, false)
    }

    fn run(
        &self,
        input: &EnforcementInput,
        config: &ConfigSnapshot,
        audited: bool,
    ) -> Result<EnforcementDecision, EnforcementError> {
        if config.kill_switch() {
            warn!(revision = config.revision(), "Kill switch active, blocking");
            return Ok(EnforcementDecision::kill_switch());
        }

        let trace_id = Uuid::new_v4().to_string();

        input.validate()?;

        let results = self.evaluators.evaluate_all(input, config)?;
        for result in results.iter().filter(|r| r.triggered) {
            debug!(
                trace_id = %trace_id,
                evaluator = %result.name,
                action = %result.action,
                "Evaluator triggered"
            );
        }

        let decision = match resolve(&results) {
            Action::Execute => EnforcementDecision::execute(trace_id),
            Action::Block => EnforcementDecision::block(trace_id),
            Action::Rewrite => match generate_rewrite_guidance(&results) {
                Some(guidance) => EnforcementDecision::rewrite(trace_id, guidance),
                None => {
                    let codes = results
                        .iter()
                        .filter_map(|r| r.code)
                        .map(|c| c.as_str().to_string())
                        .collect();
                    return Err(EnforcementError::MissingRewriteGuidance { codes });
                }
            },
        };

        if audited {
            self.audit.record(&AuditRecord {
                trace_id: decision.trace_id().to_string(),
                timestamp: Utc::now(),
                engine_version: ENGINE_VERSION.to_string(),
                config_revision: config.revision(),
                input_snapshot: input.clone(),
                evaluators: results,
                final_decision: decision.decision(),
                rewrite_class: decision.rewrite_class().map(str::to_string),
            });
        }

        info!(
            trace_id = %decision.trace_id(),
            decision = %decision.decision(),
            rewrite_class = decision.rewrite_class().unwrap_or("-"),
            "Enforcement decision"
        );

        Ok(decision)
    }
}
