use std::sync::Arc;

use enforcement_config::ConfigHandle;
use enforcement_engine::EnforcementEngine;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::GatewayError;
use crate::handoff::{
    BehaviorValidator, DeterministicValidator, HandoffDecision, ValidationVerdict,
    ValidatorHandoff,
};
use crate::request::EnforcementRequest;
use crate::response::{EnforcementResponse, LiveDecision};

/// Live enforcement gateway.
///
/// Never returns an error: a call either completes with
/// `DETERMINISTIC_ENFORCEMENT_APPLIED` or fails closed to BLOCK.
pub struct EnforcementGateway {
    engine: Arc<EnforcementEngine>,
    config: Arc<ConfigHandle>,
    validator: Arc<dyn BehaviorValidator>,
}

impl EnforcementGateway {
    /// Gateway with the stand-in validator.
    pub fn new(engine: Arc<EnforcementEngine>, config: Arc<ConfigHandle>) -> Self {
        Self::with_validator(engine, config, Arc::new(DeterministicValidator))
    }

    /// Gateway handing off to the given validator.
    pub fn with_validator(
        engine: Arc<EnforcementEngine>,
        config: Arc<ConfigHandle>,
        validator: Arc<dyn BehaviorValidator>,
    ) -> Self {
        Self {
            engine,
            config,
            validator,
        }
    }

    /// The config handle; install a new snapshot here to hot-reload.
    pub fn config(&self) -> &Arc<ConfigHandle> {
        &self.config
    }

    /// Handle a raw JSON payload.
    pub fn handle_json(&self, payload: &[u8]) -> EnforcementResponse {
        let enforcement_decision_id = Uuid::new_v4().to_string();
        let outcome = serde_json::from_slice::<EnforcementRequest>(payload)
            .map_err(GatewayError::from)
            .and_then(|request| self.decide(&enforcement_decision_id, &request));
        finish(enforcement_decision_id, outcome)
    }

    /// Handle an already-parsed request.
    pub fn handle(&self, request: &EnforcementRequest) -> EnforcementResponse {
        let enforcement_decision_id = Uuid::new_v4().to_string();
        let outcome = self.decide(&enforcement_decision_id, request);
        finish(enforcement_decision_id, outcome)
    }

    fn decide(
        &self,
        enforcement_decision_id: &str,
        request: &EnforcementRequest,
    ) -> Result<EnforcementResponse, GatewayError> {
        let config = self.config.snapshot()?;
        let decision = self.engine.enforce(&request.to_input(), &config)?;
        let live = LiveDecision::from(decision.decision());

        if let Some(handoff_decision) = HandoffDecision::from_live(live) {
            let handoff = ValidatorHandoff {
                decision: handoff_decision,
                rewrite_class: decision.rewrite_class().map(str::to_string),
                trace_id: decision.trace_id().to_string(),
                enforcement_decision_id: enforcement_decision_id.to_string(),
            };
            match self.validator.validate(&handoff)? {
                ValidationVerdict::Safe => {
                    debug!(enforcement_decision_id, "Validator reported safe");
                }
                ValidationVerdict::Unsafe => {
                    warn!(
                        enforcement_decision_id,
                        trace_id = %decision.trace_id(),
                        decision = %live,
                        "Validator reported unsafe"
                    );
                }
            }
        }

        info!(
            enforcement_decision_id,
            trace_id = %decision.trace_id(),
            decision = %live,
            "Gateway decision"
        );

        Ok(EnforcementResponse::applied(
            enforcement_decision_id.to_string(),
            live,
            decision.rewrite_class(),
        ))
    }
}

fn finish(
    enforcement_decision_id: String,
    outcome: Result<EnforcementResponse, GatewayError>,
) -> EnforcementResponse {
    match outcome {
        Ok(response) => response,
        Err(err) => {
            warn!(
                enforcement_decision_id = %enforcement_decision_id,
                reason = err.kind(),
                error = %err,
                "Enforcement failed closed"
            );
            EnforcementResponse::fail_closed(enforcement_decision_id)
        }
    }
}
