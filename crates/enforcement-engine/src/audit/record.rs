use chrono::{DateTime, Utc};
use enforcement_types::{Action, EnforcementInput, EvaluatorResult};
use serde::{Deserialize, Serialize};

/// One line of the audit log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub trace_id: String,
    pub timestamp: DateTime<Utc>,
    pub engine_version: String,
    /// Revision of the config snapshot the call ran against.
    #[serde(default)]
    pub config_revision: u64,
    pub input_snapshot: EnforcementInput,
    pub evaluators: Vec<EvaluatorResult>,
    pub final_decision: Action,
    #[serde(default)]
    pub rewrite_class: Option<String>,
}
