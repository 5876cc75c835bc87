use serde::Serialize;

use crate::error::Result;
use crate::policy::PolicyConstants;
use crate::runtime::RuntimeConfig;

/// Immutable, versioned configuration for enforcement calls.
///
/// Callers share it as `Arc<ConfigSnapshot>`; a newer configuration is a new
/// snapshot, never an in-place edit.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConfigSnapshot {
    revision: u64,
    policy: PolicyConstants,
    runtime: RuntimeConfig,
}

impl ConfigSnapshot {
    /// Validate and freeze both documents. Revision starts at 0.
    pub fn new(policy: PolicyConstants, runtime: RuntimeConfig) -> Result<Self> {
        policy.validate()?;
        runtime.validate()?;
        Ok(Self {
            revision: 0,
            policy,
            runtime,
        })
    }

    /// Default policy constants with the given runtime knobs.
    pub fn from_runtime(runtime: RuntimeConfig) -> Result<Self> {
        Self::new(PolicyConstants::default(), runtime)
    }

    pub(crate) fn with_revision(mut self, revision: u64) -> Self {
        self.revision = revision;
        self
    }

    /// Revision assigned by the installing handle; 0 if never installed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Policy constants document.
    pub fn policy(&self) -> &PolicyConstants {
        &self.policy
    }

    /// Runtime knobs document.
    pub fn runtime(&self) -> &RuntimeConfig {
        &self.runtime
    }

    /// Whether the kill switch is on.
    pub fn kill_switch(&self) -> bool {
        self.runtime.kill_switch
    }
}

impl Default for ConfigSnapshot {
    fn default() -> Self {
        Self {
            revision: 0,
            policy: PolicyConstants::default(),
            runtime: RuntimeConfig::default(),
        }
    }
}
