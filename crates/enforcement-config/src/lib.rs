//! # enforcement-config
//!
//! Two declarative documents drive enforcement:
//!
//! - `enforcement.yaml` → [`PolicyConstants`] (thresholds the evaluators use)
//! - `runtime.yaml` → [`RuntimeConfig`] (kill switch, karma thresholds, env overlays)
//!
//! Both are combined into an immutable, versioned [`ConfigSnapshot`] that is
//! passed explicitly to every enforcement call. [`ConfigHandle`] swaps whole
//! snapshots between calls; a failed load leaves it faulted so callers fail
//! closed instead of running with stale or partial policy.

#![deny(unsafe_code)]

pub mod error;
pub mod handle;
pub mod loader;
pub mod policy;
pub mod runtime;
pub mod snapshot;

pub use error::{ConfigError, Result};
pub use handle::ConfigHandle;
pub use loader::{load_dir, POLICY_FILE, RUNTIME_FILE};
pub use policy::PolicyConstants;
pub use runtime::{clamp_threshold, RuntimeConfig};
pub use snapshot::ConfigSnapshot;
