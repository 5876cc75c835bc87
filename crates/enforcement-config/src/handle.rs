use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{error, info};

use crate::error::{ConfigError, Result};
use crate::loader::load_dir;
use crate::snapshot::ConfigSnapshot;

enum ConfigState {
    Unloaded,
    Ready(Arc<ConfigSnapshot>),
    Faulted(String),
}

/// Shared holder of the current configuration snapshot.
///
/// Each call takes one `Arc<ConfigSnapshot>` up front and uses it for the
/// whole call, so a swap never lands mid-call. There is no process-wide
/// instance; owners pass the handle to whoever needs it.
pub struct ConfigHandle {
    state: RwLock<ConfigState>,
    next_revision: AtomicU64,
}

impl ConfigHandle {
    /// Handle with nothing loaded; every snapshot request fails.
    pub fn unloaded() -> Self {
        Self {
            state: RwLock::new(ConfigState::Unloaded),
            next_revision: AtomicU64::new(1),
        }
    }

    /// Handle serving `snapshot` as revision 1.
    pub fn new(snapshot: ConfigSnapshot) -> Self {
        let handle = Self::unloaded();
        handle.install(snapshot);
        handle
    }

    /// Load from a config directory. Load failures leave the handle faulted
    /// rather than returning an error, so the gateway still answers.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let handle = Self::unloaded();
        // the fault is recorded in the handle state
        let _ = handle.reload_from_dir(dir);
        handle
    }

    /// Current snapshot, or the fault that prevents enforcement.
    pub fn snapshot(&self) -> Result<Arc<ConfigSnapshot>> {
        match &*self.state.read() {
            ConfigState::Ready(snapshot) => Ok(Arc::clone(snapshot)),
            ConfigState::Unloaded => Err(ConfigError::NotLoaded),
            ConfigState::Faulted(reason) => Err(ConfigError::Faulted(reason.clone())),
        }
    }

    /// Swap in a new snapshot, assigning the next revision.
    pub fn install(&self, snapshot: ConfigSnapshot) -> Arc<ConfigSnapshot> {
        let revision = self.next_revision.fetch_add(1, Ordering::SeqCst);

        let snapshot = Arc::new(snapshot.with_revision(revision));
        *self.state.write() = ConfigState::Ready(Arc::clone(&snapshot));

        info!(
            revision,
            kill_switch = snapshot.kill_switch(),
            env = %snapshot.runtime().env,
            "Configuration snapshot installed"
        );
        snapshot
    }

    /// Reload both documents. On failure the handle becomes faulted and
    /// stays so until a good snapshot is installed.
    pub fn reload_from_dir(&self, dir: impl AsRef<Path>) -> Result<Arc<ConfigSnapshot>> {
        match load_dir(dir) {
            Ok(snapshot) => Ok(self.install(snapshot)),
            Err(e) => {
                error!(error = %e, "Configuration load failed, enforcement will fail closed");
                *self.state.write() = ConfigState::Faulted(e.to_string());
                Err(e)
            }
        }
    }

    /// Mark the handle faulted explicitly.
    pub fn fault(&self, reason: impl Into<String>) {
        *self.state.write() = ConfigState::Faulted(reason.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::RuntimeConfig;

    #[test]
    fn unloaded_handle_refuses() {
        let handle = ConfigHandle::unloaded();
        assert!(matches!(handle.snapshot(), Err(ConfigError::NotLoaded)));
    }

    #[test]
    fn install_bumps_revision_and_keeps_old_snapshot_intact() {
        let handle = ConfigHandle::new(ConfigSnapshot::default());
        let first = handle.snapshot().unwrap();
        assert_eq!(first.revision(), 1);

        let killed = ConfigSnapshot::from_runtime(RuntimeConfig::default().with_kill_switch(true))
            .unwrap();
        handle.install(killed);

        let second = handle.snapshot().unwrap();
        assert_eq!(second.revision(), 2);
        assert!(second.kill_switch());
        // A call holding the earlier snapshot is unaffected by the swap.
        assert!(!first.kill_switch());
    }

    #[test]
    fn failed_reload_faults_handle() {
        let dir = tempfile::tempdir().unwrap();
        let handle = ConfigHandle::new(ConfigSnapshot::default());

        assert!(handle.reload_from_dir(dir.path()).is_err());
        assert!(matches!(handle.snapshot(), Err(ConfigError::Faulted(_))));

        handle.install(ConfigSnapshot::default());
        assert!(handle.snapshot().is_ok());
    }
}
