use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::policy::PolicyConstants;
use crate::runtime::RuntimeConfig;
use crate::snapshot::ConfigSnapshot;

/// Policy constants document name inside the config directory.
pub const POLICY_FILE: &str = "enforcement.yaml";
/// Runtime knobs document name inside the config directory.
pub const RUNTIME_FILE: &str = "runtime.yaml";

/// Load both documents from `dir` into a validated snapshot.
///
/// Both files are required; a missing document is a fault, not a default.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<ConfigSnapshot> {
    let dir = dir.as_ref();
    let policy: PolicyConstants = load_yaml(&dir.join(POLICY_FILE))?;
    let runtime: RuntimeConfig = load_yaml(&dir.join(RUNTIME_FILE))?;

    debug!(
        dir = %dir.display(),
        env = %runtime.env,
        kill_switch = runtime.kill_switch,
        "Loaded enforcement configuration"
    );

    ConfigSnapshot::new(policy, runtime)
}

fn load_yaml<T: DeserializeOwned>(path: &PathBuf) -> Result<T> {
    if !path.exists() {
        return Err(ConfigError::Missing(path.clone()));
    }

    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;

    serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn loads_both_documents() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), POLICY_FILE, "dependency_score_threshold: 0.7\n");
        write(
            dir.path(),
            RUNTIME_FILE,
            "kill_switch: false\n\
             karma_confidence_threshold: -0.5\n\
             karma_confidence_thresholds:\n  EU: -0.4\n\
             env: demo\n\
             karma_confidence_threshold_overlays:\n  demo:\n    EU: -0.2\n",
        );

        let snapshot = load_dir(dir.path()).unwrap();
        assert_eq!(snapshot.runtime().env, "demo");
        assert_eq!(snapshot.runtime().karma_threshold_for("EU"), -0.2);
        assert_eq!(snapshot.policy().restricted_region, "RESTRICTED");
    }

    #[test]
    fn missing_document_is_a_fault() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), POLICY_FILE, "dependency_score_threshold: 0.7\n");

        let err = load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(p) if p.ends_with(RUNTIME_FILE)));
    }

    #[test]
    fn malformed_yaml_is_a_fault() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), POLICY_FILE, "dependency_score_threshold: 0.7\n");
        write(dir.path(), RUNTIME_FILE, "kill_switch: [not, a, bool\n");

        assert!(matches!(
            load_dir(dir.path()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
