//! Command implementations

use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use enforcement_config::{load_dir, ConfigHandle};
use enforcement_engine::{EnforcementEngine, JsonlAuditSink, Replayer};
use enforcement_gateway::EnforcementGateway;
use tracing::info;

use crate::output::{print_single, OutputFormat};

fn open_engine(audit_log: &Path) -> anyhow::Result<Arc<EnforcementEngine>> {
    let sink = JsonlAuditSink::open(audit_log)
        .with_context(|| format!("opening audit log {}", audit_log.display()))?;
    Ok(Arc::new(EnforcementEngine::new(Arc::new(sink))))
}

/// Run one request file through the gateway.
///
/// A broken config directory is not an error here: the gateway answers
/// with its fail-closed response like it would in production.
pub fn enforce(
    request: &Path,
    config_dir: &Path,
    audit_log: &Path,
    format: OutputFormat,
) -> anyhow::Result<ExitCode> {
    let payload =
        fs::read(request).with_context(|| format!("reading request {}", request.display()))?;

    let config = Arc::new(ConfigHandle::from_dir(config_dir));
    let gateway = EnforcementGateway::new(open_engine(audit_log)?, config);

    let response = gateway.handle_json(&payload);
    print_single(&response, format)?;
    Ok(ExitCode::SUCCESS)
}

/// Replay one audited trace against the current config.
pub fn replay(
    trace_id: &str,
    config_dir: &Path,
    audit_log: &Path,
    format: OutputFormat,
) -> anyhow::Result<ExitCode> {
    let config = load_dir(config_dir)
        .with_context(|| format!("loading config from {}", config_dir.display()))?;
    let replayer = Replayer::new(open_engine(audit_log)?);

    let report = replayer.replay(trace_id, &config)?;
    print_single(&report, format)?;
    Ok(ExitCode::SUCCESS)
}

/// Replay the whole audit log; non-zero exit when any trace diverges.
pub fn replay_all(
    config_dir: &Path,
    audit_log: &Path,
    format: OutputFormat,
) -> anyhow::Result<ExitCode> {
    let config = load_dir(config_dir)
        .with_context(|| format!("loading config from {}", config_dir.display()))?;
    let replayer = Replayer::new(open_engine(audit_log)?);

    let summary = replayer.replay_all(&config)?;
    print_single(&summary, format)?;

    if summary.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Load and validate both documents, then print the snapshot.
pub fn check_config(config_dir: &Path, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let snapshot = load_dir(config_dir)
        .with_context(|| format!("loading config from {}", config_dir.display()))?;
    info!(dir = %config_dir.display(), "Configuration valid");
    print_single(&snapshot, format)?;
    Ok(ExitCode::SUCCESS)
}
