//! Enforcer - operator CLI for the enforcement gateway
//!
//! - Run a request file through the live gateway
//! - Replay audited traces against the current configuration
//! - Validate the configuration documents

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use output::OutputFormat;

/// Enforcer CLI
#[derive(Parser)]
#[command(name = "enforcer")]
#[command(about = "Deterministic content enforcement gateway", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding enforcement.yaml and runtime.yaml
    #[arg(long, env = "ENFORCER_CONFIG_DIR", default_value = "config")]
    config_dir: PathBuf,

    /// Append-only audit log (JSONL)
    #[arg(long, env = "ENFORCER_AUDIT_LOG", default_value = "logs/enforcement_audit.jsonl")]
    audit_log: PathBuf,

    /// Output format (json, yaml)
    #[arg(short, long, default_value = "json")]
    output: OutputFormat,

    /// Log level
    #[arg(long, env = "ENFORCER_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, env = "ENFORCER_LOG_JSON")]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one request through the gateway and print the response
    Enforce {
        /// Request JSON file
        #[arg(short, long)]
        request: PathBuf,
    },

    /// Replay one audited trace
    Replay {
        /// Trace id from the audit log
        trace_id: String,
    },

    /// Replay every audited trace; exits non-zero on any mismatch
    ReplayAll,

    /// Load and validate the configuration documents
    CheckConfig,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries command output only.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    match &cli.command {
        Commands::Enforce { request } => {
            commands::enforce(request, &cli.config_dir, &cli.audit_log, cli.output)
        }
        Commands::Replay { trace_id } => {
            commands::replay(trace_id, &cli.config_dir, &cli.audit_log, cli.output)
        }
        Commands::ReplayAll => commands::replay_all(&cli.config_dir, &cli.audit_log, cli.output),
        Commands::CheckConfig => commands::check_config(&cli.config_dir, cli.output),
    }
}
