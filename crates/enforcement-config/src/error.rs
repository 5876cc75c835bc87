use std::path::PathBuf;

use thiserror::Error;

/// Configuration faults. Every variant is treated as kill-switch-equivalent
/// by the gateway.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing config: {0}")]
    Missing(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: f64 },

    #[error("no configuration loaded")]
    NotLoaded,

    #[error("configuration faulted: {0}")]
    Faulted(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
