use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::{Mutex, RwLock};
use thiserror::Error;
use tracing::debug;

use super::record::AuditRecord;

/// Errors from an audit sink.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("audit I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("audit serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("corrupt audit record at line {line}: {source}")]
    Corrupt {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Append-only storage for audit records.
pub trait AuditSink: Send + Sync {
    /// Append one record. Existing records are never rewritten.
    fn append(&self, record: &AuditRecord) -> Result<(), AuditError>;

    /// All records, oldest first.
    fn records(&self) -> Result<Vec<AuditRecord>, AuditError>;

    /// First record with the given trace id.
    fn find(&self, trace_id: &str) -> Result<Option<AuditRecord>, AuditError> {
        Ok(self
            .records()?
            .into_iter()
            .find(|r| r.trace_id == trace_id))
    }
}

/// In-memory sink for tests and embedding.
#[derive(Default)]
pub struct MemoryAuditSink {
    records: RwLock<Vec<AuditRecord>>,
}

impl MemoryAuditSink {
    /// Create an empty memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether no record has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl AuditSink for MemoryAuditSink {
    fn append(&self, record: &AuditRecord) -> Result<(), AuditError> {
        self.records.write().push(record.clone());
        Ok(())
    }

    fn records(&self) -> Result<Vec<AuditRecord>, AuditError> {
        Ok(self.records.read().clone())
    }
}

/// Newline-delimited JSON file sink.
///
/// Every append opens the file in append mode, writes one line and flushes.
/// Appends and reads through one sink are serialised, so lines never
/// interleave and a read never sees a half-written line from this sink.
/// An unterminated trailing line that does not parse is taken to be an
/// append still in flight from another writer and is skipped.
pub struct JsonlAuditSink {
    path: PathBuf,
    file_lock: Mutex<()>,
}

impl JsonlAuditSink {
    /// Sink at `path`, creating parent directories if needed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AuditError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self {
            path,
            file_lock: Mutex::new(()),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AuditSink for JsonlAuditSink {
    fn append(&self, record: &AuditRecord) -> Result<(), AuditError> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let _guard = self.file_lock.lock();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    fn records(&self) -> Result<Vec<AuditRecord>, AuditError> {
        let _guard = self.file_lock.lock();
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        let mut records = Vec::new();

        for (index, line) in raw.split_inclusive('\n').enumerate() {
            let terminated = line.ends_with('\n');
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str(line) {
                Ok(record) => records.push(record),
                Err(_) if !terminated => {
                    debug!(
                        path = %self.path.display(),
                        line = index + 1,
                        "Skipping unterminated trailing audit line"
                    );
                }
                Err(source) => {
                    return Err(AuditError::Corrupt {
                        line: index + 1,
                        source,
                    })
                }
            }
        }

        Ok(records)
    }
}
