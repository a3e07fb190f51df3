//! Error types for file ingestion and aggregation.

use apache_log_core::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Why ingesting a file, or aggregating a set of files, failed.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("could not open file {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not stat file {path:?}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line failed to parse. `line` is 1-based.
    #[error("failed to parse {path:?} line {line}")]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: ParseError,
    },

    /// Ingestion stopped early because a sibling file failed.
    #[error("ingestion of {path:?} cancelled")]
    Cancelled { path: PathBuf },

    /// An ingestion task panicked or was aborted.
    #[error("ingestion task failed")]
    Task(#[from] tokio::task::JoinError),
}

impl IngestError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, IngestError::Cancelled { .. })
    }
}
