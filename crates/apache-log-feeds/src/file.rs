//! File ingestor — reads one access log into an ordered `Vec<LogEntry>`.
//!
//! Ingestion is all-or-nothing: the first line that fails to parse aborts
//! the file and the entries read so far are dropped. The file handle is
//! scoped to [`FileIngestor::ingest`] and closed on every exit path.

use crate::error::IngestError;
use apache_log_core::{parse_line, LogEntry};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;

/// Expected bytes per log line, used to size the entry buffer up front.
pub const DEFAULT_AVG_LINE_LEN: u64 = 256;

/// Parse every line of `path` with default settings.
pub fn ingest_file(path: impl AsRef<Path>) -> Result<Vec<LogEntry>, IngestError> {
    FileIngestor::new(path).ingest()
}

/// Reads and parses a single log file.
#[derive(Debug, Clone)]
pub struct FileIngestor {
    path: PathBuf,
    avg_line_len: u64,
    cancel: Option<CancellationToken>,
}

impl FileIngestor {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            avg_line_len: DEFAULT_AVG_LINE_LEN,
            cancel: None,
        }
    }

    /// Capacity hint divisor. Zero falls back to the default.
    pub fn avg_line_len(mut self, avg_line_len: u64) -> Self {
        self.avg_line_len = if avg_line_len == 0 {
            DEFAULT_AVG_LINE_LEN
        } else {
            avg_line_len
        };
        self
    }

    /// Stop between lines once `token` is cancelled.
    pub fn cancel_on(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file to the end, parsing each non-blank line.
    pub fn ingest(&self) -> Result<Vec<LogEntry>, IngestError> {
        let file = File::open(&self.path).map_err(|source| IngestError::Open {
            path: self.path.clone(),
            source,
        })?;
        let size = file
            .metadata()
            .map_err(|source| IngestError::Stat {
                path: self.path.clone(),
                source,
            })?
            .len();

        let capacity = usize::try_from(size / self.avg_line_len).unwrap_or(0);
        let mut entries = Vec::with_capacity(capacity);
        let mut reader = BufReader::new(file);
        let mut buf = Vec::with_capacity(self.avg_line_len as usize);
        let mut line_no = 0usize;

        tracing::debug!(path = %self.path.display(), size, capacity, "ingesting file");

        loop {
            if self.cancel.as_ref().is_some_and(|c| c.is_cancelled()) {
                tracing::debug!(path = %self.path.display(), line = line_no, "ingestion cancelled");
                return Err(IngestError::Cancelled {
                    path: self.path.clone(),
                });
            }

            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| IngestError::Read {
                    path: self.path.clone(),
                    source,
                })?;
            if read == 0 {
                break;
            }
            line_no += 1;

            let line = trim_line_ending(&buf);
            if line.is_empty() {
                tracing::trace!(path = %self.path.display(), line = line_no, "skipping blank line");
                continue;
            }

            let entry = parse_line(line).map_err(|source| IngestError::Parse {
                path: self.path.clone(),
                line: line_no,
                source,
            })?;
            entries.push(entry);
        }

        tracing::debug!(path = %self.path.display(), entries = entries.len(), "ingested file");
        Ok(entries)
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
