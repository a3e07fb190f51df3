//! Aggregation pipeline — concurrent per-file ingestion with a single folding
//! consumer.
//!
//! ```text
//! file 1 ─► ingest ─┐
//! file 2 ─► ingest ─┼─► mpsc (bounded) ─► fold under filter ─► FrequencyMap
//! file N ─► ingest ─┘
//! ```
//!
//! Producers only ever send whole batches; the map is touched by the
//! consumer alone. The intake closes when the last producer drops its
//! sender. The first failure cancels the sibling ingestors and is returned.

use crate::error::IngestError;
use crate::file::{FileIngestor, DEFAULT_AVG_LINE_LEN};
use apache_log_core::config::IngestConfig;
use apache_log_core::{FrequencyMap, LogEntry};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

/// All entries parsed from one file.
#[derive(Debug)]
struct Batch {
    path: PathBuf,
    entries: Vec<LogEntry>,
}

/// Count request URIs across `paths`, keeping only entries accepted by
/// `filter`. Uses default ingest settings.
pub async fn aggregate<I, P, F>(paths: I, filter: F) -> Result<FrequencyMap, IngestError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
    F: Fn(&LogEntry) -> bool,
{
    Aggregator::default().run(paths, filter).await
}

/// Runs the ingest → fan-in → fold pipeline.
#[derive(Debug, Clone)]
pub struct Aggregator {
    avg_line_len: u64,
    channel_capacity: usize,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self {
            avg_line_len: DEFAULT_AVG_LINE_LEN,
            channel_capacity: 1,
        }
    }
}

impl Aggregator {
    pub fn new(config: &IngestConfig) -> Self {
        Self {
            avg_line_len: config.avg_line_len,
            channel_capacity: config.channel_capacity.max(1),
        }
    }

    /// Must be called from within a tokio runtime.
    pub async fn run<I, P, F>(&self, paths: I, filter: F) -> Result<FrequencyMap, IngestError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
        F: Fn(&LogEntry) -> bool,
    {
        let (tx, mut rx) = mpsc::channel::<Result<Batch, IngestError>>(self.channel_capacity);
        let cancel = CancellationToken::new();
        let mut tasks = JoinSet::new();

        for path in paths {
            let ingestor = FileIngestor::new(path)
                .avg_line_len(self.avg_line_len)
                .cancel_on(cancel.clone());
            let tx = tx.clone();
            let cancel = cancel.clone();

            tasks.spawn_blocking(move || {
                let result = ingestor.ingest();
                if let Err(err) = &result {
                    if !err.is_cancelled() {
                        tracing::warn!(path = %ingestor.path().display(), error = %err, "ingestion failed, cancelling siblings");
                        cancel.cancel();
                    }
                }
                let batch = result.map(|entries| Batch {
                    path: ingestor.path().to_path_buf(),
                    entries,
                });
                // Only fails once the consumer has already returned.
                let _ = tx.blocking_send(batch);
            });
        }
        drop(tx);

        let mut counts = FrequencyMap::new();
        while let Some(message) = rx.recv().await {
            match message {
                Ok(batch) => fold(&mut counts, batch, &filter),
                Err(err) if err.is_cancelled() => continue,
                Err(err) => {
                    cancel.cancel();
                    return Err(err);
                }
            }
        }

        while let Some(joined) = tasks.join_next().await {
            joined?;
        }

        Ok(counts)
    }
}

fn fold<F>(counts: &mut FrequencyMap, batch: Batch, filter: &F)
where
    F: Fn(&LogEntry) -> bool,
{
    let total = batch.entries.len();
    let mut matched = 0usize;
    for entry in batch.entries {
        if filter(&entry) {
            *counts.entry(entry.request.uri).or_default() += 1;
            matched += 1;
        }
    }
    tracing::debug!(path = %batch.path.display(), total, matched, "folded batch");
}
