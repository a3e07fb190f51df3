//! apache-log — Apache Log Utils
//!
//! Reads Apache "combined" access logs, counts request URIs that pass a
//! status/prefix filter, and prints them ranked by frequency. The heavy
//! lifting lives in the two workspace crates; this crate wires them to the
//! command line.
//!
//! # Architecture
//!
//! ```text
//! files ──► ingest (one task per file) ──► fold ──► rank ──► render
//!           apache-log-feeds                       apache-log-core
//! ```

pub mod report;
pub mod timing;

pub use apache_log_core::config::{self, Config};
pub use apache_log_core::{
    parse_line, rank, EntryFilter, FrequencyMap, LogEntry, ParseError, RankedPair, Request,
};
pub use apache_log_feeds::{aggregate, ingest_file, Aggregator, IngestError};

use std::path::Path;
use timing::Performance;

/// Ingest `paths` under `config` and return the ranked report rows.
///
/// Fills in the parsing and sorting phases of `perf`.
pub async fn build_report<P: AsRef<Path>>(
    paths: &[P],
    config: &Config,
    perf: &mut Performance,
) -> anyhow::Result<Vec<RankedPair>> {
    let filter = config.filter.to_filter();
    tracing::info!(files = paths.len(), ?filter, "aggregating");

    perf.parsing.start();
    let counts = Aggregator::new(&config.ingest)
        .run(paths, |entry| filter.matches(entry))
        .await?;
    perf.parsing.stop();

    perf.sorting.start();
    let pairs = rank(&counts, config.rank.min, config.rank.max);
    perf.sorting.stop();

    tracing::info!(distinct = counts.len(), ranked = pairs.len(), "ranked");
    Ok(pairs)
}
