//! apache-log-feeds — file ingestion and aggregation for apache-log.
//!
//! [`file::FileIngestor`] reads one access log into parsed entries.
//! [`aggregate::Aggregator`] runs one ingestor per file concurrently and
//! folds their batches, over a bounded channel, into a single
//! [`FrequencyMap`](apache_log_core::FrequencyMap) owned by the consumer.

pub mod aggregate;
pub mod error;
pub mod file;

pub use aggregate::{aggregate, Aggregator};
pub use error::IngestError;
pub use file::{ingest_file, FileIngestor};
