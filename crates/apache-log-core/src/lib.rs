//! apache-log-core — parsing and ranking core for apache-log.
//!
//! This crate turns raw Apache "combined" access-log lines into structured
//! [`LogEntry`] values and ranks the frequency maps the feeds crate builds
//! from them.
//!
//! # Architecture
//!
//! ```text
//! extract ──► request ──► parser ──► (feeds: ingest ──► aggregate) ──► rank
//! ```
//!
//! Everything here is synchronous and free of shared state; concurrency lives
//! in `apache-log-feeds`.

pub mod config;
pub mod error;
pub mod extract;
pub mod filter;
pub mod parser;
pub mod rank;
pub mod request;
pub mod types;

pub use error::ParseError;
pub use filter::EntryFilter;
pub use parser::parse_line;
pub use rank::rank;
pub use types::{FrequencyMap, LogEntry, RankedPair, Request};
