//! Core types for apache-log-core.
//!
//! This module defines the data structures shared across the pipeline: the
//! parsed [`LogEntry`] and its embedded [`Request`], the [`FrequencyMap`] the
//! aggregator folds entries into, and the [`RankedPair`] rows of a report.

use serde::Serialize;
use std::collections::HashMap;

/// Layout of the timestamp Apache writes for `%t`, e.g. `16/Dec/2018:06:25:09 +0000`.
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// One parsed line of a combined-format access log.
///
/// Format: `%h %l %u %t "%r" %>s %O "%{Referer}i" "%{User-Agent}i"`.
///
/// Identity fields use the empty string where the log carried the `-`
/// placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// `%h` — remote hostname or address.
    pub remote_hostname: String,
    /// `%l` — remote logname (identd), almost always absent.
    pub remote_logname: String,
    /// `%u` — authenticated remote user.
    pub remote_user: String,
    /// `%t` — request time, kept exactly as logged without the brackets.
    pub time: String,
    /// `"%r"` — the request line.
    pub request: Request,
    /// `%>s` — final status code.
    pub status_code: u16,
    /// `%O` — bytes sent, including headers.
    pub bytes_sent: u64,
    /// `"%{Referer}i"` — kept verbatim, a literal `-` included.
    pub referer: String,
    /// `"%{User-Agent}i"` — the remainder of the line with quotes trimmed.
    pub user_agent: String,
}

impl LogEntry {
    /// Interpret [`LogEntry::time`] as a zoned timestamp.
    ///
    /// Returns `None` when the field does not follow [`TIMESTAMP_FORMAT`];
    /// parsing never depends on this succeeding.
    pub fn parsed_time(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
        chrono::DateTime::parse_from_str(&self.time, TIMESTAMP_FORMAT).ok()
    }
}

/// The request line embedded in a log entry.
///
/// All three parts are empty when the log recorded `"-"` instead of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Request {
    pub method: String,
    pub uri: String,
    pub version: String,
}

impl Request {
    /// True when no request line was recorded.
    pub fn is_empty(&self) -> bool {
        self.method.is_empty() && self.uri.is_empty() && self.version.is_empty()
    }
}

/// Occurrence counts keyed by request URI.
pub type FrequencyMap = HashMap<String, u64>;

/// A `(key, count)` row of a ranked report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedPair {
    pub key: String,
    pub count: u64,
}

impl RankedPair {
    pub fn new(key: impl Into<String>, count: u64) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

impl std::fmt::Display for RankedPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.count, self.key)
    }
}
