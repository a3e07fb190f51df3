//! Entry filter — decides which parsed entries are counted.

use crate::types::LogEntry;

/// Predicate applied to every entry before it is counted.
///
/// An entry matches when its status equals `status` (if set) and its URI
/// starts with none of `exclude_prefixes`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub status: Option<u16>,
    pub exclude_prefixes: Vec<String>,
}

impl EntryFilter {
    /// A filter that accepts every entry.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn exclude(mut self, prefix: impl Into<String>) -> Self {
        self.exclude_prefixes.push(prefix.into());
        self
    }

    pub fn matches(&self, entry: &LogEntry) -> bool {
        if self.status.is_some_and(|s| s != entry.status_code) {
            return false;
        }
        let uri = entry.request.uri.as_str();
        !self
            .exclude_prefixes
            .iter()
            .any(|prefix| uri.starts_with(prefix.as_str()))
    }
}
