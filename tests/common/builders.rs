//! Test builders — render log lines and the entries they should parse into.
//!
//! Designed for readability in test assertions, not for production use.

use apache_log::{LogEntry, Request};

// ---------------------------------------------------------------------------
// LineBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for combined-format lines.
///
/// `line()` renders the raw text, `entry()` returns what the parser must
/// produce for it. Empty identity fields are rendered as `-`.
///
/// ```rust
/// let b = LineBuilder::new().uri("/missing").status(404);
/// assert_eq!(parse_line(b.line().as_bytes()).unwrap(), b.entry());
/// ```
#[derive(Debug, Clone)]
pub struct LineBuilder {
    entry: LogEntry,
}

impl Default for LineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuilder {
    pub fn new() -> Self {
        Self {
            entry: LogEntry {
                remote_hostname: "203.0.113.7".to_string(),
                remote_logname: String::new(),
                remote_user: String::new(),
                time: "16/Dec/2018:06:25:09 +0000".to_string(),
                request: Request {
                    method: "GET".to_string(),
                    uri: "/".to_string(),
                    version: "HTTP/1.1".to_string(),
                },
                status_code: 200,
                bytes_sent: 512,
                referer: "-".to_string(),
                user_agent: "Mozilla/5.0".to_string(),
            },
        }
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.entry.remote_hostname = host.into();
        self
    }

    pub fn logname(mut self, logname: impl Into<String>) -> Self {
        self.entry.remote_logname = logname.into();
        self
    }

    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.entry.remote_user = user.into();
        self
    }

    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.entry.time = time.into();
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.entry.request.method = method.into();
        self
    }

    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.entry.request.uri = uri.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.entry.request.version = version.into();
        self
    }

    /// Log `"-"` in place of a request line.
    pub fn no_request(mut self) -> Self {
        self.entry.request = Request::default();
        self
    }

    pub fn status(mut self, status: u16) -> Self {
        self.entry.status_code = status;
        self
    }

    pub fn bytes(mut self, bytes: u64) -> Self {
        self.entry.bytes_sent = bytes;
        self
    }

    pub fn referer(mut self, referer: impl Into<String>) -> Self {
        self.entry.referer = referer.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.entry.user_agent = user_agent.into();
        self
    }

    pub fn line(&self) -> String {
        let e = &self.entry;
        let request = if e.request.is_empty() {
            "-".to_string()
        } else {
            format!("{} {} {}", e.request.method, e.request.uri, e.request.version)
        };
        format!(
            r#"{} {} {} [{}] "{}" {} {} "{}" "{}""#,
            nil(&e.remote_hostname),
            nil(&e.remote_logname),
            nil(&e.remote_user),
            e.time,
            request,
            e.status_code,
            e.bytes_sent,
            e.referer,
            e.user_agent,
        )
    }

    pub fn entry(&self) -> LogEntry {
        self.entry.clone()
    }
}

fn nil(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A GET line for `uri` answered with `status`.
pub fn hit(uri: &str, status: u16) -> String {
    LineBuilder::new().uri(uri).status(status).line()
}

/// A 404 line for `uri`.
pub fn not_found(uri: &str) -> String {
    hit(uri, 404)
}
