//! Line parser — a single-pass state machine over one combined-format line.
//!
//! ```text
//! %h %l %u %t "%r" %>s %O "%{Referer}i" "%{User-Agent}i"
//! ```
//!
//! Each [`State`] consumes exactly one field and hands the rest of the line
//! to the next state. The parser never backtracks; the first failing field
//! aborts the whole line.

use crate::error::ParseError;
use crate::extract::{extract_until, extract_wrapped_until, transform_nil_log_item};
use crate::types::{LogEntry, Request};

/// The field the parser is about to consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    RemoteHostname,
    RemoteLogname,
    RemoteUser,
    Time,
    Request,
    StatusCode,
    BytesSent,
    Referer,
    UserAgent,
    Done,
}

impl State {
    fn field(self) -> &'static str {
        match self {
            State::RemoteHostname => "remote hostname",
            State::RemoteLogname => "remote logname",
            State::RemoteUser => "remote user",
            State::Time => "timestamp",
            State::Request => "request",
            State::StatusCode => "status",
            State::BytesSent => "bytes sent",
            State::Referer => "referer",
            State::UserAgent => "user agent",
            State::Done => "end of line",
        }
    }

    fn next(self) -> State {
        match self {
            State::RemoteHostname => State::RemoteLogname,
            State::RemoteLogname => State::RemoteUser,
            State::RemoteUser => State::Time,
            State::Time => State::Request,
            State::Request => State::StatusCode,
            State::StatusCode => State::BytesSent,
            State::BytesSent => State::Referer,
            State::Referer => State::UserAgent,
            State::UserAgent | State::Done => State::Done,
        }
    }

    /// Consume this state's field from `input` into `entry`, returning the
    /// number of bytes consumed.
    fn step(self, input: &[u8], entry: &mut LogEntry) -> Result<usize, ParseError> {
        match self {
            State::RemoteHostname => {
                let (next, token) = extract_until(input, b' ');
                entry.remote_hostname = lossy(transform_nil_log_item(token));
                Ok(next)
            }
            State::RemoteLogname => {
                let (next, token) = extract_until(input, b' ');
                entry.remote_logname = lossy(transform_nil_log_item(token));
                Ok(next)
            }
            State::RemoteUser => {
                let (next, token) = extract_until(input, b' ');
                entry.remote_user = lossy(transform_nil_log_item(token));
                Ok(next)
            }
            State::Time => {
                let (next, token) = wrapped(self, input, b'[', b']')?;
                entry.time = lossy(token);
                Ok(next)
            }
            State::Request => {
                let (next, token) = wrapped(self, input, b'"', b'"')?;
                entry.request = Request::digest(token)?;
                Ok(next)
            }
            State::StatusCode => {
                let (next, token) = extract_until(input, b' ');
                entry.status_code = integer(self, token)?;
                Ok(next)
            }
            State::BytesSent => {
                let (next, token) = extract_until(input, b' ');
                entry.bytes_sent = integer(self, token)?;
                Ok(next)
            }
            State::Referer => {
                let (next, token) = wrapped(self, input, b'"', b'"')?;
                entry.referer = lossy(token);
                Ok(next)
            }
            State::UserAgent => {
                entry.user_agent = String::from_utf8_lossy(input).trim_matches('"').to_string();
                Ok(input.len())
            }
            State::Done => Ok(0),
        }
    }
}

/// Parse one log line (without its line terminator) into a [`LogEntry`].
///
/// All nine fields are required; a line that runs out before the user agent
/// fails with [`ParseError::TooFewFields`].
pub fn parse_line(line: &[u8]) -> Result<LogEntry, ParseError> {
    let mut entry = LogEntry::default();
    let mut input = line;
    let mut state = State::RemoteHostname;

    while state != State::Done {
        if input.is_empty() {
            return Err(ParseError::TooFewFields {
                field: state.field(),
            });
        }
        let consumed = state.step(input, &mut entry)?;
        input = &input[consumed..];
        state = state.next();
    }

    Ok(entry)
}

impl std::str::FromStr for LogEntry {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s.as_bytes())
    }
}

fn wrapped(state: State, input: &[u8], left: u8, right: u8) -> Result<(usize, &[u8]), ParseError> {
    extract_wrapped_until(input, left, right, b' ').map_err(|err| ParseError::Field {
        field: state.field(),
        raw: String::from_utf8_lossy(input).into_owned(),
        source: Box::new(err.into()),
    })
}

fn integer<T>(state: State, token: &[u8]) -> Result<T, ParseError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    let value = String::from_utf8_lossy(token);
    value.parse().map_err(|source| ParseError::Conversion {
        field: state.field(),
        value: value.into_owned(),
        source,
    })
}

fn lossy(token: &[u8]) -> String {
    String::from_utf8_lossy(token).into_owned()
}
