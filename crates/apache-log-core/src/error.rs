//! Error types for line parsing.
//!
//! Every failure carries enough context (field name, offending bytes, the
//! lower-level cause) to diagnose a bad line without parsing it again.

use std::num::ParseIntError;
use thiserror::Error;

/// Why a parse of one log line failed.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A bracketed or quoted sub-field was not shaped as expected.
    #[error("malformed wrapped field: {0}")]
    MalformedWrapped(WrapError),

    /// A structural failure, annotated with the field being parsed and the
    /// remaining input at that point.
    #[error("failed to parse {field} from {raw:?}")]
    Field {
        field: &'static str,
        raw: String,
        #[source]
        source: Box<ParseError>,
    },

    /// A numeric field did not hold a base-10 integer.
    #[error("failed to convert {field} {value:?} to integer")]
    Conversion {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// The unwrapped request was neither `-` nor `METHOD URI VERSION`.
    #[error("failed parsing original request: {raw:?}")]
    MalformedRequest { raw: String },

    /// The line ended before every field was consumed.
    #[error("line ended before the {field} field")]
    TooFewFields { field: &'static str },
}

impl ParseError {
    /// Name of the field this error is attributed to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ParseError::Field { field, .. }
            | ParseError::Conversion { field, .. }
            | ParseError::TooFewFields { field } => Some(*field),
            ParseError::MalformedRequest { .. } => Some("request"),
            ParseError::MalformedWrapped(_) => None,
        }
    }
}

/// Shape errors reported by [`extract_wrapped_until`](crate::extract::extract_wrapped_until).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WrapError {
    #[error("invalid start character {found:?}: expecting starting character {expected:?}")]
    UnexpectedStart { expected: char, found: Option<char> },

    #[error("could not find end of sequence: expecting terminating character {0:?}")]
    Unterminated(char),

    #[error("end of sequence not followed by delimiter {0:?}")]
    MissingDelimiter(char),
}

impl From<WrapError> for ParseError {
    fn from(err: WrapError) -> Self {
        ParseError::MalformedWrapped(err)
    }
}
