//! Request-line parsing (`"%r"`).

use crate::error::ParseError;
use crate::extract::NIL_ITEM;
use crate::types::Request;

impl Request {
    /// Parse an unwrapped request line.
    ///
    /// `-` yields an empty request. Anything else must be exactly
    /// `METHOD URI VERSION` separated by whitespace.
    pub fn digest(input: &[u8]) -> Result<Self, ParseError> {
        if input == NIL_ITEM {
            return Ok(Request::default());
        }

        let line = String::from_utf8_lossy(input);
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(method), Some(uri), Some(version), None) => Ok(Request {
                method: method.to_string(),
                uri: uri.to_string(),
                version: version.to_string(),
            }),
            _ => Err(ParseError::MalformedRequest {
                raw: line.into_owned(),
            }),
        }
    }
}
