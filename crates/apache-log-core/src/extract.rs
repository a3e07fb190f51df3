//! Byte-slice scanning primitives used by the line parser.
//!
//! Each extractor returns the offset of the first unconsumed byte together
//! with the token it found, so callers advance with `&input[offset..]`.

use crate::error::WrapError;

/// Apache's "value not available" marker.
pub const NIL_ITEM: &[u8] = b"-";

/// Extract the bytes before the first `delimiter`.
///
/// Returns the offset just past the delimiter. When the delimiter is absent
/// the whole input is the token and the offset is `input.len()`.
pub fn extract_until(input: &[u8], delimiter: u8) -> (usize, &[u8]) {
    match input.iter().position(|&b| b == delimiter) {
        Some(i) => (i + 1, &input[..i]),
        None => (input.len(), input),
    }
}

/// Extract the bytes enclosed by `left` and `right`, which must be followed
/// by `delimiter` unless `right` is the last byte of the input.
///
/// When `left == right` the search for the closing byte starts after the
/// opening one. The returned offset points past the delimiter, or past
/// `right` at end of input.
pub fn extract_wrapped_until(
    input: &[u8],
    left: u8,
    right: u8,
    delimiter: u8,
) -> Result<(usize, &[u8]), WrapError> {
    match input.first() {
        Some(&b) if b == left => {}
        found => {
            return Err(WrapError::UnexpectedStart {
                expected: left as char,
                found: found.map(|&b| b as char),
            })
        }
    }

    let close = if left == right {
        input[1..]
            .iter()
            .position(|&b| b == right)
            .map(|i| i + 1)
    } else {
        input.iter().position(|&b| b == right)
    }
    .ok_or(WrapError::Unterminated(right as char))?;

    let inner = &input[1..close];
    match input.get(close + 1) {
        None => Ok((close + 1, inner)),
        Some(&b) if b == delimiter => Ok((close + 2, inner)),
        Some(_) => Err(WrapError::MissingDelimiter(delimiter as char)),
    }
}

/// Map the `-` placeholder to an empty token; anything else passes through.
pub fn transform_nil_log_item(token: &[u8]) -> &[u8] {
    if token == NIL_ITEM {
        &[]
    } else {
        token
    }
}
