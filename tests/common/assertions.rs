//! Domain-specific assertion macros for apache-log harnesses.
//!
//! These add context-rich failure messages that say which line and which
//! field broke, instead of a bare `unwrap` panic.

/// Assert that parsing `line` fails and blames `field`.
///
/// ```rust
/// assert_parse_fails_on!(r#"h - - [t] "GET / HTTP/1.1" abc 1 "-" "ua""#, "status");
/// ```
#[macro_export]
macro_rules! assert_parse_fails_on {
    ($line:expr, $field:expr) => {{
        let line: &str = $line;
        let expected: &str = $field;
        match apache_log::parse_line(line.as_bytes()) {
            Ok(entry) => panic!(
                "assert_parse_fails_on! failed: line parsed.\n  line:  {:?}\n  entry: {:?}",
                line, entry
            ),
            Err(err) if err.field() == Some(expected) => {}
            Err(err) => panic!(
                "assert_parse_fails_on! failed:\n  line:     {:?}\n  expected: {:?}\n  actual:   {:?} ({})",
                line,
                expected,
                err.field(),
                err
            ),
        }
    }};
}

/// Assert that `counts` holds exactly the listed `key => count` pairs.
///
/// ```rust
/// assert_counts!(counts, { "/missing" => 3, "/gone" => 1 });
/// ```
#[macro_export]
macro_rules! assert_counts {
    ($counts:expr, { $($key:expr => $count:expr),* $(,)? }) => {{
        let counts: &apache_log::FrequencyMap = &$counts;
        let expected: apache_log::FrequencyMap =
            [$(($key.to_string(), $count as u64)),*].into_iter().collect();
        pretty_assertions::assert_eq!(*counts, expected, "frequency map mismatch");
    }};
}
