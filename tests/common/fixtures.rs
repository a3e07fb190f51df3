//! Static log corpora and on-disk fixture helpers used across harnesses.

use std::io::Write;
use std::path::{Path, PathBuf};

/// Real-world shaped lines that must all parse.
pub const CORPUS_VALID: &[&str] = &[
    r#"73.92.251.192 - - [16/Dec/2018:06:25:09 +0000] "GET /learn/at-what-age-should-i-start-making-401k-withdrawals/ HTTP/1.1" 200 14687 "https://www.google.com/" "Mozilla/5.0 (iPhone; CPU iPhone OS 12_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/12.0 Mobile/15E148 Safari/604.1""#,
    r#"66.249.66.1 - - [16/Dec/2018:06:25:11 +0000] "GET /robots.txt HTTP/1.1" 404 452 "-" "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)""#,
    r#"127.0.0.1 - frank [10/Oct/2000:13:55:36 -0700] "GET /apache_pb.gif HTTP/1.0" 200 2326 "http://www.example.com/start.html" "Mozilla/4.08 [en] (Win98; I ;Nav)""#,
    r#"10.1.1.1 ident alice [01/Jan/2020:00:00:00 +0100] "POST /api/v1/orders HTTP/2.0" 201 38 "" "curl/8.4.0""#,
    r#"192.0.2.44 - - [16/Dec/2018:06:26:00 +0000] "-" 408 0 "-" "-""#,
    r#"- - - [16/Dec/2018:06:26:01 +0000] "HEAD / HTTP/1.1" 301 0 "-" "check_http/v2.3.3""#,
];

/// Lines that must fail, paired with the field the failure is attributed to.
pub const CORPUS_MALFORMED: &[(&str, &str)] = &[
    ("", "remote hostname"),
    ("192.0.2.1", "remote logname"),
    (r#"192.0.2.1 - - 16/Dec/2018:06:25:09 "GET / HTTP/1.1" 200 1 "-" "ua""#, "timestamp"),
    (r#"192.0.2.1 - - [16/Dec/2018:06:25:09 +0000 "GET / HTTP/1.1" 200 1 "-" "ua""#, "timestamp"),
    (r#"192.0.2.1 - - [16/Dec/2018:06:25:09 +0000] GET / HTTP/1.1 200 1 "-" "ua""#, "request"),
    (r#"192.0.2.1 - - [16/Dec/2018:06:25:09 +0000] "GET /" 200 1 "-" "ua""#, "request"),
    (r#"192.0.2.1 - - [16/Dec/2018:06:25:09 +0000] "GET / HTTP/1.1" OK 1 "-" "ua""#, "status"),
    (r#"192.0.2.1 - - [16/Dec/2018:06:25:09 +0000] "GET / HTTP/1.1" 200 - "-" "ua""#, "bytes sent"),
    (r#"192.0.2.1 - - [16/Dec/2018:06:25:09 +0000] "GET / HTTP/1.1" 200 1 - "ua""#, "referer"),
    (r#"192.0.2.1 - - [16/Dec/2018:06:25:09 +0000] "GET / HTTP/1.1" 200 1 "-""#, "user agent"),
];

// ---------------------------------------------------------------------------
// Fixture file helpers
// ---------------------------------------------------------------------------

/// Write `lines` to `dir/name`, one per line, and return the path.
pub fn write_log<S: AsRef<str>>(dir: &Path, name: &str, lines: &[S]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("create fixture log");
    for line in lines {
        writeln!(file, "{}", line.as_ref()).expect("write fixture line");
    }
    path
}

/// Spread `lines` round-robin over `files` logs in `dir`.
pub fn write_spread<S: AsRef<str>>(dir: &Path, files: usize, lines: &[S]) -> Vec<PathBuf> {
    let mut buckets: Vec<Vec<&str>> = vec![Vec::new(); files];
    for (i, line) in lines.iter().enumerate() {
        buckets[i % files].push(line.as_ref());
    }
    buckets
        .iter()
        .enumerate()
        .map(|(i, bucket)| write_log(dir, &format!("access-{i}.log"), bucket))
        .collect()
}
