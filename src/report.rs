//! Report rendering — writes ranked pairs to an output stream.

use apache_log_core::RankedPair;
use std::fmt::Write as _;
use std::io::Write;

/// Output layout for the ranked report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// One `<count>: <key>` line per pair.
    #[default]
    Text,
    /// A JSON array of `{"key", "count"}` objects.
    Json,
}

/// Render `pairs` into `out` in a single write.
pub fn render<W: Write>(pairs: &[RankedPair], format: ReportFormat, out: &mut W) -> anyhow::Result<()> {
    let buf = match format {
        ReportFormat::Text => {
            let mut buf = String::with_capacity(pairs.len() * 32);
            for pair in pairs {
                writeln!(buf, "{pair}")?;
            }
            buf
        }
        ReportFormat::Json => {
            let mut buf = serde_json::to_string_pretty(pairs)?;
            buf.push('\n');
            buf
        }
    };
    out.write_all(buf.as_bytes())?;
    out.flush()?;
    Ok(())
}
