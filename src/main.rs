use anyhow::Context;
use apache_log::report::{self, ReportFormat};
use apache_log::timing::Performance;
use apache_log::Config;
use clap::Parser;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "apache-log",
    version,
    about = "Apache Log Utils — rank request URIs in combined-format access logs"
)]
struct Cli {
    /// Access log files to read.
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Verbose log output, including phase timings.
    #[arg(short, long)]
    verbose: bool,

    /// Only count entries with this status code.
    #[arg(long, value_name = "CODE", conflicts_with = "any_status")]
    status: Option<u16>,

    /// Count entries regardless of status code.
    #[arg(long)]
    any_status: bool,

    /// Minimum occurrences for a URI to be reported (inclusive).
    #[arg(long, value_name = "N")]
    min: Option<u64>,

    /// Maximum occurrences for a URI to be reported (inclusive, 0 = unbounded).
    #[arg(long, value_name = "N")]
    max: Option<u64>,

    /// Skip URIs starting with this prefix. Repeatable.
    #[arg(short = 'x', long = "exclude", value_name = "PREFIX")]
    exclude: Vec<String>,

    /// Report layout.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Extra config file, layered over ~/.config/apache-log/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Append debug logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,
}

impl Cli {
    fn apply(&self, config: &mut Config) -> anyhow::Result<()> {
        if let Some(status) = self.status {
            config.filter.status = status;
        }
        if self.any_status {
            config.filter.status = 0;
        }
        if let Some(min) = self.min {
            config.rank.min = min;
        }
        if let Some(max) = self.max {
            config.rank.max = max;
        }
        config.filter.exclude_prefixes.extend(self.exclude.iter().cloned());
        config.validate()
    }
}

fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    let default_level = match (&cli.debug_log, cli.verbose) {
        (Some(_), _) => "debug",
        (None, true) => "info",
        (None, false) => "warn",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    match &cli.debug_log {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("could not open debug log {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_env_filter(filter)
                .init();
            tracing::info!(path = %path.display(), "apache-log debug log started");
        }
        None => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_env_filter(filter)
                .init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut perf = Performance::default();
    perf.execution.start();

    let cli = Cli::parse();
    init_tracing(&cli)?;

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config)?;

    let pairs = apache_log::build_report(&cli.files, &config, &mut perf).await?;
    report::render(&pairs, cli.format, &mut std::io::stdout().lock())?;

    perf.execution.stop();
    if cli.verbose {
        std::io::stderr().write_all(perf.summary().as_bytes())?;
    }
    Ok(())
}
