//! Configuration types for apache-log.
//!
//! [`Config::load`] layers the built-in defaults, then
//! `~/.config/apache-log/config.toml` if it exists, then an optional explicit
//! file. [`Config::defaults`] returns the built-ins without touching the
//! filesystem (useful in tests). Command-line flags are applied on top by the
//! binary.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[filter]
status           = 404
exclude_prefixes = []

[rank]
min = 10
max = 0

[ingest]
avg_line_len     = 256
channel_capacity = 1
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub rank: RankConfig,
    #[serde(default)]
    pub ingest: IngestConfig,
}

/// `[filter]` section. A `status` of 0 counts every status code.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    #[serde(default = "default_status")]
    pub status: u16,
    #[serde(default)]
    pub exclude_prefixes: Vec<String>,
}

fn default_status() -> u16 { 404 }

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            status: default_status(),
            exclude_prefixes: Vec::new(),
        }
    }
}

impl FilterConfig {
    pub fn to_filter(&self) -> crate::EntryFilter {
        crate::EntryFilter {
            status: (self.status != 0).then_some(self.status),
            exclude_prefixes: self.exclude_prefixes.clone(),
        }
    }
}

/// `[rank]` section. Bounds are inclusive; `max = 0` means unbounded.
#[derive(Debug, Clone, Deserialize)]
pub struct RankConfig {
    #[serde(default = "default_min")]
    pub min: u64,
    #[serde(default)]
    pub max: u64,
}

fn default_min() -> u64 { 10 }

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: 0,
        }
    }
}

/// `[ingest]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct IngestConfig {
    /// Expected bytes per line, used to pre-size per-file entry buffers.
    #[serde(default = "default_avg_line_len")]
    pub avg_line_len: u64,
    /// Depth of the queue between ingestion tasks and the aggregator.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

fn default_avg_line_len() -> u64 { 256 }
fn default_channel_capacity() -> usize { 1 }

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            avg_line_len: default_avg_line_len(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the built-in defaults, the user config file if present, and then
    /// `explicit`, which must exist when given.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(config_path().as_path()).required(false));
        if let Some(path) = explicit {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let cfg: Config = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .with_context(|| match explicit {
                Some(path) => format!("could not load config {}", path.display()),
                None => "could not load config".to_string(),
            })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Reject settings the pipeline cannot run with.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.ingest.avg_line_len == 0 {
            bail!("ingest.avg_line_len must be greater than 0");
        }
        if self.ingest.channel_capacity == 0 {
            bail!("ingest.channel_capacity must be greater than 0");
        }
        if self.rank.max != 0 && self.rank.max < self.rank.min {
            bail!(
                "rank.max ({}) must be 0 or at least rank.min ({})",
                self.rank.max,
                self.rank.min
            );
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("apache-log")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
