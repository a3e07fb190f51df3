//! Phase timing for `--verbose` runs.

use std::time::{Duration, Instant};

/// Wall-clock span of one phase. Unstarted or unstopped phases report zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Timing {
    started: Option<Instant>,
    stopped: Option<Instant>,
}

impl Timing {
    pub fn started() -> Self {
        let mut t = Self::default();
        t.start();
        t
    }

    pub fn start(&mut self) {
        self.started = Some(Instant::now());
        self.stopped = None;
    }

    pub fn stop(&mut self) {
        self.stopped = Some(Instant::now());
    }

    pub fn elapsed(&self) -> Duration {
        match (self.started, self.stopped) {
            (Some(start), Some(stop)) => stop.saturating_duration_since(start),
            _ => Duration::ZERO,
        }
    }
}

/// Timings for the phases of one run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Performance {
    pub execution: Timing,
    pub parsing: Timing,
    pub sorting: Timing,
}

impl Performance {
    /// `Parsing`, `Sorting` and `Total` lines in the order they are printed.
    pub fn summary(&self) -> String {
        format!(
            "Parsing: {:?}\nSorting: {:?}\nTotal  : {:?}\n",
            self.parsing.elapsed(),
            self.sorting.elapsed(),
            self.execution.elapsed()
        )
    }
}
