use std::env;
use std::fmt::Write as _;
use std::fs;
use std::time::{Duration, Instant};

use tracing::warn;

use crate::utils::constants::{PROFILE_ENV_VAR, PROFILE_OUTPUT_FILE};

/// Wall-clock phase timings, gated on `PROFILE=1`.
///
/// The report goes to a fixed-name artifact next to the working directory;
/// a failed write is logged and never changes the run's output or exit code.
pub struct RunProfiler {
    enabled: bool,
    run_started: Instant,
    phase_started: Instant,
    phases: Vec<(&'static str, Duration)>,
}

impl RunProfiler {
    pub fn from_env() -> Self {
        let enabled = env::var(PROFILE_ENV_VAR).map(|v| v == "1").unwrap_or(false);
        let now = Instant::now();
        Self {
            enabled,
            run_started: now,
            phase_started: now,
            phases: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Close the current phase under `name` and start timing the next one.
    pub fn mark(&mut self, name: &'static str) {
        if !self.enabled {
            return;
        }
        self.phases.push((name, self.phase_started.elapsed()));
        self.phase_started = Instant::now();
    }

    /// Write the profile artifact, if profiling is enabled.
    pub fn write_report(&self) {
        if !self.enabled {
            return;
        }
        let mut report = String::new();
        for (name, elapsed) in &self.phases {
            let _ = writeln!(report, "{name}: {:.3}ms", elapsed.as_secs_f64() * 1000.0);
        }
        let _ = writeln!(
            report,
            "total: {:.3}ms",
            self.run_started.elapsed().as_secs_f64() * 1000.0
        );
        if let Err(error) = fs::write(PROFILE_OUTPUT_FILE, report) {
            warn!(%error, "could not write profile artifact");
        }
    }
}
