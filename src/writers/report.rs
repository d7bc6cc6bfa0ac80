use std::fmt::Write as _;
use std::io;

use crate::error::Result;
use crate::models::ConsolidatedSummary;

/// Renders the final report: one `name=min/mean/max` line per station in
/// ascending name order, one decimal place each, no trailing summary.
pub struct ReportWriter;

impl ReportWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, summary: &ConsolidatedSummary) -> String {
        let mut out = String::with_capacity(summary.len() * 32);
        for (name, stats) in summary.iter() {
            let _ = writeln!(out, "{name}={stats}");
        }
        out
    }

    pub fn write_to<W: io::Write>(&self, summary: &ConsolidatedSummary, mut out: W) -> Result<()> {
        out.write_all(self.render(summary).as_bytes())?;
        Ok(())
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}
