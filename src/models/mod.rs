pub mod consolidated;
pub mod stats;
pub mod temperature;

pub use consolidated::ConsolidatedSummary;
pub use stats::StationStats;
pub use temperature::{format_tenths, parse_tenths};
