use std::collections::HashMap;

use crate::models::StationStats;

/// Fully merged result: every distinct station with its aggregated
/// statistics, ordered by name for deterministic reporting.
///
/// Names are owned copies promoted out of the mapped byte region, so the
/// summary is free of any lifetime tie to the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsolidatedSummary {
    entries: Vec<(String, StationStats)>,
}

impl ConsolidatedSummary {
    pub(crate) fn from_map(stations: HashMap<String, StationStats>) -> Self {
        let mut entries: Vec<_> = stations
            .into_iter()
            .filter(|(_, stats)| !stats.is_empty())
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&StationStats> {
        self.entries
            .binary_search_by(|(entry_name, _)| entry_name.as_str().cmp(name))
            .ok()
            .map(|index| &self.entries[index].1)
    }

    /// Stations in ascending byte-wise name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StationStats)> {
        self.entries
            .iter()
            .map(|(name, stats)| (name.as_str(), stats))
    }

    pub fn station_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
