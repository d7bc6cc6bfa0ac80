use std::collections::HashMap;
use std::str;

use crate::error::{ProcessingError, Result};
use crate::models::{ConsolidatedSummary, StationStats};
use crate::processors::station_table::StationTable;

/// Fan-in stage: folds per-chunk partial tables into one mapping keyed by
/// owned station name.
///
/// Folding is commutative and associative, so chunk arrival order does not
/// matter. Full string keying is acceptable here: cardinality after
/// aggregation is small and bounded.
pub struct DataMerger {
    stations: HashMap<String, StationStats>,
}

impl DataMerger {
    pub fn new() -> Self {
        Self {
            stations: HashMap::with_capacity(1024),
        }
    }

    /// Fold every occupied bucket of one partial result into the merged
    /// mapping, promoting names to owned strings.
    pub fn fold_partial(&mut self, partial: StationTable<'_>) -> Result<()> {
        for (name, stats) in partial.into_occupied() {
            let name = str::from_utf8(name).map_err(|_| {
                ProcessingError::InvalidFormat(format!(
                    "station name is not valid UTF-8: '{}'",
                    String::from_utf8_lossy(name)
                ))
            })?;
            match self.stations.get_mut(name) {
                Some(existing) => existing.merge(&stats),
                None => {
                    self.stations.insert(name.to_owned(), stats);
                }
            }
        }
        Ok(())
    }

    pub fn finish(self) -> ConsolidatedSummary {
        ConsolidatedSummary::from_map(self.stations)
    }
}

impl Default for DataMerger {
    fn default() -> Self {
        Self::new()
    }
}
