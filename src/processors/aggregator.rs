use std::thread;

use crossbeam::channel;
use tracing::debug;

use crate::error::{ProcessingError, Result};
use crate::models::ConsolidatedSummary;
use crate::processors::chunks::split_into_chunks;
use crate::processors::data_merger::DataMerger;
use crate::processors::station_table::StationTable;
use crate::readers::record::parse_record;

/// Aggregate one line-aligned chunk into a dense per-station table.
///
/// Any malformed record aborts the pass; per-line recovery is not supported.
pub fn aggregate_chunk(chunk: &[u8]) -> Result<StationTable<'_>> {
    let mut table = StationTable::new();
    for line in chunk.split(|&byte| byte == b'\n') {
        // the final span after a trailing terminator is empty
        if line.is_empty() {
            continue;
        }
        let (station, tenths) = parse_record(line)?;
        table.record(station, tenths);
    }
    Ok(table)
}

/// Parallel chunked aggregation: one scoped worker per chunk, fan-in over a
/// bounded channel sized to the chunk count.
pub struct ParallelAggregator {
    max_workers: usize,
}

impl ParallelAggregator {
    pub fn new(max_workers: usize) -> Self {
        Self { max_workers }
    }

    /// Run the full split → aggregate → merge pipeline over `data`.
    ///
    /// Workers share only the read-only input and read disjoint spans; each
    /// partial table is owned by its worker until handed to the merge loop,
    /// which performs exactly one blocking receive per chunk.
    pub fn aggregate(&self, data: &[u8]) -> Result<ConsolidatedSummary> {
        let chunks = split_into_chunks(data, self.max_workers);
        debug!(bytes = data.len(), chunks = chunks.len(), "partitioned input");

        let (sender, receiver) = channel::bounded(chunks.len().max(1));
        thread::scope(|scope| {
            for &chunk in &chunks {
                let sender = sender.clone();
                scope.spawn(move || {
                    // a failed send means the merge loop already bailed out
                    let _ = sender.send(aggregate_chunk(chunk));
                });
            }
            // with only worker-held senders left, a dead worker surfaces as a
            // disconnect instead of a hang
            drop(sender);

            let mut merger = DataMerger::new();
            for _ in 0..chunks.len() {
                let partial = receiver
                    .recv()
                    .map_err(|_| ProcessingError::ChannelDisconnected)??;
                merger.fold_partial(partial)?;
            }
            Ok(merger.finish())
        })
    }
}

impl Default for ParallelAggregator {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StationStats;

    const SAMPLE: &[u8] = b"Banjul;38.9\nHamilton;9.5\nMoncton;10.3\nKarachi;20.9\nAssab;24.4\nNouakchott;17.3\nBeirut;16.0\nDolisie;23.6\nHoniara;25.7\nJos;3.9";

    fn summarize(data: &[u8], workers: usize) -> ConsolidatedSummary {
        ParallelAggregator::new(workers).aggregate(data).unwrap()
    }

    #[test]
    fn aggregates_every_station_once() {
        let summary = summarize(SAMPLE, 1);
        assert_eq!(summary.len(), 10);
        assert_eq!(
            summary.get("Banjul"),
            Some(&StationStats {
                min: 389,
                max: 389,
                sum: 389,
                count: 1,
            })
        );
        assert_eq!(summary.get("Jos").map(|s| s.sum), Some(39));
        assert_eq!(summary.get("Nouakchott").map(|s| s.min), Some(173));
    }

    #[test]
    fn folds_repeated_stations_across_chunks() {
        let mut data = SAMPLE.to_vec();
        data.extend_from_slice(b"\nBanjul;-38.9\n");
        let summary = summarize(&data, 4);
        assert_eq!(
            summary.get("Banjul"),
            Some(&StationStats {
                min: -389,
                max: 389,
                sum: 0,
                count: 2,
            })
        );
    }

    #[test]
    fn worker_count_does_not_change_the_result() {
        let single = summarize(SAMPLE, 1);
        for workers in [2, 3, 7, 32] {
            assert_eq!(summarize(SAMPLE, workers), single);
        }
    }

    #[test]
    fn empty_input_yields_empty_summary() {
        assert!(summarize(b"", 8).is_empty());
    }

    #[test]
    fn malformed_temperature_aborts_the_run() {
        let result = ParallelAggregator::new(2).aggregate(b"Banjul;3x.9\nJos;3.9");
        assert!(matches!(
            result,
            Err(ProcessingError::InvalidTemperature(_))
        ));
    }

    #[test]
    fn record_without_separator_aborts_the_run() {
        let result = ParallelAggregator::new(1).aggregate(b"Banjul38.9");
        assert!(matches!(result, Err(ProcessingError::InvalidFormat(_))));
    }
}
