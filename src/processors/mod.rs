pub mod aggregator;
pub mod chunks;
pub mod data_merger;
pub mod station_table;

pub use aggregator::{aggregate_chunk, ParallelAggregator};
pub use chunks::split_into_chunks;
pub use data_merger::DataMerger;
pub use station_table::StationTable;
