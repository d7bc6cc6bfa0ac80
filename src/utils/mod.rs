pub mod constants;
pub mod profiling;

pub use constants::*;
pub use profiling::RunProfiler;
