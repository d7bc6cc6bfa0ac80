use std::io;

use tracing::info;
use tracing_subscriber::filter::LevelFilter;

use crate::cli::args::Cli;
use crate::error::{ProcessingError, Result};
use crate::processors::ParallelAggregator;
use crate::readers::MeasurementFile;
use crate::utils::RunProfiler;
use crate::writers::ReportWriter;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    if cli.max_workers == 0 {
        return Err(ProcessingError::Config(
            "--max-workers must be at least 1".to_string(),
        ));
    }

    let mut profiler = RunProfiler::from_env();

    let source = MeasurementFile::open(&cli.input)?;
    profiler.mark("load");
    info!(
        path = %source.path().display(),
        bytes = source.len(),
        workers = cli.max_workers,
        "processing measurements"
    );

    let aggregator = ParallelAggregator::new(cli.max_workers);
    let summary = aggregator.aggregate(source.bytes())?;
    profiler.mark("aggregate");
    info!(stations = summary.len(), "aggregation complete");

    let stdout = io::stdout().lock();
    ReportWriter::new().write_to(&summary, stdout)?;
    profiler.mark("report");

    profiler.write_report();
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    // logs go to stderr; stdout carries only the report
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init();
}
