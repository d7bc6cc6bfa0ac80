use clap::Parser;
use std::path::PathBuf;

use crate::utils::constants::DEFAULT_INPUT_FILE;

#[derive(Parser)]
#[command(name = "measurements-processor")]
#[command(about = "Per-station min/mean/max summary of temperature measurements")]
#[command(version)]
pub struct Cli {
    /// Input measurements file
    #[arg(default_value = DEFAULT_INPUT_FILE)]
    pub input: PathBuf,

    /// Worker threads; one chunk is processed per worker
    #[arg(long, default_value_t = num_cpus::get())]
    pub max_workers: usize,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,
}
