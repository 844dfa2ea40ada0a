use crate::models::{OperationMode, ResourceSelector};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Replay sample CSV data against the restaurant service
#[derive(Parser, Debug)]
#[command(
    name = "resto-replay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Seed or query the restaurant service with rows from sample CSV files",
    long_about = None
)]
pub struct ReplayCli {
    /// Which samples to replay
    #[arg(value_enum, value_name = "SERVICE")]
    pub service: ResourceSelector,

    /// Directory containing detail_samples.csv, review_samples.csv and reservation_samples.csv
    #[arg(value_name = "SAMPLES_DIR")]
    pub directory: PathBuf,

    /// PUT seeds the service, GET queries it
    #[arg(value_enum, value_name = "MODE", ignore_case = true)]
    pub service_op: OperationMode,

    /// Override the service base URL (e.g. http://127.0.0.1:8080)
    #[arg(long = "endpoint", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Read configuration from this file instead of the default one
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds (0 = wait forever)
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

/// Turn request-tracing log lines from stdin into a CSV file
#[derive(Parser, Debug)]
#[command(
    name = "resto-logs",
    version = env!("CARGO_PKG_VERSION"),
    about = "Append request-tracing log lines read from stdin to <POD_NAME>-logs.csv",
    long_about = None
)]
pub struct LogsCli {
    /// Pod or process name the logs came from
    #[arg(value_name = "POD_NAME")]
    pub pod_name: String,

    /// Directory where the CSV file is written
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}
