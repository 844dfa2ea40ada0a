//! restotools library root.
//! Exposes the CLI parsers, the two high-level run functions and the
//! replay / log extraction modules they drive.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;

use clap::Parser;
use cli::parser::{LogsCli, ReplayCli};
use errors::AppResult;

/// Set up env_logger. `RUST_LOG` wins over the -v count.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

/// Entry point used by the `resto-replay` binary
pub fn run_replay() -> AppResult<()> {
    let cli = ReplayCli::parse();
    init_logging(cli.verbose);
    cli::commands::replay::handle(&cli)
}

/// Entry point used by the `resto-logs` binary
pub fn run_logs() -> AppResult<()> {
    let cli = LogsCli::parse();
    init_logging(cli.verbose);
    cli::commands::logs::handle(&cli)
}
