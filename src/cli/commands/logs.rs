use crate::cli::parser::LogsCli;
use crate::core::logs::LogsLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::io;

pub fn handle(cli: &LogsCli) -> AppResult<()> {
    if cli.pod_name.trim().is_empty() {
        return Err(AppError::Usage(
            "usage: resto-logs <POD_NAME> (pod name must not be empty)".to_string(),
        ));
    }

    let stdin = io::stdin();
    let path = LogsLogic::run(&cli.pod_name, &cli.output_dir, stdin.lock())?;

    success(format!("Parsed data has been written to {}", path.display()));
    Ok(())
}
