use crate::cli::parser::ReplayCli;
use crate::config::{Config, ServiceEndpoint};
use crate::core::executor::{Executor, HttpTransport};
use crate::core::replay::ReplayLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::io;

pub fn handle(cli: &ReplayCli) -> AppResult<()> {
    if !cli.directory.is_dir() {
        return Err(AppError::Usage(format!(
            "samples directory not found: {}\nusage: resto-replay <detail|review|reservation|all> <SAMPLES_DIR> <PUT|GET>",
            cli.directory.display()
        )));
    }

    let mut cfg = Config::load(cli.config.as_deref())?;

    if let Some(url) = &cli.endpoint {
        cfg.service_url = url.clone();
    }
    if let Some(secs) = cli.timeout {
        cfg.timeout_secs = secs;
    }

    let endpoint = ServiceEndpoint::parse(&cfg.service_url)?;
    log::info!("service endpoint: {endpoint}, timeout: {:?}", cfg.timeout());

    let executor = Executor::new(endpoint, HttpTransport::new(cfg.timeout())?);

    info(format!("Operation: {}", cli.service_op.as_str()));

    let stdout = io::stdout();
    let summary = ReplayLogic::replay(
        &executor,
        cli.service,
        &cli.directory,
        cli.service_op,
        &mut stdout.lock(),
    )?;

    success(format!(
        "Replay completed: {} requests sent to {}",
        summary.requests,
        executor.endpoint()
    ));
    Ok(())
}
