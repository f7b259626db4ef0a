use anyhow::Result;
use clap::Parser;
use comiclink_core::{config, logging};

mod cli;

use crate::cli::Cli;

async fn run(cli: Cli) -> Result<()> {
    let cfg = cli.command.effective_config(config::load_or_init()?)?;

    // Logging follows the effective config, so `check --debug` is honored.
    if let Err(err) = logging::init_logging(&cfg) {
        logging::init_logging_stderr(&cfg);
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    cli.command.run(cfg).await
}

#[tokio::main]
async fn main() {
    if let Err(err) = run(Cli::parse()).await {
        eprintln!("comiclink error: {:#}", err);
        std::process::exit(1);
    }
}
