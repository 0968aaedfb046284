mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tailwatch_core::logging::{default_log_format, init_logging};
use tailwatch_core::tail::{Shutdown, TracingSink, tail_file};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    if let Err(e) = run(&cli) {
        eprintln!("tailwatch: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli
        .resolve()?
        .validate()
        .context("invalid configuration")?;

    let shutdown = Shutdown::new();
    ctrlc::set_handler({
        let shutdown = shutdown.clone();
        move || {
            tracing::info!("shutdown requested");
            shutdown.trigger();
        }
    })
    .context("failed to install Ctrl-C handler")?;

    tail_file(&config, TracingSink, &shutdown)
        .with_context(|| format!("failed to tail {}", config.path.display()))?;

    tracing::info!("shutdown complete");
    Ok(())
}
