//! Jasper Bridge - Main Entry Point

use anyhow::{anyhow, Result};
use clap::Parser;
use jasper_bridge::{commands, Cli, Command};
use jasper_common::{init_dev_logging, init_logging};
use jasper_config::ConfigLoader;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }

    if cli.dev_logging {
        init_dev_logging()
    } else {
        init_logging(config.logging.to_logging_config())
    }
    .map_err(|e| anyhow!(e))?;
    info!("Configuration loaded successfully");

    match cli.command {
        Command::Resolve(args) => {
            let resolution = tokio::task::spawn_blocking(move || commands::resolve(&args, &config))
                .await?
                .inspect_err(|e| error!("Resolve failed: {}", e))?;
            for line in commands::describe(&resolution) {
                println!("{line}");
            }
        }
    }

    Ok(())
}
