//! CLI for the predir redirect service.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use predir_core::config::{self, PredirConfig};
use predir_core::logging;
use std::path::{Path, PathBuf};

use commands::{run_check, run_resolve, run_schemes, run_serve};

/// Top-level CLI for predir.
#[derive(Debug, Parser)]
#[command(name = "predir")]
#[command(about = "predir: redirect custom URL schemes to their targets", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/predir/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Serve the redirect endpoint over HTTP.
    Serve {
        /// Listen address (overrides `bind` from config).
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
        /// Query parameter carrying the URL (overrides `param` from config).
        #[arg(long, value_name = "NAME")]
        param: Option<String>,
    },

    /// Resolve a URL with the configured routes and print the target.
    Resolve {
        /// URL to resolve, e.g. s3://bucket/key.
        url: String,
    },

    /// Normalize and validate a scheme without touching config.
    Check {
        /// Scheme to check, e.g. "S3://".
        scheme: String,
    },

    /// List routed schemes and the blacklist.
    Schemes,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // The server logs to file; one-shot commands keep stdout clean and log to stderr.
        if matches!(cli.command, CliCommand::Serve { .. }) {
            if let Err(e) = logging::init_logging() {
                logging::init_logging_stderr();
                tracing::warn!("file logging unavailable, using stderr: {:#}", e);
            }
        } else {
            logging::init_logging_stderr();
        }

        let config_path = cli.config.as_deref();
        match cli.command {
            CliCommand::Serve { bind, param } => {
                let cfg = load_config(config_path)?;
                run_serve(&cfg, bind.as_deref(), param.as_deref()).await?
            }
            CliCommand::Resolve { url } => run_resolve(&load_config(config_path)?, &url).await?,
            CliCommand::Check { scheme } => run_check(&scheme)?,
            CliCommand::Schemes => run_schemes(&load_config(config_path)?)?,
        }

        Ok(())
    }
}

fn load_config(path: Option<&Path>) -> Result<PredirConfig> {
    let cfg = match path {
        Some(path) => config::load_from(path)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
