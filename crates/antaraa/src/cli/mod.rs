//! Antaraa cli definition and entrypoint.
mod ask;
mod chat;
pub mod ux;

use std::path::PathBuf;

use anyhow::{Context, Result};
use antaraa_core::config::get_config;
use clap::{Parser, Subcommand};

use crate::log::setup_logging;

/// Antaraa - a quiet space to talk things through.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Show verbose logs.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of the default.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Start a conversation with the companion.
    Chat {
        /// Model to use for chat, must be defined in the config.
        #[arg(short, long)]
        model: Option<String>,
        /// Skip the safety notice, acknowledging it up front.
        #[arg(long)]
        accept_notice: bool,
    },
    /// Share a single message and print the reply.
    Ask {
        /// Message to share.
        text: Vec<String>,
        /// Model to use for the reply
        #[arg(short, long)]
        model: Option<String>,
    },
}

/// Runs the main CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        setup_logging().context("Failed to set up logging")?;
    }

    let config = get_config(cli.config).context("Failed to load configuration")?;

    match cli.command {
        Commands::Chat {
            model,
            accept_notice,
        } => chat::execute(model, accept_notice, &config).await,
        Commands::Ask { text, model } => ask::execute(text, model, &config).await,
    }
}
