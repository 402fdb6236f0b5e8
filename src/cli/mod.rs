//! CLI Module
//!
//! Command-line interface for fediwizard using Clap v4.

mod commands;

pub use commands::{PlanReport, plan};

use crate::config::LoggingConfig;
use crate::logging::{self, LogMode};
use anyhow::Result;
use clap::{Parser, Subcommand};

/// fediwizard - pick a username, language and instance to join the fediverse
#[derive(Parser, Debug)]
#[command(name = "fediwizard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug mode (writes a log file next to the config)
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive wizard (default)
    Run {
        /// Pre-fill the username field
        #[arg(short, long)]
        username: Option<String>,
    },

    /// Walk through the wizard without a terminal UI and print the outcome
    Plan {
        /// Username to confirm
        #[arg(short, long)]
        username: String,

        /// Language code (en, fr, de, es)
        #[arg(short, long)]
        language: Option<String>,

        /// Instance size (small, large)
        #[arg(short, long)]
        size: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Write the default configuration file
    Init {
        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show the effective configuration
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Main CLI entry point
pub async fn run() -> Result<()> {
    dispatch(Cli::parse()).await
}

async fn dispatch(cli: Cli) -> Result<()> {
    // Init must work even when the current config doesn't load or validate
    if let Some(Commands::Init { force }) = cli.command {
        let _log_guard = logging::init(&LoggingConfig::default(), LogMode::Headless, cli.debug)?;
        return commands::cmd_init(cli.config.as_deref(), force);
    }

    let (config, source) = commands::load_config(cli.config.as_deref())?;

    let mode = match cli.command {
        None | Some(Commands::Run { .. }) => LogMode::Interactive,
        _ => LogMode::Headless,
    };
    let _log_guard = logging::init(&config.logging, mode, cli.debug)?;
    if cli.debug {
        tracing::info!("Debug mode enabled");
    }
    match &source {
        Some(path) => tracing::debug!("Configuration loaded from {:?}", path),
        None => tracing::debug!("No config file found, using defaults"),
    }

    match cli.command {
        None => commands::cmd_run(&config, None).await,
        Some(Commands::Run { username }) => commands::cmd_run(&config, username).await,
        Some(Commands::Plan {
            username,
            language,
            size,
            format,
        }) => commands::cmd_plan(&config, &username, language.as_deref(), size.as_deref(), format),
        Some(Commands::Init { force }) => commands::cmd_init(cli.config.as_deref(), force),
        Some(Commands::Config) => commands::cmd_config(&config),
    }
}
