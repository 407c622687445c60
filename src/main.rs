//! invisitext - Hide anything in plain text
//!
//! A CLI tool for hiding messages in text with invisible variation selectors.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use invisitext::Settings;

mod commands;

use commands::{CapacityCommand, CommandExecutor, DecodeCommand, EncodeCommand, ScanCommand};

/// invisitext - Hide anything in plain text
///
/// Embeds messages as invisible Unicode variation selectors, with optional
/// compression and passphrase encryption.
#[derive(Parser)]
#[command(name = "invisitext")]
#[command(version)]
#[command(about = "Hide messages in plain text with invisible Unicode variation selectors")]
#[command(long_about = None)]
struct Cli {
    /// Settings file (defaults to ~/.invisitext/config.toml)
    #[arg(long, global = true, env = "INVISITEXT_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a message in cover text
    Encode(EncodeCommand),

    /// Recover a hidden message
    Decode(DecodeCommand),

    /// Check text for hidden data without decoding it
    Scan(ScanCommand),

    /// Show how many bits a cover text can carry in each mode
    Capacity(CapacityCommand),
}

impl Commands {
    fn executor(&self) -> &dyn CommandExecutor {
        match self {
            Commands::Encode(cmd) => cmd,
            Commands::Decode(cmd) => cmd,
            Commands::Scan(cmd) => cmd,
            Commands::Capacity(cmd) => cmd,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings> {
    let settings = match path {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::load().context("Failed to load settings")?,
    };
    debug!(?settings, "settings loaded");
    Ok(settings)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = load_settings(cli.config.as_ref())?;
    cli.command.executor().execute(&settings)
}
