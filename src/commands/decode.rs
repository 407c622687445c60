//! Decode command - recover a hidden message from encoded text.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use invisitext::{decode_bytes, DecodeMode, Settings};

use super::{read_text, write_output, CommandExecutor};

/// Recover a hidden message from encoded text.
///
/// Use -o/--output to write raw bytes to a file (required for binary data).
/// Without -o, the message is printed as text and must be valid UTF-8.
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// Encoded text (inline)
    #[arg(short, long, conflicts_with = "input_file")]
    pub input: Option<String>,

    /// Read encoded text from a file
    #[arg(long, conflicts_with = "input")]
    pub input_file: Option<PathBuf>,

    /// Layout to assume: auto, tail, interleaved, or grapheme-aware
    #[arg(long)]
    pub mode: Option<DecodeMode>,

    /// Passphrase, needed only if the message was encrypted
    #[arg(short, long, env = "INVISITEXT_PASSPHRASE", hide_env_values = true)]
    pub passphrase: Option<String>,

    /// Write the recovered bytes here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for DecodeCommand {
    fn execute(&self, settings: &Settings) -> Result<()> {
        let encoded = read_text(self.input.as_deref(), self.input_file.as_deref(), "encoded text")?;

        let mut config = settings.decode.clone();
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        config.passphrase = self.passphrase.clone();

        let bytes = decode_bytes(&encoded, &config).context("Failed to decode hidden data")?;
        info!(mode = %config.mode, bytes = bytes.len(), "message recovered");

        match &self.output {
            Some(path) => write_output(&bytes, Some(path)),
            None => {
                let text = String::from_utf8(bytes)
                    .context("Hidden data is not UTF-8 text; use --output to save raw bytes")?;
                println!("{}", text);
                Ok(())
            }
        }
    }
}
