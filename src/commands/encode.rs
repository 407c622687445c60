//! Encode command - hide a message or file in cover text.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::info;

use invisitext::{encode_bytes, EmbedMode, Settings};

use super::{read_text, write_output, CommandExecutor};

/// Hide a message in cover text using invisible variation selectors.
///
/// The cover text comes from --cover, --cover-file, or stdin.
/// The result looks identical to the cover text when rendered.
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// Text message to hide
    #[arg(short, long, conflicts_with = "file")]
    pub message: Option<String>,

    /// Hide the raw contents of this file instead of a text message
    #[arg(short, long, conflicts_with = "message")]
    pub file: Option<PathBuf>,

    /// Cover text (inline)
    #[arg(short, long, conflicts_with = "cover_file")]
    pub cover: Option<String>,

    /// Read cover text from a file
    #[arg(long, conflicts_with = "cover")]
    pub cover_file: Option<PathBuf>,

    /// Embedding mode: tail, interleaved, or grapheme-aware
    #[arg(long)]
    pub mode: Option<EmbedMode>,

    /// Compress the message (DEFLATE) before hiding it
    #[arg(long)]
    pub compress: bool,

    /// Encrypt the message with --passphrase
    #[arg(short, long)]
    pub encrypt: bool,

    /// Passphrase for encryption
    #[arg(short, long, env = "INVISITEXT_PASSPHRASE", hide_env_values = true)]
    pub passphrase: Option<String>,

    /// Write encoded text here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self, settings: &Settings) -> Result<()> {
        let payload = match (&self.message, &self.file) {
            (Some(message), None) => message.clone().into_bytes(),
            (None, Some(path)) => std::fs::read(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?,
            _ => bail!("Provide a message with --message or a file with --file"),
        };

        let cover = read_text(self.cover.as_deref(), self.cover_file.as_deref(), "cover text")?;

        let mut config = settings.encode.clone();
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        config.compress |= self.compress;
        config.encrypt |= self.encrypt;
        config.passphrase = self.passphrase.clone();

        let encoded = encode_bytes(&payload, &cover, &config)
            .with_context(|| format!("Failed to encode in {} mode", config.mode))?;

        info!(
            mode = %config.mode,
            payload_bytes = payload.len(),
            compress = config.compress,
            encrypt = config.encrypt,
            "message hidden"
        );

        write_output(encoded.as_bytes(), self.output.as_deref())
    }
}
