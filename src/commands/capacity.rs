//! Capacity command - show how much a cover text can carry.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use invisitext::crypto::{estimate_compression_ratio, would_benefit_from_compression};
use invisitext::{capacity, payload_bits, EmbedMode, Settings};

use super::{read_text, CommandExecutor};

/// Show the embedding capacity of a cover text in every mode.
///
/// With --message, also reports how many bits that message needs
/// (using the compression/encryption settings given), and suggests
/// --compress when the message overflows a mode and would shrink.
#[derive(Args, Debug)]
pub struct CapacityCommand {
    /// Cover text (inline)
    #[arg(short, long, conflicts_with = "cover_file")]
    pub cover: Option<String>,

    /// Read cover text from a file
    #[arg(long, conflicts_with = "cover")]
    pub cover_file: Option<PathBuf>,

    /// Message to check against the capacity
    #[arg(short, long)]
    pub message: Option<String>,

    /// Account for compression when sizing --message
    #[arg(long)]
    pub compress: bool,

    /// Account for encryption overhead when sizing --message
    #[arg(short, long)]
    pub encrypt: bool,
}

impl CommandExecutor for CapacityCommand {
    fn execute(&self, settings: &Settings) -> Result<()> {
        let cover = read_text(self.cover.as_deref(), self.cover_file.as_deref(), "cover text")?;

        let mut compress_hint = None;
        let needed = match &self.message {
            Some(message) => {
                let mut config = settings.encode.clone();
                config.compress |= self.compress;
                if self.encrypt || config.encrypt {
                    // Ciphertext length does not depend on the passphrase
                    config = config.with_passphrase("sizing");
                }
                let bits = payload_bits(message, &config).context("Failed to size message")?;
                println!("Message needs {} bits", bits);

                if !config.compress && would_benefit_from_compression(message.as_bytes()) {
                    compress_hint = Some(estimate_compression_ratio(message.as_bytes()));
                }
                Some(bits)
            }
            None => None,
        };

        let mut overflows = false;
        for mode in EmbedMode::ALL {
            let available = capacity(&cover, mode);
            match needed {
                Some(bits) => {
                    let fits = available.fits(bits);
                    overflows |= !fits;
                    let verdict = if fits { "fits" } else { "too long" };
                    println!("  {:<15} {} ({})", mode, available, verdict);
                }
                None => println!("  {:<15} {}", mode, available),
            }
        }

        if let Some(ratio) = compress_hint.filter(|_| overflows) {
            println!(
                "Hint: --compress shrinks this message to about {:.0}% of its size",
                ratio * 100.0
            );
        }

        Ok(())
    }
}
