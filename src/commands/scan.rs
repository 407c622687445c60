//! Scan command - check text for hidden data without decoding it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use invisitext::{scan, Settings};

use super::{read_text, CommandExecutor};

/// Count invisible symbols in text and estimate the hidden payload size.
#[derive(Args, Debug)]
pub struct ScanCommand {
    /// Text to scan (inline)
    #[arg(short, long, conflicts_with = "input_file")]
    pub input: Option<String>,

    /// Read text to scan from a file
    #[arg(long, conflicts_with = "input")]
    pub input_file: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CommandExecutor for ScanCommand {
    fn execute(&self, _settings: &Settings) -> Result<()> {
        let text = read_text(self.input.as_deref(), self.input_file.as_deref(), "text")?;
        let report = scan(&text);

        if self.json {
            let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{}", json);
            return Ok(());
        }

        if report.has_hidden_data {
            println!("Hidden data found");
            println!("  Symbols:         {}", report.symbol_count);
            println!("  Estimated bits:  {}", report.estimated_bits);
            println!("  Estimated bytes: {}", report.estimated_bytes);
        } else {
            println!("No hidden data found");
        }

        Ok(())
    }
}
