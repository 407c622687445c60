//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod capacity;
mod decode;
mod encode;
mod scan;

pub use capacity::CapacityCommand;
pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use scan::ScanCommand;

use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

use invisitext::Settings;

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic. `settings` holds the defaults
/// from the config file; explicit flags win over them.
pub trait CommandExecutor {
    fn execute(&self, settings: &Settings) -> Result<()>;
}

/// Resolves text from an inline argument, a file, or stdin (in that order).
///
/// Text is taken verbatim: no trimming, since a trailing newline could sit
/// between the cover text and a tail of symbols.
pub(crate) fn read_text(inline: Option<&str>, file: Option<&Path>, what: &str) -> Result<String> {
    if let Some(text) = inline {
        return Ok(text.to_owned());
    }

    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {} from {}", what, path.display()));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .with_context(|| format!("Failed to read {} from stdin", what))?;
    Ok(buffer)
}

/// Writes `data` to `path`, or to stdout without a trailing newline.
pub(crate) fn write_output(data: &[u8], path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("Failed to write to {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data).context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")
        }
    }
}
