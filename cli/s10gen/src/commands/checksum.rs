//! `s10gen checksum`: compute check digits for serial numbers.

use anyhow::{Context, Result};
use clap::Args;
use s10_id::check_digit;
use serde::Serialize;

use crate::output::{print_json, write_lines, OutputFormat};

use super::CommandContext;

/// Compute the check digit of 8-digit serial numbers.
#[derive(Debug, Args)]
pub struct ChecksumCommand {
    /// Serial numbers, exactly 8 digits each (e.g. 00000010).
    #[arg(required = true, value_name = "SERIAL")]
    serials: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ChecksumView {
    serial: String,
    check_digit: u8,
}

impl std::fmt::Display for ChecksumView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.serial, self.check_digit)
    }
}

impl ChecksumCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let views = self
            .serials
            .into_iter()
            .map(|serial| {
                let digit = check_digit(&serial)?;
                Ok(ChecksumView {
                    serial,
                    check_digit: digit.value(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        match ctx.format {
            OutputFormat::Plain => {
                write_lines(std::io::stdout().lock(), &views)
                    .context("Failed to write check digits")?;
            }
            OutputFormat::Json => print_json(&views),
        }

        Ok(())
    }
}
