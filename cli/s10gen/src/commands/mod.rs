//! CLI commands.

mod checksum;
mod generate;
mod validate;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use crate::config::Config;
use crate::logging::LogFormat;
use crate::output::OutputFormat;

/// s10gen - Generate and validate UPU S10 tracking numbers.
///
/// Example: `s10gen -s 10 -n 42` prints 42 sequential identifiers starting at
/// serial 10; `s10gen -n 10` prints 10 random ones.
#[derive(Debug, Parser)]
#[command(name = "s10gen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of tracking numbers to generate.
    #[arg(short = 'n', long = "count", value_name = "COUNT")]
    count: Option<u64>,

    /// Generate sequential (valid) tracking numbers starting from this serial.
    #[arg(short = 's', long = "start", value_name = "START")]
    start: Option<u64>,

    /// Service indicator to use instead of a random draw (e.g. RA).
    #[arg(long, env = "S10GEN_INDICATOR")]
    indicator: Option<String>,

    /// Country code of the issuing administration (default US).
    #[arg(long, env = "S10GEN_COUNTRY")]
    country: Option<String>,

    /// Seed for reproducible random output.
    #[arg(long)]
    seed: Option<u64>,

    /// Output format (plain or json).
    #[arg(long, global = true)]
    format: Option<String>,

    /// Path to a JSON config file.
    #[arg(long, global = true, env = "S10GEN_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log line format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check identifiers against their check digit.
    Validate(validate::ValidateCommand),

    /// Compute the check digit of 8-digit serial numbers.
    Checksum(checksum::ChecksumCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    ///
    /// Help and version need no settings, so the config file and output
    /// format are only read once a command that uses them is selected.
    pub fn run(self) -> Result<()> {
        let settings = Settings {
            config: self.config,
            format: self.format,
        };

        match self.command {
            Some(Commands::Validate(cmd)) => cmd.run(settings.load()?),
            Some(Commands::Checksum(cmd)) => cmd.run(settings.load()?),
            Some(Commands::Version) => {
                println!("s10gen {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
            None => match self.count {
                Some(count) => generate::GenerateRequest {
                    count,
                    start: self.start,
                    indicator: self.indicator,
                    country: self.country,
                    seed: self.seed,
                }
                .run(settings.load()?),
                None => {
                    let mut cmd = Cli::command();
                    cmd.print_help()?;
                    Ok(())
                }
            },
        }
    }
}

/// Global flags that select the config file and output format.
struct Settings {
    config: Option<PathBuf>,
    format: Option<String>,
}

impl Settings {
    fn load(self) -> Result<CommandContext> {
        let config = Config::load(self.config.as_deref())?;

        let format = match self.format.as_deref().or(config.format.as_deref()) {
            Some(name) => OutputFormat::parse(name)?,
            None => OutputFormat::default(),
        };

        Ok(CommandContext { config, format })
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}
