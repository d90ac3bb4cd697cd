//! s10gen - generate and validate UPU S10 tracking numbers.
//!
//! Without a subcommand, prints `-n` identifiers, sequential from `-s` when
//! given and random otherwise.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_format);

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
