//! Identifier generation (the default action).

use std::io;

use anyhow::{Context, Result};
use s10_id::{DigitSource, Engine, S10Identifier};
use serde::Serialize;
use tracing::info;

use crate::output::{print_json, write_lines, OutputFormat};

use super::CommandContext;

/// Parameters for a generation run, taken from the top-level flags.
#[derive(Debug)]
pub struct GenerateRequest {
    pub count: u64,
    pub start: Option<u64>,
    pub indicator: Option<String>,
    pub country: Option<String>,
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
struct GenerateView {
    mode: &'static str,
    start: Option<u64>,
    count: u64,
    country: String,
    identifiers: Vec<S10Identifier>,
}

impl GenerateRequest {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let engine_config = ctx
            .config
            .engine_config(self.indicator.as_deref(), self.country.as_deref())?;

        info!(
            count = self.count,
            start = ?self.start,
            seed = ?self.seed,
            country = %engine_config.country,
            "generating identifiers"
        );

        match self.seed {
            Some(seed) => self.emit(Engine::seeded(engine_config, seed)?, ctx.format),
            None => self.emit(Engine::new(engine_config)?, ctx.format),
        }
    }

    fn emit<S: DigitSource>(&self, mut engine: Engine<S>, format: OutputFormat) -> Result<()> {
        let country = engine.config().country.to_string();

        match format {
            OutputFormat::Plain => {
                let stdout = io::stdout().lock();
                let written = match self.start {
                    Some(start) => write_lines(stdout, engine.sequential(start, self.count)?),
                    None => write_lines(stdout, engine.random(self.count)),
                };
                written.context("Failed to write identifiers")?;
            }
            OutputFormat::Json => {
                let identifiers = match self.start {
                    Some(start) => engine.generate_sequential(start, self.count)?,
                    None => engine.generate_random(self.count),
                };
                print_json(&GenerateView {
                    mode: if self.start.is_some() {
                        "sequential"
                    } else {
                        "random"
                    },
                    start: self.start,
                    count: self.count,
                    country,
                    identifiers,
                });
            }
        }

        Ok(())
    }
}
