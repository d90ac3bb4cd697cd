//! Identifier generation.
//!
//! An [`Engine`] owns an immutable [`EngineConfig`] and a [`DigitSource`].
//! Sequential generation is deterministic apart from the indicator draw;
//! random generation consumes the source for every serial digit.

use rand::rngs::{StdRng, ThreadRng};
use tracing::{debug, trace};

use crate::checksum::{self, CheckDigit};
use crate::error::S10Error;
use crate::identifier::{self, S10Identifier};
use crate::serial::SerialNumber;
use crate::source::{self, DigitSource};
use crate::types::{CountryCode, ServiceIndicator, DEFAULT_INDICATORS};

/// Generation parameters fixed at engine construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Indicators drawn from uniformly when `indicator` is not set.
    pub indicators: Vec<ServiceIndicator>,

    /// Indicator used for every identifier, overriding the random draw.
    pub indicator: Option<ServiceIndicator>,

    /// Country code appended to every identifier.
    pub country: CountryCode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            indicators: DEFAULT_INDICATORS.to_vec(),
            indicator: None,
            country: CountryCode::US,
        }
    }
}

impl EngineConfig {
    /// Uses a single indicator for every identifier.
    #[must_use]
    pub fn with_indicator(mut self, indicator: ServiceIndicator) -> Self {
        self.indicator = Some(indicator);
        self
    }

    /// Replaces the set of indicators drawn from.
    #[must_use]
    pub fn with_indicators(mut self, indicators: impl IntoIterator<Item = ServiceIndicator>) -> Self {
        self.indicators = indicators.into_iter().collect();
        self
    }

    /// Sets the country code.
    #[must_use]
    pub fn with_country(mut self, country: CountryCode) -> Self {
        self.country = country;
        self
    }

    fn check(&self) -> Result<(), S10Error> {
        if self.indicator.is_none() && self.indicators.is_empty() {
            return Err(S10Error::Config {
                message: "no service indicators to choose from".to_string(),
            });
        }
        Ok(())
    }
}

/// Generates and validates S10 identifiers.
#[derive(Debug)]
pub struct Engine<S = ThreadRng> {
    config: EngineConfig,
    source: S,
}

impl Engine<ThreadRng> {
    /// Creates an engine backed by the thread-local RNG.
    pub fn new(config: EngineConfig) -> Result<Self, S10Error> {
        Self::with_source(config, rand::rng())
    }
}

impl Engine<StdRng> {
    /// Creates an engine whose output is reproducible for a given seed.
    pub fn seeded(config: EngineConfig, seed: u64) -> Result<Self, S10Error> {
        Self::with_source(config, source::seeded(seed))
    }
}

impl<S: DigitSource> Engine<S> {
    /// Creates an engine with an explicit digit source.
    pub fn with_source(config: EngineConfig, source: S) -> Result<Self, S10Error> {
        config.check()?;
        Ok(Self { config, source })
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Produces `count` identifiers for serials `start..start + count`.
    ///
    /// Fails with [`S10Error::OutOfRange`] before producing anything if the
    /// last serial would not fit in 8 digits.
    pub fn generate_sequential(
        &mut self,
        start: u64,
        count: u64,
    ) -> Result<Vec<S10Identifier>, S10Error> {
        Ok(self.sequential(start, count)?.collect())
    }

    /// Lazy form of [`Engine::generate_sequential`].
    pub fn sequential(
        &mut self,
        start: u64,
        count: u64,
    ) -> Result<impl Iterator<Item = S10Identifier> + '_, S10Error> {
        let first = SerialNumber::new(start)?;
        let serials = match count.checked_sub(1) {
            Some(last_offset) => {
                let last = SerialNumber::sequential(start, last_offset)?;
                Some(SerialNumber::range_inclusive(first, last))
            }
            None => None,
        };
        debug!(start, count, "generating sequential identifiers");

        Ok(serials
            .into_iter()
            .flatten()
            .map(move |serial| self.assemble(serial)))
    }

    /// Produces `count` identifiers with random serials.
    pub fn generate_random(&mut self, count: u64) -> Vec<S10Identifier> {
        self.random(count).collect()
    }

    /// Lazy form of [`Engine::generate_random`].
    pub fn random(&mut self, count: u64) -> impl Iterator<Item = S10Identifier> + '_ {
        debug!(count, "generating random identifiers");
        (0..count).map(move |_| {
            let serial = SerialNumber::random(&mut self.source);
            self.assemble(serial)
        })
    }

    /// Checks a candidate identifier. See [`identifier::validate`].
    pub fn validate(&self, candidate: &str) -> Result<bool, S10Error> {
        identifier::validate(candidate)
    }

    /// Computes the check digit of an 8-digit serial. See [`checksum::check_digit`].
    pub fn checksum(&self, serial: &str) -> Result<CheckDigit, S10Error> {
        checksum::check_digit(serial)
    }

    fn assemble(&mut self, serial: SerialNumber) -> S10Identifier {
        let indicator = self.next_indicator();
        let id = S10Identifier::assemble(indicator, serial, self.config.country);
        trace!(serial = %serial, identifier = %id, "assembled identifier");
        id
    }

    fn next_indicator(&mut self) -> ServiceIndicator {
        if let Some(indicator) = self.config.indicator {
            return indicator;
        }
        let indicators = &self.config.indicators;
        let index = self.source.pick(indicators.len());
        indicators[index % indicators.len()]
    }
}
