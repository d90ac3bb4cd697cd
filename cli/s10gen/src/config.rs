//! Configuration loading.
//!
//! Settings are layered: built-in defaults, then the JSON config file, then
//! environment variables and flags (resolved by clap before they reach here).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use s10_id::{CountryCode, EngineConfig, ServiceIndicator};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CliError;

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Get the default config file path, if the platform has a config directory.
fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "s10gen", "s10gen").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Settings read from the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Country code appended to generated identifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Service indicators drawn from at random.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indicators: Vec<String>,

    /// Fixed service indicator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicator: Option<String>,

    /// Default output format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Where these settings came from.
    #[serde(skip)]
    origin: Option<PathBuf>,
}

impl Config {
    /// Load config from an explicit path, or from the default location if present.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(CliError::ConfigNotFound {
                    path: path.to_path_buf(),
                }
                .into());
            }
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        Self::from_file(&path)
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;
        config.origin = Some(path.to_path_buf());

        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    fn origin_name(&self) -> String {
        self.origin
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults".to_string())
    }

    /// Build the engine configuration, letting flag values override the file.
    pub fn engine_config(
        &self,
        indicator_flag: Option<&str>,
        country_flag: Option<&str>,
    ) -> Result<EngineConfig> {
        let mut engine = EngineConfig::default();

        if !self.indicators.is_empty() {
            let indicators = self
                .indicators
                .iter()
                .map(|code| {
                    ServiceIndicator::parse(code).map_err(|e| {
                        CliError::invalid_setting("indicators", self.origin_name(), e)
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            engine = engine.with_indicators(indicators);
        }

        let indicator = match (indicator_flag, self.indicator.as_deref()) {
            (Some(flag), _) => Some(
                ServiceIndicator::parse(flag)
                    .map_err(|e| CliError::invalid_setting("indicator", "--indicator", e))?,
            ),
            (None, Some(file)) => Some(
                ServiceIndicator::parse(file)
                    .map_err(|e| CliError::invalid_setting("indicator", self.origin_name(), e))?,
            ),
            (None, None) => None,
        };
        if let Some(indicator) = indicator {
            engine = engine.with_indicator(indicator);
        }

        let country = match (country_flag, self.country.as_deref()) {
            (Some(flag), _) => Some(
                CountryCode::parse(flag)
                    .map_err(|e| CliError::invalid_setting("country", "--country", e))?,
            ),
            (None, Some(file)) => Some(
                CountryCode::parse(file)
                    .map_err(|e| CliError::invalid_setting("country", self.origin_name(), e))?,
            ),
            (None, None) => None,
        };
        if let Some(country) = country {
            engine = engine.with_country(country);
        }

        Ok(engine)
    }
}
