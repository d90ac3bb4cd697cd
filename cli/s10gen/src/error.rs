//! Error handling and display for the CLI.

use std::path::PathBuf;

use colored::Colorize;
use s10_id::S10Error;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Config file not found: {}", .path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid {field} in {source_name}: {message}")]
    InvalidSetting {
        field: &'static str,
        source_name: String,
        message: String,
    },

    #[error("Unknown output format '{0}' (expected plain or json)")]
    UnknownFormat(String),

    #[error("{failed} of {total} identifiers failed validation")]
    ValidationFailed { failed: usize, total: usize },
}

impl CliError {
    /// Create an invalid-setting error.
    pub fn invalid_setting(
        field: &'static str,
        source_name: impl Into<String>,
        message: impl std::fmt::Display,
    ) -> Self {
        Self::InvalidSetting {
            field,
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(hint) = hint_for(err) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}

fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    for cause in err.chain() {
        if let Some(s10_err) = cause.downcast_ref::<S10Error>() {
            return Some(match s10_err {
                S10Error::OutOfRange { .. } => {
                    "Serial numbers have 8 digits (0-99999999). Lower -s or -n."
                }
                S10Error::Format { .. } => {
                    "An S10 identifier is 2 letters, 8 digits, a check digit and 2 letters, e.g. RA000000102US."
                }
                S10Error::InvalidInput { .. } => {
                    "Serials are exactly 8 digits; codes are exactly 2 uppercase letters."
                }
                S10Error::Config { .. } => {
                    "Set at least one entry in `indicators` or pass --indicator."
                }
            });
        }

        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return match cli_err {
                CliError::ConfigNotFound { .. } => {
                    Some("Check the --config path or the S10GEN_CONFIG variable.")
                }
                CliError::InvalidSetting { .. } => {
                    Some("Codes are exactly 2 uppercase letters, e.g. RA or US.")
                }
                CliError::UnknownFormat(_) => Some("Use --format plain or --format json."),
                CliError::ValidationFailed { .. } => None,
            };
        }
    }
    None
}
