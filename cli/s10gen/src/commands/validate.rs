//! `s10gen validate`: check identifiers against their check digit.

use anyhow::Result;
use clap::Args;
use s10_id::{S10Identifier, Verdict};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_json, print_table, OutputFormat};

use super::CommandContext;

/// Check one or more S10 identifiers.
///
/// Exits with status 1 if any identifier is invalid or malformed.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Identifiers to check, e.g. RA000000102US.
    #[arg(required = true, value_name = "ID")]
    identifiers: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Status {
    Valid,
    Invalid,
    Malformed,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Status::Valid => "valid",
            Status::Invalid => "invalid",
            Status::Malformed => "malformed",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Serialize, Tabled)]
struct ValidationRow {
    #[tabled(rename = "IDENTIFIER")]
    identifier: String,
    #[tabled(rename = "STATUS")]
    status: Status,
    #[tabled(rename = "EXPECTED")]
    #[tabled(display = "display_digit")]
    expected_check_digit: Option<u8>,
    #[tabled(rename = "DETAIL")]
    detail: String,
}

fn display_digit(digit: &Option<u8>) -> String {
    digit
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn check(candidate: &str) -> ValidationRow {
    let (status, expected_check_digit, detail) = match S10Identifier::parse(candidate) {
        Ok(id) => match id.verify() {
            Verdict::Valid => (Status::Valid, Some(id.check_digit().value()), String::new()),
            Verdict::Invalid { expected, found } => (
                Status::Invalid,
                Some(expected.value()),
                format!("check digit is {found}, expected {expected}"),
            ),
        },
        Err(e) => (Status::Malformed, None, e.to_string()),
    };

    debug!(identifier = candidate, status = %status, "validated identifier");

    ValidationRow {
        identifier: candidate.to_string(),
        status,
        expected_check_digit,
        detail,
    }
}

impl ValidateCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows: Vec<ValidationRow> = self.identifiers.iter().map(|id| check(id)).collect();

        match ctx.format {
            OutputFormat::Plain => print_table(&rows),
            OutputFormat::Json => print_json(&rows),
        }

        let failed = rows.iter().filter(|r| r.status != Status::Valid).count();
        if failed > 0 {
            return Err(CliError::ValidationFailed {
                failed,
                total: rows.len(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_identifier() {
        let row = check("RA000000102US");
        assert_eq!(row.status, Status::Valid);
        assert_eq!(row.expected_check_digit, Some(2));
        assert!(row.detail.is_empty());
    }

    #[test]
    fn wrong_digit_reports_expected() {
        let row = check("RA000000109US");
        assert_eq!(row.status, Status::Invalid);
        assert_eq!(row.expected_check_digit, Some(2));
        assert_eq!(row.detail, "check digit is 9, expected 2");
    }

    #[test]
    fn malformed_identifier() {
        let row = check("RA0000001US");
        assert_eq!(row.status, Status::Malformed);
        assert_eq!(row.expected_check_digit, None);
        assert!(row.detail.contains("expected 13 characters"));
    }
}
