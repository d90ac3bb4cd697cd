//! Output formatting for CLI commands.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::error::CliError;

const CLI_SCHEMA_VERSION: &str = "s10gen.cli.v1";

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One value per line, or a table for reports.
    #[default]
    Plain,
    /// JSON document wrapped with a schema version.
    Json,
}

impl OutputFormat {
    /// Parse a format name as given on the command line or in the config file.
    pub fn parse(name: &str) -> Result<Self, CliError> {
        match name {
            "plain" | "text" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            other => Err(CliError::UnknownFormat(other.to_string())),
        }
    }
}

/// Write one item per line, flushing at the end.
pub fn write_lines<W, I, T>(out: W, items: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = T>,
    T: std::fmt::Display,
{
    let mut out = io::BufWriter::new(out);
    for item in items {
        writeln!(out, "{}", item)?;
    }
    out.flush()
}

/// Print rows as a table.
pub fn print_table<T: Tabled>(rows: &[T]) {
    if rows.is_empty() {
        println!("{}", "No items.".dimmed());
    } else {
        println!("{}", Table::new(rows));
    }
}

/// Print a single JSON document.
pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    println!("{}", format_json(data));
}

/// Render data as a sorted, schema-wrapped JSON document.
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> String {
    let value = serde_json::to_value(data).unwrap_or_else(|_| serde_json::json!({}));
    let mapped = to_camel_keys(value);
    let wrapped = wrap_with_schema(mapped);
    serde_json::to_string_pretty(&wrapped).unwrap_or_else(|_| "{}".to_string())
}

fn wrap_with_schema(value: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "schemaVersion": CLI_SCHEMA_VERSION,
        "data": value
    })
}

fn to_camel_keys(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Array(values) => {
            serde_json::Value::Array(values.into_iter().map(to_camel_keys).collect())
        }
        serde_json::Value::Object(entries) => {
            let mut pairs: Vec<_> = entries.into_iter().collect();
            pairs.sort_by(|a, b| a.0.cmp(&b.0));
            let mut mapped = serde_json::Map::new();
            for (key, value) in pairs {
                mapped.insert(snake_to_lower_camel(&key), to_camel_keys(value));
            }
            serde_json::Value::Object(mapped)
        }
        other => other,
    }
}

fn snake_to_lower_camel(input: &str) -> String {
    let mut parts = input.split('_');
    let Some(first) = parts.next() else {
        return String::new();
    };
    let mut out = String::from(first);
    for part in parts {
        let mut chars = part.chars();
        if let Some(first_char) = chars.next() {
            out.push(first_char.to_ascii_uppercase());
            out.extend(chars);
        }
    }
    out
}
