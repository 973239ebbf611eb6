//! Common utilities for output formatters

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use crate::error::Result;
use crate::hawk::models::format_millis;

/// Placeholder for missing values in tables
pub const NOT_AVAILABLE: &str = "N/A";

/// Print a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Empty or missing values render as N/A
pub fn or_na(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Millisecond epoch rendered as a date; empty when absent or unparseable
pub fn format_date(timestamp: Option<&str>, fmt: &str) -> String {
    timestamp
        .and_then(|ts| format_millis(ts, fmt))
        .unwrap_or_default()
}

/// Table with the shared borderless preset and header row
pub fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(header);
    table
}
