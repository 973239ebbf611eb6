//! Shared model types

use serde::{Deserialize, Serialize};

/// A value the platform sends either as a JSON number or as a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlexNumber {
    Number(f64),
    Text(String),
}

impl FlexNumber {
    /// Numeric value, or None when the text form does not parse
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FlexNumber::Number(n) => Some(*n),
            FlexNumber::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Rounded display form; unparseable text is shown as-is
    pub fn display_rounded(&self) -> String {
        match (self.as_f64(), self) {
            (Some(n), _) => format!("{:.0}", n),
            (None, FlexNumber::Text(s)) => s.clone(),
            (None, FlexNumber::Number(n)) => n.to_string(),
        }
    }
}

/// Render a millisecond epoch string with the given chrono format
pub fn format_millis(timestamp: &str, fmt: &str) -> Option<String> {
    let millis: i64 = timestamp.trim().parse().ok()?;
    chrono::DateTime::<chrono::Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.format(fmt).to_string())
}
