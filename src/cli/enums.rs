//! Format and view enums for specific commands

use clap::ValueEnum;

/// Output format for the version command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum VersionFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// JSON object
    Json,
}

/// Detail view for 'scan get'
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ScanView {
    /// Scan metadata (default)
    #[default]
    Overview,
    /// Alert counts per severity
    Stats,
}

impl std::fmt::Display for ScanView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanView::Overview => write!(f, "overview"),
            ScanView::Stats => write!(f, "stats"),
        }
    }
}
