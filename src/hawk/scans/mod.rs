//! Scan module

mod api;
mod commands;
mod models;

pub use commands::run_scan_command;
pub use models::{
    AlertStats, ApplicationAlerts, Scan, ScanAlert, ScanAlertsResponse, ScanResult, ScansResponse,
};
