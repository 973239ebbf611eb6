//! Scan output formatters: list, overview, stats and alerts

use comfy_table::Table;

use super::common::{format_date, new_table, or_na, print_json};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::hawk::scans::{ScanAlert, ScanResult};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

fn duration(result: &ScanResult) -> String {
    result
        .scan_duration
        .as_ref()
        .map(|d| format!("{}s", d.display_rounded()))
        .unwrap_or_else(|| or_na(None))
}

fn timestamp(result: &ScanResult) -> String {
    let ts = result
        .timestamp
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(result.scan.timestamp.as_str());
    or_na(Some(format_date(Some(ts), TIMESTAMP_FORMAT).as_str()))
}

/// Output scans in the specified format
pub fn output_scans(scans: &[ScanResult], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(scans),
        OutputFormat::Table if scans.is_empty() => {
            println!("No scans found.");
            Ok(())
        }
        OutputFormat::Table => {
            println!("{}", scans_table(scans));
            Ok(())
        }
    }
}

fn scans_table(scans: &[ScanResult]) -> Table {
    let mut table = new_table(vec![
        "SCAN ID",
        "APPLICATION",
        "ENV",
        "STATUS",
        "DURATION",
        "ALERTS",
        "TIMESTAMP",
    ]);
    for result in scans {
        let alerts = result
            .alert_stats
            .as_ref()
            .map(|s| s.total.to_string())
            .unwrap_or_else(|| "0".to_string());
        table.add_row(vec![
            result.scan.id.clone(),
            or_na(Some(result.scan.application_name.as_str())),
            or_na(result.scan.env.as_deref()),
            or_na(Some(result.scan.status.as_str())),
            duration(result),
            alerts,
            timestamp(result),
        ]);
    }
    table
}

/// Output a single scan as a field/value overview
pub fn output_scan_overview(result: &ScanResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(result),
        OutputFormat::Table => {
            println!("{}", overview_table(result));
            Ok(())
        }
    }
}

fn overview_table(result: &ScanResult) -> Table {
    let urls = result
        .url_count
        .as_ref()
        .map(|c| c.display_rounded())
        .unwrap_or_else(|| or_na(None));

    let mut table = new_table(vec!["FIELD", "VALUE"]);
    table.add_row(vec!["Scan ID".to_string(), result.scan.id.clone()]);
    table.add_row(vec![
        "Application".to_string(),
        or_na(Some(result.scan.application_name.as_str())),
    ]);
    table.add_row(vec![
        "Environment".to_string(),
        or_na(result.scan.env.as_deref()),
    ]);
    table.add_row(vec!["Status".to_string(), or_na(Some(result.scan.status.as_str()))]);
    table.add_row(vec!["Duration".to_string(), duration(result)]);
    table.add_row(vec!["URLs Scanned".to_string(), urls]);
    table.add_row(vec![
        "Policy".to_string(),
        or_na(result.policy_name.as_deref()),
    ]);
    table.add_row(vec!["Timestamp".to_string(), timestamp(result)]);
    table
}

/// Output the alert severity breakdown of a scan
pub fn output_scan_stats(result: &ScanResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&result.alert_stats),
        OutputFormat::Table => {
            println!("{}", stats_view(result));
            Ok(())
        }
    }
}

fn stats_view(result: &ScanResult) -> String {
    let Some(stats) = result.alert_stats.as_ref() else {
        return "No alert statistics available for this scan.".to_string();
    };

    let mut table = new_table(vec!["SEVERITY", "COUNT"]);
    for (severity, count) in [
        ("High", stats.high),
        ("Medium", stats.medium),
        ("Low", stats.low),
        ("Info", stats.info),
        ("Total", stats.total),
    ] {
        table.add_row(vec![severity.to_string(), count.to_string()]);
    }
    table.to_string()
}

/// Output the alerts raised by a scan
pub fn output_scan_alerts(alerts: &[ScanAlert], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(alerts),
        OutputFormat::Table if alerts.is_empty() => {
            println!("No alerts found.");
            Ok(())
        }
        OutputFormat::Table => {
            println!("{}", alerts_table(alerts));
            Ok(())
        }
    }
}

fn alerts_table(alerts: &[ScanAlert]) -> Table {
    let mut table = new_table(vec!["PLUGIN ID", "NAME", "SEVERITY", "URIS", "CWE"]);
    for alert in alerts {
        table.add_row(vec![
            alert.plugin_id.clone(),
            or_na(Some(alert.name.as_str())),
            or_na(Some(alert.severity.as_str())),
            alert.uri_count.to_string(),
            or_na(alert.cwe_id.as_deref()),
        ]);
    }
    table
}
