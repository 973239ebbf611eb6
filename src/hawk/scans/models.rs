//! Scan and alert data models

use serde::{Deserialize, Serialize};

use crate::hawk::models::FlexNumber;
use crate::hawk::pagination::Page;
use crate::hawk::traits::Envelope;

/// Core scan record
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Scan {
    pub id: String,
    pub application_id: String,
    pub application_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<String>,
    pub status: String,
    /// Millisecond epoch, as a string
    pub timestamp: String,
}

/// Alert counts per severity
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AlertStats {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    pub info: u32,
    pub total: u32,
}

/// A scan together with its result metadata
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanResult {
    pub scan: Scan,
    /// Seconds; number or numeric string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_duration: Option<FlexNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_count: Option<FlexNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_stats: Option<AlertStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl ScanResult {
    /// Case-insensitive substring match on application name or id
    pub fn matches_app(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.scan.application_name.to_lowercase().contains(&needle)
            || self.scan.application_id.to_lowercase().contains(&needle)
    }

    pub fn matches_env(&self, env: &str) -> bool {
        self.scan
            .env
            .as_deref()
            .unwrap_or("")
            .eq_ignore_ascii_case(env)
    }

    pub fn matches_status(&self, status: &str) -> bool {
        self.scan.status.eq_ignore_ascii_case(status)
    }
}

/// Response from the organization scans endpoint
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScansResponse {
    #[serde(default)]
    pub application_scan_results: Vec<ScanResult>,
    pub next_page_token: Option<String>,
    pub total_count: Option<FlexNumber>,
}

impl Envelope<ScanResult> for ScansResponse {
    fn into_page(self) -> Page<ScanResult> {
        Page {
            items: self.application_scan_results,
            next_page_token: self.next_page_token,
            total_count: self.total_count,
        }
    }
}

/// A finding type reported by a scan
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanAlert {
    pub plugin_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub severity: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<String>,
    pub uri_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwe_id: Option<String>,
}

/// Per-application alert group in the alerts response
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationAlerts {
    pub application_alerts: Vec<ScanAlert>,
}

/// Response from the scan alerts endpoint
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScanAlertsResponse {
    #[serde(default)]
    pub application_scan_results: Vec<ApplicationAlerts>,
    pub next_page_token: Option<String>,
}

impl Envelope<ScanAlert> for ScanAlertsResponse {
    /// Alerts of every application group, concatenated in order
    fn into_page(self) -> Page<ScanAlert> {
        Page {
            items: self
                .application_scan_results
                .into_iter()
                .flat_map(|group| group.application_alerts)
                .collect(),
            next_page_token: self.next_page_token,
            total_count: None,
        }
    }
}
