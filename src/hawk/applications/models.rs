//! Application data models

use serde::{Deserialize, Serialize};

use crate::hawk::models::FlexNumber;
use crate::hawk::pagination::Page;
use crate::hawk::traits::Envelope;

/// Application registered in an organization
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Application {
    pub application_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_scan_target: Option<serde_json::Value>,
}

impl Application {
    pub fn status(&self) -> &str {
        self.application_status.as_deref().unwrap_or("")
    }

    /// Case-insensitive status match
    pub fn has_status(&self, status: &str) -> bool {
        self.status().eq_ignore_ascii_case(status)
    }
}

/// Response from the organization applications endpoint
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationsResponse {
    #[serde(default)]
    pub applications: Vec<Application>,
    pub next_page_token: Option<String>,
    pub total_count: Option<FlexNumber>,
}

impl Envelope<Application> for ApplicationsResponse {
    fn into_page(self) -> Page<Application> {
        Page {
            items: self.applications,
            next_page_token: self.next_page_token,
            total_count: self.total_count,
        }
    }
}
