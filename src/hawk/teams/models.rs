//! Team data models

use serde::{Deserialize, Serialize};

use crate::hawk::models::FlexNumber;
use crate::hawk::pagination::Page;
use crate::hawk::traits::Envelope;
use crate::hawk::users::OrganizationMember;

/// Application reference attached to a team
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TeamApplication {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Team within an organization
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    pub applications: Vec<TeamApplication>,
    pub users: Vec<OrganizationMember>,
    /// Millisecond epoch, as a string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<String>,
}

/// Response from the organization teams endpoint
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TeamsResponse {
    #[serde(default)]
    pub teams: Vec<Team>,
    pub next_page_token: Option<String>,
    pub total_count: Option<FlexNumber>,
}

impl Envelope<Team> for TeamsResponse {
    fn into_page(self) -> Page<Team> {
        Page {
            items: self.teams,
            next_page_token: self.next_page_token,
            total_count: self.total_count,
        }
    }
}
