//! User and organization member data models

use serde::{Deserialize, Serialize};

use crate::hawk::models::FlexNumber;
use crate::hawk::organizations::Organization;
use crate::hawk::pagination::Page;
use crate::hawk::traits::Envelope;

/// A user's membership in an organization
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct OrganizationMembership {
    pub organization: Organization,
    pub role: String,
}

/// External identity details from the auth provider
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserExternal {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub organizations: Vec<OrganizationMembership>,
}

impl UserExternal {
    /// Full name, or "first last" when the full name is blank
    pub fn display_name(&self) -> String {
        if !self.full_name.trim().is_empty() {
            return self.full_name.clone();
        }
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// The authenticated user
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub stackhawk_id: String,
    pub external: UserExternal,
}

/// Response from the current user endpoint
#[derive(Deserialize, Debug)]
pub struct UserResponse {
    pub user: User,
}

/// Authentication provider information
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Provider {
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

/// Access feature flag for a member
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Feature {
    pub name: String,
    pub enabled: bool,
}

/// A user who belongs to an organization
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationMember {
    pub stackhawk_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external: Option<UserExternal>,
    /// Millisecond epoch, as a string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub role: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<Feature>,
}

impl OrganizationMember {
    pub fn display_name(&self) -> String {
        self.external
            .as_ref()
            .map(UserExternal::display_name)
            .unwrap_or_default()
    }

    pub fn email(&self) -> &str {
        self.external.as_ref().map(|e| e.email.as_str()).unwrap_or("")
    }

    /// Role in the first listed organization, falling back to the top-level role
    pub fn role(&self) -> &str {
        self.external
            .as_ref()
            .and_then(|e| e.organizations.first())
            .map(|m| m.role.as_str())
            .filter(|r| !r.is_empty())
            .unwrap_or(self.role.as_str())
    }

    pub fn provider_slug(&self) -> &str {
        self.provider.as_ref().map(|p| p.slug.as_str()).unwrap_or("")
    }
}

/// Response from the organization members endpoint
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MembersResponse {
    #[serde(default)]
    pub users: Vec<OrganizationMember>,
    pub next_page_token: Option<String>,
    pub total_count: Option<FlexNumber>,
}

impl Envelope<OrganizationMember> for MembersResponse {
    fn into_page(self) -> Page<OrganizationMember> {
        Page {
            items: self.users,
            next_page_token: self.next_page_token,
            total_count: self.total_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(json: serde_json::Value) -> OrganizationMember {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_display_name_prefers_full_name() {
        let m = member(serde_json::json!({
            "external": {"fullName": "Ada Lovelace", "firstName": "A", "lastName": "L"}
        }));
        assert_eq!(m.display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_display_name_falls_back_to_first_last() {
        let m = member(serde_json::json!({
            "external": {"firstName": "Grace", "lastName": "Hopper"}
        }));
        assert_eq!(m.display_name(), "Grace Hopper");
    }

    #[test]
    fn test_display_name_without_external() {
        let m = member(serde_json::json!({"stackhawkId": "u1"}));
        assert_eq!(m.display_name(), "");
        assert_eq!(m.email(), "");
    }

    #[test]
    fn test_role_from_first_membership() {
        let m = member(serde_json::json!({
            "role": "MEMBER",
            "external": {
                "organizations": [
                    {"organization": {"id": "o1"}, "role": "OWNER"},
                    {"organization": {"id": "o2"}, "role": "ADMIN"}
                ]
            }
        }));
        assert_eq!(m.role(), "OWNER");
    }

    #[test]
    fn test_role_falls_back_to_top_level() {
        let m = member(serde_json::json!({"role": "ADMIN", "external": {"email": "a@b.c"}}));
        assert_eq!(m.role(), "ADMIN");
    }

    #[test]
    fn test_provider_slug() {
        let m = member(serde_json::json!({"provider": {"slug": "google"}}));
        assert_eq!(m.provider_slug(), "google");
    }

    #[test]
    fn test_members_response_envelope() {
        let response: MembersResponse = serde_json::from_value(serde_json::json!({
            "users": [{"stackhawkId": "u1"}, {"stackhawkId": "u2"}],
            "nextPageToken": "abc",
            "totalCount": "2"
        }))
        .unwrap();
        let page = response.into_page();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.next_page_token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_user_response_deserialize() {
        let response: UserResponse = serde_json::from_value(serde_json::json!({
            "user": {
                "stackhawkId": "me",
                "external": {
                    "email": "me@example.com",
                    "organizations": [{"organization": {"id": "o1", "name": "One"}, "role": "OWNER"}]
                }
            }
        }))
        .unwrap();
        assert_eq!(response.user.stackhawk_id, "me");
        assert_eq!(response.user.external.organizations.len(), 1);
    }
}
