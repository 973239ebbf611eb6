//! User API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hawk::pagination::{standard_params, Page};
use crate::hawk::HawkClient;

use super::models::{MembersResponse, OrganizationMember, User, UserResponse};

impl HawkClient {
    /// Get the authenticated user, including their organization memberships
    pub async fn get_user(&mut self) -> Result<User> {
        let response: UserResponse = self.get_json(api::USER, &[]).await?;
        Ok(response.user)
    }

    /// Get one page (up to the maximum page size) of organization members
    pub async fn list_org_members_page(&mut self, org: &str) -> Result<Page<OrganizationMember>> {
        let path = format!("/api/v1/org/{}/members", urlencoding::encode(org));
        debug!("Fetching members for organization: {}", org);

        self.fetch_page::<OrganizationMember, MembersResponse>(&path, &standard_params())
            .await
    }

    /// List members of an organization
    pub async fn list_org_members(&mut self, org: &str) -> Result<Vec<OrganizationMember>> {
        Ok(self.list_org_members_page(org).await?.items)
    }
}
