//! Organization API operations

use log::debug;

use crate::error::Result;
use crate::hawk::HawkClient;

use super::models::Organization;

impl HawkClient {
    /// List organizations the user belongs to, one entry per membership.
    ///
    /// Derived from the current user; membership order is kept and duplicates
    /// are not removed.
    pub async fn list_organizations(&mut self) -> Result<Vec<Organization>> {
        let user = self.get_user().await?;
        let orgs: Vec<Organization> = user
            .external
            .organizations
            .into_iter()
            .map(|membership| membership.organization)
            .collect();
        debug!("User belongs to {} organization(s)", orgs.len());
        Ok(orgs)
    }
}
