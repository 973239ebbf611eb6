//! Scan API operations

use log::debug;

use crate::error::Result;
use crate::hawk::pagination::{Page, PaginationRequest};
use crate::hawk::HawkClient;

use super::models::{ScanAlert, ScanAlertsResponse, ScanResult, ScansResponse};

impl HawkClient {
    /// Get one page of scan results for an organization
    pub async fn list_org_scans(
        &mut self,
        org: &str,
        pagination: &PaginationRequest,
    ) -> Result<Page<ScanResult>> {
        let path = format!("/api/v1/scan/{}", urlencoding::encode(org));
        debug!(
            "Fetching scans for organization: {} (page size {})",
            org,
            pagination.effective_page_size()
        );

        self.fetch_page::<ScanResult, ScansResponse>(&path, &pagination.to_query_params())
            .await
    }

    /// Find a scan by id in the first page of an organization's scans
    pub async fn find_scan(&mut self, org: &str, scan_id: &str) -> Result<Option<ScanResult>> {
        let page = self
            .list_org_scans(org, &PaginationRequest::default())
            .await?;
        Ok(page.items.into_iter().find(|result| result.scan.id == scan_id))
    }

    /// Get all alerts of a scan, flattened across applications
    pub async fn get_scan_alerts(&mut self, scan_id: &str) -> Result<Vec<ScanAlert>> {
        let path = format!("/api/v1/scan/{}/alerts", urlencoding::encode(scan_id));
        debug!("Fetching alerts for scan: {}", scan_id);

        let page = self
            .fetch_page::<ScanAlert, ScanAlertsResponse>(&path, &[])
            .await?;
        Ok(page.items)
    }
}
