//! Application API operations

use log::debug;

use crate::error::Result;
use crate::hawk::pagination::standard_params;
use crate::hawk::HawkClient;

use super::models::{Application, ApplicationsResponse};

impl HawkClient {
    /// List applications in an organization
    pub async fn list_org_applications(&mut self, org: &str) -> Result<Vec<Application>> {
        let path = format!("/api/v2/org/{}/apps", urlencoding::encode(org));
        debug!("Fetching applications for organization: {}", org);

        let page = self
            .fetch_page::<Application, ApplicationsResponse>(&path, &standard_params())
            .await?;
        Ok(page.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_org_applications_uses_v2() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/org/my-org/apps"))
            .and(query_param("pageSize", "1000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "applications": [
                    {"applicationId": "app-1", "name": "web", "applicationStatus": "ACTIVE"},
                    {"applicationId": "app-2", "name": "api", "applicationStatus": "ENV_INCOMPLETE"}
                ],
                "totalCount": "2",
                "hasNext": false
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let mut client = HawkClient::test_client(&server.uri(), &dir);
        let apps = client.list_org_applications("my-org").await.unwrap();

        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].application_id, "app-1");
        assert!(apps[1].has_status("env_incomplete"));
    }

    #[tokio::test]
    async fn test_list_org_applications_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/org/my-org/apps"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "applications": "not-a-list"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let mut client = HawkClient::test_client(&server.uri(), &dir);
        let err = client.list_org_applications("my-org").await.unwrap_err();
        assert!(matches!(err, crate::error::HawkError::Json(_)));
    }
}
