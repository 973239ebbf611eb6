//! Team API operations

use log::debug;

use crate::error::Result;
use crate::hawk::pagination::standard_params;
use crate::hawk::HawkClient;

use super::models::{Team, TeamsResponse};

impl HawkClient {
    /// List teams in an organization
    pub async fn list_org_teams(&mut self, org: &str) -> Result<Vec<Team>> {
        let path = format!("/api/v1/org/{}/teams", urlencoding::encode(org));
        debug!("Fetching teams for organization: {}", org);

        let page = self
            .fetch_page::<Team, TeamsResponse>(&path, &standard_params())
            .await?;
        Ok(page.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HawkError;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_org_teams() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/org/my-org/teams"))
            .and(query_param("pageSize", "1000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "teams": [
                    {"id": "team-abc", "name": "owners", "users": [{"stackhawkId": "u1"}]},
                    {"id": "team-def", "name": "developers"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let mut client = HawkClient::test_client(&server.uri(), &dir);
        let teams = client.list_org_teams("my-org").await.unwrap();

        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].id, "team-abc");
        assert_eq!(teams[0].users.len(), 1);
        assert_eq!(teams[1].name, "developers");
    }

    #[tokio::test]
    async fn test_list_org_teams_forbidden() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/org/my-org/teams"))
            .respond_with(ResponseTemplate::new(403).set_body_string("admin only"))
            .expect(1)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let mut client = HawkClient::test_client(&server.uri(), &dir);
        let err = client.list_org_teams("my-org").await.unwrap_err();

        assert!(matches!(err, HawkError::Client { status: 403, .. }));
        assert!(err.to_string().contains("insufficient permissions"));
    }

    #[tokio::test]
    async fn test_org_id_is_path_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/org/a%20b/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"teams": []})))
            .expect(1)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let mut client = HawkClient::test_client(&server.uri(), &dir);
        assert!(client.list_org_teams("a b").await.unwrap().is_empty());
    }
}
