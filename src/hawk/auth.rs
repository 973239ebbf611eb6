//! Token lifecycle: validity checks and API key login

use chrono::{DateTime, Duration, Utc};
use log::{debug, info};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::{api, defaults};
use crate::credentials::Token;
use crate::error::{HawkError, Result};

use super::client::HawkClient;

/// Login endpoint response
#[derive(Deserialize, Debug)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl HawkClient {
    /// Make sure a usable bearer token is cached, logging in if needed.
    /// Does nothing when the cached token is still valid.
    pub async fn ensure_valid_token(&mut self) -> Result<()> {
        if self.credentials.has_valid_token() {
            return Ok(());
        }

        if !self.credentials.has_api_key() {
            return Err(HawkError::NoCredentials(
                "No API key configured. Run 'hawkop init' to set up your credentials."
                    .to_string(),
            ));
        }

        debug!("No valid token cached, authenticating");
        self.authenticate().await
    }

    /// Exchange the API key for a fresh token and persist it
    pub async fn authenticate(&mut self) -> Result<()> {
        let url = format!("{}{}", self.base_url, api::AUTH_LOGIN);
        debug!("Authenticating at {}", url);

        let response = self
            .http
            .get(&url)
            .header(api::API_KEY_HEADER, self.credentials.api_key())
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, api::USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(HawkError::AuthFailed {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let auth: AuthResponse = serde_json::from_slice(&bytes)
            .map_err(|e| HawkError::Json(format!("failed to parse auth response: {}", e)))?;

        if auth.token.is_empty() {
            return Err(HawkError::AuthFailed {
                status: status.as_u16(),
                body: "login response did not include a token".to_string(),
            });
        }

        let expires_at = auth
            .expires_at
            .unwrap_or_else(|| Utc::now() + Duration::minutes(defaults::TOKEN_LIFETIME_MINUTES));

        self.credentials.set_token(Token::new(auth.token, expires_at));
        self.store
            .save(&self.credentials)
            .map_err(|e| HawkError::Persist(e.to_string()))?;

        info!(
            "Authenticated ({} token), valid until {}",
            auth.token_type.as_deref().unwrap_or("bearer"),
            expires_at
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{CredentialStore, Credentials};
    use tempfile::TempDir;
    use wiremock::matchers::{header, method, path, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn key_only_client(server: &MockServer, dir: &TempDir) -> HawkClient {
        HawkClient::with_credentials(
            &server.uri(),
            Credentials::with_api_key("test-api-key"),
            dir,
        )
    }

    async fn mount_login(server: &MockServer, body: serde_json::Value, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path("/api/v1/auth/login"))
            .and(header("X-ApiKey", "test-api-key"))
            .and(header("Accept", "application/json"))
            .and(header("User-Agent", "hawkop-cli"))
            .and(query_param_is_missing("apiKey"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_valid_token_makes_no_login_call() {
        let server = MockServer::start().await;
        mount_login(&server, serde_json::json!({"token": "x"}), 0).await;

        let dir = TempDir::new().unwrap();
        let mut client = HawkClient::test_client(&server.uri(), &dir);
        client.ensure_valid_token().await.unwrap();
        client.ensure_valid_token().await.unwrap();

        assert_eq!(client.credentials().token().unwrap().value, "test-token");
    }

    #[tokio::test]
    async fn test_missing_token_logs_in_once() {
        let server = MockServer::start().await;
        mount_login(&server, serde_json::json!({"token": "fresh"}), 1).await;

        let dir = TempDir::new().unwrap();
        let mut client = key_only_client(&server, &dir);
        client.ensure_valid_token().await.unwrap();
        client.ensure_valid_token().await.unwrap();

        assert_eq!(client.credentials().token().unwrap().value, "fresh");
    }

    #[tokio::test]
    async fn test_expired_token_logs_in_once() {
        let server = MockServer::start().await;
        mount_login(&server, serde_json::json!({"token": "fresh"}), 1).await;

        let dir = TempDir::new().unwrap();
        let mut credentials = Credentials::with_api_key("test-api-key");
        credentials.set_token(Token::expiring_in("stale", Duration::minutes(-5)));
        let mut client = HawkClient::with_credentials(&server.uri(), credentials, &dir);

        client.ensure_valid_token().await.unwrap();
        assert_eq!(client.credentials().token().unwrap().value, "fresh");
    }

    #[tokio::test]
    async fn test_no_api_key_fails_without_network() {
        let server = MockServer::start().await;
        mount_login(&server, serde_json::json!({"token": "x"}), 0).await;

        let dir = TempDir::new().unwrap();
        let mut client =
            HawkClient::with_credentials(&server.uri(), Credentials::default(), &dir);
        let err = client.ensure_valid_token().await.unwrap_err();

        assert!(matches!(err, HawkError::NoCredentials(_)));
        assert!(err.to_string().contains("hawkop init"));
    }

    #[tokio::test]
    async fn test_default_expiry_is_thirty_minutes() {
        let server = MockServer::start().await;
        mount_login(&server, serde_json::json!({"token": "fresh"}), 1).await;

        let dir = TempDir::new().unwrap();
        let mut client = key_only_client(&server, &dir);
        client.authenticate().await.unwrap();

        let remaining = client.credentials().token().unwrap().expires_at - Utc::now();
        assert!(remaining > Duration::minutes(29));
        assert!(remaining < Duration::minutes(31));
    }

    #[tokio::test]
    async fn test_explicit_expiry_is_kept() {
        let server = MockServer::start().await;
        mount_login(
            &server,
            serde_json::json!({
                "token": "fresh",
                "expires_at": "2099-01-01T00:00:00Z",
                "token_type": "Bearer"
            }),
            1,
        )
        .await;

        let dir = TempDir::new().unwrap();
        let mut client = key_only_client(&server, &dir);
        client.authenticate().await.unwrap();

        let token = client.credentials().token().unwrap();
        assert_eq!(token.expires_at.to_rfc3339(), "2099-01-01T00:00:00+00:00");
    }

    #[tokio::test]
    async fn test_login_persists_token() {
        let server = MockServer::start().await;
        mount_login(&server, serde_json::json!({"token": "fresh"}), 1).await;

        let dir = TempDir::new().unwrap();
        let mut client = key_only_client(&server, &dir);
        client.authenticate().await.unwrap();

        let saved = CredentialStore::with_path(dir.path().join("config.json"))
            .load()
            .unwrap();
        assert_eq!(saved.api_key(), "test-api-key");
        assert_eq!(saved.token().unwrap().value, "fresh");
    }

    #[tokio::test]
    async fn test_login_rejected_is_auth_failed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
            .expect(1)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let mut client = key_only_client(&server, &dir);
        let err = client.authenticate().await.unwrap_err();

        match err {
            HawkError::AuthFailed { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid key");
            }
            other => panic!("Expected AuthFailed, got {:?}", other),
        }
        assert!(client.credentials().token().is_none());
    }

    #[tokio::test]
    async fn test_login_bad_json_is_json_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .expect(1)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let mut client = key_only_client(&server, &dir);
        let err = client.authenticate().await.unwrap_err();
        assert!(matches!(err, HawkError::Json(_)));
    }

    #[tokio::test]
    async fn test_save_failure_is_persist_error() {
        let server = MockServer::start().await;
        mount_login(&server, serde_json::json!({"token": "fresh"}), 1).await;

        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "file").unwrap();

        let mut client = key_only_client(&server, &dir);
        client.store = CredentialStore::with_path(blocker.join("config.json"));

        let err = client.authenticate().await.unwrap_err();
        assert!(matches!(err, HawkError::Persist(_)));
        assert!(err.to_string().contains("failed to save JWT token"));
    }
}
