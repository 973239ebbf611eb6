//! StackHawk HTTP client and authenticated request executor

use std::time::Duration;

use log::{debug, info, warn};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER, USER_AGENT};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;

use crate::config::api;
use crate::credentials::{CredentialStore, Credentials};
use crate::error::{ClientErrorKind, HawkError, Result};

use super::pagination::Page;
use super::rate_limit::RateLimiter;
use super::traits::Envelope;

/// Where the executor is in its single-retry lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SendState {
    /// First attempt; a 401 or 429 may still be retried
    Sending,
    /// Resent after re-authentication; terminal
    Retrying401,
    /// Resent after the rate-limit wait; terminal
    Retrying429,
}

/// StackHawk API client
///
/// Owns the credentials for its lifetime. Every operation takes `&mut self`,
/// so only one request is ever in flight.
pub struct HawkClient {
    pub(super) http: Client,
    pub(super) base_url: String,
    pub(super) credentials: Credentials,
    pub(super) store: CredentialStore,
    limiter: RateLimiter,
    /// Wait applied to a 429 without a usable Retry-After header
    retry_after_default: Duration,
}

impl HawkClient {
    /// Create a new client with the platform timeouts and rate ceiling
    pub fn new(credentials: Credentials, store: CredentialStore, base_url: &str) -> Self {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            store,
            limiter: RateLimiter::per_minute(api::MAX_REQUESTS_PER_MINUTE),
            retry_after_default: Duration::from_secs(api::RETRY_AFTER_DEFAULT_SECS),
        }
    }

    /// Load credentials from the store and build a client around them
    pub fn from_store(store: CredentialStore, base_url: &str) -> Result<Self> {
        let credentials = store.load()?;
        Ok(Self::new(credentials, store, base_url))
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve org: explicit CLI value wins, then the configured default
    pub fn resolve_org(&self, explicit: Option<&str>) -> Result<String> {
        explicit
            .filter(|org| !org.is_empty())
            .or_else(|| self.credentials.org_id())
            .map(str::to_string)
            .ok_or_else(|| {
                HawkError::Config(
                    "No organization specified. Use --org or set a default with \
                     'hawkop org set <org-id>'"
                        .to_string(),
                )
            })
    }

    /// Send an authenticated request and classify the response.
    ///
    /// A 401 triggers one re-authentication and one resend. A 429 triggers one
    /// wait (Retry-After or the default) and one resend. The resend's outcome is
    /// final. All other non-2xx statuses fail without retry.
    pub async fn execute(
        &mut self,
        method: Method,
        endpoint: &str,
        body: Option<&serde_json::Value>,
        query: &[(String, String)],
    ) -> Result<Response> {
        self.ensure_valid_token().await?;

        let url = build_url(&self.base_url, endpoint, query);
        let mut state = SendState::Sending;

        loop {
            self.limiter.throttle().await;
            let response = self.send_once(method.clone(), &url, body).await?;
            let status = response.status();
            debug!("{} {} -> {}", method, url, status.as_u16());

            if status.is_success() {
                return Ok(response);
            }

            match (state, status.as_u16()) {
                (SendState::Sending, 401) => {
                    info!("Token rejected (401), re-authenticating");
                    self.credentials.clear_token();
                    self.ensure_valid_token().await?;
                    state = SendState::Retrying401;
                }
                (SendState::Sending, 429) => {
                    let wait = retry_after(&response).unwrap_or(self.retry_after_default);
                    warn!("Rate limited (429), waiting {:?} before retrying", wait);
                    tokio::time::sleep(wait).await;
                    state = SendState::Retrying429;
                }
                (_, code) => {
                    let body = response.text().await.unwrap_or_default();
                    return Err(classify(code, body));
                }
            }
        }
    }

    /// Rebuild and send one attempt with the current token
    async fn send_once(
        &self,
        method: Method,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Response> {
        let token = self
            .credentials
            .token()
            .map(|t| t.value.as_str())
            .unwrap_or_default();

        let mut builder = self
            .http
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, api::USER_AGENT);

        if let Some(json) = body {
            builder = builder.json(json);
        }

        Ok(builder.send().await?)
    }

    /// GET an endpoint and decode the JSON body
    pub async fn get_json<T>(&mut self, endpoint: &str, query: &[(String, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.execute(Method::GET, endpoint, None, query).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            HawkError::Json(format!("failed to decode response from {}: {}", endpoint, e))
        })
    }

    /// Fetch a single page from a list endpoint
    ///
    /// # Type Parameters
    /// * `T` - The item type (e.g., Team, Application)
    /// * `R` - The envelope type that implements Envelope<T>
    pub async fn fetch_page<T, R>(
        &mut self,
        endpoint: &str,
        query: &[(String, String)],
    ) -> Result<Page<T>>
    where
        R: DeserializeOwned + Envelope<T>,
    {
        let envelope: R = self.get_json(endpoint, query).await?;
        let page = envelope.into_page();
        debug!(
            "Fetched {} items from {} (more pages: {})",
            page.items.len(),
            endpoint,
            page.has_more()
        );
        Ok(page)
    }
}

/// Build the request URL; only non-empty query values are appended
pub(crate) fn build_url(base_url: &str, endpoint: &str, query: &[(String, String)]) -> String {
    let params: Vec<String> = query
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect();

    if params.is_empty() {
        format!("{}{}", base_url, endpoint)
    } else {
        format!("{}{}?{}", base_url, endpoint, params.join("&"))
    }
}

/// Retry-After in integer seconds, if present and parseable
fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

/// Map a terminal non-2xx status to its error
fn classify(status: u16, body: String) -> HawkError {
    match status {
        401 => HawkError::Unauthorized { body },
        429 => HawkError::RateLimited { body },
        s if ClientErrorKind::from_status(s).is_some() => HawkError::Client { status: s, body },
        s => HawkError::Api { status: s, body },
    }
}

#[cfg(test)]
impl HawkClient {
    /// Client against a mock server with a valid token and no throttling
    pub(crate) fn test_client(base_url: &str, dir: &tempfile::TempDir) -> Self {
        use crate::credentials::Token;

        let mut credentials = Credentials::with_api_key("test-api-key");
        credentials.set_token(Token::expiring_in(
            "test-token",
            chrono::Duration::minutes(30),
        ));
        Self::with_credentials(base_url, credentials, dir)
    }

    /// Client against a mock server with the given credentials
    pub(crate) fn with_credentials(
        base_url: &str,
        credentials: Credentials,
        dir: &tempfile::TempDir,
    ) -> Self {
        let store = CredentialStore::with_path(dir.path().join("config.json"));
        let mut client = Self::new(credentials, store, base_url);
        client.limiter = RateLimiter::with_interval(Duration::ZERO);
        client.retry_after_default = Duration::from_millis(10);
        client
    }
}
