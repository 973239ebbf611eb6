//! Credential and token data models

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Short-lived bearer token obtained from the login endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "token")]
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl Token {
    pub fn new(value: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            expires_at,
        }
    }

    /// Token expiring `lifetime` from now
    pub fn expiring_in(value: impl Into<String>, lifetime: Duration) -> Self {
        Self::new(value, Utc::now() + lifetime)
    }

    /// Expired once `now` reaches `expires_at`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Usable for requests: non-empty and not expired
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        !self.value.is_empty() && !self.is_expired_at(now)
    }
}

/// Local credentials: API key, default org and cached token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    org_id: Option<String>,
    #[serde(rename = "jwt", default, skip_serializing_if = "Option::is_none")]
    token: Option<Token>,
}

impl Credentials {
    /// Credentials holding only an API key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        let mut creds = Self::default();
        creds.set_api_key(api_key);
        creds
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Replace the API key. Always drops the cached token.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
        self.token = None;
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub fn org_id(&self) -> Option<&str> {
        self.org_id.as_deref()
    }

    /// Set or clear the default organization (empty clears)
    pub fn set_org_id(&mut self, org_id: Option<String>) {
        self.org_id = org_id.filter(|id| !id.is_empty());
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn set_token(&mut self, token: Token) {
        self.token = Some(token);
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Whether the cached token is missing or unusable at `now`
    pub fn token_expired_at(&self, now: DateTime<Utc>) -> bool {
        match &self.token {
            Some(token) => !token.is_valid_at(now),
            None => true,
        }
    }

    pub fn has_valid_token(&self) -> bool {
        !self.token_expired_at(Utc::now())
    }
}
