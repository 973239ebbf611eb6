use std::fmt;

/// Client-side HTTP failures that are never retried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientErrorKind {
    BadRequest,
    Forbidden,
    NotFound,
    Conflict,
    Unprocessable,
}

impl ClientErrorKind {
    /// Map a status code to its client error kind (None for anything else)
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            400 => Some(Self::BadRequest),
            403 => Some(Self::Forbidden),
            404 => Some(Self::NotFound),
            409 => Some(Self::Conflict),
            422 => Some(Self::Unprocessable),
            _ => None,
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad request",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not found",
            Self::Conflict => "conflict",
            Self::Unprocessable => "unprocessable entity",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            Self::BadRequest => "",
            Self::Forbidden => "insufficient permissions - ",
            Self::NotFound => "resource does not exist - ",
            Self::Conflict => "resource cannot be modified - ",
            Self::Unprocessable => "invalid input - ",
        }
    }
}

/// Error type for HawkOp operations
#[derive(Debug)]
pub enum HawkError {
    /// No API key configured
    NoCredentials(String),
    /// Login endpoint rejected the API key
    AuthFailed { status: u16, body: String },
    /// HTTP transport failed (DNS, connect, timeout)
    Http(reqwest::Error),
    /// 400/403/404/409/422 response
    Client { status: u16, body: String },
    /// 401 on the resend after re-authentication
    Unauthorized { body: String },
    /// 429 on the resend after waiting
    RateLimited { body: String },
    /// Any other non-success response
    Api { status: u16, body: String },
    /// Response body did not match the expected shape
    Json(String),
    /// Saving credentials after login failed
    Persist(String),
    /// Local configuration or argument error
    Config(String),
}

impl HawkError {
    /// HTTP status attached to the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            HawkError::AuthFailed { status, .. }
            | HawkError::Client { status, .. }
            | HawkError::Api { status, .. } => Some(*status),
            HawkError::Unauthorized { .. } => Some(401),
            HawkError::RateLimited { .. } => Some(429),
            HawkError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Client error kind, for 4xx failures that are never retried
    pub fn client_kind(&self) -> Option<ClientErrorKind> {
        match self {
            HawkError::Client { status, .. } => ClientErrorKind::from_status(*status),
            _ => None,
        }
    }
}

impl fmt::Display for HawkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HawkError::NoCredentials(msg) => write!(f, "{}", msg),
            HawkError::AuthFailed { status, body } => {
                write!(f, "authentication failed: HTTP {} - {}", status, body)
            }
            HawkError::Http(e) => write!(f, "request failed: {}", e),
            HawkError::Client { status, body } => match ClientErrorKind::from_status(*status) {
                Some(kind) => write!(
                    f,
                    "{} ({}): {}{}",
                    kind.describe(),
                    status,
                    kind.hint(),
                    body
                ),
                None => write!(f, "client error ({}): {}", status, body),
            },
            HawkError::Unauthorized { body } => {
                write!(f, "unauthorized (401) after re-authentication: {}", body)
            }
            HawkError::RateLimited { body } => {
                write!(f, "rate limited (429) after waiting: {}", body)
            }
            HawkError::Api { status, body } => write!(f, "API error: HTTP {} - {}", status, body),
            HawkError::Json(msg) => write!(f, "JSON error: {}", msg),
            HawkError::Persist(msg) => write!(f, "failed to save JWT token: {}", msg),
            HawkError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for HawkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HawkError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for HawkError {
    fn from(err: reqwest::Error) -> Self {
        HawkError::Http(err)
    }
}

impl From<serde_json::Error> for HawkError {
    fn from(err: serde_json::Error) -> Self {
        HawkError::Json(err.to_string())
    }
}

/// Result type alias for HawkOp operations
pub type Result<T> = std::result::Result<T, HawkError>;
