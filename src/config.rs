/// Configuration constants for the StackHawk API
pub mod api {
    /// Default API base URL
    pub const BASE_URL: &str = "https://api.stackhawk.com";

    /// Login endpoint (exchanges the API key for a JWT)
    pub const AUTH_LOGIN: &str = "/api/v1/auth/login";

    /// Current user endpoint
    pub const USER: &str = "/api/v1/user";

    /// Header carrying the API key on login
    pub const API_KEY_HEADER: &str = "X-ApiKey";

    /// Client identifier sent on every request
    pub const USER_AGENT: &str = "hawkop-cli";

    /// Largest page size the platform accepts (also our default)
    pub const MAX_PAGE_SIZE: u32 = 1000;

    /// Platform request ceiling
    pub const MAX_REQUESTS_PER_MINUTE: u32 = 360;

    /// Wait applied to a 429 without a usable Retry-After header (seconds)
    pub const RETRY_AFTER_DEFAULT_SECS: u64 = 60;

    /// Total request timeout (seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Connect timeout (seconds)
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Configuration constants for the local credentials file
pub mod credentials {
    /// Config directory, relative to HOME
    pub const DIR_NAME: &str = ".config/hawkop";

    /// Config file name
    pub const FILE_NAME: &str = "config.json";

    /// Environment variable overriding the config file path
    pub const CONFIG_ENV_VAR: &str = "HAWKOP_CONFIG";

    /// Environment variable overriding the API base URL
    pub const API_URL_ENV_VAR: &str = "HAWKOP_API_URL";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Token lifetime assumed when login omits an expiry (minutes)
    pub const TOKEN_LIFETIME_MINUTES: i64 = 30;

    /// Platform default sort field for scans (not sent on the wire)
    pub const SCAN_SORT_FIELD: &str = "timestamp";

    /// Platform default sort direction for scans (not sent on the wire)
    pub const SCAN_SORT_DIR: &str = "desc";
}
