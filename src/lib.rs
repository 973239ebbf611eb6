//! HawkOp - a CLI companion for the StackHawk DAST platform
//!
//! Lists organizations, members, teams, applications, scans and alerts
//! through the StackHawk REST API.
//!
//! # Features
//!
//! - API key login with a cached, auto-refreshed JWT
//! - One re-authentication on 401 and one Retry-After wait on 429
//! - Client-side spacing of requests under the platform rate limit
//! - Table and JSON output
//!
//! # Example
//!
//! ```bash
//! # Store the API key and a default organization
//! hawkop init --api-key hawk.xxxx --org my-org-id
//!
//! # List applications in the default organization
//! hawkop app list
//!
//! # Recent completed scans for one app, as JSON
//! hawkop scan list --app web --status completed -f json
//! ```

pub mod cli;
pub mod config;
pub mod credentials;
pub mod error;
pub mod hawk;
pub mod output;
pub mod ui;
pub mod version;

pub use cli::{Cli, Command, OutputFormat};
pub use credentials::{run_init_command, run_status_command, CredentialStore, Credentials, Token};
pub use error::{HawkError, Result};
pub use hawk::{
    run_app_command, run_org_command, run_scan_command, run_team_command, run_user_command,
    HawkClient,
};
pub use version::{run_version_command, VersionInfo};
