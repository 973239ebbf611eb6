//! StackHawk API client module
//!
//! Authenticated requests against the StackHawk REST API: token lifecycle,
//! rate limiting, retry handling and the per-resource accessors.

mod auth;
mod client;
pub mod applications;
pub mod helpers;
pub mod models;
pub mod organizations;
pub mod pagination;
pub mod rate_limit;
pub mod scans;
pub mod teams;
pub mod traits;
pub mod users;

pub use applications::{run_app_command, Application};
pub use auth::AuthResponse;
pub use client::HawkClient;
pub use models::FlexNumber;
pub use organizations::{run_org_command, Organization};
pub use pagination::{Page, PaginationRequest};
pub use rate_limit::RateLimiter;
pub use scans::{run_scan_command, ScanAlert, ScanResult};
pub use teams::{run_team_command, Team};
pub use traits::Envelope;
pub use users::{run_user_command, OrganizationMember, User};
