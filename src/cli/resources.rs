//! Resource subcommands and their arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;
use super::enums::ScanView;
use crate::config::defaults;

/// Organization subcommands
#[derive(Subcommand, Debug)]
pub enum OrgAction {
    /// List organizations you belong to
    List(OrgListArgs),

    /// Set the default organization ID
    Set {
        /// Organization ID
        org_id: String,
    },

    /// Show the default organization ID
    Get,

    /// Clear the default organization ID
    Clear,
}

/// Arguments for 'org list'
#[derive(Parser, Debug)]
pub struct OrgListArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Limit number of results (0 = no limit)
    #[arg(short, long, default_value_t = 0)]
    pub limit: usize,
}

/// User subcommands
#[derive(Subcommand, Debug)]
pub enum UserAction {
    /// List users in an organization (requires ADMIN or OWNER)
    List(UserListArgs),
}

/// Arguments for 'user list'
#[derive(Parser, Debug)]
pub struct UserListArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Limit number of results (0 = no limit)
    #[arg(short, long, default_value_t = 0)]
    pub limit: usize,

    /// Organization ID (uses default if not specified)
    #[arg(short, long)]
    pub org: Option<String>,

    /// Filter by role (admin, member, owner; case-insensitive)
    #[arg(short, long)]
    pub role: Option<String>,
}

/// Team subcommands
#[derive(Subcommand, Debug)]
pub enum TeamAction {
    /// List teams in an organization (requires ADMIN or OWNER)
    List(TeamListArgs),
}

/// Arguments for 'team list'
#[derive(Parser, Debug)]
pub struct TeamListArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Limit number of results (0 = no limit)
    #[arg(short, long, default_value_t = 0)]
    pub limit: usize,

    /// Organization ID (uses default if not specified)
    #[arg(short, long)]
    pub org: Option<String>,
}

/// Application subcommands
#[derive(Subcommand, Debug)]
pub enum AppAction {
    /// List applications in an organization
    List(AppListArgs),
}

/// Arguments for 'app list'
#[derive(Parser, Debug)]
pub struct AppListArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Limit number of results (0 = no limit)
    #[arg(short, long, default_value_t = 0)]
    pub limit: usize,

    /// Organization ID (uses default if not specified)
    #[arg(short, long)]
    pub org: Option<String>,

    /// Filter by application status (case-insensitive)
    #[arg(short, long)]
    pub status: Option<String>,
}

/// Scan subcommands
#[derive(Subcommand, Debug)]
pub enum ScanAction {
    /// List scans in an organization
    List(ScanListArgs),

    /// Show one scan from the default organization
    Get(ScanGetArgs),

    /// List alerts found by a scan
    Alerts(ScanAlertsArgs),
}

/// Arguments for 'scan list'
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        hawkop scan list --app web --status completed\n  \
        hawkop scan list --page-size 50 --page-token <TOKEN>")]
pub struct ScanListArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Limit number of results (0 = no limit)
    #[arg(short, long, default_value_t = 0)]
    pub limit: usize,

    /// Organization ID (uses default if not specified)
    #[arg(short, long)]
    pub org: Option<String>,

    /// Filter by application name or ID (substring, case-insensitive)
    #[arg(short, long)]
    pub app: Option<String>,

    /// Filter by environment (case-insensitive)
    #[arg(short, long)]
    pub env: Option<String>,

    /// Filter by scan status (case-insensitive)
    #[arg(short, long)]
    pub status: Option<String>,

    /// Sort field
    #[arg(long, default_value = defaults::SCAN_SORT_FIELD)]
    pub sort_by: String,

    /// Sort direction (asc, desc)
    #[arg(long, default_value = defaults::SCAN_SORT_DIR)]
    pub sort_dir: String,

    /// Page size (0 = maximum of 1000)
    #[arg(long, default_value_t = 0)]
    pub page_size: u32,

    /// Page token from a previous listing
    #[arg(long)]
    pub page_token: Option<String>,
}

/// Arguments for 'scan get'
#[derive(Parser, Debug)]
pub struct ScanGetArgs {
    /// Scan ID
    pub scan_id: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Detail view
    #[arg(short, long, value_enum, default_value_t = ScanView::Overview)]
    pub view: ScanView,
}

/// Arguments for 'scan alerts'
#[derive(Parser, Debug)]
pub struct ScanAlertsArgs {
    /// Scan ID
    pub scan_id: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Filter by severity (high, medium, low; case-insensitive)
    #[arg(short, long)]
    pub severity: Option<String>,

    /// Limit number of results (0 = no limit)
    #[arg(short, long, default_value_t = 0)]
    pub limit: usize,
}
