//! CLI argument parsing

mod common;
mod enums;
mod resources;
mod setup;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{credentials, defaults};

pub use common::OutputFormat;
pub use enums::{ScanView, VersionFormat};
pub use resources::{
    AppAction, AppListArgs, OrgAction, OrgListArgs, ScanAction, ScanAlertsArgs, ScanGetArgs,
    ScanListArgs, TeamAction, TeamListArgs, UserAction, UserListArgs,
};
pub use setup::{InitArgs, VersionArgs};

/// HawkOp - a CLI companion for the StackHawk DAST platform
#[derive(Parser, Debug)]
#[command(name = "hawkop")]
#[command(version)]
#[command(about = "A CLI companion for the StackHawk DAST platform", long_about = None)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Path to the config file [default: ~/.config/hawkop/config.json]
    #[arg(long, global = true, env = credentials::CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// API base URL override
    #[arg(long, global = true, hide = true, env = credentials::API_URL_ENV_VAR)]
    pub api_url: Option<String>,

    /// Batch mode - no spinners or interactive prompts
    #[arg(long, global = true, default_value_t = false)]
    pub batch: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Set up your API key and default organization
    Init(InitArgs),

    /// Show configuration and authentication status
    Status,

    /// Show version and build information
    Version(VersionArgs),

    /// Manage organizations
    #[command(visible_alias = "orgs")]
    Org {
        #[command(subcommand)]
        action: OrgAction,
    },

    /// Manage organization users
    #[command(visible_alias = "users")]
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage teams
    #[command(visible_alias = "teams")]
    Team {
        #[command(subcommand)]
        action: TeamAction,
    },

    /// Manage applications
    #[command(visible_alias = "apps")]
    App {
        #[command(subcommand)]
        action: AppAction,
    },

    /// Inspect scans and their alerts
    #[command(visible_alias = "scans")]
    Scan {
        #[command(subcommand)]
        action: ScanAction,
    },
}
