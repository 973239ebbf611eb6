//! Arguments for setup commands (init, version)

use clap::Parser;

use super::enums::VersionFormat;

/// Arguments for 'init'
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
        hawkop init                              # interactive\n  \
        hawkop init --api-key <KEY> --org <ORG>  # non-interactive")]
pub struct InitArgs {
    /// StackHawk API key (prompted for when omitted)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Default organization ID (prompted for when omitted)
    #[arg(long)]
    pub org: Option<String>,
}

/// Arguments for 'version'
#[derive(Parser, Debug)]
pub struct VersionArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = VersionFormat::Text)]
    pub format: VersionFormat,
}
