//! Build and version information

use serde::Serialize;

use crate::cli::VersionFormat;
use crate::error::Result;
use crate::output::print_json;

const UNKNOWN: &str = "unknown";

/// Version and build details of this binary
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub version: String,
    pub git_commit: String,
    pub build_time: String,
    pub platform: String,
    pub arch: String,
}

impl VersionInfo {
    /// Details of the running binary. Commit and build time are baked in at
    /// compile time via HAWKOP_GIT_COMMIT and HAWKOP_BUILD_TIME.
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            git_commit: option_env!("HAWKOP_GIT_COMMIT")
                .unwrap_or(UNKNOWN)
                .to_string(),
            build_time: option_env!("HAWKOP_BUILD_TIME")
                .unwrap_or(UNKNOWN)
                .to_string(),
            platform: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
        }
    }

    /// One-line description, e.g. "HawkOp version 0.3.0, commit 1a2b3c4d, linux/x86_64"
    pub fn detailed(&self) -> String {
        let mut parts = vec![format!("HawkOp version {}", self.version)];

        if is_known(&self.git_commit) {
            let short: String = self.git_commit.chars().take(8).collect();
            parts.push(format!("commit {}", short));
        }
        if is_known(&self.build_time) {
            parts.push(format!("built {}", self.build_time));
        }
        parts.push(format!("{}/{}", self.platform, self.arch));

        parts.join(", ")
    }
}

fn is_known(value: &str) -> bool {
    !value.is_empty() && value != UNKNOWN
}

/// Print version information
pub fn run_version_command(format: VersionFormat) -> Result<()> {
    let info = VersionInfo::current();
    match format {
        VersionFormat::Text => {
            println!("{}", info.detailed());
            Ok(())
        }
        VersionFormat::Json => print_json(&info),
    }
}
