//! Output formatting module
//!
//! Each resource renders either as a borderless table or as pretty JSON.

mod applications;
mod common;
mod organizations;
mod scans;
mod teams;
mod users;

pub use applications::output_applications;
pub use common::{print_json, NOT_AVAILABLE};
pub use organizations::output_organizations;
pub use scans::{output_scan_alerts, output_scan_overview, output_scan_stats, output_scans};
pub use teams::output_teams;
pub use users::output_users;
