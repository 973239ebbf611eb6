//! Organization member output formatter

use comfy_table::Table;

use super::common::{format_date, new_table, or_na, print_json};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::hawk::users::OrganizationMember;

/// Output organization members in the specified format
pub fn output_users(members: &[OrganizationMember], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(members),
        OutputFormat::Table if members.is_empty() => {
            println!("No users found.");
            Ok(())
        }
        OutputFormat::Table => {
            println!("{}", users_table(members));
            Ok(())
        }
    }
}

fn users_table(members: &[OrganizationMember]) -> Table {
    let mut table = new_table(vec!["NAME", "EMAIL", "ROLE", "PROVIDER", "CREATED"]);
    for member in members {
        let name = member.display_name();
        table.add_row(vec![
            or_na(Some(name.as_str())),
            or_na(Some(member.email())),
            or_na(Some(member.role())),
            or_na(Some(member.provider_slug())),
            format_date(member.created_timestamp.as_deref(), "%Y-%m-%d"),
        ]);
    }
    table
}
