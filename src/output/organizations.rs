//! Organization output formatter

use comfy_table::Table;

use super::common::{format_date, new_table, or_na, print_json};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::hawk::organizations::Organization;

/// Output organizations in the specified format
pub fn output_organizations(orgs: &[Organization], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(orgs),
        OutputFormat::Table if orgs.is_empty() => {
            println!("No organizations found.");
            Ok(())
        }
        OutputFormat::Table => {
            println!("{}", organizations_table(orgs));
            Ok(())
        }
    }
}

fn organizations_table(orgs: &[Organization]) -> Table {
    let mut table = new_table(vec!["ID", "NAME", "PLAN", "CREATED"]);
    for org in orgs {
        table.add_row(vec![
            org.id.clone(),
            org.name.clone(),
            or_na(org.plan()),
            format_date(org.created_timestamp.as_deref(), "%Y-%m-%d"),
        ]);
    }
    table
}
