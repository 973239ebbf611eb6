//! Application output formatter

use comfy_table::Table;

use super::common::{new_table, or_na, print_json};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::hawk::applications::Application;

/// Output applications in the specified format
pub fn output_applications(apps: &[Application], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(apps),
        OutputFormat::Table if apps.is_empty() => {
            println!("No applications found.");
            Ok(())
        }
        OutputFormat::Table => {
            println!("{}", applications_table(apps));
            Ok(())
        }
    }
}

fn applications_table(apps: &[Application]) -> Table {
    let mut table = new_table(vec!["ID", "NAME", "ENV", "STATUS", "TYPE"]);
    for app in apps {
        table.add_row(vec![
            app.application_id.clone(),
            or_na(Some(app.name.as_str())),
            or_na(app.env.as_deref()),
            or_na(app.application_status.as_deref()),
            or_na(app.application_type.as_deref()),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applications_table() {
        let apps = vec![Application {
            application_id: "app-1".to_string(),
            name: "web".to_string(),
            env: Some("prod".to_string()),
            application_status: Some("ACTIVE".to_string()),
            ..Default::default()
        }];
        let rendered = applications_table(&apps).to_string();
        assert!(rendered.contains("app-1"));
        assert!(rendered.contains("prod"));
        assert!(rendered.contains("ACTIVE"));
        assert!(rendered.contains("N/A"));
    }
}
