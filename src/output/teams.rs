//! Team output formatter

use comfy_table::Table;

use super::common::{format_date, new_table, or_na, print_json};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::hawk::teams::Team;

/// Output teams in the specified format
pub fn output_teams(teams: &[Team], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(teams),
        OutputFormat::Table if teams.is_empty() => {
            println!("No teams found.");
            Ok(())
        }
        OutputFormat::Table => {
            println!("{}", teams_table(teams));
            Ok(())
        }
    }
}

fn teams_table(teams: &[Team]) -> Table {
    let mut table = new_table(vec!["ID", "NAME", "USERS", "APPS", "CREATED"]);
    for team in teams {
        table.add_row(vec![
            team.id.clone(),
            or_na(Some(team.name.as_str())),
            team.users.len().to_string(),
            team.applications.len().to_string(),
            format_date(team.created_timestamp.as_deref(), "%Y-%m-%d"),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teams_table_counts() {
        let teams: Vec<Team> = serde_json::from_value(serde_json::json!([
            {
                "id": "team-1",
                "name": "Platform",
                "users": [{"stackhawkId": "a"}, {"stackhawkId": "b"}],
                "applications": [{"id": "app-1"}]
            },
            {"id": "team-2"}
        ]))
        .unwrap();

        let rendered = teams_table(&teams).to_string();
        assert!(rendered.contains("team-1"));
        assert!(rendered.contains("Platform"));
        assert!(rendered.contains("N/A"));
    }
}
