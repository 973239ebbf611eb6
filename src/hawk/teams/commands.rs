//! Team command handlers

use crate::cli::{TeamAction, TeamListArgs};
use crate::error::Result;
use crate::hawk::helpers::apply_limit;
use crate::hawk::HawkClient;
use crate::output::output_teams;
use crate::ui::{create_spinner, finish_spinner};

/// Dispatch team subcommands
pub async fn run_team_command(
    client: &mut HawkClient,
    action: &TeamAction,
    batch: bool,
) -> Result<()> {
    match action {
        TeamAction::List(args) => run_team_list(client, args, batch).await,
    }
}

async fn run_team_list(client: &mut HawkClient, args: &TeamListArgs, batch: bool) -> Result<()> {
    let org = client.resolve_org(args.org.as_deref())?;

    let spinner = create_spinner(&format!("Fetching teams for '{}'...", org), batch);
    let result = client.list_org_teams(&org).await;
    finish_spinner(spinner);

    let mut teams = result?;
    apply_limit(&mut teams, args.limit);

    output_teams(&teams, args.format)
}
