//! Organization member command handlers

use crate::cli::{UserAction, UserListArgs};
use crate::error::Result;
use crate::hawk::helpers::{apply_limit, retain_matching};
use crate::hawk::HawkClient;
use crate::output::output_users;
use crate::ui::{create_spinner, finish_spinner};

/// Dispatch user subcommands
pub async fn run_user_command(
    client: &mut HawkClient,
    action: &UserAction,
    batch: bool,
) -> Result<()> {
    match action {
        UserAction::List(args) => run_user_list(client, args, batch).await,
    }
}

async fn run_user_list(client: &mut HawkClient, args: &UserListArgs, batch: bool) -> Result<()> {
    let org = client.resolve_org(args.org.as_deref())?;

    let spinner = create_spinner(&format!("Fetching users for '{}'...", org), batch);
    let result = client.list_org_members(&org).await;
    finish_spinner(spinner);

    let mut members = result?;
    retain_matching(&mut members, args.role.as_deref(), |m| m.role());
    apply_limit(&mut members, args.limit);

    output_users(&members, args.format)
}
