//! Organization command handlers

use log::debug;

use crate::cli::{OrgAction, OrgListArgs};
use crate::credentials::CredentialStore;
use crate::error::{HawkError, Result};
use crate::hawk::helpers::apply_limit;
use crate::hawk::HawkClient;
use crate::output::output_organizations;
use crate::ui::{create_spinner, finish_spinner};

/// Dispatch org subcommands. Only `list` talks to the API.
pub async fn run_org_command(
    store: CredentialStore,
    base_url: &str,
    action: &OrgAction,
    batch: bool,
) -> Result<()> {
    match action {
        OrgAction::List(args) => {
            let mut client = HawkClient::from_store(store, base_url)?;
            run_org_list(&mut client, args, batch).await
        }
        OrgAction::Set { org_id } => run_org_set(&store, org_id),
        OrgAction::Get => run_org_get(&store),
        OrgAction::Clear => run_org_clear(&store),
    }
}

async fn run_org_list(client: &mut HawkClient, args: &OrgListArgs, batch: bool) -> Result<()> {
    let spinner = create_spinner("Fetching organizations...", batch);
    let result = client.list_organizations().await;
    finish_spinner(spinner);

    let mut orgs = result?;
    debug!("Found {} organizations", orgs.len());
    apply_limit(&mut orgs, args.limit);

    output_organizations(&orgs, args.format)
}

fn run_org_set(store: &CredentialStore, org_id: &str) -> Result<()> {
    let mut credentials = store.load()?;
    if !credentials.has_api_key() {
        return Err(HawkError::NoCredentials(
            "No API key configured. Please run 'hawkop init' first.".to_string(),
        ));
    }

    let org_id = org_id.trim();
    if org_id.is_empty() {
        return Err(HawkError::Config(
            "Organization ID cannot be empty".to_string(),
        ));
    }

    credentials.set_org_id(Some(org_id.to_string()));
    store.save(&credentials)?;
    println!("Default organization ID set to: {}", org_id);
    Ok(())
}

fn run_org_get(store: &CredentialStore) -> Result<()> {
    let credentials = store.load()?;
    match credentials.org_id() {
        Some(org) => println!("Default organization ID: {}", org),
        None => {
            println!("No default organization ID configured.");
            println!("Use 'hawkop org set <org-id>' to set one.");
        }
    }
    Ok(())
}

fn run_org_clear(store: &CredentialStore) -> Result<()> {
    let mut credentials = store.load()?;
    if credentials.org_id().is_none() {
        println!("No default organization ID is currently set.");
        return Ok(());
    }

    credentials.set_org_id(None);
    store.save(&credentials)?;
    println!("Default organization ID cleared.");
    Ok(())
}
