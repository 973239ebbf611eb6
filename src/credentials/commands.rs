//! `init` and `status` command handlers

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::cli::InitArgs;
use crate::error::{HawkError, Result};
use crate::ui::{prompt_secret, prompt_text};

use super::models::Credentials;
use super::store::CredentialStore;

/// Set up the API key and default organization, then save
pub fn run_init_command(store: &CredentialStore, args: &InitArgs, batch: bool) -> Result<()> {
    let mut credentials = store.load()?;

    let api_key = match &args.api_key {
        Some(key) => Some(key.clone()),
        None if batch => None,
        None => {
            println!("Let's set up your StackHawk credentials.");
            if credentials.has_api_key() {
                println!("Current API key: {}", mask_secret(Some(credentials.api_key())));
            }
            Some(prompt_secret("API key (Enter to keep current)")?)
        }
    };

    let org = match &args.org {
        Some(org) => Some(org.clone()),
        None if batch => None,
        None => {
            if let Some(current) = credentials.org_id() {
                println!("Current default org ID: {}", current);
            }
            Some(prompt_text("Default organization ID (optional)")?)
        }
    };

    apply_init(&mut credentials, api_key, org)?;
    store.save(&credentials)?;

    println!("Configuration saved to {}", store.path().display());
    if let Some(org) = credentials.org_id() {
        println!("Default org ID: {}", org);
    }
    println!("\nTry 'hawkop status' or 'hawkop org list'.");
    Ok(())
}

/// Merge init answers into the credentials. Empty answers keep the current value.
fn apply_init(
    credentials: &mut Credentials,
    api_key: Option<String>,
    org: Option<String>,
) -> Result<()> {
    let api_key = api_key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty());
    if let Some(key) = api_key {
        if key != credentials.api_key() {
            credentials.set_api_key(key);
        }
    }

    if !credentials.has_api_key() {
        return Err(HawkError::Config(
            "An API key is required. Pass --api-key or run 'hawkop init' interactively."
                .to_string(),
        ));
    }

    let org = org.map(|o| o.trim().to_string()).filter(|o| !o.is_empty());
    if org.is_some() {
        credentials.set_org_id(org);
    }
    Ok(())
}

/// Show what is configured and whether the CLI is ready to make calls
pub fn run_status_command(store: &CredentialStore) -> Result<()> {
    let credentials = store.load()?;
    println!("{}", render_status(store.path(), &credentials, Utc::now()));
    Ok(())
}

fn render_status(path: &Path, credentials: &Credentials, now: DateTime<Utc>) -> String {
    let mut lines = vec![format!("Config file: {}", path.display()), String::new()];

    if credentials.has_api_key() {
        lines.push(format!(
            "API key:     {}",
            mask_secret(Some(credentials.api_key()))
        ));
    } else {
        lines.push("API key:     not configured (run 'hawkop init')".to_string());
    }

    match credentials.org_id() {
        Some(org) => lines.push(format!("Default org: {}", org)),
        None => lines.push("Default org: not set (use 'hawkop org set <org-id>')".to_string()),
    }

    match credentials.token() {
        None => lines.push("JWT token:   none".to_string()),
        Some(token) if token.is_expired_at(now) => lines.push(format!(
            "JWT token:   expired at {}",
            token.expires_at.format("%Y-%m-%d %H:%M:%S UTC")
        )),
        Some(token) => lines.push(format!(
            "JWT token:   valid until {}",
            token.expires_at.format("%Y-%m-%d %H:%M:%S UTC")
        )),
    }

    lines.push(String::new());
    if credentials.has_api_key() {
        lines.push("Status:      ready".to_string());
    } else {
        lines.push("Status:      not ready".to_string());
    }
    lines.join("\n")
}

/// Show only the last 4 characters of a secret
fn mask_secret(secret: Option<&str>) -> String {
    match secret {
        Some(s) if s.chars().count() > 4 => {
            let tail: String = s.chars().skip(s.chars().count() - 4).collect();
            format!("****{}", tail)
        }
        Some(_) => "****".to_string(),
        None => "<not set>".to_string(),
    }
}
