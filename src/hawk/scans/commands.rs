//! Scan command handlers

use log::debug;

use crate::cli::{ScanAction, ScanAlertsArgs, ScanGetArgs, ScanListArgs, ScanView};
use crate::config::defaults;
use crate::error::{HawkError, Result};
use crate::hawk::helpers::{apply_limit, retain_matching};
use crate::hawk::pagination::PaginationRequest;
use crate::hawk::HawkClient;
use crate::output::{output_scan_alerts, output_scan_overview, output_scan_stats, output_scans};
use crate::ui::{create_spinner, finish_spinner};

/// Dispatch scan subcommands
pub async fn run_scan_command(
    client: &mut HawkClient,
    action: &ScanAction,
    batch: bool,
) -> Result<()> {
    match action {
        ScanAction::List(args) => run_scan_list(client, args, batch).await,
        ScanAction::Get(args) => run_scan_get(client, args, batch).await,
        ScanAction::Alerts(args) => run_scan_alerts(client, args, batch).await,
    }
}

/// Sort options only go on the wire when they differ from the platform defaults
fn scan_pagination(args: &ScanListArgs) -> PaginationRequest {
    let non_default = |value: &str, default: &str| {
        (!value.is_empty() && !value.eq_ignore_ascii_case(default)).then(|| value.to_string())
    };

    PaginationRequest {
        page_size: args.page_size,
        page_token: args.page_token.clone(),
        page: None,
        sort_field: non_default(&args.sort_by, defaults::SCAN_SORT_FIELD),
        sort_dir: non_default(&args.sort_dir, defaults::SCAN_SORT_DIR),
    }
}

async fn run_scan_list(client: &mut HawkClient, args: &ScanListArgs, batch: bool) -> Result<()> {
    let org = client.resolve_org(args.org.as_deref())?;
    let pagination = scan_pagination(args);

    let spinner = create_spinner(&format!("Fetching scans for '{}'...", org), batch);
    let result = client.list_org_scans(&org, &pagination).await;
    finish_spinner(spinner);

    let page = result?;
    let has_more = page.has_more();
    let next_token = page.next_page_token.clone();

    let mut scans = page.items;
    if let Some(app) = args.app.as_deref() {
        scans.retain(|s| s.matches_app(app));
    }
    if let Some(env) = args.env.as_deref() {
        scans.retain(|s| s.matches_env(env));
    }
    if let Some(status) = args.status.as_deref() {
        scans.retain(|s| s.matches_status(status));
    }
    debug!("{} scans after filtering", scans.len());
    apply_limit(&mut scans, args.limit);

    output_scans(&scans, args.format)?;

    if let (true, Some(token)) = (has_more, next_token) {
        eprintln!("\nMore results available. Next page token: {}", token);
    }
    Ok(())
}

async fn run_scan_get(client: &mut HawkClient, args: &ScanGetArgs, batch: bool) -> Result<()> {
    let org = client.resolve_org(None)?;

    let spinner = create_spinner(&format!("Looking up scan '{}'...", args.scan_id), batch);
    let result = client.find_scan(&org, &args.scan_id).await;
    finish_spinner(spinner);

    let scan = result?.ok_or_else(|| {
        HawkError::Config(format!(
            "Scan not found: '{}' in organization '{}'",
            args.scan_id, org
        ))
    })?;

    match args.view {
        ScanView::Overview => output_scan_overview(&scan, args.format),
        ScanView::Stats => output_scan_stats(&scan, args.format),
    }
}

async fn run_scan_alerts(
    client: &mut HawkClient,
    args: &ScanAlertsArgs,
    batch: bool,
) -> Result<()> {
    let spinner = create_spinner(
        &format!("Fetching alerts for scan '{}'...", args.scan_id),
        batch,
    );
    let result = client.get_scan_alerts(&args.scan_id).await;
    finish_spinner(spinner);

    let mut alerts = result?;
    retain_matching(&mut alerts, args.severity.as_deref(), |a| a.severity.as_str());
    apply_limit(&mut alerts, args.limit);

    output_scan_alerts(&alerts, args.format)
}
