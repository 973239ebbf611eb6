//! Application command handlers

use crate::cli::{AppAction, AppListArgs};
use crate::error::Result;
use crate::hawk::helpers::{apply_limit, retain_matching};
use crate::hawk::HawkClient;
use crate::output::output_applications;
use crate::ui::{create_spinner, finish_spinner};

/// Dispatch app subcommands
pub async fn run_app_command(
    client: &mut HawkClient,
    action: &AppAction,
    batch: bool,
) -> Result<()> {
    match action {
        AppAction::List(args) => run_app_list(client, args, batch).await,
    }
}

async fn run_app_list(client: &mut HawkClient, args: &AppListArgs, batch: bool) -> Result<()> {
    let org = client.resolve_org(args.org.as_deref())?;

    let spinner = create_spinner(&format!("Fetching applications for '{}'...", org), batch);
    let result = client.list_org_applications(&org).await;
    finish_spinner(spinner);

    let mut apps = result?;
    retain_matching(&mut apps, args.status.as_deref(), |app| app.status());
    apply_limit(&mut apps, args.limit);

    output_applications(&apps, args.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::error::HawkError;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_app_list_forbidden_is_client_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/org/org-1/apps"))
            .respond_with(ResponseTemplate::new(403).set_body_string("nope"))
            .expect(1)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let mut client = HawkClient::test_client(&server.uri(), &dir);
        let args = AppListArgs {
            format: OutputFormat::Table,
            limit: 0,
            org: Some("org-1".to_string()),
            status: Some("active".to_string()),
        };

        let err = run_app_list(&mut client, &args, true).await.unwrap_err();
        assert!(matches!(err, HawkError::Client { status: 403, .. }));
    }
}
