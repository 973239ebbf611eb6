//! HawkOp - main entry point

use clap::Parser;
use log::{debug, info};

use hawkop::config::api;
use hawkop::{
    run_app_command, run_init_command, run_org_command, run_scan_command, run_status_command,
    run_team_command, run_user_command, run_version_command, Cli, Command, CredentialStore,
    HawkClient,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting hawkop v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> hawkop::Result<()> {
    let store = CredentialStore::from_override(cli.config.as_deref());
    let base_url = cli.api_url.as_deref().unwrap_or(api::BASE_URL);
    debug!("Config file: {}, API: {}", store.path().display(), base_url);

    match &cli.command {
        Command::Init(args) => run_init_command(&store, args, cli.batch),
        Command::Status => run_status_command(&store),
        Command::Version(args) => run_version_command(args.format),
        Command::Org { action } => run_org_command(store, base_url, action, cli.batch).await,
        Command::User { action } => {
            let mut client = HawkClient::from_store(store, base_url)?;
            run_user_command(&mut client, action, cli.batch).await
        }
        Command::Team { action } => {
            let mut client = HawkClient::from_store(store, base_url)?;
            run_team_command(&mut client, action, cli.batch).await
        }
        Command::App { action } => {
            let mut client = HawkClient::from_store(store, base_url)?;
            run_app_command(&mut client, action, cli.batch).await
        }
        Command::Scan { action } => {
            let mut client = HawkClient::from_store(store, base_url)?;
            run_scan_command(&mut client, action, cli.batch).await
        }
    }
}
