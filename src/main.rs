// Attendance Mock Service - demo entry point
//
// Logs into the demo account for the chosen role, fetches that role's
// dashboard through the facade, and prints the payload as JSON:
//
// ```console
// $ cargo run -- --role student
// $ cargo run -- --role admin --seed 42 --no-latency
// ```

use attendance_mock_service::api::{Credentials, LoggingConfig, MockApi, SessionStore};
use attendance_mock_service::store::EntityStore;
use attendance_mock_service::types::{CliArgs, Role, ServiceConfig};
use clap::Parser;
use std::process;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    if args.print_config {
        match ServiceConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let config = match ServiceConfig::from_cli_args(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - no requests will be issued.");
        return;
    }

    let api = match MockApi::new(EntityStore::demo(), config) {
        Ok(api) => api,
        Err(e) => {
            error!("Failed to initialize mock api: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_demo(&api, args.role).await {
        error!("Demo request failed: {}", e);
        process::exit(1);
    }
}

/// Log in as the demo account for `role` and print its dashboard
async fn run_demo(api: &MockApi, role: Role) -> anyhow::Result<()> {
    let credentials = Credentials {
        email: format!("{}@demo.com", role),
        password: "password".to_string(),
        role,
    };

    info!(email = %credentials.email, %role, "logging in");
    let login = api.login(&credentials).await?;

    let mut session = SessionStore::in_memory();
    session.save(&login.user, &login.token)?;
    info!(user = %login.user.id, "session persisted");

    let payload = match role {
        Role::Student => {
            let dashboard = api.student().get_dashboard(&login.user.id).await?;
            serde_json::to_string_pretty(&dashboard)?
        }
        Role::Faculty => {
            let dashboard = api.faculty().get_dashboard(&login.user.id).await?;
            serde_json::to_string_pretty(&dashboard)?
        }
        Role::Admin => {
            let dashboard = api.admin().get_dashboard(&login.user.id).await?;
            serde_json::to_string_pretty(&dashboard)?
        }
    };

    println!("{}", payload);
    Ok(())
}
