//! campus - School management backend CLI
//!
//! A command-line interface for the campus backend: authenticate once,
//! then issue tenant-scoped requests through the same pipeline the
//! client applications use.
//!
//! # Examples
//!
//! ```bash
//! # Authenticate and store tokens
//! campus login --email admin@school.test --password secret
//!
//! # Who am I, and which schools can I see?
//! campus whoami --pretty
//! campus schools
//!
//! # Tenant-scoped request (adds the school header)
//! campus get /api/students --school 42
//! ```

mod cli;
mod commands;

use crate::{cli::Cli, commands::Commands};

use campus_cli::{AppContext, CliResult, logger};
use campus_client::ClientError;
use campus_nav::Route;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let ctx = match bootstrap(cli.server) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = run(&ctx, cli.command).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn bootstrap(server_override: Option<String>) -> CliResult<AppContext> {
    let config = AppContext::load_config(server_override)?;
    logger::initialize(
        config.logging.level,
        config.logging.file.clone().map(Into::into),
        config.logging.colored,
    )?;
    config.log_summary();
    AppContext::new(config)
}

async fn run(ctx: &AppContext, command: Commands) -> CliResult<Value> {
    match command {
        Commands::Login { email, password } => {
            let user = ctx.session.login(&email, &password).await?;
            Ok(serde_json::to_value(user).map_err(ClientError::from_json)?)
        }

        Commands::Logout => {
            // The process exits right after this; wait briefly so the
            // backend notification actually goes out.
            if let Some(task) = ctx.session.logout() {
                let _ = tokio::time::timeout(Duration::from_secs(2), task).await;
            }
            Ok(json!({"status": "logged_out"}))
        }

        Commands::Whoami => {
            let user = ctx.session.fetch_current_user().await?;
            Ok(serde_json::to_value(user).map_err(ClientError::from_json)?)
        }

        Commands::Schools => {
            let user = ctx.session.fetch_current_user().await?;
            Ok(serde_json::to_value(user.schools()).map_err(ClientError::from_json)?)
        }

        Commands::Open { path } => {
            let committed = ctx.gate().commit(Route::parse(&path), &ctx.guards()).await;
            Ok(json!({
                "committed": committed,
                "route": ctx.router.current_path(),
            }))
        }

        Commands::Get { path, school } => {
            if let Some(school) = school {
                ctx.router.replace(Route::school_dashboard(&school));
            }
            Ok(ctx.client.get(&path).await?)
        }
    }
}
