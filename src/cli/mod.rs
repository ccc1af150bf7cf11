
use crate::config::credentials::{CREDENTIAL_ENV_VARS, get_credential_value};
use crate::config::{Config, load_config};
use crate::gateway::{self, AppState};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "slack-moderator")]
#[command(about = "Let Slack users report messages to moderators", version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve Slack interactivity requests until Ctrl-C
    Serve {
        /// Config file (default: ~/.slack-moderator/config.json)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Validate the configuration and print it with secrets redacted
    Check {
        /// Config file (default: ~/.slack-moderator/config.json)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::Check { config } => {
            let config = load_config(config.as_deref())?;
            print!("{}", check_report(&config));
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path.as_deref())?;
    let gw = &config.gateway;

    let (mut handle, addr) =
        gateway::start(&gw.host, gw.port, &gw.path, AppState::from_config(&config))
            .await
            .with_context(|| format!("Failed to start server on {}:{}", gw.host, gw.port))?;
    println!(
        "slack-moderator v{} listening on http://{}{}",
        crate::VERSION,
        addr,
        gw.path
    );

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            println!("\nShutting down...");
        }
        res = &mut handle => {
            res.context("server task failed")?;
        }
    }
    handle.abort();

    info!("server stopped");
    Ok(())
}

/// Human-readable summary printed by `check`.
fn check_report(config: &Config) -> String {
    let mut out = String::from("\u{2713} Configuration is valid\n\n");
    out.push_str(&format!("{:#?}\n\n", config));
    out.push_str("Environment overrides:\n");
    for (name, env) in CREDENTIAL_ENV_VARS {
        let state = if std::env::var_os(env).is_some() {
            "set"
        } else if get_credential_value(config, name).is_some_and(|v| !v.is_empty()) {
            "from file"
        } else {
            "unset"
        };
        out.push_str(&format!("  {:<22} {}\n", env, state));
    }
    out
}
