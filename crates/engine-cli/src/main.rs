//! Command-line client for the game backend.
//!
//! Reads connection settings and credentials from the environment (the
//! nearest `.env` above the working directory, or `--env-file`, is loaded
//! first) and prints responses as pretty JSON.
//!
//! ```bash
//! engine-cli status
//! engine-cli account acc123
//! engine-cli metrics acc123 --keys score,level
//! engine-cli get references --query type=item
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use engine_client::api::models::MetricsQuery;
use engine_client::auth::authorization_from_env;
use engine_client::{ClientConfig, EngineClient, Query};

#[derive(Parser)]
#[command(name = "engine-cli", about = "Query the game backend API", version)]
struct Cli {
    /// Load settings from this file instead of searching for `.env`
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the status of the configured server
    Status,
    /// Fetch one account
    Account { account_id: String },
    /// Fetch an account's metrics
    Metrics {
        account_id: String,
        /// Comma-separated full keys to restrict the result to
        #[arg(long, value_delimiter = ',')]
        keys: Vec<String>,
    },
    /// GET an arbitrary path and print the raw JSON
    Get {
        path: String,
        /// Query parameter as name=value (repeatable)
        #[arg(long = "query", value_parser = parse_pair)]
        query: Vec<(String, String)>,
    },
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected name=value, got {raw:?}"))
}

/// Load `explicit` if given, else the first `.env` found walking up from
/// `start`. Variables already set in the process are not overridden.
fn load_dotenv(explicit: Option<&Path>, start: &Path) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        dotenvy::from_path(path)
            .with_context(|| format!("Failed to load env file {}", path.display()))?;
        return Ok(Some(path.to_path_buf()));
    }
    for dir in start.ancestors() {
        let candidate = dir.join(".env");
        if candidate.is_file() {
            dotenvy::from_path(&candidate)
                .with_context(|| format!("Failed to load {}", candidate.display()))?;
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    match load_dotenv(cli.env_file.as_deref(), &cwd)? {
        Some(path) => tracing::debug!(path = %path.display(), "Loaded env file"),
        None => tracing::debug!("No .env file found, using process environment"),
    }

    let config = ClientConfig::from_env().context("Failed to load client configuration")?;
    let auth = authorization_from_env().context("Failed to load credentials")?;
    tracing::info!(api_url = %config.api_url, server_id = %config.server_id, "Connecting");
    let client = EngineClient::with_shared_authorization(config, auth)?;

    match cli.command {
        Command::Status => {
            let status = client.servers().get_server_status(None).await?;
            print_json(&status)?;
        }
        Command::Account { account_id } => {
            let account = client.accounts().get_account(&account_id, None).await?;
            print_json(&account)?;
        }
        Command::Metrics { account_id, keys } => {
            let query = MetricsQuery {
                full_keys: (!keys.is_empty()).then_some(keys),
            };
            let metrics = client
                .metrics()
                .get_account_metrics(&account_id, &query, None)
                .await?;
            print_json(&metrics)?;
        }
        Command::Get { path, query } => {
            let query = query
                .into_iter()
                .fold(Query::new(), |q, (name, value)| q.set(&name, value));
            let body: Value = client.get(&path, Some(&query), None).await?;
            print_json(&body)?;
        }
    }

    Ok(())
}
