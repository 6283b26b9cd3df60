//! # Client Binary Entry Point
//!
//! Command-line front end for the secret client.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin client -- --config config/client.toml \
//!   create --content "launch codes" --password hunter2
//!
//! cargo run --bin client -- --base-url http://localhost:8000 \
//!   retrieve --id 0b6f8a9e-5c1d-4a57-9a7e-1f1d3e0c2b44 --password hunter2
//! ```
//!
//! The server's JSON response is printed to stdout exactly as received.

use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::{info, warn, LevelFilter};
use serde_json::Value;
use std::io::Write;

use onetime_client::client::{SecretClient, SecretEnvelope};
use onetime_client::common::config::ClientConfig;

/// Command-line arguments for the client binary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the client configuration file (TOML format)
    ///
    /// Example: config/client.toml
    #[arg(short, long)]
    config: Option<String>,

    /// Base URL of the secrets server, overriding the configuration file
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Store a new secret
    Create {
        /// Secret content to store
        #[arg(long)]
        content: String,

        /// Password required to read the secret back
        #[arg(long)]
        password: String,
    },
    /// Fetch a stored secret
    Retrieve {
        /// Identifier returned when the secret was created
        #[arg(long)]
        id: String,

        /// Password the secret was stored with
        #[arg(long)]
        password: String,
    },
}

/// Initialize the logging system with timestamp, level, and message formatting.
///
/// Logs go to stderr so stdout carries only the server's response.
/// Format: `[HH:MM:SS] [LEVEL] message`
fn init_logger() {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::default(),
    };

    if let Some(base_url) = args.base_url {
        config.client.base_url = base_url;
    }

    let client = SecretClient::new(&config)?;
    info!("Using secrets server at {}", client.base_url());

    let response = match args.command {
        Command::Create { content, password } => {
            let response = client.create(&content, &password).await?;
            if let Some(id) = response.get("id").and_then(Value::as_str) {
                info!("🔑 Secret stored with id {}", id);
            }
            response
        }
        Command::Retrieve { id, password } => {
            let response = client.retrieve(&id, &password).await?;
            if SecretEnvelope::from_response(&response).is_err() {
                warn!("⚠️  Server did not return secret {}", id);
            }
            response
        }
    };

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
