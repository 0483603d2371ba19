//! Command-line client for a rustify server.
//!
//! Runs the same submission flow as the browser form: shorten, save the QR
//! code, show stats.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts for the URL when omitted)
//! cargo run --bin rustify-cli -- shorten https://example.com/docs --alias docs
//!
//! # Save the QR code somewhere specific
//! cargo run --bin rustify-cli -- shorten https://example.com --qr-out ./example.png
//!
//! # Show stats for an alias
//! cargo run --bin rustify-cli -- stats docs
//! ```
//!
//! # Environment Variables
//!
//! - `RUSTIFY_SERVER`: server base URL (default: `http://localhost:8080`)
//! - `RUST_LOG`: log filter (default: `warn`)

use rustify::client::{
    ShortenForm, ShortenerClient, SubmissionController, SubmissionOutcome, TerminalView,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Client for the rustify URL shortener.
#[derive(Parser)]
#[command(name = "rustify-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Server base URL
    #[arg(long, env = "RUSTIFY_SERVER", default_value = "http://localhost:8080")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL and fetch its QR code and stats
    Shorten {
        /// URL to shorten (prompted for when omitted)
        url: Option<String>,

        /// Custom alias
        #[arg(short, long)]
        alias: Option<String>,

        /// Where to write the QR code PNG
        #[arg(long)]
        qr_out: Option<PathBuf>,
    },

    /// Show click statistics for an alias
    Stats {
        alias: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = ShortenerClient::new(&cli.server)
        .with_context(|| format!("Invalid server URL '{}'", cli.server))?;

    match cli.command {
        Commands::Shorten { url, alias, qr_out } => shorten(client, url, alias, qr_out).await,
        Commands::Stats { alias } => stats(client, &alias).await,
    }
}

async fn shorten(
    client: ShortenerClient,
    url: Option<String>,
    alias: Option<String>,
    qr_out: Option<PathBuf>,
) -> Result<ExitCode> {
    let url = match url {
        Some(url) => url,
        None => Input::new()
            .with_prompt("URL to shorten")
            .interact_text()
            .context("Failed to read URL")?,
    };

    let form = ShortenForm::new(url).with_alias(alias.unwrap_or_default());
    let qr_path = qr_out.unwrap_or_else(|| std::env::temp_dir().join("rustify-qr.png"));

    let controller = SubmissionController::new(client, Arc::new(TerminalView::new(qr_path)));

    match controller.submit(&form).await {
        SubmissionOutcome::Completed { stats_shown, .. } => {
            if controller.view().saved_qr().is_none() {
                println!("{}", "No QR code available".dimmed());
            }
            if !stats_shown {
                println!("{}", "No stats available yet".dimmed());
            }
            Ok(ExitCode::SUCCESS)
        }
        SubmissionOutcome::Failed { .. } | SubmissionOutcome::Superseded => Ok(ExitCode::FAILURE),
    }
}

async fn stats(client: ShortenerClient, alias: &str) -> Result<ExitCode> {
    match client.stats(alias).await.context("Failed to fetch stats")? {
        Some(stats) => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("{} {}", "No stats for".yellow(), alias.bold());
            Ok(ExitCode::FAILURE)
        }
    }
}
