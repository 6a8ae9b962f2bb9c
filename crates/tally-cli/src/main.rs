//! Tally CLI - Monthly expense summaries
//!
//! Usage:
//!   tally serve --port 10000        Start web server
//!   tally analyze expenses.json     Summarize a file of expenses

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Serve {
            port,
            host,
            service_name,
            allowed_origins,
        } => commands::cmd_serve(&host, port, service_name, allowed_origins).await,
        Commands::Analyze { file, json } => commands::cmd_analyze(&file, json),
    }
}
