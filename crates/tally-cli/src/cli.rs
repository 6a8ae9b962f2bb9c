//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Monthly expense summaries with a spending trend insight
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Summarize expenses by month and compare the latest months", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "10000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Service name reported by /health
        #[arg(long, default_value = tally_server::DEFAULT_SERVICE_NAME)]
        service_name: String,

        /// Allowed CORS origins, comma-separated (default: any origin)
        ///
        /// Merged with TALLY_ALLOWED_ORIGINS from the environment.
        #[arg(long, value_delimiter = ',')]
        allowed_origins: Vec<String>,
    },

    /// Summarize expenses from a JSON file
    ///
    /// The file holds either `{"expenses": [...]}` or a bare array of
    /// `{"amount": ..., "date": ...}` records.
    Analyze {
        /// JSON file to read
        file: PathBuf,

        /// Print the raw JSON response instead of a table
        #[arg(long)]
        json: bool,
    },
}
