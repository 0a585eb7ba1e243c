//! CLI argument definitions using clap
//!
//! Commands:
//! - climate-api serve --database <path> [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// climate-api - read-only HTTP API over a fixed climate-observation dataset
#[derive(Parser, Debug)]
#[command(name = "climate-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server over a prepared dataset
    Serve {
        /// Path to the SQLite dataset file
        #[arg(long, default_value = "./hawaii.sqlite")]
        database: PathBuf,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 5000)]
        port: u16,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
