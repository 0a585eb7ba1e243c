//! CLI module for climate-api
//!
//! Provides the command-line interface:
//! - serve: open the dataset and enter the HTTP serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve};
pub use errors::{CliError, CliResult};
