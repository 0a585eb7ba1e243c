//! CLI-specific error types
//!
//! All CLI errors are fatal; main prints them and exits non-zero.

use thiserror::Error;

use crate::error::DatasetError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// The dataset could not be opened or queried at startup
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Runtime construction or socket binding failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
