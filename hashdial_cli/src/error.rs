//! Errors surfaced by the CLI library.

use std::io;

use hashdial::vectors::VectorError;
use hashdial::DialError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// A decision argument was rejected by the core.
    #[error(transparent)]
    InvalidArgument(#[from] DialError),

    /// Argument combination the core does not see, e.g. a partition index
    /// outside the partition count.
    #[error("{0}")]
    Usage(String),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Vectors(#[from] VectorError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
