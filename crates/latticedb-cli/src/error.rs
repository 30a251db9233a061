use latticedb::{Error as LatticeError, ErrorKind};
use std::{io, process};
use thiserror::Error as ThisError;

pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;
pub const EXIT_NOT_FOUND: i32 = 3;

pub type CliResult<T> = Result<T, CliError>;

///
/// CliError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum CliError {
    #[error("{}: {}", .0.kind, .0.message)]
    Lattice(#[from] LatticeError),

    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

impl CliError {
    const fn exit_code(&self) -> i32 {
        match self {
            Self::Lattice(err) => match err.kind {
                ErrorKind::Config | ErrorKind::InvalidInput => EXIT_USAGE,
                ErrorKind::NotFound => EXIT_NOT_FOUND,
                _ => EXIT_ERROR,
            },
            Self::Output(_) | Self::Write(_) => EXIT_ERROR,
        }
    }
}

impl From<latticedb::core::error::InternalError> for CliError {
    fn from(err: latticedb::core::error::InternalError) -> Self {
        Self::Lattice(err.into())
    }
}

impl From<latticedb::config::ConfigError> for CliError {
    fn from(err: latticedb::config::ConfigError) -> Self {
        Self::Lattice(err.into())
    }
}

/// Print `err` to stderr and exit with its code.
pub fn exit_with_error(err: &CliError) -> ! {
    eprintln!("error: {err}");
    process::exit(err.exit_code())
}
