//! CLI-level errors (wraps domain errors)

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("cannot read org file {path}: {source}")]
    OrgFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid org file {path}: {source}")]
    OrgFileParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("input error: {0}")]
    Input(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Domain(_) => crate::exitcode::DATAERR,
            CliError::OrgFileRead { .. } => crate::exitcode::NOINPUT,
            CliError::OrgFileParse { .. } => crate::exitcode::DATAERR,
            CliError::Input(_) => crate::exitcode::IOERR,
        }
    }
}
