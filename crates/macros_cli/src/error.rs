//! Top-level CLI error.

use macros_core::{DbError, LoggingError, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum CliError {
    Db(DbError),
    Repo(RepoError),
    Logging(LoggingError),
    Io(std::io::Error),
    InvalidNumber { field: &'static str, value: String },
    InvalidSelection(String),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "cannot open diary: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Logging(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
            Self::InvalidNumber { field, value } => {
                write!(f, "{field} must be a number, got `{value}`")
            }
            Self::InvalidSelection(value) => {
                write!(f, "unknown menu option `{value}`; expected 1, 2, 3 or 4")
            }
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Logging(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::InvalidNumber { .. } | Self::InvalidSelection(_) => None,
        }
    }
}

impl From<DbError> for CliError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for CliError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<LoggingError> for CliError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

pub type CliResult<T> = Result<T, CliError>;
