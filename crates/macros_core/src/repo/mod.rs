//! Repository layer contracts and SQLite implementations.
//!
//! # Responsibility
//! - Keep SQL and column encodings inside the persistence boundary.
//! - Decode untyped rows into model records exactly once.
//!
//! # Invariants
//! - Timestamps are stored as UTC text in `CURRENT_TIMESTAMP` format so that
//!   lexical and chronological order agree.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use chrono::NaiveDateTime;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod consumption_repo;
pub mod food_repo;

/// Storage format of `items.time`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for diary persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted diary data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

pub(crate) fn timestamp_to_db(time: NaiveDateTime) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

pub(crate) fn parse_timestamp(value: &str) -> RepoResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map_err(|_| RepoError::InvalidData(format!("invalid timestamp `{value}` in items.time")))
}
