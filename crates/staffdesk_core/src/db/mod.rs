//! SQLite storage bootstrap entry points.
//!
//! # Responsibility
//! - Open and configure the single SQLite connection the application uses.
//! - Translate the configured endpoint into a driver connection.
//!
//! # Invariants
//! - Returned connections have the driver busy timeout applied.
//! - Schema setup is NOT performed here; creating the employee table is an
//!   explicit user action handled by the repository layer.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod open;

pub use open::{open_db, MEMORY_ENDPOINT};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    InvalidEndpoint(String),
    CreateDirFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::InvalidEndpoint(reason) => write!(f, "invalid storage endpoint: {reason}"),
            Self::CreateDirFailed { path, source } => write!(
                f,
                "failed to create database directory `{}`: {source}",
                path.display()
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::InvalidEndpoint(_) => None,
            Self::CreateDirFailed { source, .. } => Some(source),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
