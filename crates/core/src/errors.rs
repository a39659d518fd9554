//! Error taxonomy of the journal.
//!
//! Storage crates translate their driver errors into [`DatabaseError`] so
//! nothing above them depends on a particular database.

use thiserror::Error;

use crate::calendar::CalendarError;
use crate::entries::EntryError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Entry(#[from] EntryError),

    #[error("{0}")]
    Calendar(#[from] CalendarError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// True when the error was caused by the caller's input rather than by
    /// the system. Such errors never have side effects.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::Validation(_) | Error::Entry(_) | Error::Calendar(_)
        )
    }
}

/// Storage failures, carried as text.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    #[error("Database query failed: {0}")]
    QueryFailed(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    /// A row with the same key already exists.
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// The writer could not run or commit a job.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Stored data that cannot be read back, or any other storage fault.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Rejections of client-supplied values.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Unexpected(err.to_string())
    }
}
