//! SQLite storage implementation for the trading journal.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `tradejournal-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The single writer actor that serializes every write
//! - Repository implementations for entries and day statuses
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//!
//! ```text
//!   core (domain, traits)
//!          │
//!          ▼
//!   storage-sqlite (this crate)
//!          │
//!          ▼
//!      SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod calendar;
pub mod entries;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from tradejournal-core for convenience
pub use tradejournal_core::errors::{DatabaseError, Error, Result};
