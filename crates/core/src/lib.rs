//! Trading Journal Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the trading journal: entry
//! validation, the daily aggregate fold and the calendar status derivation.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod calendar;
pub mod clock;
pub mod constants;
pub mod entries;
pub mod errors;
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
