//! SQLite storage implementation for trading entries.

mod model;
mod repository;

pub use model::TradingEntryDB;
pub use repository::TradingEntryRepository;
