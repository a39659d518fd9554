//! Entries module - trading entry models, services, and traits.

mod entries_errors;
mod entries_model;
mod entries_service;
mod entries_traits;

#[cfg(test)]
mod entries_model_tests;


pub use entries_errors::EntryError;
pub use entries_model::{CreatedEntry, DailyStats, DayActivities, NewTradingEntry, TradingEntry};
pub use entries_service::TradingEntryService;
pub use entries_traits::{TradingEntryRepositoryTrait, TradingEntryServiceTrait};
