use crate::entries::entries_model::{CreatedEntry, DayActivities, NewTradingEntry, TradingEntry};
use crate::errors::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for trading entry repository operations
#[async_trait]
pub trait TradingEntryRepositoryTrait: Send + Sync {
    /// Entries dated `date`, most recently created first.
    fn list_entries_for_date(&self, date: NaiveDate) -> Result<Vec<TradingEntry>>;

    /// Stores the entry and rebuilds the status of its day as one unit: either
    /// both become visible or neither does.
    async fn create_entry(&self, new_entry: NewTradingEntry) -> Result<CreatedEntry>;
}

/// Trait for trading entry service operations
#[async_trait]
pub trait TradingEntryServiceTrait: Send + Sync {
    async fn create_entry(&self, new_entry: NewTradingEntry) -> Result<TradingEntry>;
    fn get_day_activities(&self, date: NaiveDate) -> Result<DayActivities>;
}
