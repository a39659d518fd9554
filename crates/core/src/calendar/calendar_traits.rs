use crate::calendar::calendar_model::DayStatus;
use crate::errors::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for day status repository operations
#[async_trait]
pub trait DayStatusRepositoryTrait: Send + Sync {
    fn get_day_status(&self, date: NaiveDate) -> Result<Option<DayStatus>>;

    /// Statuses with `start <= date <= end`, ascending by date.
    fn list_day_statuses(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DayStatus>>;

    /// Rebuilds the status of `date` from all of its entries and overwrites
    /// the stored row.
    async fn recompute_day_status(&self, date: NaiveDate) -> Result<DayStatus>;
}

/// Trait for calendar service operations
#[async_trait]
pub trait CalendarServiceTrait: Send + Sync {
    fn get_month_statuses(&self, year: i32, month: u32) -> Result<Vec<DayStatus>>;
    fn get_day_status(&self, date: NaiveDate) -> Result<Option<DayStatus>>;
    async fn refresh_day_status(&self, date: NaiveDate) -> Result<DayStatus>;
}
