use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;

use super::calendar_model::{DayStatus, MonthRange};
use super::calendar_traits::{CalendarServiceTrait, DayStatusRepositoryTrait};
use crate::errors::Result;

pub struct CalendarService {
    repository: Arc<dyn DayStatusRepositoryTrait>,
}

impl CalendarService {
    pub fn new(repository: Arc<dyn DayStatusRepositoryTrait>) -> Self {
        CalendarService { repository }
    }
}

#[async_trait]
impl CalendarServiceTrait for CalendarService {
    fn get_month_statuses(&self, year: i32, month: u32) -> Result<Vec<DayStatus>> {
        let range = MonthRange::new(year, month)?;
        let statuses = self
            .repository
            .list_day_statuses(range.first_day, range.last_day)?;
        debug!(
            "Loaded {} day statuses for {}-{:02} ({} to {})",
            statuses.len(),
            year,
            month,
            range.first_day,
            range.last_day
        );
        Ok(statuses)
    }

    fn get_day_status(&self, date: NaiveDate) -> Result<Option<DayStatus>> {
        self.repository.get_day_status(date)
    }

    async fn refresh_day_status(&self, date: NaiveDate) -> Result<DayStatus> {
        let status = self.repository.recompute_day_status(date).await?;
        debug!(
            "Recomputed {}: {} over {} trades ({})",
            date, status.total_profit_loss, status.number_of_trades, status.trading_status
        );
        Ok(status)
    }
}
