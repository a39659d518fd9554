use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info};

use super::entries_model::{DailyStats, DayActivities, NewTradingEntry, TradingEntry};
use super::entries_traits::{TradingEntryRepositoryTrait, TradingEntryServiceTrait};
use crate::clock::Clock;
use crate::errors::Result;

pub struct TradingEntryService {
    repository: Arc<dyn TradingEntryRepositoryTrait>,
    clock: Arc<dyn Clock>,
}

impl TradingEntryService {
    pub fn new(repository: Arc<dyn TradingEntryRepositoryTrait>, clock: Arc<dyn Clock>) -> Self {
        TradingEntryService { repository, clock }
    }
}

#[async_trait]
impl TradingEntryServiceTrait for TradingEntryService {
    async fn create_entry(&self, new_entry: NewTradingEntry) -> Result<TradingEntry> {
        let new_entry = new_entry.normalized();
        let today = self.clock.today();
        new_entry.validate(today)?;

        let created = self.repository.create_entry(new_entry).await?;
        info!(
            "Recorded {} entry for {}; day is now {} ({} over {} trades)",
            created.entry.token_name,
            created.day_status.date,
            created.day_status.trading_status,
            created.day_status.total_profit_loss,
            created.day_status.number_of_trades
        );
        Ok(created.entry)
    }

    fn get_day_activities(&self, date: NaiveDate) -> Result<DayActivities> {
        let activities = self.repository.list_entries_for_date(date)?;
        // Recomputed from the entries themselves, not read from the stored status.
        let stats = DailyStats::from_entries(&activities)?;
        debug!(
            "Loaded {} entries for {} (total {})",
            activities.len(),
            date,
            stats.total_profit_loss
        );
        Ok(DayActivities { activities, stats })
    }
}
