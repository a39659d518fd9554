use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use tradejournal_core::entries::{
    CreatedEntry, NewTradingEntry, TradingEntry, TradingEntryRepositoryTrait,
};
use tradejournal_core::{Clock, Result};

use super::model::TradingEntryDB;
use crate::calendar::refresh_day_status_in_tx;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::trading_entries;

pub struct TradingEntryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
    clock: Arc<dyn Clock>,
}

impl TradingEntryRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle, clock: Arc<dyn Clock>) -> Self {
        TradingEntryRepository {
            pool,
            writer,
            clock,
        }
    }
}

#[async_trait]
impl TradingEntryRepositoryTrait for TradingEntryRepository {
    fn list_entries_for_date(&self, date: NaiveDate) -> Result<Vec<TradingEntry>> {
        let mut conn = get_connection(&self.pool)?;
        trading_entries::table
            .filter(trading_entries::trading_date.eq(date))
            .order((trading_entries::created_at.desc(), trading_entries::id.desc()))
            .select(TradingEntryDB::as_select())
            .load::<TradingEntryDB>(&mut conn)
            .map_err(StorageError::from)?
            .into_iter()
            .map(TradingEntry::try_from)
            .collect()
    }

    async fn create_entry(&self, new_entry: NewTradingEntry) -> Result<CreatedEntry> {
        let now = self.clock.now();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<CreatedEntry> {
                let row = TradingEntryDB::from_new(new_entry, Uuid::now_v7().to_string(), now);

                let inserted = diesel::insert_into(trading_entries::table)
                    .values(&row)
                    .returning(TradingEntryDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                let entry = TradingEntry::try_from(inserted)?;

                // Same transaction: the entry and its day's status commit together.
                let day_status = refresh_day_status_in_tx(conn, entry.trading_date, now)?;

                Ok(CreatedEntry { entry, day_status })
            })
            .await
    }
}
