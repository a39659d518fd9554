use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use tradejournal_core::calendar::{DayStatus, DayStatusRepositoryTrait};
use tradejournal_core::entries::DailyStats;
use tradejournal_core::{Clock, Result};

use super::model::DayStatusDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{day_statuses, trading_entries};
use crate::utils::parse_decimal_column;

pub struct DayStatusRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
    clock: Arc<dyn Clock>,
}

impl DayStatusRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle, clock: Arc<dyn Clock>) -> Self {
        DayStatusRepository {
            pool,
            writer,
            clock,
        }
    }
}

/// Rebuilds the status of `date` from every entry of that day and
/// overwrites the stored row. Must run inside a writer job so the scan and
/// the upsert share one transaction. `now` stamps the stored row.
pub(crate) fn refresh_day_status_in_tx(
    conn: &mut SqliteConnection,
    date: NaiveDate,
    now: DateTime<Utc>,
) -> Result<DayStatus> {
    let amounts = trading_entries::table
        .filter(trading_entries::trading_date.eq(date))
        .order(trading_entries::id.asc())
        .select(trading_entries::profit_loss_amount)
        .load::<String>(conn)
        .map_err(StorageError::from)?;

    let stats = DailyStats::from_amounts(
        amounts
            .iter()
            .map(|raw| parse_decimal_column(raw, "profit_loss_amount"))
            .collect::<Result<Vec<_>>>()?,
    )?;
    let status = DayStatus::from_stats(date, &stats);

    let row = DayStatusDB::from_domain(&status, now);
    diesel::insert_into(day_statuses::table)
        .values(&row)
        .on_conflict(day_statuses::date)
        .do_update()
        .set(&row)
        .execute(conn)
        .map_err(StorageError::from)?;

    Ok(status)
}

#[async_trait]
impl DayStatusRepositoryTrait for DayStatusRepository {
    fn get_day_status(&self, date: NaiveDate) -> Result<Option<DayStatus>> {
        let mut conn = get_connection(&self.pool)?;
        let row = day_statuses::table
            .find(date)
            .select(DayStatusDB::as_select())
            .first::<DayStatusDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        row.map(DayStatus::try_from).transpose()
    }

    fn list_day_statuses(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DayStatus>> {
        let mut conn = get_connection(&self.pool)?;
        day_statuses::table
            .filter(day_statuses::date.ge(start))
            .filter(day_statuses::date.le(end))
            .order(day_statuses::date.asc())
            .select(DayStatusDB::as_select())
            .load::<DayStatusDB>(&mut conn)
            .map_err(StorageError::from)?
            .into_iter()
            .map(DayStatus::try_from)
            .collect()
    }

    async fn recompute_day_status(&self, date: NaiveDate) -> Result<DayStatus> {
        let now = self.clock.now();
        self.writer
            .exec(move |conn: &mut SqliteConnection| refresh_day_status_in_tx(conn, date, now))
            .await
    }
}
