//! Database models for day statuses.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use tradejournal_core::calendar::{DayStatus, TradingStatus};
use tradejournal_core::Result;

use crate::errors::StorageError;
use crate::utils::{format_timestamp, parse_decimal_column};

/// Database model for day statuses
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::day_statuses)]
#[diesel(primary_key(date))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DayStatusDB {
    pub date: NaiveDate,
    pub trading_status: String,
    pub total_profit_loss: String,
    pub number_of_trades: i64,
    pub updated_at: String,
}

impl DayStatusDB {
    pub fn from_domain(status: &DayStatus, updated_at: DateTime<Utc>) -> Self {
        Self {
            date: status.date,
            trading_status: status.trading_status.as_str().to_string(),
            total_profit_loss: status.total_profit_loss.to_string(),
            number_of_trades: status.number_of_trades,
            updated_at: format_timestamp(updated_at),
        }
    }
}

impl TryFrom<DayStatusDB> for DayStatus {
    type Error = tradejournal_core::Error;

    fn try_from(db: DayStatusDB) -> Result<Self> {
        Ok(Self {
            date: db.date,
            trading_status: TradingStatus::from_str(&db.trading_status).map_err(|e| {
                StorageError::CorruptValue {
                    column: "trading_status",
                    reason: e.to_string(),
                }
            })?,
            total_profit_loss: parse_decimal_column(&db.total_profit_loss, "total_profit_loss")?,
            number_of_trades: db.number_of_trades,
        })
    }
}
