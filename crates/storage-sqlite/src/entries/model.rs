//! Database models for trading entries.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use tradejournal_core::entries::{NewTradingEntry, TradingEntry};
use tradejournal_core::Result;

use crate::utils::{format_timestamp, parse_decimal_column, parse_timestamp_column};

/// Database model for trading entries
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::trading_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TradingEntryDB {
    pub id: String,
    pub token_name: String,
    pub investment_amount: Option<String>,
    pub profit_loss_amount: String,
    pub trading_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: String,
}

impl TradingEntryDB {
    pub fn from_new(new_entry: NewTradingEntry, id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            token_name: new_entry.token_name,
            investment_amount: new_entry.investment_amount.map(|d| d.to_string()),
            profit_loss_amount: new_entry.profit_loss_amount.to_string(),
            trading_date: new_entry.trading_date,
            notes: new_entry.notes,
            created_at: format_timestamp(created_at),
        }
    }
}

impl TryFrom<TradingEntryDB> for TradingEntry {
    type Error = tradejournal_core::Error;

    fn try_from(db: TradingEntryDB) -> Result<Self> {
        Ok(Self {
            investment_amount: db
                .investment_amount
                .as_deref()
                .map(|raw| parse_decimal_column(raw, "investment_amount"))
                .transpose()?,
            profit_loss_amount: parse_decimal_column(&db.profit_loss_amount, "profit_loss_amount")?,
            created_at: parse_timestamp_column(&db.created_at, "created_at")?,
            id: db.id,
            token_name: db.token_name,
            trading_date: db.trading_date,
            notes: db.notes,
        })
    }
}
