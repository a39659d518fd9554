//! JSON shapes of the HTTP API.
//!
//! This is the one place where money changes representation: domain
//! `Decimal`s are converted to plain JSON numbers (`f64`) on the way out, and
//! incoming numbers are converted to `Decimal` on the way in. Values in this
//! application stay far inside the range where `f64` round-trips two-digit
//! amounts exactly.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use tradejournal_core::{calendar as core_calendar, entries as core_entries};
use tradejournal_core::utils::time_utils::parse_calendar_date;

fn decimal_to_number(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

fn number_to_decimal(value: f64, field: &str) -> Result<Decimal, ApiError> {
    if !value.is_finite() {
        return Err(ApiError::BadRequest(format!(
            "{} must be a finite number",
            field
        )));
    }
    let decimal = Decimal::from_f64(value)
        .ok_or_else(|| ApiError::BadRequest(format!("{} is out of range", field)))?;
    if decimal.is_zero() {
        // Non-zero input below decimal resolution would silently become 0.
        if value != 0.0 {
            return Err(ApiError::BadRequest(format!(
                "{} is too small to record",
                field
            )));
        }
        return Ok(Decimal::ZERO);
    }
    Ok(decimal)
}

#[derive(Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTradingEntry {
    pub token_name: String,
    pub investment_amount: Option<f64>,
    pub profit_loss_amount: f64,
    /// `YYYY-MM-DD`
    pub trading_date: String,
    pub notes: Option<String>,
}

impl NewTradingEntry {
    pub fn into_core(self, tz: Tz) -> Result<core_entries::NewTradingEntry, ApiError> {
        Ok(core_entries::NewTradingEntry {
            investment_amount: self
                .investment_amount
                .map(|v| number_to_decimal(v, "investmentAmount"))
                .transpose()?,
            profit_loss_amount: number_to_decimal(self.profit_loss_amount, "profitLossAmount")?,
            trading_date: parse_calendar_date(&self.trading_date, tz)?,
            token_name: self.token_name,
            notes: self.notes,
        })
    }
}

#[derive(Serialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TradingEntry {
    pub id: String,
    pub token_name: String,
    pub investment_amount: Option<f64>,
    pub profit_loss_amount: f64,
    pub profit_loss_percentage: Option<f64>,
    pub trading_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<core_entries::TradingEntry> for TradingEntry {
    fn from(e: core_entries::TradingEntry) -> Self {
        Self {
            profit_loss_percentage: e.profit_loss_percentage().map(decimal_to_number),
            investment_amount: e.investment_amount.map(decimal_to_number),
            profit_loss_amount: decimal_to_number(e.profit_loss_amount),
            id: e.id,
            token_name: e.token_name,
            trading_date: e.trading_date,
            notes: e.notes,
            created_at: e.created_at,
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    pub total_profit_loss: f64,
    pub number_of_trades: i64,
}

impl From<core_entries::DailyStats> for DailyStats {
    fn from(s: core_entries::DailyStats) -> Self {
        Self {
            total_profit_loss: decimal_to_number(s.total_profit_loss),
            number_of_trades: s.number_of_trades,
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone)]
pub struct DayActivities {
    pub activities: Vec<TradingEntry>,
    pub stats: DailyStats,
}

impl From<core_entries::DayActivities> for DayActivities {
    fn from(d: core_entries::DayActivities) -> Self {
        Self {
            activities: d.activities.into_iter().map(TradingEntry::from).collect(),
            stats: d.stats.into(),
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DayStatus {
    pub date: NaiveDate,
    /// `PROFIT`, `LOSS` or `INACTIVE`
    pub trading_status: String,
    pub total_profit_loss: f64,
    pub number_of_trades: i64,
}

impl From<core_calendar::DayStatus> for DayStatus {
    fn from(s: core_calendar::DayStatus) -> Self {
        Self {
            date: s.date,
            trading_status: s.trading_status.as_str().to_string(),
            total_profit_loss: decimal_to_number(s.total_profit_loss),
            number_of_trades: s.number_of_trades,
        }
    }
}
