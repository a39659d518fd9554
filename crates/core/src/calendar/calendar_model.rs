//! Calendar domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CalendarError;
use crate::entries::DailyStats;
use crate::errors::{Error, Result};

/// Outcome of a trading day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradingStatus {
    Profit,
    Loss,
    Inactive,
}

impl TradingStatus {
    /// Derives the status from a day's total. A zero total, including a day
    /// without entries, is `Inactive`.
    pub fn from_total(total: Decimal) -> Self {
        if total.is_zero() {
            TradingStatus::Inactive
        } else if total.is_sign_positive() {
            TradingStatus::Profit
        } else {
            TradingStatus::Loss
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TradingStatus::Profit => "PROFIT",
            TradingStatus::Loss => "LOSS",
            TradingStatus::Inactive => "INACTIVE",
        }
    }
}

impl fmt::Display for TradingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradingStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "PROFIT" => Ok(TradingStatus::Profit),
            "LOSS" => Ok(TradingStatus::Loss),
            "INACTIVE" => Ok(TradingStatus::Inactive),
            other => Err(CalendarError::UnknownStatus(other.to_string()).into()),
        }
    }
}

/// Materialized summary of one calendar day.
///
/// Always equal to the fold of every entry dated `date`; it is rebuilt in
/// full on each write and never merged incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStatus {
    pub date: NaiveDate,
    pub trading_status: TradingStatus,
    pub total_profit_loss: Decimal,
    pub number_of_trades: i64,
}

impl DayStatus {
    pub fn from_stats(date: NaiveDate, stats: &DailyStats) -> Self {
        Self {
            date,
            trading_status: TradingStatus::from_total(stats.total_profit_loss),
            total_profit_loss: stats.total_profit_loss,
            number_of_trades: stats.number_of_trades,
        }
    }
}

/// Inclusive date bounds of a calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    pub year: i32,
    pub month: u32,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

impl MonthRange {
    /// Builds the range for a 1-based `month` of `year`.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month).into());
        }

        let first_day =
            NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::InvalidYear(year))?;

        let (next_year, next_month) = if month == 12 {
            (
                year.checked_add(1).ok_or(CalendarError::InvalidYear(year))?,
                1,
            )
        } else {
            (year, month + 1)
        };
        let last_day = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .ok_or(CalendarError::InvalidYear(year))?;

        Ok(Self {
            year,
            month,
            first_day,
            last_day,
        })
    }
}
