//! Trading entry domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EntryError;
use crate::calendar::DayStatus;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Error, Result, ValidationError};

/// Domain model representing one logged trading result.
///
/// Entries are immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingEntry {
    pub id: String,
    pub token_name: String,
    pub investment_amount: Option<Decimal>,
    pub profit_loss_amount: Decimal,
    pub trading_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TradingEntry {
    /// Profit/loss relative to the invested amount, in percent, rounded for
    /// display. `None` when no investment was recorded.
    pub fn profit_loss_percentage(&self) -> Option<Decimal> {
        let investment = self.investment_amount.filter(|amount| !amount.is_zero())?;
        self.profit_loss_amount
            .checked_mul(Decimal::ONE_HUNDRED)?
            .checked_div(investment)
            .map(|pct| pct.round_dp(DISPLAY_DECIMAL_PRECISION))
    }
}

/// Input model for creating a new entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTradingEntry {
    pub token_name: String,
    pub investment_amount: Option<Decimal>,
    pub profit_loss_amount: Decimal,
    pub trading_date: NaiveDate,
    pub notes: Option<String>,
}

impl NewTradingEntry {
    /// Trims the token name and notes; a blank note is dropped.
    pub fn normalized(self) -> Self {
        let notes = self
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        Self {
            token_name: self.token_name.trim().to_string(),
            notes,
            ..self
        }
    }

    /// Checks the entry against the business rules, `today` being the
    /// current calendar date in the processing time zone.
    pub fn validate(&self, today: NaiveDate) -> Result<()> {
        if self.token_name.trim().is_empty() {
            return Err(ValidationError::MissingField("tokenName".to_string()).into());
        }

        if let Some(investment) = self.investment_amount {
            if investment <= Decimal::ZERO {
                return Err(EntryError::InvalidData(format!(
                    "investmentAmount must be greater than zero, got {}",
                    investment
                ))
                .into());
            }
        }

        if self.trading_date != today {
            return Err(EntryError::TradingDateNotToday {
                date: self.trading_date,
                today,
            }
            .into());
        }

        Ok(())
    }
}

/// Aggregate profit/loss of a set of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    pub total_profit_loss: Decimal,
    pub number_of_trades: i64,
}

impl DailyStats {
    pub const EMPTY: DailyStats = DailyStats {
        total_profit_loss: Decimal::ZERO,
        number_of_trades: 0,
    };

    /// Exact decimal sum and count of the given profit/loss amounts.
    pub fn from_amounts<I>(amounts: I) -> Result<Self>
    where
        I: IntoIterator<Item = Decimal>,
    {
        amounts.into_iter().try_fold(Self::EMPTY, |acc, amount| {
            let total_profit_loss = acc.total_profit_loss.checked_add(amount).ok_or_else(|| {
                Error::Unexpected("Daily profit/loss total overflowed".to_string())
            })?;
            Ok(DailyStats {
                total_profit_loss,
                number_of_trades: acc.number_of_trades + 1,
            })
        })
    }

    pub fn from_entries(entries: &[TradingEntry]) -> Result<Self> {
        Self::from_amounts(entries.iter().map(|e| e.profit_loss_amount))
    }
}

impl Default for DailyStats {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Entries of one day with their aggregate, newest entry first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayActivities {
    pub activities: Vec<TradingEntry>,
    pub stats: DailyStats,
}

/// A stored entry together with the refreshed status of its day.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedEntry {
    pub entry: TradingEntry,
    pub day_status: DayStatus,
}
