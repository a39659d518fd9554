use chrono::NaiveDate;
use thiserror::Error;

/// Custom error type for trading entry operations
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("Can only add trading activities for today (got {date}, today is {today})")]
    TradingDateNotToday { date: NaiveDate, today: NaiveDate },
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

