//! Column conversion helpers shared by the repositories.
//!
//! Money is stored as canonical decimal TEXT and instants as RFC 3339 TEXT.
//! A value that fails to parse means the row is corrupt, which is a storage
//! failure rather than bad user input.

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;

use crate::errors::StorageError;
use tradejournal_core::Result;

pub fn parse_decimal_column(raw: &str, column: &'static str) -> Result<Decimal> {
    Decimal::from_str(raw).map_err(|e| {
        log::error!("Failed to parse {} '{}' as decimal: {}", column, raw, e);
        StorageError::CorruptValue {
            column,
            reason: e.to_string(),
        }
        .into()
    })
}

pub fn parse_timestamp_column(raw: &str, column: &'static str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            log::error!("Failed to parse {} '{}' as timestamp: {}", column, raw, e);
            StorageError::CorruptValue {
                column,
                reason: e.to_string(),
            }
            .into()
        })
}

/// Fixed-width UTC timestamp; lexical order equals chronological order.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Nanos, true)
}
