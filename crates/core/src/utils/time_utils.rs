use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::constants::TRADING_DATE_FORMAT;
use crate::errors::{Result, ValidationError};

/// Converts a UTC instant to the calendar date it falls on in `tz`.
///
/// This is the single place where instants become trading days.
pub fn calendar_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Parses a calendar date sent by a client.
///
/// Accepts a plain `YYYY-MM-DD` date, or an RFC 3339 timestamp whose time of
/// day is dropped after converting it to `tz`.
pub fn parse_calendar_date(input: &str, tz: Tz) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField("tradingDate".to_string()).into());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, TRADING_DATE_FORMAT) {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| calendar_date_from_utc(dt.with_timezone(&Utc), tz))
        .map_err(|_| {
            ValidationError::InvalidInput(format!(
                "'{}' is not a valid date, expected YYYY-MM-DD",
                trimmed
            ))
            .into()
        })
}
