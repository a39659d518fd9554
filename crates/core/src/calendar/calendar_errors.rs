use thiserror::Error;

/// Errors raised while resolving calendar queries.
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("Invalid year or month: month {0} is outside 1-12")]
    InvalidMonth(u32),
    #[error("Invalid year or month: year {0} is out of range")]
    InvalidYear(i32),
    #[error("Unknown trading status '{0}'")]
    UnknownStatus(String),
}
