/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Date format used for trading dates on the wire and in storage
pub const TRADING_DATE_FORMAT: &str = "%Y-%m-%d";

/// Processing time zone used when none is configured
pub const DEFAULT_TIMEZONE: chrono_tz::Tz = chrono_tz::UTC;
