//! Time source abstraction.
//!
//! Services never read the wall clock directly. They are handed a [`Clock`]
//! so that "today" can be pinned to any date in tests.

use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::utils::time_utils::calendar_date_from_utc;

/// Source of the current instant and of the processing time zone.
pub trait Clock: Send + Sync {
    /// Get the current time.
    fn now(&self) -> DateTime<Utc>;

    /// Time zone in which calendar days are evaluated.
    fn timezone(&self) -> Tz;

    /// Current calendar date in the processing time zone.
    fn today(&self) -> NaiveDate {
        calendar_date_from_utc(self.now(), self.timezone())
    }
}

/// Wall clock evaluated in a configured time zone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_TIMEZONE)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn timezone(&self) -> Tz {
        self.tz
    }
}

/// Clock frozen at a given instant until explicitly moved.
#[derive(Debug)]
pub struct FixedClock {
    instant: RwLock<DateTime<Utc>>,
    tz: Tz,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>, tz: Tz) -> Self {
        Self {
            instant: RwLock::new(instant),
            tz,
        }
    }

    /// Clock whose `today()` is `date`, pinned at noon in `tz`.
    pub fn on_date(date: NaiveDate, tz: Tz) -> Self {
        let noon = date
            .and_hms_opt(12, 0, 0)
            .and_then(|dt| dt.and_local_timezone(tz).single())
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|| date.and_time(chrono::NaiveTime::MIN).and_utc());
        Self::new(noon, tz)
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut instant = self.instant.write().unwrap_or_else(PoisonError::into_inner);
        *instant += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.instant.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn timezone(&self) -> Tz {
        self.tz
    }
}
