//! Calendar module - per-day trading status derived from entries.

mod calendar_errors;
mod calendar_model;
mod calendar_service;
mod calendar_traits;



pub use calendar_errors::CalendarError;
pub use calendar_model::{DayStatus, MonthRange, TradingStatus};
pub use calendar_service::CalendarService;
pub use calendar_traits::{CalendarServiceTrait, DayStatusRepositoryTrait};
