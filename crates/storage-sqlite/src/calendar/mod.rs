//! SQLite storage implementation for day statuses.

mod model;
mod repository;

pub use model::DayStatusDB;
pub use repository::DayStatusRepository;
pub(crate) use repository::refresh_day_status_in_tx;
