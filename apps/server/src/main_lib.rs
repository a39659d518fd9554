use std::sync::Arc;

use crate::config::Config;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use tradejournal_core::{
    calendar::{CalendarService, CalendarServiceTrait},
    entries::{TradingEntryService, TradingEntryServiceTrait},
    Clock, SystemClock,
};
use tradejournal_storage_sqlite::{
    calendar::DayStatusRepository,
    db::{self, write_actor},
    entries::TradingEntryRepository,
};

pub struct AppState {
    pub entry_service: Arc<dyn TradingEntryServiceTrait>,
    pub calendar_service: Arc<dyn CalendarServiceTrait>,
    pub clock: Arc<dyn Clock>,
}

pub fn init_tracing() {
    let log_format = std::env::var("TJ_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    build_state_with_clock(config, Arc::new(SystemClock::new(config.timezone))).await
}

/// Wires repositories and services around an explicit clock.
pub async fn build_state_with_clock(
    config: &Config,
    clock: Arc<dyn Clock>,
) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);
    tracing::info!("Processing time zone: {}", clock.timezone());

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer(&pool)?;

    let entry_repository = Arc::new(TradingEntryRepository::new(
        pool.clone(),
        writer.clone(),
        clock.clone(),
    ));
    let day_status_repository = Arc::new(DayStatusRepository::new(pool, writer, clock.clone()));

    let entry_service: Arc<dyn TradingEntryServiceTrait> =
        Arc::new(TradingEntryService::new(entry_repository, clock.clone()));
    let calendar_service: Arc<dyn CalendarServiceTrait> =
        Arc::new(CalendarService::new(day_status_repository));

    Ok(Arc::new(AppState {
        entry_service,
        calendar_service,
        clock,
    }))
}
