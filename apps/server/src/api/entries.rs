use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use tradejournal_core::utils::time_utils::parse_calendar_date;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{DayActivities, NewTradingEntry, TradingEntry},
};

/// Logs a trade for today and refreshes the day's status.
#[utoipa::path(
    post,
    path = "/api/v1/trading",
    request_body = NewTradingEntry,
    responses(
        (status = 200, description = "Entry created", body = TradingEntry),
        (status = 400, description = "Invalid payload or date is not today", body = ErrorBody),
        (status = 500, description = "Unexpected failure", body = ErrorBody),
    )
)]
pub(super) async fn create_trading_entry(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewTradingEntry>, JsonRejection>,
) -> ApiResult<Json<TradingEntry>> {
    let Json(payload) = payload?;
    let new_entry = payload.into_core(state.clock.timezone())?;
    let created = state.entry_service.create_entry(new_entry).await?;
    Ok(Json(created.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/trading/{date}",
    params(("date" = String, Path, description = "Calendar day, YYYY-MM-DD")),
    responses(
        (status = 200, description = "Entries of the day with totals", body = DayActivities),
        (status = 400, description = "Unparsable date", body = ErrorBody),
    )
)]
pub(super) async fn get_day_activities(
    Path(date): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DayActivities>> {
    let date = parse_calendar_date(&date, state.clock.timezone())?;
    let day = state.entry_service.get_day_activities(date)?;
    Ok(Json(day.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/trading", post(create_trading_entry))
        .route("/trading/{date}", get(get_day_activities))
}
