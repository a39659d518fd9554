use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tradejournal_core::utils::time_utils::parse_calendar_date;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::DayStatus,
};

fn parse_path_number<T: std::str::FromStr>(raw: &str, name: &str) -> ApiResult<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| ApiError::BadRequest(format!("Invalid year or month: {} '{}'", name, raw)))
}

#[utoipa::path(
    get,
    path = "/api/v1/calendar/{year}/{month}",
    params(
        ("year" = i32, Path, description = "Four-digit year"),
        ("month" = u32, Path, description = "Month, 1-12"),
    ),
    responses(
        (status = 200, description = "Stored day statuses of the month, ascending", body = [DayStatus]),
        (status = 400, description = "Year or month out of range", body = ErrorBody),
    )
)]
pub(super) async fn get_month_statuses(
    Path((year, month)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<DayStatus>>> {
    let year: i32 = parse_path_number(&year, "year")?;
    let month: u32 = parse_path_number(&month, "month")?;
    let statuses = state.calendar_service.get_month_statuses(year, month)?;
    Ok(Json(statuses.into_iter().map(DayStatus::from).collect()))
}

/// Rebuilds one day's status from its entries.
#[utoipa::path(
    post,
    path = "/api/v1/calendar/days/{date}/refresh",
    params(("date" = String, Path, description = "Calendar day, YYYY-MM-DD")),
    responses(
        (status = 200, description = "Recomputed status", body = DayStatus),
        (status = 400, description = "Unparsable date", body = ErrorBody),
    )
)]
pub(super) async fn refresh_day_status(
    Path(date): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DayStatus>> {
    let date = parse_calendar_date(&date, state.clock.timezone())?;
    let status = state.calendar_service.refresh_day_status(date).await?;
    Ok(Json(status.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/calendar/{year}/{month}", get(get_month_statuses))
        .route("/calendar/days/{date}/refresh", post(refresh_day_status))
}
