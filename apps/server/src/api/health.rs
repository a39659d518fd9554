use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Serialize, ToSchema)]
pub struct HealthStatus {
    status: String,
}

/// Liveness probe.
#[utoipa::path(get, path = "/api/v1/healthz", responses((status = 200, body = HealthStatus)))]
pub(super) async fn healthz() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok".to_string() })
}

/// Readiness probe: succeeds once the database answers a read.
#[utoipa::path(
    get,
    path = "/api/v1/readyz",
    responses(
        (status = 200, body = HealthStatus),
        (status = 500, description = "Database unavailable"),
    )
)]
pub(super) async fn readyz(State(state): State<Arc<AppState>>) -> ApiResult<Json<HealthStatus>> {
    state
        .calendar_service
        .get_day_status(state.clock.today())?;
    Ok(Json(HealthStatus { status: "ready".to_string() }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
