use std::sync::Arc;

use axum::{
    http::{HeaderName, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{config::Config, error::ErrorBody, main_lib::AppState, models};

mod calendar;
mod entries;
mod health;

#[derive(OpenApi)]
#[openapi(
    paths(
        entries::create_trading_entry,
        entries::get_day_activities,
        calendar::get_month_statuses,
        calendar::refresh_day_status,
        health::healthz,
        health::readyz,
    ),
    components(schemas(
        models::NewTradingEntry,
        models::TradingEntry,
        models::DailyStats,
        models::DayActivities,
        models::DayStatus,
        ErrorBody,
        health::HealthStatus,
    ))
)]
struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);
    if config.cors_allow.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }
    let origins: Vec<HeaderValue> = config
        .cors_allow
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(origins)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let request_id = HeaderName::from_static("x-request-id");

    let api = Router::new()
        .merge(entries::router())
        .merge(calendar::router())
        .merge(health::router())
        .route("/openapi.json", get(openapi));

    Router::new()
        .nest("/api/v1", api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(cors_layer(config))
}
