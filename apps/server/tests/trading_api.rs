use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use diesel::prelude::*;
use serde_json::{json, Value};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;
use tradejournal_core::FixedClock;
use tradejournal_server::{api::app_router, build_state_with_clock, config::Config};
use tradejournal_storage_sqlite::{create_pool, get_connection, schema::trading_entries};

const TODAY: (i32, u32, u32) = (2024, 6, 14);

struct TestApp {
    router: Router,
    clock: Arc<FixedClock>,
    db_path: String,
    _dir: TempDir,
}

async fn build_test_app() -> TestApp {
    let dir = tempdir().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: dir.path().join("test.db").to_string_lossy().into_owned(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
        static_dir: None,
        timezone: chrono_tz::UTC,
    };
    let today = NaiveDate::from_ymd_opt(TODAY.0, TODAY.1, TODAY.2).unwrap();
    let clock = Arc::new(FixedClock::on_date(today, chrono_tz::UTC));
    let state = build_state_with_clock(&config, clock.clone()).await.unwrap();
    TestApp {
        router: app_router(state, &config),
        clock,
        db_path: config.db_path,
        _dir: dir,
    }
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

fn entry(token: &str, profit_loss: f64, date: &str) -> Value {
    json!({
        "tokenName": token,
        "investmentAmount": 100,
        "profitLossAmount": profit_loss,
        "tradingDate": date,
    })
}

#[tokio::test]
async fn created_entries_show_up_in_day_and_month_views() {
    let test_app = build_test_app().await;
    let app = test_app.router.clone();

    let (status, created) =
        send(&app, Method::POST, "/api/v1/trading", Some(entry("ABC", 50.0, "2024-06-14"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["tokenName"], "ABC");
    assert_eq!(created["profitLossAmount"].as_f64(), Some(50.0));
    assert_eq!(created["profitLossPercentage"].as_f64(), Some(50.0));
    assert_eq!(created["tradingDate"], "2024-06-14");

    test_app.clock.advance(chrono::Duration::seconds(1));
    let (status, _) =
        send(&app, Method::POST, "/api/v1/trading", Some(entry("XYZ", -20.0, "2024-06-14"))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, day) = send(&app, Method::GET, "/api/v1/trading/2024-06-14", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(day["stats"]["totalProfitLoss"].as_f64(), Some(30.0));
    assert_eq!(day["stats"]["numberOfTrades"], 2);
    let tokens: Vec<&str> = day["activities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["tokenName"].as_str().unwrap())
        .collect();
    assert_eq!(tokens, vec!["XYZ", "ABC"]);

    let (status, month) = send(&app, Method::GET, "/api/v1/calendar/2024/6", None).await;
    assert_eq!(status, StatusCode::OK);
    let month = month.as_array().unwrap();
    assert_eq!(month.len(), 1);
    assert_eq!(month[0]["date"], "2024-06-14");
    assert_eq!(month[0]["tradingStatus"], "PROFIT");
    assert_eq!(month[0]["totalProfitLoss"].as_f64(), Some(30.0));
    assert_eq!(month[0]["numberOfTrades"], 2);
}

#[tokio::test]
async fn empty_day_reports_zero_stats() {
    let test_app = build_test_app().await;
    let app = test_app.router.clone();

    let (status, day) = send(&app, Method::GET, "/api/v1/trading/2024-06-10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(day["activities"], json!([]));
    assert_eq!(day["stats"]["totalProfitLoss"].as_f64(), Some(0.0));
    assert_eq!(day["stats"]["numberOfTrades"], 0);
}

#[tokio::test]
async fn entries_for_other_days_are_rejected_without_side_effects() {
    let test_app = build_test_app().await;
    let app = test_app.router.clone();

    for date in ["2024-06-13", "2024-06-15"] {
        let (status, body) =
            send(&app, Method::POST, "/api/v1/trading", Some(entry("ABC", 5.0, date))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("Can only add trading activities for today"));
    }

    let (_, day) = send(&app, Method::GET, "/api/v1/trading/2024-06-13", None).await;
    assert_eq!(day["stats"]["numberOfTrades"], 0);
    let (_, month) = send(&app, Method::GET, "/api/v1/calendar/2024/6", None).await;
    assert_eq!(month, json!([]));
}

#[tokio::test]
async fn malformed_payloads_are_bad_requests() {
    let test_app = build_test_app().await;
    let app = test_app.router.clone();

    let wrong_type = json!({
        "tokenName": "ABC",
        "profitLossAmount": "fifty",
        "tradingDate": "2024-06-14",
    });
    let (status, body) = send(&app, Method::POST, "/api/v1/trading", Some(wrong_type)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);

    let blank_token = entry("   ", 5.0, "2024-06-14");
    let (status, _) = send(&app, Method::POST, "/api/v1/trading", Some(blank_token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let bad_date = entry("ABC", 5.0, "14/06/2024");
    let (status, _) = send(&app, Method::POST, "/api/v1/trading", Some(bad_date)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, day) = send(&app, Method::GET, "/api/v1/trading/2024-06-14", None).await;
    assert_eq!(day["stats"]["numberOfTrades"], 0);
}

#[tokio::test]
async fn month_path_must_name_a_real_month() {
    let test_app = build_test_app().await;
    let app = test_app.router.clone();

    for uri in [
        "/api/v1/calendar/2024/13",
        "/api/v1/calendar/2024/0",
        "/api/v1/calendar/2024/june",
        "/api/v1/calendar/next/6",
    ] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(body["message"].as_str().unwrap().contains("Invalid year or month"));
    }

    let (status, feb) = send(&app, Method::GET, "/api/v1/calendar/2024/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(feb, json!([]));
}

#[tokio::test]
async fn refresh_rebuilds_a_day_status() {
    let test_app = build_test_app().await;
    let app = test_app.router.clone();

    send(&app, Method::POST, "/api/v1/trading", Some(entry("ABC", -7.5, "2024-06-14"))).await;

    let (status, refreshed) =
        send(&app, Method::POST, "/api/v1/calendar/days/2024-06-14/refresh", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(refreshed["tradingStatus"], "LOSS");
    assert_eq!(refreshed["totalProfitLoss"].as_f64(), Some(-7.5));

    let (status, empty) =
        send(&app, Method::POST, "/api/v1/calendar/days/2024-06-01/refresh", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(empty["tradingStatus"], "INACTIVE");
    assert_eq!(empty["numberOfTrades"], 0);
}

#[tokio::test]
async fn probes_and_openapi_document_respond() {
    let test_app = build_test_app().await;
    let app = test_app.router.clone();

    let (status, body) = send(&app, Method::GET, "/api/v1/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, Method::GET, "/api/v1/readyz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");

    let (status, doc) = send(&app, Method::GET, "/api/v1/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/v1/trading"].is_object());
    assert!(doc["paths"]["/api/v1/calendar/{year}/{month}"].is_object());
}

#[tokio::test]
async fn storage_failures_return_a_generic_error() {
    let test_app = build_test_app().await;
    let app = test_app.router.clone();

    let pool = create_pool(&test_app.db_path).unwrap();
    let mut conn = get_connection(&pool).unwrap();
    diesel::sql_query("DROP TABLE day_statuses")
        .execute(&mut conn)
        .unwrap();

    let (status, body) =
        send(&app, Method::POST, "/api/v1/trading", Some(entry("ABC", 5.0, "2024-06-14"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "code": 500, "message": "Internal server error" }));

    let stored: i64 = trading_entries::table
        .count()
        .get_result(&mut conn)
        .unwrap();
    assert_eq!(stored, 0);
}
