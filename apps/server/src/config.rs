use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use chrono_tz::Tz;
use tradejournal_core::constants::DEFAULT_TIMEZONE;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Optional directory holding the web UI bundle.
    pub static_dir: Option<String>,
    /// Time zone that decides which calendar day "today" is.
    pub timezone: Tz,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("TJ_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid TJ_LISTEN_ADDR")?;
        let db_path = std::env::var("TJ_DB_PATH").unwrap_or_else(|_| "./db/app.db".into());
        let cors_allow = std::env::var("TJ_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("TJ_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let static_dir = std::env::var("TJ_STATIC_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let timezone = match std::env::var("TJ_TIMEZONE") {
            Ok(name) if !name.trim().is_empty() => name
                .trim()
                .parse::<Tz>()
                .map_err(|e| anyhow::anyhow!("Invalid TJ_TIMEZONE '{}': {}", name, e))?,
            _ => DEFAULT_TIMEZONE,
        };
        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            timezone,
        })
    }
}
