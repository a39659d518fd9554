use std::sync::Arc;

use chrono::NaiveDate;
use tempfile::TempDir;
use tradejournal_core::FixedClock;

use crate::db::{self, DbPool, WriteHandle};

/// A migrated database in a temporary directory. Keep the struct alive for
/// the duration of the test; dropping it deletes the file.
pub struct TestDb {
    pub pool: Arc<DbPool>,
    pub writer: WriteHandle,
    /// Pinned to noon UTC on 2024-06-14.
    pub clock: Arc<FixedClock>,
    _dir: TempDir,
}

pub fn setup_db() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.db");
    let db_path = db::init(path.to_str().unwrap()).unwrap();
    let pool = db::create_pool(&db_path).unwrap();
    db::run_migrations(&pool).unwrap();
    let writer = db::spawn_writer(&pool).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
    TestDb {
        pool,
        writer,
        clock: Arc::new(FixedClock::on_date(today, chrono_tz::UTC)),
        _dir: dir,
    }
}
