//! SQLite-backed journey store via libsql.
//!
//! One database file (`journeys.db`) in the given base directory. Journeys
//! are stored with both the full timestamp and the local calendar day as a
//! separate indexed column, so quota queries scope by the same date
//! boundary the timestamps were recorded in.

use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate};
use libsql::{Connection, Database, params};
use tracing::{debug, info};

use crate::domain::{JourneyRecord, PricedJourney, UserId, Zone};
use crate::fare::QuotaExceeded;

use super::{JourneyStore, StoreError};

const JOURNEYS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS journeys (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id TEXT NOT NULL,
    from_zone TEXT NOT NULL,
    to_zone TEXT NOT NULL,
    fare INTEGER NOT NULL CHECK (fare >= 0),
    day TEXT NOT NULL,
    created_at TEXT NOT NULL
)"#;

const USER_DAY_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_journeys_user_day ON journeys (user_id, day)";

const CREATED_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_journeys_created ON journeys (created_at DESC)";

/// SQLite journey store. Safe to share via `Arc`; every operation opens its
/// own connection against the shared database handle.
pub struct SqliteJourneyStore {
    db: Database,
}

impl SqliteJourneyStore {
    /// Open (or create) the database under `base_dir` and ensure the schema
    /// exists. Call once at startup.
    pub async fn connect(base_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let base = base_dir.as_ref();
        std::fs::create_dir_all(base).map_err(|e| StoreError::Database(e.to_string()))?;
        let db_path = base.join("journeys.db");
        let path_str = db_path.to_string_lossy();

        let db = libsql::Builder::new_local(path_str.as_ref())
            .build()
            .await
            .map_err(db_err)?;
        let conn = db.connect().map_err(db_err)?;

        // WAL allows concurrent readers alongside the single writer; NORMAL
        // sync is durable enough under WAL.
        run_pragma(&conn, "PRAGMA journal_mode=WAL").await?;
        run_pragma(&conn, "PRAGMA synchronous=NORMAL").await?;

        conn.execute(JOURNEYS_TABLE, ()).await.map_err(db_err)?;
        conn.execute(USER_DAY_INDEX, ()).await.map_err(db_err)?;
        conn.execute(CREATED_INDEX, ()).await.map_err(db_err)?;

        info!(path = %db_path.display(), "journey store ready");

        Ok(Self { db })
    }

    fn conn(&self) -> Result<Connection, StoreError> {
        self.db.connect().map_err(db_err)
    }
}

#[async_trait]
impl JourneyStore for SqliteJourneyStore {
    async fn count_for_date(&self, user: &UserId, date: NaiveDate) -> Result<u32, StoreError> {
        let conn = self.conn()?;
        count_on_day(&conn, user, &date.to_string()).await
    }

    async fn record_batch(
        &self,
        user: &UserId,
        recorded_at: DateTime<FixedOffset>,
        journeys: &[PricedJourney],
        max_per_day: u32,
    ) -> Result<Vec<JourneyRecord>, StoreError> {
        if journeys.is_empty() {
            return Ok(Vec::new());
        }

        let day = recorded_at.date_naive().to_string();
        let created_at = recorded_at.to_rfc3339();

        let conn = self.conn()?;
        let tx = conn.transaction().await.map_err(db_err)?;

        // Re-check the cap inside the transaction: a concurrent batch may
        // have landed between the caller's pre-check and this insert.
        let existing = count_on_day(&tx, user, &day).await?;
        let requested = u32::try_from(journeys.len()).unwrap_or(u32::MAX);
        if existing.saturating_add(requested) > max_per_day {
            return Err(StoreError::QuotaExceeded(QuotaExceeded {
                existing,
                requested,
                limit: max_per_day,
            }));
        }

        let mut records = Vec::with_capacity(journeys.len());
        for journey in journeys {
            tx.execute(
                r#"
                INSERT INTO journeys (user_id, from_zone, to_zone, fare, day, created_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
                params![
                    user.as_str(),
                    journey.from_zone.as_str(),
                    journey.to_zone.as_str(),
                    journey.fare as i64,
                    day.as_str(),
                    created_at.as_str()
                ],
            )
            .await
            .map_err(db_err)?;

            records.push(JourneyRecord {
                id: tx.last_insert_rowid(),
                user_id: user.as_str().to_string(),
                from_zone: journey.from_zone,
                to_zone: journey.to_zone,
                fare: journey.fare,
                created_at: recorded_at,
            });
        }

        tx.commit().await.map_err(db_err)?;

        debug!(
            user = %user,
            count = records.len(),
            existing,
            "recorded journey batch"
        );

        Ok(records)
    }

    async fn list_for_user(&self, user: &UserId) -> Result<Vec<JourneyRecord>, StoreError> {
        let conn = self.conn()?;
        let mut rows = conn
            .query(
                r#"
                SELECT id, user_id, from_zone, to_zone, fare, created_at
                FROM journeys
                WHERE user_id = ?1
                ORDER BY created_at DESC, id DESC
                "#,
                params![user.as_str()],
            )
            .await
            .map_err(db_err)?;

        let mut records = Vec::new();
        while let Some(row) = rows.next().await.map_err(db_err)? {
            records.push(parse_row(&row)?);
        }
        Ok(records)
    }
}

async fn count_on_day(conn: &Connection, user: &UserId, day: &str) -> Result<u32, StoreError> {
    let mut rows = conn
        .query(
            "SELECT COUNT(*) FROM journeys WHERE user_id = ?1 AND day = ?2",
            params![user.as_str(), day],
        )
        .await
        .map_err(db_err)?;

    let row = rows
        .next()
        .await
        .map_err(db_err)?
        .ok_or_else(|| StoreError::Database("COUNT returned no rows".into()))?;
    let count: i64 = row.get(0).map_err(db_err)?;
    Ok(u32::try_from(count).unwrap_or(0))
}

fn parse_row(row: &libsql::Row) -> Result<JourneyRecord, StoreError> {
    let id: i64 = row.get(0).map_err(db_err)?;
    let user_id: String = row.get(1).map_err(db_err)?;
    let from_raw: String = row.get(2).map_err(db_err)?;
    let to_raw: String = row.get(3).map_err(db_err)?;
    let fare: i64 = row.get(4).map_err(db_err)?;
    let created_raw: String = row.get(5).map_err(db_err)?;

    let from_zone = Zone::parse(&from_raw).map_err(|e| StoreError::CorruptRow {
        id,
        message: format!("from_zone {from_raw:?}: {e}"),
    })?;
    let to_zone = Zone::parse(&to_raw).map_err(|e| StoreError::CorruptRow {
        id,
        message: format!("to_zone {to_raw:?}: {e}"),
    })?;
    let fare = u32::try_from(fare).map_err(|_| StoreError::CorruptRow {
        id,
        message: format!("negative fare {fare}"),
    })?;
    let created_at =
        DateTime::parse_from_rfc3339(&created_raw).map_err(|e| StoreError::CorruptRow {
            id,
            message: format!("created_at {created_raw:?}: {e}"),
        })?;

    Ok(JourneyRecord {
        id,
        user_id,
        from_zone,
        to_zone,
        fare,
        created_at,
    })
}

async fn run_pragma(conn: &Connection, sql: &str) -> Result<(), StoreError> {
    // PRAGMA statements return a row; consume it (execute fails when rows
    // are returned).
    let mut rows = conn.query(sql, ()).await.map_err(db_err)?;
    while rows.next().await.map_err(db_err)?.is_some() {}
    Ok(())
}

fn db_err(e: libsql::Error) -> StoreError {
    StoreError::Database(e.to_string())
}
