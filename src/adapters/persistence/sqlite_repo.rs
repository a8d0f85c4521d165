//! SQLite-backed schedule store via libsql. Implements ScheduleStore.
//!
//! `schedules` has (user_id, day_of_week) as primary key; one row per user per weekday.
//! `reminders` holds one row per user with `HH:MM` night/morning times (NULL = off).
//! Database file: {data_dir}/schedules.db

use crate::domain::reminder::{format_time, parse_time};
use crate::domain::{DomainError, ReminderKind, ReminderSettings, ScheduleEntry, UserId, Weekday};
use crate::ports::{ScheduleStore, UpsertOutcome};
use chrono::NaiveTime;
use libsql::{Connection, Database, Value, params};
use std::path::Path;
use tracing::{debug, info};

const SCHEDULES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schedules (
    user_id TEXT NOT NULL,
    day_of_week TEXT NOT NULL,
    item TEXT NOT NULL,
    note TEXT,
    updated_at INTEGER NOT NULL,
    PRIMARY KEY (user_id, day_of_week)
)"#;

const REMINDERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS reminders (
    user_id TEXT PRIMARY KEY,
    night TEXT,
    morning TEXT,
    updated_at INTEGER NOT NULL
)"#;

fn store_err(e: impl std::fmt::Display) -> DomainError {
    DomainError::Store(e.to_string())
}

/// SQLite schedule store. One database file shared by all users.
pub struct SqliteScheduleRepo {
    db: Database,
}

impl SqliteScheduleRepo {
    /// Connect to (or create) the database and ensure the schema exists.
    /// Call this once at startup; the returned repo is safe to share via Arc.
    pub async fn connect(base_dir: impl AsRef<Path>) -> Result<Self, DomainError> {
        let base = base_dir.as_ref();
        std::fs::create_dir_all(base).map_err(store_err)?;
        let db_path = base.join("schedules.db");
        let path_str = db_path.to_string_lossy();
        let db = libsql::Builder::new_local(path_str.as_ref())
            .build()
            .await
            .map_err(store_err)?;
        let conn = db.connect().map_err(store_err)?;

        // PRAGMA returns a row (new value); use query and consume rows (execute fails when rows are returned).
        let mut wal_rows = conn
            .query("PRAGMA journal_mode=WAL", ())
            .await
            .map_err(|e| DomainError::Store(format!("WAL pragma failed: {}", e)))?;
        while wal_rows.next().await.map_err(store_err)?.is_some() {}

        conn.execute(SCHEDULES_TABLE, ()).await.map_err(store_err)?;
        conn.execute(REMINDERS_TABLE, ()).await.map_err(store_err)?;

        info!(path = %db_path.display(), "SQLite schedule store ready");

        Ok(Self { db })
    }

    fn conn(&self) -> Result<Connection, DomainError> {
        self.db.connect().map_err(store_err)
    }

    /// Nullable TEXT column. Any other stored type is a store error.
    fn opt_text(row: &libsql::Row, idx: i32) -> Result<Option<String>, DomainError> {
        match row.get_value(idx).map_err(store_err)? {
            Value::Null => Ok(None),
            Value::Text(text) => Ok(Some(text)),
            other => Err(DomainError::Store(format!(
                "expected TEXT or NULL in column {idx}, got {other:?}"
            ))),
        }
    }

    fn opt_time(row: &libsql::Row, idx: i32) -> Result<Option<NaiveTime>, DomainError> {
        Self::opt_text(row, idx)?
            .map(|text| {
                parse_time(&text)
                    .ok_or_else(|| DomainError::Store(format!("bad reminder time {text:?}")))
            })
            .transpose()
    }

    fn row_to_reminders(row: &libsql::Row) -> Result<ReminderSettings, DomainError> {
        Ok(ReminderSettings {
            night: Self::opt_time(row, 0)?,
            morning: Self::opt_time(row, 1)?,
        })
    }

    fn row_to_entry(row: &libsql::Row) -> Result<ScheduleEntry, DomainError> {
        let day: String = row.get(0).map_err(store_err)?;
        let weekday = Weekday::from_name(&day)
            .ok_or_else(|| DomainError::Store(format!("unknown day_of_week {day:?} in schedules")))?;
        let item: String = row.get(1).map_err(store_err)?;
        let note = Self::opt_text(row, 2)?;
        Ok(ScheduleEntry {
            weekday,
            item,
            note,
        })
    }
}

#[async_trait::async_trait]
impl ScheduleStore for SqliteScheduleRepo {
    async fn lookup_schedule(
        &self,
        user: &UserId,
        day: Weekday,
    ) -> Result<Option<ScheduleEntry>, DomainError> {
        let conn = self.conn()?;
        let mut rows = conn
            .query(
                "SELECT day_of_week, item, note FROM schedules WHERE user_id = ?1 AND day_of_week = ?2",
                params![user.as_str(), day.name()],
            )
            .await
            .map_err(store_err)?;

        match rows.next().await.map_err(store_err)? {
            Some(row) => Self::row_to_entry(&row).map(Some),
            None => {
                debug!(user = %user, day = %day, "no schedule row");
                Ok(None)
            }
        }
    }

    async fn list_schedules(&self, user: &UserId) -> Result<Vec<ScheduleEntry>, DomainError> {
        let conn = self.conn()?;
        let mut rows = conn
            .query(
                "SELECT day_of_week, item, note FROM schedules WHERE user_id = ?1",
                params![user.as_str()],
            )
            .await
            .map_err(store_err)?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next().await.map_err(store_err)? {
            entries.push(Self::row_to_entry(&row)?);
        }
        entries.sort_by_key(|e| e.weekday);
        Ok(entries)
    }

    async fn upsert_schedule(
        &self,
        user: &UserId,
        entry: &ScheduleEntry,
    ) -> Result<UpsertOutcome, DomainError> {
        let conn = self.conn()?;
        let tx = conn.transaction().await.map_err(store_err)?;

        let mut existing = tx
            .query(
                "SELECT 1 FROM schedules WHERE user_id = ?1 AND day_of_week = ?2",
                params![user.as_str(), entry.weekday.name()],
            )
            .await
            .map_err(store_err)?;
        let outcome = if existing.next().await.map_err(store_err)?.is_some() {
            UpsertOutcome::Updated
        } else {
            UpsertOutcome::Inserted
        };
        drop(existing);

        let now = chrono::Utc::now().timestamp();
        tx.execute(
            r#"
            INSERT INTO schedules (user_id, day_of_week, item, note, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT (user_id, day_of_week) DO UPDATE SET
                item = excluded.item,
                note = excluded.note,
                updated_at = excluded.updated_at
            "#,
            params![
                user.as_str(),
                entry.weekday.name(),
                entry.item.as_str(),
                entry.note.clone(),
                now
            ],
        )
        .await
        .map_err(store_err)?;
        tx.commit().await.map_err(store_err)?;

        info!(user = %user, day = %entry.weekday, ?outcome, "schedule saved");
        Ok(outcome)
    }

    async fn reminder_settings(&self, user: &UserId) -> Result<ReminderSettings, DomainError> {
        let conn = self.conn()?;
        let mut rows = conn
            .query(
                "SELECT night, morning FROM reminders WHERE user_id = ?1",
                params![user.as_str()],
            )
            .await
            .map_err(store_err)?;
        match rows.next().await.map_err(store_err)? {
            Some(row) => Self::row_to_reminders(&row),
            None => Ok(ReminderSettings::default()),
        }
    }

    async fn set_reminder_time(
        &self,
        user: &UserId,
        kind: ReminderKind,
        at: Option<NaiveTime>,
    ) -> Result<(), DomainError> {
        // Column name comes from the enum, never from input.
        let column = match kind {
            ReminderKind::Night => "night",
            ReminderKind::Morning => "morning",
        };
        let sql = format!(
            "INSERT INTO reminders (user_id, {column}, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT (user_id) DO UPDATE SET {column} = excluded.{column}, updated_at = excluded.updated_at"
        );
        let conn = self.conn()?;
        conn.execute(
            &sql,
            params![
                user.as_str(),
                at.map(format_time),
                chrono::Utc::now().timestamp()
            ],
        )
        .await
        .map_err(store_err)?;
        info!(user = %user, %kind, at = ?at, "reminder time saved");
        Ok(())
    }

    async fn reminder_users(&self) -> Result<Vec<(UserId, ReminderSettings)>, DomainError> {
        let conn = self.conn()?;
        let mut rows = conn
            .query(
                "SELECT night, morning, user_id FROM reminders
                 WHERE night IS NOT NULL OR morning IS NOT NULL ORDER BY user_id",
                (),
            )
            .await
            .map_err(store_err)?;
        let mut users = Vec::new();
        while let Some(row) = rows.next().await.map_err(store_err)? {
            let user: String = row.get(2).map_err(store_err)?;
            users.push((UserId::new(user), Self::row_to_reminders(&row)?));
        }
        Ok(users)
    }
}
