//! Storage layer for the footprint tracker.
//!
//! Provides persistence for logged activities using `rusqlite`. The store
//! holds no domain logic: carbon values arrive already stamped by
//! [`fp_core::EmissionModel`] and are returned untouched.
//!
//! # Thread Safety
//!
//! The [`Database`] type wraps a `rusqlite::Connection`, which is `Send` but not `Sync`.
//! A `Database` instance can be moved between threads but cannot be shared
//! across threads without external synchronization.
//!
//! # Schema
//!
//! - `activity_date` is stored as TEXT `YYYY-MM-DD`, so lexicographic order is
//!   calendar order.
//! - `created_at` is stored as TEXT in RFC 3339 with millisecond precision and
//!   a `Z` suffix, for the same reason.
//! - `activity_type` holds the snake_case name of [`fp_core::ActivityType`].

use std::path::Path;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use fp_core::{Activity, ActivityType, NewActivity, UnknownActivityType};
use rusqlite::{Connection, Row, params};
use thiserror::Error;
use uuid::Uuid;

/// Database errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// An error from the underlying database.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// A stored activity type is not a known variant.
    #[error("invalid activity type for {activity_id}")]
    ActivityType {
        activity_id: String,
        #[source]
        source: UnknownActivityType,
    },
    /// Failed to parse a stored activity date.
    #[error("invalid activity date for {activity_id}: {date}")]
    DateParse {
        activity_id: String,
        date: String,
        #[source]
        source: chrono::ParseError,
    },
    /// Failed to parse a stored creation timestamp.
    #[error("invalid timestamp for {activity_id}: {timestamp}")]
    TimestampParse {
        activity_id: String,
        timestamp: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Database connection wrapper.
///
/// See the [module documentation](self) for thread safety considerations.
pub struct Database {
    conn: Connection,
}

/// Raw column values of an `activities` row.
struct ActivityRow {
    id: String,
    user_id: String,
    activity_type: String,
    value: f64,
    carbon_kg: f64,
    activity_date: String,
    created_at: String,
}

impl ActivityRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            user_id: row.get(1)?,
            activity_type: row.get(2)?,
            value: row.get(3)?,
            carbon_kg: row.get(4)?,
            activity_date: row.get(5)?,
            created_at: row.get(6)?,
        })
    }

    fn into_activity(self) -> Result<Activity, DbError> {
        let activity_type: ActivityType =
            self.activity_type
                .parse()
                .map_err(|source| DbError::ActivityType {
                    activity_id: self.id.clone(),
                    source,
                })?;
        let activity_date = NaiveDate::parse_from_str(&self.activity_date, "%Y-%m-%d").map_err(
            |source| DbError::DateParse {
                activity_id: self.id.clone(),
                date: self.activity_date.clone(),
                source,
            },
        )?;
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|source| DbError::TimestampParse {
                activity_id: self.id.clone(),
                timestamp: self.created_at.clone(),
                source,
            })?
            .with_timezone(&Utc);

        Ok(Activity {
            id: self.id,
            user_id: self.user_id,
            activity_type,
            value: self.value,
            carbon_kg: self.carbon_kg,
            activity_date,
            created_at,
        })
    }
}

impl Database {
    /// Opens a database at the given path, creating it if necessary.
    ///
    /// The database schema is automatically initialized on first open.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing. The database is destroyed when the connection closes.
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Initializes the database schema.
    ///
    /// This is idempotent - safe to call on an already-initialized database.
    fn init(&self) -> Result<(), DbError> {
        self.conn.execute_batch(
            "
            -- Activities table: one row per logged activity
            -- activity_date: 'YYYY-MM-DD'
            -- created_at: RFC 3339 UTC with milliseconds
            CREATE TABLE IF NOT EXISTS activities (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                activity_type TEXT NOT NULL,
                value REAL NOT NULL,
                carbon_kg REAL NOT NULL,
                activity_date TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_activities_user_date
                ON activities(user_id, activity_date DESC, created_at DESC);
            ",
        )?;
        Ok(())
    }

    /// Persists a stamped activity for `user_id` and returns the stored record.
    pub fn insert_activity(
        &mut self,
        user_id: &str,
        activity: &NewActivity,
        created_at: DateTime<Utc>,
    ) -> Result<Activity, DbError> {
        let id = Uuid::new_v4().to_string();
        self.conn.execute(
            "
            INSERT INTO activities
            (id, user_id, activity_type, value, carbon_kg, activity_date, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ",
            params![
                id,
                user_id,
                activity.activity_type.as_str(),
                activity.value,
                activity.carbon_kg,
                format_date(activity.activity_date),
                format_timestamp(created_at),
            ],
        )?;
        tracing::debug!(%id, user_id, activity_type = %activity.activity_type, "inserted activity");

        // Round-trip through the stored text so callers see what a later read returns.
        let created_at = DateTime::parse_from_rfc3339(&format_timestamp(created_at))
            .map_or(created_at, |dt| dt.with_timezone(&Utc));
        Ok(activity.into_activity(id, user_id, created_at))
    }

    /// Lists a user's activities, newest date first, then newest insertion first.
    pub fn list_activities(&self, user_id: &str) -> Result<Vec<Activity>, DbError> {
        let mut stmt = self.conn.prepare(
            "
            SELECT id, user_id, activity_type, value, carbon_kg, activity_date, created_at
            FROM activities
            WHERE user_id = ?
            ORDER BY activity_date DESC, created_at DESC, id DESC
            ",
        )?;
        let rows = stmt.query_map([user_id], ActivityRow::from_row)?;
        let mut activities = Vec::new();
        for row in rows {
            activities.push(row?.into_activity()?);
        }
        Ok(activities)
    }

    /// Deletes one of a user's activities by ID.
    ///
    /// Returns `false` if no such activity exists for the user.
    pub fn delete_activity(&mut self, user_id: &str, id: &str) -> Result<bool, DbError> {
        let deleted = self.conn.execute(
            "DELETE FROM activities WHERE id = ? AND user_id = ?",
            params![id, user_id],
        )?;
        Ok(deleted > 0)
    }

    /// Counts a user's activities.
    pub fn count_activities(&self, user_id: &str) -> Result<usize, DbError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM activities WHERE user_id = ?",
            [user_id],
            |row| row.get(0),
        )?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;
    use fp_core::EmissionModel;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, h, m, 0).unwrap()
    }

    fn stamp(activity_type: ActivityType, value: f64, date: NaiveDate) -> NewActivity {
        EmissionModel::standard()
            .new_activity(activity_type, value, date)
            .unwrap()
    }

    #[test]
    fn open_in_memory_database() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.count_activities("user").unwrap(), 0);
    }

    #[test]
    fn init_is_idempotent() {
        let db = Database::open_in_memory().unwrap();
        db.init().unwrap();
    }

    #[test]
    fn insert_returns_stored_record() {
        let mut db = Database::open_in_memory().unwrap();
        let inserted = db
            .insert_activity("user", &stamp(ActivityType::Car, 10.0, day(14)), at(9, 0))
            .unwrap();

        assert_eq!(inserted.user_id, "user");
        assert_eq!(inserted.carbon_kg, 2.1);
        assert!(Uuid::parse_str(&inserted.id).is_ok());

        let listed = db.list_activities("user").unwrap();
        assert_eq!(listed, vec![inserted]);
    }

    #[test]
    fn list_orders_by_date_then_creation_descending() {
        let mut db = Database::open_in_memory().unwrap();
        let older_day = db
            .insert_activity("user", &stamp(ActivityType::Bike, 5.0, day(13)), at(12, 0))
            .unwrap();
        let first_today = db
            .insert_activity("user", &stamp(ActivityType::Car, 10.0, day(14)), at(8, 0))
            .unwrap();
        let second_today = db
            .insert_activity(
                "user",
                &stamp(ActivityType::VegetarianMeal, 1.0, day(14)),
                at(8, 30),
            )
            .unwrap();

        let ids: Vec<_> = db
            .list_activities("user")
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec![second_today.id, first_today.id, older_day.id]);
    }

    #[test]
    fn activities_are_scoped_to_user() {
        let mut db = Database::open_in_memory().unwrap();
        let mine = db
            .insert_activity("me", &stamp(ActivityType::Electricity, 3.0, day(14)), at(9, 0))
            .unwrap();
        db.insert_activity("you", &stamp(ActivityType::Car, 3.0, day(14)), at(9, 0))
            .unwrap();

        assert_eq!(db.list_activities("me").unwrap(), vec![mine.clone()]);
        assert!(!db.delete_activity("you", &mine.id).unwrap());
        assert_eq!(db.count_activities("me").unwrap(), 1);
    }

    #[test]
    fn delete_removes_activity() {
        let mut db = Database::open_in_memory().unwrap();
        let activity = db
            .insert_activity("user", &stamp(ActivityType::Car, 1.0, day(14)), at(9, 0))
            .unwrap();

        assert!(db.delete_activity("user", &activity.id).unwrap());
        assert!(!db.delete_activity("user", &activity.id).unwrap());
        assert!(db.list_activities("user").unwrap().is_empty());
    }

    #[test]
    fn unknown_stored_type_is_reported() {
        let db = Database::open_in_memory().unwrap();
        db.conn
            .execute(
                "INSERT INTO activities VALUES ('bad', 'user', 'plane', 1.0, 1.0, '2025-03-14', '2025-03-14T09:00:00.000Z')",
                [],
            )
            .unwrap();

        let err = db.list_activities("user").unwrap_err();
        assert!(matches!(err, DbError::ActivityType { ref activity_id, .. } if activity_id == "bad"));
    }

    #[test]
    fn persists_across_reopen() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("fp.db");
        {
            let mut db = Database::open(&path).unwrap();
            db.insert_activity("user", &stamp(ActivityType::Car, 10.0, day(14)), at(9, 0))
                .unwrap();
        }
        let db = Database::open(&path).unwrap();
        let activities = db.list_activities("user").unwrap();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].activity_date, day(14));
        assert_eq!(activities[0].created_at, at(9, 0));
    }
}
