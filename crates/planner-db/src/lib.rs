//! Storage layer for the schedule planner.
//!
//! Persists events in a local `SQLite` file using `rusqlite` and implements
//! [`planner_core::EventStore`].
//!
//! # Thread Safety
//!
//! The [`Database`] type wraps a `rusqlite::Connection`, which is `Send` but not `Sync`.
//! A `Database` can be moved between threads but not shared without external
//! synchronization. The planner issues one write per user action, so a single
//! connection is enough.
//!
//! # Schema
//!
//! Dates are stored as TEXT `YYYY-MM-DD` and times as zero-padded TEXT `HH:MM`,
//! so lexicographic ordering matches chronological ordering and values stay
//! readable in the database. Times carry no timezone.
//!
//! Events are indexed by `date`, `category`, `start_time` and `end_time` for
//! day-scoped retrieval.

use std::path::Path;

use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Row, params};
use thiserror::Error;
use uuid::Uuid;

use planner_core::{ClockTime, Event, EventId, EventStore, ValidatedEvent};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Database errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// An error from the underlying database.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// A stored row could not be converted back into an event.
    #[error("invalid event row {event_id}: {message}")]
    InvalidRow { event_id: String, message: String },
}

/// Database connection wrapper.
///
/// See the [module documentation](self) for thread safety considerations.
pub struct Database {
    conn: Connection,
}

/// An event row as stored, before parsing into domain types.
#[derive(Debug)]
struct EventRow {
    id: String,
    date: String,
    category: String,
    main_title: String,
    sub_title: Option<String>,
    start_time: String,
    end_time: String,
}

impl EventRow {
    const COLUMNS: &'static str =
        "id, date, category, main_title, sub_title, start_time, end_time";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            date: row.get(1)?,
            category: row.get(2)?,
            main_title: row.get(3)?,
            sub_title: row.get(4)?,
            start_time: row.get(5)?,
            end_time: row.get(6)?,
        })
    }

    fn into_event(self) -> Result<Event, DbError> {
        let invalid = |message: String| DbError::InvalidRow {
            event_id: self.id.clone(),
            message,
        };
        let id = EventId::new(self.id.clone()).map_err(|e| invalid(e.to_string()))?;
        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT)
            .map_err(|e| invalid(format!("date {:?}: {e}", self.date)))?;
        let start: ClockTime = self
            .start_time
            .parse()
            .map_err(|e: planner_core::TypeError| invalid(e.to_string()))?;
        let end: ClockTime = self
            .end_time
            .parse()
            .map_err(|e: planner_core::TypeError| invalid(e.to_string()))?;

        Ok(Event {
            id,
            date,
            category: self.category,
            main_title: self.main_title,
            sub_title: self.sub_title,
            start,
            end,
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
        tracing::debug!(path = %path.display(), "opened database");
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
            -- Events table: one row per scheduled time block
            -- date: YYYY-MM-DD
            -- start_time/end_time: zero-padded HH:MM wall-clock times
            CREATE TABLE IF NOT EXISTS events (
                id TEXT PRIMARY KEY,
                date TEXT NOT NULL,
                category TEXT NOT NULL,
                main_title TEXT NOT NULL,
                sub_title TEXT,
                start_time TEXT NOT NULL,
                end_time TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_events_date ON events(date);
            CREATE INDEX IF NOT EXISTS idx_events_category ON events(category);
            CREATE INDEX IF NOT EXISTS idx_events_start_time ON events(start_time);
            CREATE INDEX IF NOT EXISTS idx_events_end_time ON events(end_time);
            ",
        )?;
        Ok(())
    }
}

fn collect_events(
    rows: impl Iterator<Item = rusqlite::Result<EventRow>>,
) -> Result<Vec<Event>, DbError> {
    let mut events = Vec::new();
    for row in rows {
        events.push(row?.into_event()?);
    }
    Ok(events)
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

impl EventStore for Database {
    type Error = DbError;

    fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Event>, DbError> {
        let query = format!(
            "SELECT {} FROM events WHERE date = ? ORDER BY start_time ASC, id ASC",
            EventRow::COLUMNS
        );
        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map([format_date(date)], EventRow::from_row)?;
        collect_events(rows)
    }

    /// The range is inclusive of `start` and exclusive of `end`.
    fn list_in_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Event>, DbError> {
        if end <= start {
            return Ok(Vec::new());
        }
        let query = format!(
            "
            SELECT {}
            FROM events
            WHERE date >= ? AND date < ?
            ORDER BY date ASC, start_time ASC, id ASC
            ",
            EventRow::COLUMNS
        );
        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map([format_date(start), format_date(end)], EventRow::from_row)?;
        collect_events(rows)
    }

    fn get(&self, id: &EventId) -> Result<Option<Event>, DbError> {
        let query = format!("SELECT {} FROM events WHERE id = ?", EventRow::COLUMNS);
        let row = self
            .conn
            .query_row(&query, [id.as_str()], EventRow::from_row)
            .optional()?;
        row.map(EventRow::into_event).transpose()
    }

    fn create(&mut self, date: NaiveDate, event: ValidatedEvent) -> Result<Event, DbError> {
        let id = EventId::new(Uuid::new_v4().to_string()).map_err(|e| DbError::InvalidRow {
            event_id: String::new(),
            message: e.to_string(),
        })?;
        let draft = event.into_draft();
        self.conn.execute(
            "
            INSERT INTO events (id, date, category, main_title, sub_title, start_time, end_time)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ",
            params![
                id.as_str(),
                format_date(date),
                draft.category,
                draft.main_title,
                draft.sub_title,
                draft.start.to_string(),
                draft.end.to_string(),
            ],
        )?;
        tracing::debug!(%id, %date, "inserted event row");
        Ok(Event::from_draft(id, date, draft))
    }

    fn update(
        &mut self,
        id: &EventId,
        date: NaiveDate,
        event: ValidatedEvent,
    ) -> Result<bool, DbError> {
        let draft = event.into_draft();
        let changed = self.conn.execute(
            "
            UPDATE events
            SET date = ?, category = ?, main_title = ?, sub_title = ?, start_time = ?, end_time = ?
            WHERE id = ?
            ",
            params![
                format_date(date),
                draft.category,
                draft.main_title,
                draft.sub_title,
                draft.start.to_string(),
                draft.end.to_string(),
                id.as_str(),
            ],
        )?;
        tracing::debug!(%id, changed, "updated event row");
        Ok(changed > 0)
    }

    fn delete(&mut self, id: &EventId) -> Result<bool, DbError> {
        let changed = self
            .conn
            .execute("DELETE FROM events WHERE id = ?", [id.as_str()])?;
        tracing::debug!(%id, changed, "deleted event row");
        Ok(changed > 0)
    }
}
