//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `timetables.db` file in the configured output directory
//! with two tables:
//!
//! | Table             | Key            | Contents                                   |
//! |-------------------|----------------|--------------------------------------------|
//! | `timetables`      | `tenant`       | schedule and alert as JSON, lesson counts  |
//! | `timetable_slots` | `tenant`, row  | one row per scheduled lesson, for querying |
//!
//! Writing a tenant deletes its previous rows from both tables and inserts the
//! new ones in one transaction.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};
use tracing::debug;

use tt_core::TenantId;
use tt_engine::{RunStats, TimetableResult};

use crate::row::SlotRow;
use crate::writer::TimetableWriter;
use crate::{OutputError, OutputResult};

/// Stores timetables in an SQLite database, one current timetable per tenant.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `timetables.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Self::from_connection(Connection::open(dir.join("timetables.db"))?)
    }

    /// A private in-memory database; nothing outlives the writer.
    pub fn in_memory() -> OutputResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> OutputResult<Self> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS timetables (
                 tenant    TEXT PRIMARY KEY,
                 schedule  TEXT    NOT NULL,
                 alert     TEXT,
                 lessons   INTEGER NOT NULL,
                 conflicts INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS timetable_slots (
                 tenant     TEXT    NOT NULL,
                 day        TEXT    NOT NULL,
                 slot_index INTEGER NOT NULL,
                 duration   INTEGER NOT NULL,
                 section    TEXT    NOT NULL,
                 department TEXT    NOT NULL,
                 subject    TEXT    NOT NULL,
                 teacher    TEXT    NOT NULL,
                 room       TEXT    NOT NULL,
                 type       TEXT    NOT NULL,
                 time       TEXT    NOT NULL
             );
             CREATE INDEX IF NOT EXISTS timetable_slots_tenant ON timetable_slots (tenant);",
        )?;
        Ok(Self { conn, finished: false })
    }

    /// The stored timetable for `tenant`, or `None` if there is none.
    pub fn load_latest(&self, tenant: &TenantId) -> OutputResult<Option<TimetableResult>> {
        let row: Option<(String, Option<String>, i64, i64)> = self
            .conn
            .query_row(
                "SELECT schedule, alert, lessons, conflicts FROM timetables WHERE tenant = ?1",
                params![tenant.as_str()],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)),
            )
            .optional()?;

        let Some((schedule, alert, lessons, conflicts)) = row else {
            return Ok(None);
        };
        let schedule: Vec<_> = serde_json::from_str(&schedule)?;
        let alert = alert.as_deref().map(serde_json::from_str).transpose()?;
        let stats = RunStats {
            lessons:   lessons as usize,
            placed:    schedule.len(),
            conflicts: conflicts as usize,
        };
        Ok(Some(TimetableResult { schedule, alert, stats }))
    }

    /// Delete `tenant`'s stored timetable.  Returns `true` if one existed.
    pub fn clear(&mut self, tenant: &TenantId) -> OutputResult<bool> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM timetable_slots WHERE tenant = ?1", params![tenant.as_str()])?;
        let removed = tx.execute("DELETE FROM timetables WHERE tenant = ?1", params![tenant.as_str()])?;
        tx.commit()?;
        Ok(removed > 0)
    }
}

impl TimetableWriter for SqliteWriter {
    fn write_timetable(&mut self, tenant: &TenantId, result: &TimetableResult) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        let schedule = serde_json::to_string(&result.schedule)?;
        let alert = result.alert.as_ref().map(serde_json::to_string).transpose()?;
        let conflicts = result.alert.as_ref().map_or(0, |a| a.count) as usize;
        let lessons = result.schedule.len() + conflicts;

        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM timetable_slots WHERE tenant = ?1", params![tenant.as_str()])?;
        tx.execute("DELETE FROM timetables WHERE tenant = ?1", params![tenant.as_str()])?;
        tx.execute(
            "INSERT INTO timetables (tenant, schedule, alert, lessons, conflicts) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![tenant.as_str(), schedule, alert, lessons as i64, conflicts as i64],
        )?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO timetable_slots \
                 (tenant, day, slot_index, duration, section, department, subject, teacher, room, type, time) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            )?;
            for slot in &result.schedule {
                let row = SlotRow::from(slot);
                stmt.execute(params![
                    tenant.as_str(),
                    row.day,
                    row.slot_index,
                    row.duration,
                    row.section,
                    row.department,
                    row.subject,
                    row.teacher,
                    row.room,
                    row.kind,
                    row.time,
                ])?;
            }
        }
        tx.commit()?;

        debug!(tenant = %tenant, lessons, conflicts, "stored timetable");
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
