//! `tt-output` — timetable persistence for the timetable engine.
//!
//! Three backends, the last behind a Cargo feature:
//!
//! | Feature   | Backend | Files created                                       |
//! |-----------|---------|-----------------------------------------------------|
//! | *(none)*  | CSV     | `<tenant>/timetable.csv`, `<tenant>/shortages.csv`  |
//! | *(none)*  | JSON    | `<tenant>.json`                                     |
//! | `sqlite`  | SQLite  | `timetables.db`                                     |
//!
//! All backends implement [`TimetableWriter`] and store one current timetable
//! per tenant: writing a tenant again replaces what was there.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tt_output::{CsvWriter, TimetableWriter};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! writer.write_timetable(&tenant, &result)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::JsonWriter;
pub use row::{ShortageRow, SlotRow, shortage_rows};
pub use writer::TimetableWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
