//! CSV output backend.
//!
//! Each tenant gets its own sub-directory of the configured output directory:
//! - `<tenant>/timetable.csv`
//! - `<tenant>/shortages.csv` (header only when the timetable is complete)
//!
//! Writing a tenant again truncates both files.

use std::fs;
use std::path::{Path, PathBuf};

use csv::Writer;
use tracing::debug;

use tt_core::TenantId;
use tt_engine::TimetableResult;

use crate::row::{SHORTAGE_HEADERS, SLOT_HEADERS, SlotRow, shortage_rows};
use crate::writer::{TimetableWriter, tenant_file_stem};
use crate::{OutputError, OutputResult};

/// Writes each tenant's timetable to a pair of CSV files.
pub struct CsvWriter {
    dir:      PathBuf,
    finished: bool,
}

impl CsvWriter {
    /// Use `dir` as the output root, creating it if needed.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self { dir: dir.to_path_buf(), finished: false })
    }

    /// Directory holding `tenant`'s files.
    pub fn tenant_dir(&self, tenant: &TenantId) -> PathBuf {
        self.dir.join(tenant_file_stem(tenant))
    }
}

impl TimetableWriter for CsvWriter {
    fn write_timetable(&mut self, tenant: &TenantId, result: &TimetableResult) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        let dir = self.tenant_dir(tenant);
        fs::create_dir_all(&dir)?;

        let mut slots = Writer::from_path(dir.join("timetable.csv"))?;
        slots.write_record(SLOT_HEADERS)?;
        for slot in &result.schedule {
            slots.write_record(SlotRow::from(slot).to_record())?;
        }
        slots.flush()?;

        let mut shortages = Writer::from_path(dir.join("shortages.csv"))?;
        shortages.write_record(SHORTAGE_HEADERS)?;
        if let Some(alert) = &result.alert {
            for row in shortage_rows(alert) {
                shortages.write_record([row.resource, row.name, row.count.to_string().as_str()])?;
            }
        }
        shortages.flush()?;

        debug!(tenant = %tenant, lessons = result.schedule.len(), "wrote timetable csv");
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.finished = true;
        Ok(())
    }
}
