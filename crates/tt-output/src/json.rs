//! JSON output backend.
//!
//! One pretty-printed document per tenant, `<tenant>.json`, holding the
//! timetable exactly as the engine returned it:
//!
//! ```json
//! { "tenant": "SCH-1", "schedule": [ ... ], "alert": null }
//! ```

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use tt_core::TenantId;
use tt_engine::{ScheduledSlot, ShortageAlert, TimetableResult};

use crate::writer::{TimetableWriter, tenant_file_stem};
use crate::{OutputError, OutputResult};

#[derive(Serialize)]
struct StoredRef<'a> {
    tenant:   &'a TenantId,
    schedule: &'a [ScheduledSlot],
    alert:    &'a Option<ShortageAlert>,
}

#[derive(Deserialize)]
struct Stored {
    schedule: Vec<ScheduledSlot>,
    alert:    Option<ShortageAlert>,
}

/// Writes each tenant's timetable to `<dir>/<tenant>.json`.
pub struct JsonWriter {
    dir:      PathBuf,
    finished: bool,
}

impl JsonWriter {
    /// Use `dir` as the output root, creating it if needed.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self { dir: dir.to_path_buf(), finished: false })
    }

    pub fn path_for(&self, tenant: &TenantId) -> PathBuf {
        self.dir.join(format!("{}.json", tenant_file_stem(tenant)))
    }

    /// Read back the stored timetable for `tenant`, or `None` if nothing has
    /// been written for it.  Run statistics are not stored and come back
    /// zeroed.
    pub fn load(&self, tenant: &TenantId) -> OutputResult<Option<TimetableResult>> {
        let file = match File::open(self.path_for(tenant)) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let stored: Stored = serde_json::from_reader(BufReader::new(file))?;
        Ok(Some(TimetableResult {
            schedule: stored.schedule,
            alert:    stored.alert,
            stats:    Default::default(),
        }))
    }
}

impl TimetableWriter for JsonWriter {
    fn write_timetable(&mut self, tenant: &TenantId, result: &TimetableResult) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        let doc = StoredRef { tenant, schedule: &result.schedule, alert: &result.alert };
        let mut out = BufWriter::new(File::create(self.path_for(tenant))?);
        serde_json::to_writer_pretty(&mut out, &doc)?;
        out.flush()?;

        debug!(tenant = %tenant, lessons = result.schedule.len(), "wrote timetable json");
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.finished = true;
        Ok(())
    }
}
