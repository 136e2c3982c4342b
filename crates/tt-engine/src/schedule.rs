//! Output types handed back to the caller.

use serde::{Deserialize, Serialize};

use tt_core::{Day, SubjectKind, Window};

use crate::shortage::ShortageAlert;

/// One placed lesson, denormalized for storage and display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledSlot {
    pub day:        Day,
    pub slot_index: u8,
    pub duration:   u8,
    pub section:    String,
    /// The section's department label as supplied by the caller.
    pub department: String,
    pub subject:    String,
    pub teacher:    String,
    pub room:       String,
    #[serde(rename = "type")]
    pub kind:       SubjectKind,
    /// e.g. `"09:00 AM - 11:00 AM"`.
    pub time:       String,
}

impl ScheduledSlot {
    #[inline]
    pub fn window(&self) -> Window {
        Window::new(self.day, self.slot_index, self.duration)
    }
}

/// Order by day, then section name, then start slot.
pub fn sort_schedule(schedule: &mut [ScheduledSlot]) {
    schedule.sort_by(|a, b| {
        a.day
            .cmp(&b.day)
            .then_with(|| a.section.cmp(&b.section))
            .then_with(|| a.slot_index.cmp(&b.slot_index))
    });
}

/// Counters for one run.  `placed + conflicts == lessons` always holds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub lessons:   usize,
    pub placed:    usize,
    pub conflicts: usize,
}

/// What a run returns: a best-effort schedule plus an alert when it is
/// incomplete.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimetableResult {
    pub schedule: Vec<ScheduledSlot>,
    pub alert:    Option<ShortageAlert>,
    #[serde(skip)]
    pub stats:    RunStats,
}

impl TimetableResult {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.alert.is_none()
    }
}
