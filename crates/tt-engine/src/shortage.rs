//! Shortage reporting for lessons the placement loop could not fit.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use tt_core::RoomKind;

use crate::placement::{FailureCause, Rejections};
use crate::workload::LessonUnit;

/// Room-caused failures by required room kind.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomShortage {
    #[serde(rename = "LectureHall")]
    pub lecture_hall: u32,
    #[serde(rename = "Lab")]
    pub lab:          u32,
}

impl RoomShortage {
    fn bump(&mut self, kind: RoomKind) {
        match kind {
            RoomKind::LectureHall => self.lecture_hall += 1,
            RoomKind::Lab         => self.lab += 1,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortageDetails {
    /// Teacher-caused failures by subject name.
    pub teachers: BTreeMap<String, u32>,
    pub rooms:    RoomShortage,
}

/// Present on a result only when at least one lesson went unplaced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortageAlert {
    pub count:   u32,
    pub details: ShortageDetails,
}

/// Accumulates failures over a run.
#[derive(Debug, Default)]
pub struct ShortageReport {
    conflicts: u32,
    details:   ShortageDetails,
}

impl ShortageReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one unplaced unit.
    pub fn record(&mut self, unit: &LessonUnit<'_>, rejections: &Rejections) {
        self.conflicts += 1;
        match rejections.cause() {
            FailureCause::Teacher => {
                *self.details.teachers.entry(unit.subject.name.clone()).or_default() += 1;
            }
            FailureCause::Room => self.details.rooms.bump(unit.kind.required_room()),
            FailureCause::Unclassified => {}
        }
    }

    #[inline]
    pub fn conflicts(&self) -> u32 {
        self.conflicts
    }

    /// `None` when every unit was placed.
    pub fn into_alert(self) -> Option<ShortageAlert> {
        (self.conflicts > 0).then_some(ShortageAlert {
            count:   self.conflicts,
            details: self.details,
        })
    }
}
