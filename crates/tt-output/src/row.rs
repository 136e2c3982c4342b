//! Flat row types written by the tabular backends.

use tt_engine::{ScheduledSlot, ShortageAlert};

/// Column names for [`SlotRow`], in write order.
pub const SLOT_HEADERS: [&str; 10] = [
    "day", "slot_index", "duration", "section", "department",
    "subject", "teacher", "room", "type", "time",
];

/// Column names for [`ShortageRow`], in write order.
pub const SHORTAGE_HEADERS: [&str; 3] = ["resource", "name", "count"];

/// One scheduled lesson, flattened to strings for tabular output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRow<'a> {
    pub day:        &'static str,
    pub slot_index: u8,
    pub duration:   u8,
    pub section:    &'a str,
    pub department: &'a str,
    pub subject:    &'a str,
    pub teacher:    &'a str,
    pub room:       &'a str,
    pub kind:       &'static str,
    pub time:       &'a str,
}

impl<'a> From<&'a ScheduledSlot> for SlotRow<'a> {
    fn from(slot: &'a ScheduledSlot) -> Self {
        SlotRow {
            day:        slot.day.name(),
            slot_index: slot.slot_index,
            duration:   slot.duration,
            section:    &slot.section,
            department: &slot.department,
            subject:    &slot.subject,
            teacher:    &slot.teacher,
            room:       &slot.room,
            kind:       slot.kind.as_str(),
            time:       &slot.time,
        }
    }
}

impl SlotRow<'_> {
    pub fn to_record(&self) -> [String; 10] {
        [
            self.day.to_owned(),
            self.slot_index.to_string(),
            self.duration.to_string(),
            self.section.to_owned(),
            self.department.to_owned(),
            self.subject.to_owned(),
            self.teacher.to_owned(),
            self.room.to_owned(),
            self.kind.to_owned(),
            self.time.to_owned(),
        ]
    }
}

/// One line of a shortage alert.
///
/// `resource` is `"teacher"` (with `name` the subject that lacked one) or
/// `"room"` (with `name` the room kind that was short).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortageRow<'a> {
    pub resource: &'static str,
    pub name:     &'a str,
    pub count:    u32,
}

/// Flatten `alert` into rows: teacher shortages by subject name, then the
/// non-zero room-kind shortages.
pub fn shortage_rows(alert: &ShortageAlert) -> Vec<ShortageRow<'_>> {
    let mut rows: Vec<ShortageRow<'_>> = alert
        .details
        .teachers
        .iter()
        .map(|(subject, &count)| ShortageRow { resource: "teacher", name: subject, count })
        .collect();

    let rooms = &alert.details.rooms;
    for (name, count) in [("LectureHall", rooms.lecture_hall), ("Lab", rooms.lab)] {
        if count > 0 {
            rows.push(ShortageRow { resource: "room", name, count });
        }
    }
    rows
}
