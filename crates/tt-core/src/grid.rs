//! The fixed weekly slot grid.
//!
//! # Layout
//!
//! Five teaching days (Monday–Friday), each split into eight one-hour slots
//! starting at 09:00:
//!
//! ```text
//! slot  0      1      2      3      4      5      6      7
//!       09:00  10:00  11:00  12:00  13:00  14:00  15:00  16:00 → 17:00
//! ```
//!
//! A lesson occupies a [`Window`]: a day, a start slot and a duration of one
//! or more contiguous slots.  Slots are plain `u8` indices; the grid is small
//! enough that every tracker can key on `(Day, u8, id)` tuples directly.

use std::fmt;

/// Teaching days per week.
pub const DAYS_PER_WEEK: usize = 5;

/// One-hour slots per teaching day.
pub const SLOTS_PER_DAY: u8 = 8;

/// `(start, end)` labels for each slot, in 12-hour clock notation.
const SLOT_LABELS: [(&str, &str); SLOTS_PER_DAY as usize] = [
    ("09:00 AM", "10:00 AM"),
    ("10:00 AM", "11:00 AM"),
    ("11:00 AM", "12:00 PM"),
    ("12:00 PM", "01:00 PM"),
    ("01:00 PM", "02:00 PM"),
    ("02:00 PM", "03:00 PM"),
    ("03:00 PM", "04:00 PM"),
    ("04:00 PM", "05:00 PM"),
];

// ── Day ───────────────────────────────────────────────────────────────────────

/// A teaching day.  Ordering follows the calendar week.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    pub const ALL: [Day; DAYS_PER_WEEK] =
        [Day::Monday, Day::Tuesday, Day::Wednesday, Day::Thursday, Day::Friday];

    /// Zero-based position in the week (Monday = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday    => "Monday",
            Day::Tuesday   => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday  => "Thursday",
            Day::Friday    => "Friday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Window ────────────────────────────────────────────────────────────────────

/// A run of `duration` contiguous slots starting at `start` on `day`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Window {
    pub day:      Day,
    pub start:    u8,
    pub duration: u8,
}

impl Window {
    pub fn new(day: Day, start: u8, duration: u8) -> Self {
        Self { day, start, duration }
    }

    /// Exclusive end slot.
    #[inline]
    pub fn end(&self) -> u8 {
        self.start + self.duration
    }

    /// `true` if the window lies entirely inside the day.
    #[inline]
    pub fn fits(&self) -> bool {
        self.duration > 0 && self.end() <= SLOTS_PER_DAY
    }

    /// Slot indices covered by the window.
    #[inline]
    pub fn slots(&self) -> std::ops::Range<u8> {
        self.start..self.end()
    }

    /// `true` if both windows share a day and at least one slot.
    pub fn overlaps(&self, other: &Window) -> bool {
        self.day == other.day && self.start < other.end() && other.start < self.end()
    }

    /// Every start slot at which a block of `duration` fits, earliest first.
    pub fn starts_for(duration: u8) -> std::ops::RangeInclusive<u8> {
        0..=SLOTS_PER_DAY.saturating_sub(duration)
    }

    /// Human-readable span, e.g. `"09:00 AM - 11:00 AM"`.
    pub fn time_label(&self) -> String {
        block_time_string(self.start, self.duration)
    }
}

/// Format the wall-clock span of a block.
///
/// Returns `"Invalid Time"` when the block runs past the end of the day.
pub fn block_time_string(start: u8, duration: u8) -> String {
    let first = start as usize;
    let last = first + duration as usize;
    if duration == 0 || last > SLOT_LABELS.len() {
        return "Invalid Time".to_owned();
    }
    format!("{} - {}", SLOT_LABELS[first].0, SLOT_LABELS[last - 1].1)
}
