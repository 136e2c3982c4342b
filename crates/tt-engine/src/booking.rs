//! Per-run occupancy trackers and the lunch reservation pass.
//!
//! A fresh [`BookingState`] is created for every run and dropped with it.
//! Occupancy is keyed by `(day, slot, entity)` tuples:
//!
//! ```text
//! sections : (Day, slot, SectionId)
//! rooms    : (Day, slot, RoomId)
//! teachers : (Day, slot, TeacherId)
//! ```
//!
//! Two further maps enforce the per-section rules: the subjects a section has
//! already had on a given day (daily-repeat guard), and the first subject
//! each teacher was given for a section (teacher-subject lock).

use rustc_hash::{FxHashMap, FxHashSet};

use tt_core::{Day, PlanRng, RoomId, Section, SectionId, SubjectId, TeacherId, Window};

/// Everything needed to commit one placed lesson.
#[derive(Copy, Clone, Debug)]
pub struct Booking {
    pub window:  Window,
    pub section: SectionId,
    pub subject: SubjectId,
    pub room:    RoomId,
    pub teacher: TeacherId,
}

#[derive(Debug, Default)]
pub struct BookingState {
    sections:       FxHashSet<(Day, u8, SectionId)>,
    rooms:          FxHashSet<(Day, u8, RoomId)>,
    teachers:       FxHashSet<(Day, u8, TeacherId)>,
    daily_subjects: FxHashMap<(SectionId, Day), Vec<SubjectId>>,
    locks:          FxHashMap<(TeacherId, SectionId), SubjectId>,
    lunch:          FxHashMap<(SectionId, Day), u8>,
}

impl BookingState {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Lunch reservation ─────────────────────────────────────────────────

    /// Reserve one slot per section per day, chosen uniformly from
    /// `lunch_slots`.
    ///
    /// The slot is marked busy for the section but never produces a lesson,
    /// so it shows up as a gap in the published schedule.
    pub fn reserve_lunch_breaks(
        &mut self,
        sections:    &[Section],
        lunch_slots: &[u8],
        rng:         &mut PlanRng,
    ) {
        for section in sections {
            for day in Day::ALL {
                let Some(&slot) = rng.choose(lunch_slots) else {
                    return;
                };
                self.sections.insert((day, slot, section.id));
                self.lunch.insert((section.id, day), slot);
            }
        }
    }

    /// The reserved lunch slot for `section` on `day`, if any.
    pub fn lunch_slot(&self, section: SectionId, day: Day) -> Option<u8> {
        self.lunch.get(&(section, day)).copied()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn section_free(&self, section: SectionId, window: &Window) -> bool {
        window.slots().all(|s| !self.sections.contains(&(window.day, s, section)))
    }

    pub fn room_free(&self, room: RoomId, window: &Window) -> bool {
        window.slots().all(|s| !self.rooms.contains(&(window.day, s, room)))
    }

    pub fn teacher_free(&self, teacher: TeacherId, window: &Window) -> bool {
        window.slots().all(|s| !self.teachers.contains(&(window.day, s, teacher)))
    }

    /// `true` if `section` already has `subject` on `day`.
    pub fn subject_used_on(&self, section: SectionId, day: Day, subject: SubjectId) -> bool {
        self.daily_subjects
            .get(&(section, day))
            .is_some_and(|used| used.contains(&subject))
    }

    /// The subject `teacher` is locked to for `section`, if any.
    pub fn locked_subject(&self, teacher: TeacherId, section: SectionId) -> Option<SubjectId> {
        self.locks.get(&(teacher, section)).copied()
    }

    /// `true` unless `teacher` is locked to a different subject for `section`.
    pub fn lock_allows(&self, teacher: TeacherId, section: SectionId, subject: SubjectId) -> bool {
        self.locked_subject(teacher, section).is_none_or(|locked| locked == subject)
    }

    // ── Commit ────────────────────────────────────────────────────────────

    /// Mark every covered slot busy for the section, room and teacher,
    /// record the subject against the section's day, and set the
    /// teacher-subject lock unless one already exists.
    pub fn commit(&mut self, booking: &Booking) {
        let day = booking.window.day;
        for slot in booking.window.slots() {
            self.sections.insert((day, slot, booking.section));
            self.rooms.insert((day, slot, booking.room));
            self.teachers.insert((day, slot, booking.teacher));
        }
        self.daily_subjects
            .entry((booking.section, day))
            .or_default()
            .push(booking.subject);
        self.locks
            .entry((booking.teacher, booking.section))
            .or_insert(booking.subject);
    }
}
