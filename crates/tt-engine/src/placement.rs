//! Greedy window search for a single lesson unit.
//!
//! # Search order
//!
//! ```text
//! for day in shuffled(Mon..Fri):
//!   for start in 0..=8-duration:          // sequential, packs mornings first
//!     ① section busy in any covered slot?           → next window
//!     ② theory subject already taught today?        → next window
//!     ③ first compatible room free for the window?  → else room rejection
//!     ④ first qualified teacher free and not locked
//!        to another subject for this section?       → else teacher rejection
//!     commit and stop
//! ```
//!
//! Nothing placed earlier is ever moved.  The outcome depends on the order
//! units arrive in and on the day shuffle.

use rustc_hash::FxHashMap;

use tt_core::{Classroom, Day, PlanRng, SubjectId, SubjectKind, Teacher, Window};

use crate::booking::{Booking, BookingState};
use crate::workload::LessonUnit;

/// Why a unit could not be placed, tallied over every window examined.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rejections {
    /// Windows where the section was already busy.
    pub section: u32,
    /// Windows skipped by the daily-repeat guard.
    pub repeat:  u32,
    /// Windows with no free compatible room.
    pub room:    u32,
    /// Windows with a room but no available teacher.
    pub teacher: u32,
}

/// The classification a failed unit is reported under.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FailureCause {
    Teacher,
    Room,
    /// Every window was blocked by section occupancy or the repeat guard.
    Unclassified,
}

impl Rejections {
    /// Teacher shortages take precedence over room shortages.
    pub fn cause(&self) -> FailureCause {
        if self.teacher > 0 {
            FailureCause::Teacher
        } else if self.room > 0 {
            FailureCause::Room
        } else {
            FailureCause::Unclassified
        }
    }
}

/// A committed placement.
#[derive(Copy, Clone, Debug)]
pub struct Placement<'a> {
    pub window:  Window,
    pub room:    &'a Classroom,
    pub teacher: &'a Teacher,
}

/// Read-only search context for one run.
pub struct Placer<'a> {
    rooms:               &'a [Classroom],
    teachers_by_subject: FxHashMap<SubjectId, Vec<&'a Teacher>>,
    relax_lock:          bool,
}

impl<'a> Placer<'a> {
    /// Build the subject → qualified-teachers adjacency once for the run.
    /// Teachers keep their catalog order within each list.
    pub fn new(teachers: &'a [Teacher], rooms: &'a [Classroom], relax_lock: bool) -> Self {
        let mut teachers_by_subject: FxHashMap<SubjectId, Vec<&'a Teacher>> = FxHashMap::default();
        for teacher in teachers {
            for &subject in &teacher.qualified_subjects {
                teachers_by_subject.entry(subject).or_default().push(teacher);
            }
        }
        Self { rooms, teachers_by_subject, relax_lock }
    }

    pub fn qualified(&self, subject: SubjectId) -> &[&'a Teacher] {
        self.teachers_by_subject
            .get(&subject)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Find and commit the first feasible window for `unit`.
    pub fn place(
        &self,
        unit:    &LessonUnit<'_>,
        booking: &mut BookingState,
        rng:     &mut PlanRng,
    ) -> Result<Placement<'a>, Rejections> {
        let mut days = Day::ALL;
        rng.shuffle(&mut days);

        let mut rejections = Rejections::default();
        for day in days {
            for start in Window::starts_for(unit.duration) {
                let window = Window::new(day, start, unit.duration);
                if let Some(placement) = self.try_window(unit, window, booking, &mut rejections) {
                    booking.commit(&Booking {
                        window,
                        section: unit.section.id,
                        subject: unit.subject.id,
                        room:    placement.room.id,
                        teacher: placement.teacher.id,
                    });
                    return Ok(placement);
                }
            }
        }
        Err(rejections)
    }

    fn try_window(
        &self,
        unit:       &LessonUnit<'_>,
        window:     Window,
        booking:    &BookingState,
        rejections: &mut Rejections,
    ) -> Option<Placement<'a>> {
        let section = unit.section.id;
        let subject = unit.subject.id;

        if !booking.section_free(section, &window) {
            rejections.section += 1;
            return None;
        }
        if unit.kind != SubjectKind::Practical && booking.subject_used_on(section, window.day, subject) {
            rejections.repeat += 1;
            return None;
        }

        let Some(room) = self.free_room(unit, &window, booking) else {
            rejections.room += 1;
            return None;
        };
        let Some(teacher) = self.free_teacher(unit, &window, booking) else {
            rejections.teacher += 1;
            return None;
        };
        Some(Placement { window, room, teacher })
    }

    fn free_room(
        &self,
        unit:    &LessonUnit<'_>,
        window:  &Window,
        booking: &BookingState,
    ) -> Option<&'a Classroom> {
        self.rooms.iter().find(|room| {
            room.accepts(unit.kind, &unit.section.department) && booking.room_free(room.id, window)
        })
    }

    fn free_teacher(
        &self,
        unit:    &LessonUnit<'_>,
        window:  &Window,
        booking: &BookingState,
    ) -> Option<&'a Teacher> {
        let section = unit.section.id;
        let subject = unit.subject.id;
        let candidates = self.qualified(subject);

        let locked = candidates.iter().copied().find(|t| {
            booking.teacher_free(t.id, window) && booking.lock_allows(t.id, section, subject)
        });
        if locked.is_some() || !self.relax_lock {
            return locked;
        }
        candidates
            .iter()
            .copied()
            .find(|t| booking.teacher_free(t.id, window))
    }
}
