//! Workload expansion: (section × subject) → lesson units.
//!
//! # Session rules
//!
//! | Kind      | Sessions              | Slots per session |
//! |-----------|-----------------------|-------------------|
//! | theory    | `credits`             | 1                 |
//! | practical | `ceil(credits / 2)`   | 2                 |
//!
//! A section takes every subject of its own department plus every `General`
//! subject.  When a run covers more sections than
//! [`EngineConfig::load_reduction_threshold`], each count is halved again,
//! rounding up, never below one.

use tracing::debug;

use tt_core::{Section, Subject, SubjectKind};

use crate::EngineConfig;

/// One atomic teaching session waiting to be placed.
///
/// Borrows its subject and section from the run's inputs; units never
/// outlive the run that expanded them.
#[derive(Copy, Clone, Debug)]
pub struct LessonUnit<'a> {
    pub subject:  &'a Subject,
    pub section:  &'a Section,
    pub kind:     SubjectKind,
    pub duration: u8,
}

/// Number of sessions `subject` contributes to one section.
pub fn session_count(subject: &Subject, reduce_load: bool, default_credits: u32) -> u32 {
    let credits = if subject.credits == 0 { default_credits } else { subject.credits };
    let sessions = match subject.kind {
        SubjectKind::Theory    => credits,
        SubjectKind::Practical => credits.div_ceil(2),
    };
    if reduce_load {
        sessions.div_ceil(2).max(1)
    } else {
        sessions
    }
}

/// Expand every eligible (section, subject) pair into lesson units.
///
/// Units are emitted section by section, subject by subject, in input order.
pub fn expand_workload<'a>(
    sections: &'a [Section],
    subjects: &'a [Subject],
    config:   &EngineConfig,
) -> Vec<LessonUnit<'a>> {
    let reduce = config.reduces_load(sections.len());
    let mut units = Vec::new();

    for section in sections {
        let eligible: Vec<&Subject> = subjects
            .iter()
            .filter(|s| s.department.covers(&section.department))
            .collect();
        debug!(section = %section.name, subjects = eligible.len(), "eligible subjects");

        for subject in eligible {
            let n = session_count(subject, reduce, config.default_credits);
            let unit = LessonUnit {
                subject,
                section,
                kind:     subject.kind,
                duration: subject.kind.duration(),
            };
            units.extend(std::iter::repeat_n(unit, n as usize));
        }
    }
    units
}
