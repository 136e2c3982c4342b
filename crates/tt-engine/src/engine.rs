//! The `TimetableEngine` and its placement loop.

use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

use tt_catalog::{ResourceSource, Resources, load_resources};
use tt_core::{PlanRng, Section, TenantId};

use crate::booking::BookingState;
use crate::placement::Placer;
use crate::progress::{ANALYZING, DONE, ProgressEvent, ProgressSink, RESERVING, loop_percent};
use crate::schedule::{RunStats, ScheduledSlot, TimetableResult, sort_schedule};
use crate::shortage::ShortageReport;
use crate::workload::expand_workload;
use crate::{EngineConfig, EngineError, EngineResult, ResourceKind};

/// Synthesizes weekly timetables.
///
/// The engine itself holds only configuration.  Each call to
/// [`generate`][Self::generate] or [`run`][Self::run] allocates its own
/// booking state, RNG and shortage report and drops them on return, so one
/// engine may serve any number of tenants, including from several threads at
/// once.  Two calls for the *same* tenant are independent runs; nothing here
/// serializes them.
///
/// # Run phases
///
/// ```text
/// ① validate input            fatal errors raised here, nothing placed
/// ② load resources            teachers, subjects, classrooms
/// ③ reserve lunch breaks      one hidden slot per section per day
/// ④ expand workload           lesson units shuffled, longest first
/// ⑤ place each unit greedily  commit first feasible window or record why not
/// ⑥ sort schedule, build alert
/// ```
#[derive(Clone, Debug)]
pub struct TimetableEngine {
    config: EngineConfig,
}

impl TimetableEngine {
    /// Validate `config` and build an engine.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Override the configured seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Load `tenant`'s resources from `source` and schedule `sections`.
    pub fn generate<S, P>(
        &self,
        tenant:   &TenantId,
        sections: &[Section],
        source:   &S,
        progress: &mut P,
    ) -> EngineResult<TimetableResult>
    where
        S: ResourceSource + ?Sized,
        P: ProgressSink + ?Sized,
    {
        validate_sections(sections)?;
        info!(tenant = %tenant, sections = sections.len(), "generating timetable");
        progress.notify(ProgressEvent::from_step(ANALYZING));

        let resources = load_resources(source, tenant)?;
        self.schedule(sections, &resources, progress)
    }

    /// Schedule `sections` against already-loaded resources.
    pub fn run<P>(
        &self,
        sections:  &[Section],
        resources: &Resources,
        progress:  &mut P,
    ) -> EngineResult<TimetableResult>
    where
        P: ProgressSink + ?Sized,
    {
        validate_sections(sections)?;
        progress.notify(ProgressEvent::from_step(ANALYZING));
        self.schedule(sections, resources, progress)
    }

    // ── Core run ──────────────────────────────────────────────────────────

    fn schedule<P>(
        &self,
        sections:  &[Section],
        resources: &Resources,
        progress:  &mut P,
    ) -> EngineResult<TimetableResult>
    where
        P: ProgressSink + ?Sized,
    {
        validate_resources(resources)?;

        let mut rng = PlanRng::from_seed(self.config.seed);
        let mut booking = BookingState::new();
        let mut report = ShortageReport::new();

        // ── Lunch pass ────────────────────────────────────────────────────
        progress.notify(ProgressEvent::from_step(RESERVING));
        booking.reserve_lunch_breaks(sections, &self.config.lunch_slots, &mut rng);

        // ── Workload ──────────────────────────────────────────────────────
        //
        // Shuffle first, then a stable sort by duration: two-slot practicals
        // go first while the grid is emptiest, and ties keep the random order.
        let mut queue = expand_workload(sections, &resources.subjects, &self.config);
        rng.shuffle(&mut queue);
        queue.sort_by(|a, b| b.duration.cmp(&a.duration));

        let placer = Placer::new(
            &resources.teachers,
            &resources.classrooms,
            self.config.relax_teacher_lock,
        );

        // ── Placement loop ────────────────────────────────────────────────
        let total = queue.len();
        let mut schedule: Vec<ScheduledSlot> = Vec::with_capacity(total);

        for (i, unit) in queue.iter().enumerate() {
            match placer.place(unit, &mut booking, &mut rng) {
                Ok(placement) => schedule.push(ScheduledSlot {
                    day:        placement.window.day,
                    slot_index: placement.window.start,
                    duration:   placement.window.duration,
                    section:    unit.section.name.clone(),
                    department: unit.section.department.label().to_owned(),
                    subject:    unit.subject.name.clone(),
                    teacher:    placement.teacher.name.clone(),
                    room:       placement.room.name.clone(),
                    kind:       unit.kind,
                    time:       placement.window.time_label(),
                }),
                Err(rejections) => {
                    debug!(
                        section = %unit.section.name,
                        subject = %unit.subject.name,
                        ?rejections,
                        "lesson could not be placed"
                    );
                    report.record(unit, &rejections);
                }
            }

            if i % self.config.progress_interval == 0 {
                progress.notify(ProgressEvent::new(
                    loop_percent(i, total),
                    format!("Scheduling {}: {}", unit.section.name, unit.subject.name),
                ));
            }
        }

        sort_schedule(&mut schedule);

        let stats = RunStats {
            lessons:   total,
            placed:    schedule.len(),
            conflicts: report.conflicts() as usize,
        };
        if stats.conflicts > 0 {
            warn!(lessons = stats.lessons, conflicts = stats.conflicts, "timetable is incomplete");
        } else {
            info!(lessons = stats.lessons, "timetable complete");
        }

        progress.notify(ProgressEvent::from_step(DONE));
        Ok(TimetableResult { schedule, alert: report.into_alert(), stats })
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

fn validate_sections(sections: &[Section]) -> EngineResult<()> {
    if sections.is_empty() {
        return Err(EngineError::NoSections);
    }
    let mut seen = FxHashSet::default();
    for section in sections {
        if !seen.insert(section.id) {
            return Err(EngineError::DuplicateSection(section.id));
        }
    }
    Ok(())
}

fn validate_resources(resources: &Resources) -> EngineResult<()> {
    if resources.teachers.is_empty() {
        return Err(EngineError::EmptyResource(ResourceKind::Teachers));
    }
    if resources.subjects.is_empty() {
        return Err(EngineError::EmptyResource(ResourceKind::Subjects));
    }
    if resources.classrooms.is_empty() {
        return Err(EngineError::EmptyResource(ResourceKind::Classrooms));
    }
    Ok(())
}
