//! Engine configuration.
//!
//! Typically loaded from a JSON file by the application crate; every field
//! has a default, so a partial document (or none at all) is valid.

use serde::{Deserialize, Serialize};

use tt_core::SLOTS_PER_DAY;

use crate::{EngineError, EngineResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// RNG seed.  `None` draws from OS entropy, so repeated runs over the
    /// same input may differ.
    pub seed: Option<u64>,

    /// When more sections than this are scheduled in one run, every
    /// subject's session count is halved (rounding up, minimum 1).
    pub load_reduction_threshold: usize,

    /// Emit a progress event every N lessons of the placement loop.
    pub progress_interval: usize,

    /// Candidate slots for each section's daily lunch break; one is chosen
    /// uniformly per section per day.
    pub lunch_slots: Vec<u8>,

    /// Credits assumed for a subject whose record carries `0`.
    pub default_credits: u32,

    /// Run a second teacher search that ignores the teacher-subject lock
    /// when the locked search finds nobody.  Off by default.
    pub relax_teacher_lock: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed:                     None,
            load_reduction_threshold: 50,
            progress_interval:        25,
            lunch_slots:              vec![3, 4],
            default_credits:          3,
            relax_teacher_lock:       false,
        }
    }
}

impl EngineConfig {
    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> EngineResult<()> {
        if self.lunch_slots.is_empty() {
            return Err(EngineError::Config("lunch_slots must not be empty".into()));
        }
        if let Some(bad) = self.lunch_slots.iter().find(|&&s| s >= SLOTS_PER_DAY) {
            return Err(EngineError::Config(format!(
                "lunch slot {bad} is outside the {SLOTS_PER_DAY}-slot day"
            )));
        }
        if self.progress_interval == 0 {
            return Err(EngineError::Config("progress_interval must be at least 1".into()));
        }
        if self.default_credits == 0 {
            return Err(EngineError::Config("default_credits must be at least 1".into()));
        }
        Ok(())
    }

    /// `true` when a run over `section_count` sections halves session counts.
    #[inline]
    pub fn reduces_load(&self, section_count: usize) -> bool {
        section_count > self.load_reduction_threshold
    }
}
