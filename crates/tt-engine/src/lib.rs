//! `tt-engine` — weekly timetable synthesis.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`config`]    | `EngineConfig`                                          |
//! | [`workload`]  | `LessonUnit`, `expand_workload`, `session_count`        |
//! | [`booking`]   | `BookingState` (occupancy, repeat guard, locks, lunch)  |
//! | [`placement`] | `Placer`, `Placement`, `Rejections`, `FailureCause`     |
//! | [`shortage`]  | `ShortageReport`, `ShortageAlert`                       |
//! | [`progress`]  | `ProgressSink`, `ProgressEvent`, `ChannelProgress`      |
//! | [`schedule`]  | `ScheduledSlot`, `TimetableResult`, `RunStats`          |
//! | [`engine`]    | `TimetableEngine`                                       |
//! | [`error`]     | `EngineError`, `EngineResult<T>`                        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tt_catalog::load_catalog_json;
//! use tt_core::TenantId;
//! use tt_engine::{EngineConfig, NoopProgress, TimetableEngine};
//!
//! let catalog = load_catalog_json(Path::new("catalog.json"))?;
//! let tenant = TenantId::new("SCH-1042")?;
//! let sections = catalog.sections(&tenant)?;
//! let engine = TimetableEngine::new(EngineConfig::default())?.with_seed(7);
//! let result = engine.generate(&tenant, &sections, &catalog, &mut NoopProgress)?;
//! if let Some(alert) = &result.alert {
//!     eprintln!("{} lessons could not be placed", alert.count);
//! }
//! ```
//!
//! The algorithm is a single greedy pass: no backtracking, no optimization.
//! An incomplete timetable is a normal outcome reported through
//! [`ShortageAlert`], never an error.

pub mod booking;
pub mod config;
pub mod engine;
pub mod error;
pub mod placement;
pub mod progress;
pub mod schedule;
pub mod shortage;
pub mod workload;


pub use booking::{Booking, BookingState};
pub use config::EngineConfig;
pub use engine::TimetableEngine;
pub use error::{EngineError, EngineResult, ResourceKind};
pub use placement::{FailureCause, Placement, Placer, Rejections};
pub use progress::{ChannelProgress, NoopProgress, ProgressEvent, ProgressSink, loop_percent};
pub use schedule::{RunStats, ScheduledSlot, TimetableResult, sort_schedule};
pub use shortage::{RoomShortage, ShortageAlert, ShortageDetails, ShortageReport};
pub use workload::{LessonUnit, expand_workload, session_count};
