//! `tt-core` — foundational types for the timetable engine.
//!
//! This crate is a dependency of every other `tt-*` crate.  It has no `tt-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`ids`]    | `TeacherId`, `SubjectId`, `RoomId`, `SectionId`, `TenantId`|
//! | [`grid`]   | `Day`, `Window`, slot labels, block time strings           |
//! | [`model`]  | `Teacher`, `Subject`, `Classroom`, `Section`, `Department` |
//! | [`rng`]    | `PlanRng` (per-run, optionally seeded)                     |
//! | [`error`]  | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod grid;
pub mod ids;
pub mod model;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use grid::{DAYS_PER_WEEK, Day, SLOTS_PER_DAY, Window, block_time_string};
pub use ids::{RoomId, SectionId, SubjectId, TeacherId, TenantId};
pub use model::{Classroom, Department, RoomKind, Section, Subject, SubjectKind, Teacher};
pub use rng::PlanRng;
