//! The resource inventory a run is built from.
//!
//! All four entity kinds are loaded read-only per run.  Kind and department
//! strings coming from stored records are normalized here so the engine only
//! ever compares enums and upper-cased department keys.

use std::fmt;

use crate::{RoomId, SectionId, SubjectId, TeacherId};

/// Department key that matches every other department.
const GENERAL: &str = "GENERAL";

// ── Department ────────────────────────────────────────────────────────────────

/// A department label plus its normalized comparison key.
///
/// The key is the trimmed, upper-cased label; a blank label is the wildcard
/// `General`.  [`Display`](fmt::Display) and serde emit the label as given.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub struct Department {
    label: String,
    key:   String,
}

impl Department {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let key = label.trim().to_uppercase();
        if key.is_empty() {
            return Self::general();
        }
        Self { label, key }
    }

    /// The wildcard department.
    pub fn general() -> Self {
        Self { label: "General".to_owned(), key: GENERAL.to_owned() }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn is_general(&self) -> bool {
        self.key == GENERAL
    }

    /// `true` if `self` serves `other`: same key, or `self` is `General`.
    ///
    /// This is the one-directional rule used to decide which subjects a
    /// section takes.
    pub fn covers(&self, other: &Department) -> bool {
        self.is_general() || self.key == other.key
    }

    /// Symmetric match: same key, or either side is `General`.
    pub fn compatible(&self, other: &Department) -> bool {
        self.covers(other) || other.covers(self)
    }
}

impl PartialEq for Department {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Department {}

impl Default for Department {
    fn default() -> Self {
        Self::general()
    }
}

impl From<String> for Department {
    fn from(label: String) -> Self {
        Department::new(label)
    }
}

impl From<&str> for Department {
    fn from(label: &str) -> Self {
        Department::new(label)
    }
}

impl From<Department> for String {
    fn from(d: Department) -> String {
        d.label
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

// ── Kinds ─────────────────────────────────────────────────────────────────────

/// How a subject is taught.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SubjectKind {
    #[default]
    Theory,
    Practical,
}

impl SubjectKind {
    /// Lenient parse: anything that normalizes to `PRACTICAL` is practical,
    /// everything else (including blank) is theory.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("practical") {
            SubjectKind::Practical
        } else {
            SubjectKind::Theory
        }
    }

    /// Slots one session occupies.
    #[inline]
    pub fn duration(self) -> u8 {
        match self {
            SubjectKind::Theory    => 1,
            SubjectKind::Practical => 2,
        }
    }

    /// The room kind a session of this kind must be held in.
    #[inline]
    pub fn required_room(self) -> RoomKind {
        match self {
            SubjectKind::Theory    => RoomKind::LectureHall,
            SubjectKind::Practical => RoomKind::Lab,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SubjectKind::Theory    => "theory",
            SubjectKind::Practical => "practical",
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a classroom is equipped for.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoomKind {
    #[default]
    LectureHall,
    Lab,
}

impl RoomKind {
    /// Lenient parse: anything that normalizes to `LAB` is a lab, everything
    /// else is a lecture hall.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("lab") {
            RoomKind::Lab
        } else {
            RoomKind::LectureHall
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoomKind::LectureHall => "LectureHall",
            RoomKind::Lab         => "Lab",
        }
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Teacher {
    pub id:                 TeacherId,
    pub name:               String,
    pub department:         Department,
    /// Subjects this teacher may teach, in catalog order, without duplicates.
    pub qualified_subjects: Vec<SubjectId>,
}

impl Teacher {
    #[inline]
    pub fn is_qualified_for(&self, subject: SubjectId) -> bool {
        self.qualified_subjects.contains(&subject)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subject {
    pub id:         SubjectId,
    pub name:       String,
    pub code:       String,
    /// Weekly credit hours.  `0` means "not recorded".
    pub credits:    u32,
    pub kind:       SubjectKind,
    pub department: Department,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classroom {
    pub id:         RoomId,
    pub name:       String,
    pub capacity:   u32,
    pub kind:       RoomKind,
    pub department: Department,
}

impl Classroom {
    /// `true` if a lesson of `kind` for `department` may be held here.
    pub fn accepts(&self, kind: SubjectKind, department: &Department) -> bool {
        self.kind == kind.required_room() && self.department.compatible(department)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    pub id:         SectionId,
    pub name:       String,
    pub department: Department,
}

impl Section {
    pub fn new(id: SectionId, name: impl Into<String>, department: impl Into<Department>) -> Self {
        Self { id, name: name.into(), department: department.into() }
    }
}
