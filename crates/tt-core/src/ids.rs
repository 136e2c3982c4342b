//! Strongly typed identifier wrappers.
//!
//! Entity IDs are `Copy + Ord + Hash` so they can be used inside the tuple
//! keys of the booking trackers without ceremony.  [`TenantId`] is the one
//! string-backed identifier; it cannot be constructed blank.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// A teacher within one tenant's catalog.
    pub struct TeacherId(u32);
}

typed_id! {
    /// A subject within one tenant's catalog.
    pub struct SubjectId(u32);
}

typed_id! {
    /// A classroom within one tenant's catalog.
    pub struct RoomId(u32);
}

typed_id! {
    /// An academic section (the unit being scheduled).
    pub struct SectionId(u32);
}

// ── TenantId ──────────────────────────────────────────────────────────────────

/// The institution a run is scoped to.
///
/// Construction trims the input and rejects blank strings, so a run can never
/// start without a tenant.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct TenantId(String);

impl TenantId {
    pub fn new(raw: impl Into<String>) -> CoreResult<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::MissingTenant);
        }
        Ok(TenantId(trimmed.to_owned()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TenantId {
    type Error = CoreError;
    fn try_from(raw: String) -> CoreResult<Self> {
        TenantId::new(raw)
    }
}

impl From<TenantId> for String {
    fn from(id: TenantId) -> String {
        id.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
