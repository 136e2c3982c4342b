use std::fmt;

use thiserror::Error;

use tt_catalog::CatalogError;
use tt_core::{CoreError, SectionId};

/// The resource collections a run cannot do without.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ResourceKind {
    Teachers,
    Subjects,
    Classrooms,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResourceKind::Teachers   => "teachers",
            ResourceKind::Subjects   => "subjects",
            ResourceKind::Classrooms => "classrooms",
        })
    }
}

/// Fatal errors.  All are raised before any placement work begins; resource
/// shortages are never errors and surface as a `ShortageAlert` instead.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no sections provided")]
    NoSections,

    #[error("section {0} appears more than once")]
    DuplicateSection(SectionId),

    #[error("tenant has no {0}")]
    EmptyResource(ResourceKind),

    #[error("engine configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("resource loading failed: {0}")]
    Catalog(#[from] CatalogError),
}

pub type EngineResult<T> = Result<T, EngineError>;
