//! The `ResourceSource` trait and the per-run resource bundle.

use tracing::debug;

use tt_core::{Classroom, Section, Subject, Teacher, TenantId};

use crate::CatalogResult;

/// Tenant-scoped, read-only access to stored entities.
///
/// Implementations return an empty `Vec` when a tenant has no records of a
/// kind.  Only failures of the backing store itself are errors.
pub trait ResourceSource {
    fn teachers(&self, tenant: &TenantId) -> CatalogResult<Vec<Teacher>>;

    fn subjects(&self, tenant: &TenantId) -> CatalogResult<Vec<Subject>>;

    fn classrooms(&self, tenant: &TenantId) -> CatalogResult<Vec<Classroom>>;

    /// Stored sections.  The engine schedules whatever section list its
    /// caller passes in; this is a convenience for callers that schedule
    /// everything on record.
    fn sections(&self, tenant: &TenantId) -> CatalogResult<Vec<Section>>;
}

/// The three collections a run reads, loaded once up front.
#[derive(Clone, Debug, Default)]
pub struct Resources {
    pub teachers:   Vec<Teacher>,
    pub subjects:   Vec<Subject>,
    pub classrooms: Vec<Classroom>,
}

/// Fetch teachers, subjects and classrooms for `tenant`.
pub fn load_resources<S: ResourceSource + ?Sized>(
    source: &S,
    tenant: &TenantId,
) -> CatalogResult<Resources> {
    let resources = Resources {
        teachers:   source.teachers(tenant)?,
        subjects:   source.subjects(tenant)?,
        classrooms: source.classrooms(tenant)?,
    };
    debug!(
        tenant = %tenant,
        teachers = resources.teachers.len(),
        subjects = resources.subjects.len(),
        classrooms = resources.classrooms.len(),
        "loaded resources"
    );
    Ok(resources)
}
