//! In-memory catalog keyed by tenant.

use std::collections::HashMap;

use tt_core::{Classroom, Section, Subject, Teacher, TenantId};

use crate::{CatalogResult, ResourceSource};

/// Everything stored for one tenant.
#[derive(Clone, Debug, Default)]
pub struct TenantCatalog {
    pub teachers:   Vec<Teacher>,
    pub subjects:   Vec<Subject>,
    pub classrooms: Vec<Classroom>,
    pub sections:   Vec<Section>,
}

/// A [`ResourceSource`] holding every tenant's records in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryCatalog {
    tenants: HashMap<TenantId, TenantCatalog>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything stored for `tenant`.
    pub fn insert(&mut self, tenant: TenantId, catalog: TenantCatalog) {
        self.tenants.insert(tenant, catalog);
    }

    /// Mutable access to a tenant's records, creating an empty entry if the
    /// tenant is unknown.
    pub fn tenant_mut(&mut self, tenant: &TenantId) -> &mut TenantCatalog {
        self.tenants.entry(tenant.clone()).or_default()
    }

    pub fn contains(&self, tenant: &TenantId) -> bool {
        self.tenants.contains_key(tenant)
    }

    /// Known tenants, sorted.
    pub fn tenants(&self) -> Vec<&TenantId> {
        let mut ids: Vec<&TenantId> = self.tenants.keys().collect();
        ids.sort();
        ids
    }

    fn get(&self, tenant: &TenantId) -> Option<&TenantCatalog> {
        self.tenants.get(tenant)
    }
}

impl ResourceSource for MemoryCatalog {
    fn teachers(&self, tenant: &TenantId) -> CatalogResult<Vec<Teacher>> {
        Ok(self.get(tenant).map(|c| c.teachers.clone()).unwrap_or_default())
    }

    fn subjects(&self, tenant: &TenantId) -> CatalogResult<Vec<Subject>> {
        Ok(self.get(tenant).map(|c| c.subjects.clone()).unwrap_or_default())
    }

    fn classrooms(&self, tenant: &TenantId) -> CatalogResult<Vec<Classroom>> {
        Ok(self.get(tenant).map(|c| c.classrooms.clone()).unwrap_or_default())
    }

    fn sections(&self, tenant: &TenantId) -> CatalogResult<Vec<Section>> {
        Ok(self.get(tenant).map(|c| c.sections.clone()).unwrap_or_default())
    }
}
