//! JSON catalog loader.
//!
//! # Format
//!
//! One document holds any number of tenants.  Kind and department fields are
//! free-form strings normalized on load; omitted fields take the defaults
//! shown.
//!
//! ```json
//! {
//!   "tenants": [
//!     {
//!       "tenant": "SCH-1042",
//!       "subjects": [
//!         { "id": 0, "name": "Algorithms", "code": "CS201",
//!           "credits": 3, "type": "theory", "department": "CSE" }
//!       ],
//!       "teachers": [
//!         { "id": 0, "name": "R. Iyer", "department": "CSE",
//!           "qualifiedSubjects": [0] }
//!       ],
//!       "classrooms": [
//!         { "id": 0, "name": "LH-1", "capacity": 60,
//!           "type": "LectureHall", "department": "CSE" }
//!       ],
//!       "sections": [ { "id": 0, "name": "CSE-A", "department": "CSE" } ]
//!     }
//!   ]
//! }
//! ```
//!
//! | Field                  | Default        |
//! |------------------------|----------------|
//! | `credits`              | `0` (unset)    |
//! | `type`                 | theory / LectureHall |
//! | `department`           | `General`      |
//! | `qualifiedSubjects`    | `[]`           |
//!
//! Qualified-subject references that name no subject of the same tenant are
//! dropped with a warning; repeated references are collapsed.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use tt_core::{
    Classroom, Department, RoomId, RoomKind, Section, SectionId, Subject, SubjectId, SubjectKind,
    Teacher, TeacherId, TenantId,
};

use crate::{CatalogError, CatalogResult, MemoryCatalog, TenantCatalog};

// ── JSON records ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    tenants: Vec<TenantRecord>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TenantRecord {
    tenant:     String,
    #[serde(default)]
    subjects:   Vec<SubjectRecord>,
    #[serde(default)]
    teachers:   Vec<TeacherRecord>,
    #[serde(default)]
    classrooms: Vec<ClassroomRecord>,
    #[serde(default)]
    sections:   Vec<SectionRecord>,
}

#[derive(Deserialize)]
struct SubjectRecord {
    id:         u32,
    name:       String,
    #[serde(default)]
    code:       String,
    #[serde(default)]
    credits:    u32,
    #[serde(default, rename = "type")]
    kind:       String,
    #[serde(default)]
    department: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeacherRecord {
    id:                 u32,
    name:               String,
    #[serde(default)]
    department:         String,
    #[serde(default)]
    qualified_subjects: Vec<u32>,
}

#[derive(Deserialize)]
struct ClassroomRecord {
    id:         u32,
    name:       String,
    #[serde(default)]
    capacity:   u32,
    #[serde(default, rename = "type")]
    kind:       String,
    #[serde(default)]
    department: String,
}

#[derive(Deserialize)]
struct SectionRecord {
    id:         u32,
    name:       String,
    #[serde(default)]
    department: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`MemoryCatalog`] from a JSON file.
pub fn load_catalog_json(path: &Path) -> CatalogResult<MemoryCatalog> {
    let file = std::fs::File::open(path)?;
    load_catalog_reader(file)
}

/// Like [`load_catalog_json`] but accepts any `Read` source.
pub fn load_catalog_reader<R: Read>(reader: R) -> CatalogResult<MemoryCatalog> {
    let doc: CatalogDocument = serde_json::from_reader(reader)?;

    let mut catalog = MemoryCatalog::new();
    for record in doc.tenants {
        let tenant = TenantId::new(record.tenant.clone())?;
        if catalog.contains(&tenant) {
            return Err(CatalogError::DuplicateTenant(tenant));
        }
        let entry = build_tenant(&tenant, record)?;
        catalog.insert(tenant, entry);
    }
    Ok(catalog)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn build_tenant(tenant: &TenantId, record: TenantRecord) -> CatalogResult<TenantCatalog> {
    let subjects: Vec<Subject> = record
        .subjects
        .into_iter()
        .map(|r| Subject {
            id:         SubjectId(r.id),
            name:       r.name,
            code:       r.code,
            credits:    r.credits,
            kind:       SubjectKind::parse(&r.kind),
            department: Department::new(r.department),
        })
        .collect();
    ensure_unique(tenant, "subject", subjects.iter().map(|s| s.id.0))?;

    let known: HashSet<SubjectId> = subjects.iter().map(|s| s.id).collect();

    let teachers: Vec<Teacher> = record
        .teachers
        .into_iter()
        .map(|r| {
            let mut qualified: Vec<SubjectId> = Vec::with_capacity(r.qualified_subjects.len());
            for raw in r.qualified_subjects {
                let id = SubjectId(raw);
                if !known.contains(&id) {
                    warn!(tenant = %tenant, teacher = %r.name, subject = raw, "dropping unknown qualified subject");
                    continue;
                }
                if !qualified.contains(&id) {
                    qualified.push(id);
                }
            }
            Teacher {
                id:                 TeacherId(r.id),
                name:               r.name,
                department:         Department::new(r.department),
                qualified_subjects: qualified,
            }
        })
        .collect();
    ensure_unique(tenant, "teacher", teachers.iter().map(|t| t.id.0))?;

    let classrooms: Vec<Classroom> = record
        .classrooms
        .into_iter()
        .map(|r| Classroom {
            id:         RoomId(r.id),
            name:       r.name,
            capacity:   r.capacity,
            kind:       RoomKind::parse(&r.kind),
            department: Department::new(r.department),
        })
        .collect();
    ensure_unique(tenant, "classroom", classrooms.iter().map(|c| c.id.0))?;

    let sections: Vec<Section> = record
        .sections
        .into_iter()
        .map(|r| Section::new(SectionId(r.id), r.name, r.department))
        .collect();
    ensure_unique(tenant, "section", sections.iter().map(|s| s.id.0))?;

    Ok(TenantCatalog { teachers, subjects, classrooms, sections })
}

fn ensure_unique(
    tenant: &TenantId,
    what:   &str,
    ids:    impl Iterator<Item = u32>,
) -> CatalogResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::Parse(format!(
                "tenant {tenant}: duplicate {what} id {id}"
            )));
        }
    }
    Ok(())
}
