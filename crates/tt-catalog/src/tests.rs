//! Unit tests for tt-catalog.

use std::io::Cursor;

use tt_core::{RoomKind, SubjectId, SubjectKind, TenantId};

use crate::{CatalogError, MemoryCatalog, ResourceSource, load_catalog_reader, load_resources};

// ── Helpers ───────────────────────────────────────────────────────────────────

const TWO_TENANTS: &str = r#"{
  "tenants": [
    {
      "tenant": "SCH-1",
      "subjects": [
        { "id": 0, "name": "Algorithms", "code": "CS201", "credits": 3, "type": "theory", "department": "CSE" },
        { "id": 1, "name": "Networks Lab", "code": "CS291", "credits": 4, "type": "PRACTICAL", "department": "cse" },
        { "id": 2, "name": "Ethics", "code": "HS101" }
      ],
      "teachers": [
        { "id": 0, "name": "Iyer", "department": "CSE", "qualifiedSubjects": [0, 1, 1, 99] }
      ],
      "classrooms": [
        { "id": 0, "name": "LH-1", "capacity": 60, "type": "LectureHall", "department": "CSE" },
        { "id": 1, "name": "Lab-1", "capacity": 30, "type": "lab" }
      ],
      "sections": [ { "id": 0, "name": "CSE-A", "department": "CSE" } ]
    },
    { "tenant": "SCH-2" }
  ]
}"#;

fn tenant(s: &str) -> TenantId {
    TenantId::new(s).unwrap()
}

fn load() -> MemoryCatalog {
    load_catalog_reader(Cursor::new(TWO_TENANTS)).unwrap()
}

// ── JSON loader ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod json_loader {
    use super::*;

    #[test]
    fn tenants_are_listed_sorted() {
        let catalog = load();
        let ids: Vec<&str> = catalog.tenants().iter().map(|t| t.as_str()).collect();
        assert_eq!(ids, vec!["SCH-1", "SCH-2"]);
    }

    #[test]
    fn kinds_and_departments_are_normalized() {
        let subjects = load().subjects(&tenant("SCH-1")).unwrap();
        assert_eq!(subjects[1].kind, SubjectKind::Practical);
        assert_eq!(subjects[1].department.key(), "CSE");
        assert!(subjects[2].department.is_general());
        assert_eq!(subjects[2].kind, SubjectKind::Theory);
        assert_eq!(subjects[2].credits, 0);

        let rooms = load().classrooms(&tenant("SCH-1")).unwrap();
        assert_eq!(rooms[1].kind, RoomKind::Lab);
        assert!(rooms[1].department.is_general());
    }

    #[test]
    fn qualified_subjects_deduplicated_and_unknown_dropped() {
        let teachers = load().teachers(&tenant("SCH-1")).unwrap();
        assert_eq!(teachers[0].qualified_subjects, vec![SubjectId(0), SubjectId(1)]);
    }

    #[test]
    fn duplicate_tenant_rejected() {
        let doc = r#"{ "tenants": [ { "tenant": "A" }, { "tenant": " A " } ] }"#;
        let err = load_catalog_reader(Cursor::new(doc)).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateTenant(_)));
    }

    #[test]
    fn blank_tenant_rejected() {
        let doc = r#"{ "tenants": [ { "tenant": "" } ] }"#;
        let err = load_catalog_reader(Cursor::new(doc)).unwrap_err();
        assert!(matches!(err, CatalogError::Core(_)));
    }

    #[test]
    fn duplicate_subject_id_rejected() {
        let doc = r#"{ "tenants": [ { "tenant": "A", "subjects": [
            { "id": 1, "name": "X" }, { "id": 1, "name": "Y" } ] } ] }"#;
        let err = load_catalog_reader(Cursor::new(doc)).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = load_catalog_reader(Cursor::new("{ not json")).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, TWO_TENANTS).unwrap();
        let catalog = crate::load_catalog_json(&path).unwrap();
        assert_eq!(catalog.sections(&tenant("SCH-1")).unwrap().len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = crate::load_catalog_json(std::path::Path::new("/nonexistent/catalog.json"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}

// ── ResourceSource ────────────────────────────────────────────────────────────

#[cfg(test)]
mod resource_source {
    use super::*;

    #[test]
    fn tenant_without_records_yields_empty_collections() {
        let catalog = load();
        let r = load_resources(&catalog, &tenant("SCH-2")).unwrap();
        assert!(r.teachers.is_empty());
        assert!(r.subjects.is_empty());
        assert!(r.classrooms.is_empty());
    }

    #[test]
    fn unknown_tenant_yields_empty_collections() {
        let catalog = load();
        let r = load_resources(&catalog, &tenant("SCH-404")).unwrap();
        assert!(r.teachers.is_empty());
        assert!(catalog.sections(&tenant("SCH-404")).unwrap().is_empty());
    }

    #[test]
    fn tenants_are_isolated() {
        let mut catalog = load();
        catalog.tenant_mut(&tenant("SCH-2")).sections.clear();
        let r = load_resources(&catalog, &tenant("SCH-1")).unwrap();
        assert_eq!(r.teachers.len(), 1);
        assert_eq!(r.subjects.len(), 3);
        assert_eq!(r.classrooms.len(), 2);
    }
}
