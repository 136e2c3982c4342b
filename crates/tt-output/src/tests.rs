//! Integration tests for tt-output.

use tempfile::TempDir;

use tt_catalog::Resources;
use tt_core::{
    Classroom, Department, RoomId, RoomKind, Section, SectionId, Subject, SubjectId, SubjectKind,
    Teacher, TeacherId, TenantId,
};
use tt_engine::{EngineConfig, NoopProgress, TimetableEngine, TimetableResult};

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn tenant(raw: &str) -> TenantId {
    TenantId::new(raw).unwrap()
}

/// A small run: two theory subjects placed, one practical with no lab.
fn sample_result(seed: u64) -> TimetableResult {
    let sections = vec![Section::new(SectionId(0), "CSE-A", "CSE")];
    let resources = Resources {
        teachers: vec![
            Teacher {
                id:                 TeacherId(0),
                name:               "Iyer".into(),
                department:         Department::new("CSE"),
                qualified_subjects: vec![SubjectId(0)],
            },
            Teacher {
                id:                 TeacherId(1),
                name:               "Rao".into(),
                department:         Department::new("CSE"),
                qualified_subjects: vec![SubjectId(1), SubjectId(2)],
            },
        ],
        subjects: vec![
            Subject {
                id:         SubjectId(0),
                name:       "Algorithms".into(),
                code:       "CS201".into(),
                credits:    2,
                kind:       SubjectKind::Theory,
                department: Department::new("CSE"),
            },
            Subject {
                id:         SubjectId(1),
                name:       "Databases".into(),
                code:       "CS202".into(),
                credits:    1,
                kind:       SubjectKind::Theory,
                department: Department::new("CSE"),
            },
            Subject {
                id:         SubjectId(2),
                name:       "Networks Lab".into(),
                code:       "CS291".into(),
                credits:    2,
                kind:       SubjectKind::Practical,
                department: Department::new("CSE"),
            },
        ],
        classrooms: vec![Classroom {
            id:         RoomId(0),
            name:       "LH-1".into(),
            capacity:   60,
            kind:       RoomKind::LectureHall,
            department: Department::general(),
        }],
    };
    TimetableEngine::new(EngineConfig::default())
        .unwrap()
        .with_seed(seed)
        .run(&sections, &resources, &mut NoopProgress)
        .unwrap()
}

// ── Rows ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use super::*;
    use crate::row::{SlotRow, shortage_rows};

    #[test]
    fn slot_row_flattens_labels() {
        let result = sample_result(1);
        let slot = &result.schedule[0];
        let record = SlotRow::from(slot).to_record();
        assert_eq!(record[0], slot.day.name());
        assert_eq!(record[3], "CSE-A");
        assert_eq!(record[8], "theory");
        assert_eq!(record[9], slot.time);
    }

    #[test]
    fn shortage_rows_skip_zero_room_kinds() {
        let result = sample_result(1);
        let alert = result.alert.as_ref().expect("lab shortage expected");
        let rows = shortage_rows(alert);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].resource, "room");
        assert_eq!(rows[0].name, "Lab");
        assert_eq!(rows[0].count, 1);
    }
}

// ── CSV tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::*;
    use crate::csv::CsvWriter;
    use crate::writer::TimetableWriter;
    use crate::OutputError;

    fn read_records(path: std::path::PathBuf) -> (Vec<String>, Vec<csv::StringRecord>) {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr.records().map(|r| r.unwrap()).collect();
        (headers, rows)
    }

    #[test]
    fn csv_files_created_per_tenant() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_timetable(&tenant("SCH-1"), &sample_result(1)).unwrap();
        w.finish().unwrap();
        assert!(dir.path().join("SCH-1").join("timetable.csv").exists());
        assert!(dir.path().join("SCH-1").join("shortages.csv").exists());
    }

    #[test]
    fn csv_headers_and_rows() {
        let dir = tmp();
        let result = sample_result(2);
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_timetable(&tenant("SCH-1"), &result).unwrap();

        let (headers, rows) = read_records(w.tenant_dir(&tenant("SCH-1")).join("timetable.csv"));
        assert_eq!(headers, [
            "day", "slot_index", "duration", "section", "department",
            "subject", "teacher", "room", "type", "time",
        ]);
        assert_eq!(rows.len(), result.schedule.len());
        assert_eq!(&rows[0][1], result.schedule[0].slot_index.to_string());

        let (headers, rows) = read_records(w.tenant_dir(&tenant("SCH-1")).join("shortages.csv"));
        assert_eq!(headers, ["resource", "name", "count"]);
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "Lab");
        assert_eq!(&rows[0][2], "1");
    }

    #[test]
    fn csv_rewrite_replaces_previous() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let result = sample_result(3);
        w.write_timetable(&tenant("SCH-1"), &result).unwrap();
        w.write_timetable(&tenant("SCH-1"), &result).unwrap();

        let (_, rows) = read_records(w.tenant_dir(&tenant("SCH-1")).join("timetable.csv"));
        assert_eq!(rows.len(), result.schedule.len());
    }

    #[test]
    fn csv_tenant_name_escaped() {
        let dir = tmp();
        let w = CsvWriter::new(dir.path()).unwrap();
        assert_eq!(w.tenant_dir(&tenant("a/b c")), dir.path().join("a_2Fb_20c"));
        assert_eq!(w.tenant_dir(&tenant("SCH_1")), dir.path().join("SCH_5F1"));
        assert_eq!(w.tenant_dir(&tenant("SCH-1")), dir.path().join("SCH-1"));
    }

    #[test]
    fn csv_lookalike_tenants_kept_apart() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let mut complete = sample_result(11);
        complete.alert = None;
        w.write_timetable(&tenant("SCH/1"), &complete).unwrap();
        w.write_timetable(&tenant("SCH_1"), &sample_result(11)).unwrap();

        assert_ne!(w.tenant_dir(&tenant("SCH/1")), w.tenant_dir(&tenant("SCH_1")));
        let (_, rows) = read_records(w.tenant_dir(&tenant("SCH/1")).join("shortages.csv"));
        assert!(rows.is_empty(), "SCH/1 was overwritten by SCH_1");
        let (_, rows) = read_records(w.tenant_dir(&tenant("SCH_1")).join("shortages.csv"));
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn csv_finish_idempotent_and_final() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
        let err = w.write_timetable(&tenant("SCH-1"), &sample_result(1)).unwrap_err();
        assert!(matches!(err, OutputError::Finished));
    }
}

// ── JSON tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod json_tests {
    use super::*;
    use crate::json::JsonWriter;
    use crate::writer::TimetableWriter;

    #[test]
    fn json_document_shape() {
        let dir = tmp();
        let mut w = JsonWriter::new(dir.path()).unwrap();
        w.write_timetable(&tenant("SCH-1"), &sample_result(4)).unwrap();

        let text = std::fs::read_to_string(w.path_for(&tenant("SCH-1"))).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(doc["tenant"], "SCH-1");
        assert!(doc["schedule"].is_array());
        assert_eq!(doc["alert"]["details"]["rooms"]["Lab"], 1);
    }

    #[test]
    fn json_lookalike_tenants_kept_apart() {
        let dir = tmp();
        let mut w = JsonWriter::new(dir.path()).unwrap();
        let mut complete = sample_result(12);
        complete.alert = None;
        let short = sample_result(12);
        w.write_timetable(&tenant("SCH/1"), &complete).unwrap();
        w.write_timetable(&tenant("SCH_1"), &short).unwrap();

        assert_ne!(w.path_for(&tenant("SCH/1")), w.path_for(&tenant("SCH_1")));
        let a = w.load(&tenant("SCH/1")).unwrap().unwrap();
        let b = w.load(&tenant("SCH_1")).unwrap().unwrap();
        assert!(a.alert.is_none());
        assert_eq!(b.alert, short.alert);
    }

    #[test]
    fn json_load_returns_stored_timetable() {
        let dir = tmp();
        let result = sample_result(5);
        let mut w = JsonWriter::new(dir.path()).unwrap();
        w.write_timetable(&tenant("SCH-1"), &result).unwrap();

        let loaded = w.load(&tenant("SCH-1")).unwrap().unwrap();
        assert_eq!(loaded.schedule, result.schedule);
        assert_eq!(loaded.alert, result.alert);
        assert!(w.load(&tenant("SCH-2")).unwrap().is_none());
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use super::*;
    use crate::sqlite::SqliteWriter;
    use crate::writer::TimetableWriter;

    fn slot_count(dir: &TempDir, tenant: &str) -> i64 {
        let conn = rusqlite::Connection::open(dir.path().join("timetables.db")).unwrap();
        conn.query_row(
            "SELECT COUNT(*) FROM timetable_slots WHERE tenant = ?1", [tenant], |r| r.get(0)
        ).unwrap()
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("timetables.db").exists());
    }

    #[test]
    fn sqlite_round_trip() {
        let dir = tmp();
        let result = sample_result(6);
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_timetable(&tenant("SCH-1"), &result).unwrap();

        let loaded = w.load_latest(&tenant("SCH-1")).unwrap().unwrap();
        assert_eq!(loaded.schedule, result.schedule);
        assert_eq!(loaded.alert, result.alert);
        assert_eq!(loaded.stats.lessons, result.stats.lessons);
        assert_eq!(loaded.stats.conflicts, 1);
        w.finish().unwrap();

        assert_eq!(slot_count(&dir, "SCH-1"), result.schedule.len() as i64);
    }

    #[test]
    fn sqlite_rewrite_replaces_only_that_tenant() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let first = sample_result(7);
        let second = sample_result(8);
        w.write_timetable(&tenant("SCH-1"), &first).unwrap();
        w.write_timetable(&tenant("SCH-2"), &first).unwrap();
        w.write_timetable(&tenant("SCH-1"), &second).unwrap();
        w.finish().unwrap();

        assert_eq!(slot_count(&dir, "SCH-1"), second.schedule.len() as i64);
        assert_eq!(slot_count(&dir, "SCH-2"), first.schedule.len() as i64);
    }

    #[test]
    fn sqlite_clear_and_missing_tenant() {
        let mut w = SqliteWriter::in_memory().unwrap();
        assert!(w.load_latest(&tenant("SCH-1")).unwrap().is_none());

        w.write_timetable(&tenant("SCH-1"), &sample_result(9)).unwrap();
        assert!(w.clear(&tenant("SCH-1")).unwrap());
        assert!(!w.clear(&tenant("SCH-1")).unwrap());
        assert!(w.load_latest(&tenant("SCH-1")).unwrap().is_none());
    }

    #[test]
    fn sqlite_complete_timetable_has_null_alert() {
        let mut w = SqliteWriter::in_memory().unwrap();
        let mut result = sample_result(10);
        result.alert = None;
        w.write_timetable(&tenant("SCH-1"), &result).unwrap();
        let loaded = w.load_latest(&tenant("SCH-1")).unwrap().unwrap();
        assert!(loaded.is_complete());
        assert_eq!(loaded.stats.conflicts, 0);
    }
}
