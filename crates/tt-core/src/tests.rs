//! Unit tests for tt-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CoreError, SectionId, TeacherId, TenantId};

    #[test]
    fn ids_order_by_value() {
        assert!(SectionId(3) < SectionId(42));
        assert_eq!(SectionId(42), SectionId(42));
    }

    #[test]
    fn display() {
        assert_eq!(TeacherId(7).to_string(), "TeacherId(7)");
    }

    #[test]
    fn tenant_is_trimmed() {
        let t = TenantId::new("  SCH-1234 ").unwrap();
        assert_eq!(t.as_str(), "SCH-1234");
    }

    #[test]
    fn blank_tenant_rejected() {
        assert!(matches!(TenantId::new(""), Err(CoreError::MissingTenant)));
        assert!(matches!(TenantId::new("   "), Err(CoreError::MissingTenant)));
    }
}

#[cfg(test)]
mod grid {
    use crate::{Day, SLOTS_PER_DAY, Window, block_time_string};

    #[test]
    fn days_in_calendar_order() {
        let idx: Vec<usize> = Day::ALL.iter().map(|d| d.index()).collect();
        assert_eq!(idx, vec![0, 1, 2, 3, 4]);
        assert!(Day::Monday < Day::Friday);
        assert_eq!(Day::Wednesday.to_string(), "Wednesday");
    }

    #[test]
    fn single_slot_label() {
        assert_eq!(block_time_string(0, 1), "09:00 AM - 10:00 AM");
        assert_eq!(block_time_string(7, 1), "04:00 PM - 05:00 PM");
    }

    #[test]
    fn double_slot_label_spans_both() {
        assert_eq!(block_time_string(2, 2), "11:00 AM - 01:00 PM");
        assert_eq!(Window::new(Day::Monday, 6, 2).time_label(), "03:00 PM - 05:00 PM");
    }

    #[test]
    fn block_past_end_of_day_is_invalid() {
        assert_eq!(block_time_string(7, 2), "Invalid Time");
        assert_eq!(block_time_string(3, 0), "Invalid Time");
    }

    #[test]
    fn starts_for_duration() {
        assert_eq!(Window::starts_for(1).count(), SLOTS_PER_DAY as usize);
        assert_eq!(*Window::starts_for(2).end(), 6);
    }

    #[test]
    fn overlap_rules() {
        let a = Window::new(Day::Monday, 2, 2);
        assert!(a.overlaps(&Window::new(Day::Monday, 3, 1)));
        assert!(!a.overlaps(&Window::new(Day::Monday, 4, 1)));
        assert!(!a.overlaps(&Window::new(Day::Tuesday, 2, 2)));
        assert!(a.fits());
        assert!(!Window::new(Day::Friday, 7, 2).fits());
    }
}

#[cfg(test)]
mod model {
    use crate::{Classroom, Department, RoomId, RoomKind, SubjectKind};

    #[test]
    fn department_normalizes_case_and_whitespace() {
        assert_eq!(Department::new(" cse "), Department::new("CSE"));
        assert_eq!(Department::new("cse").label(), "cse");
        assert_eq!(Department::new("cse").key(), "CSE");
    }

    #[test]
    fn blank_department_is_general() {
        assert!(Department::new("").is_general());
        assert!(Department::new("general").is_general());
        assert_eq!(Department::new("  ").label(), "General");
    }

    #[test]
    fn covers_is_one_directional() {
        let cse = Department::new("CSE");
        let general = Department::general();
        assert!(general.covers(&cse));
        assert!(!cse.covers(&general));
        assert!(cse.compatible(&general));
        assert!(!cse.compatible(&Department::new("ECE")));
    }

    #[test]
    fn kind_parsing_is_lenient() {
        assert_eq!(SubjectKind::parse("PRACTICAL "), SubjectKind::Practical);
        assert_eq!(SubjectKind::parse("lecture"), SubjectKind::Theory);
        assert_eq!(RoomKind::parse("lab"), RoomKind::Lab);
        assert_eq!(RoomKind::parse("Seminar"), RoomKind::LectureHall);
    }

    #[test]
    fn practical_needs_two_slot_lab() {
        assert_eq!(SubjectKind::Practical.duration(), 2);
        assert_eq!(SubjectKind::Practical.required_room(), RoomKind::Lab);
        assert_eq!(SubjectKind::Theory.duration(), 1);
    }

    #[test]
    fn classroom_accepts_by_kind_and_department() {
        let lab = Classroom {
            id:         RoomId(0),
            name:       "Lab 1".into(),
            capacity:   30,
            kind:       RoomKind::Lab,
            department: Department::new("CSE"),
        };
        assert!(lab.accepts(SubjectKind::Practical, &Department::new("cse")));
        assert!(lab.accepts(SubjectKind::Practical, &Department::general()));
        assert!(!lab.accepts(SubjectKind::Theory, &Department::new("CSE")));
        assert!(!lab.accepts(SubjectKind::Practical, &Department::new("ECE")));
    }
}

#[cfg(test)]
mod rng {
    use crate::PlanRng;

    #[test]
    fn same_seed_same_shuffle() {
        let mut a: Vec<u32> = (0..50).collect();
        let mut b = a.clone();
        PlanRng::new(9).shuffle(&mut a);
        PlanRng::new(9).shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut v: Vec<u32> = (0..20).collect();
        PlanRng::new(1).shuffle(&mut v);
        v.sort_unstable();
        assert_eq!(v, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = PlanRng::from_seed(None);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[5u8]), Some(&5));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_shape {
    use crate::{Day, Department, RoomKind, SubjectKind, TenantId};

    #[test]
    fn enums_serialize_as_labels() {
        assert_eq!(serde_json::to_string(&Day::Monday).unwrap(), "\"Monday\"");
        assert_eq!(serde_json::to_string(&SubjectKind::Practical).unwrap(), "\"practical\"");
        assert_eq!(serde_json::to_string(&RoomKind::LectureHall).unwrap(), "\"LectureHall\"");
    }

    #[test]
    fn department_serializes_label() {
        let d: Department = serde_json::from_str("\"cse\"").unwrap();
        assert_eq!(d.key(), "CSE");
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"cse\"");
    }

    #[test]
    fn blank_tenant_fails_to_deserialize() {
        assert!(serde_json::from_str::<TenantId>("\"  \"").is_err());
    }
}
