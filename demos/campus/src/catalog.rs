//! Embedded two-tenant catalog.
//!
//! `SCH-1042` is adequately resourced.  `SCH-2077` has no lab and a single
//! lecture hall, so its practicals cannot be placed and the run ends with a
//! shortage alert.

pub const CATALOG_JSON: &str = r#"{
  "tenants": [
    {
      "tenant": "SCH-1042",
      "subjects": [
        { "id": 0, "name": "Algorithms",           "code": "CS201", "credits": 3, "type": "theory",    "department": "CSE" },
        { "id": 1, "name": "Databases",            "code": "CS202", "credits": 3, "type": "theory",    "department": "CSE" },
        { "id": 2, "name": "Networks Lab",         "code": "CS291", "credits": 4, "type": "Practical", "department": "CSE" },
        { "id": 3, "name": "Circuits",             "code": "EC201", "credits": 3, "type": "theory",    "department": "ECE" },
        { "id": 4, "name": "Signals Lab",          "code": "EC291", "credits": 2, "type": "practical", "department": "ece" },
        { "id": 5, "name": "Mathematics",          "code": "MA201", "credits": 4, "type": "theory",    "department": "General" },
        { "id": 6, "name": "Communication Skills", "code": "HS101", "credits": 2 }
      ],
      "teachers": [
        { "id": 0, "name": "R. Iyer",  "department": "CSE", "qualifiedSubjects": [0, 1] },
        { "id": 1, "name": "S. Rao",   "department": "CSE", "qualifiedSubjects": [1, 2] },
        { "id": 2, "name": "A. Khan",  "department": "CSE", "qualifiedSubjects": [0, 2] },
        { "id": 3, "name": "M. Das",   "department": "ECE", "qualifiedSubjects": [3, 4] },
        { "id": 4, "name": "P. Sen",   "department": "ECE", "qualifiedSubjects": [4] },
        { "id": 5, "name": "L. Roy",   "qualifiedSubjects": [5] },
        { "id": 6, "name": "K. Bose",  "qualifiedSubjects": [5, 6] },
        { "id": 7, "name": "N. Pillai","qualifiedSubjects": [6] }
      ],
      "classrooms": [
        { "id": 0, "name": "LH-101", "capacity": 60, "type": "LectureHall", "department": "CSE" },
        { "id": 1, "name": "LH-102", "capacity": 80, "type": "LectureHall", "department": "General" },
        { "id": 2, "name": "LH-201", "capacity": 60, "type": "LectureHall", "department": "ECE" },
        { "id": 3, "name": "Lab-A",  "capacity": 30, "type": "Lab",         "department": "CSE" },
        { "id": 4, "name": "Lab-B",  "capacity": 30, "type": "lab",         "department": "ECE" }
      ],
      "sections": [
        { "id": 0, "name": "CSE-A", "department": "CSE" },
        { "id": 1, "name": "CSE-B", "department": "CSE" },
        { "id": 2, "name": "ECE-A", "department": "ECE" }
      ]
    },
    {
      "tenant": "SCH-2077",
      "subjects": [
        { "id": 0, "name": "Thermodynamics", "code": "ME201", "credits": 3, "type": "theory",    "department": "MECH" },
        { "id": 1, "name": "Workshop",       "code": "ME291", "credits": 4, "type": "practical", "department": "MECH" },
        { "id": 2, "name": "Mathematics",    "code": "MA201", "credits": 3, "type": "theory" }
      ],
      "teachers": [
        { "id": 0, "name": "T. Menon", "department": "MECH", "qualifiedSubjects": [0, 1] },
        { "id": 1, "name": "J. Paul",  "qualifiedSubjects": [2] }
      ],
      "classrooms": [
        { "id": 0, "name": "Hall-1", "capacity": 90, "type": "LectureHall" }
      ],
      "sections": [
        { "id": 0, "name": "MECH-A", "department": "MECH" },
        { "id": 1, "name": "MECH-B", "department": "MECH" }
      ]
    }
  ]
}"#;
