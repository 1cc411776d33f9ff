//! Demo seed fixture
//!
//! The fixture mirrors the data set the dashboards were built against: one
//! demo login per role, a four-student roster, four courses across two
//! departments, and a handful of curated attendance records for the demo
//! student covering every status and capture method.

use chrono::{NaiveDate, TimeZone, Utc, Weekday};

use crate::attendance::{AttendanceRecord, RecordMetadata};
use crate::store::{Course, CourseSchedule, EntityStore, FaceData, StudentProfile, User};
use crate::types::{
    AttendanceMethod, AttendanceStatus, CourseId, RecordId, Role, SessionId, UserId,
};

/// Faculty member credited on manual entries
pub const DEMO_FACULTY_ID: &str = "faculty_001";

/// Build the demo entity store
///
/// The fixture is statically known to satisfy every store invariant; a
/// failure here is a bug in the seed data itself.
pub fn demo_store() -> EntityStore {
    EntityStore::new(
        demo_users(),
        demo_students(),
        demo_courses(),
        curated_records(),
        demo_departments(),
    )
    .expect("demo seed data satisfies store invariants")
}

fn demo_users() -> Vec<User> {
    vec![
        User::new(
            UserId::new("student_001"),
            "John Doe",
            "student@demo.com",
            Role::Student,
            Some("Computer Science".to_string()),
        ),
        User::new(
            UserId::new("faculty_001"),
            "Dr. Sarah Wilson",
            "faculty@demo.com",
            Role::Faculty,
            Some("Computer Science".to_string()),
        ),
        User::new(
            UserId::new("admin_001"),
            "Michael Johnson",
            "admin@demo.com",
            Role::Admin,
            Some("Administration".to_string()),
        ),
    ]
}

fn demo_students() -> Vec<StudentProfile> {
    vec![
        StudentProfile {
            id: UserId::new("student_001"),
            name: "John Doe".to_string(),
            email: "student@demo.com".to_string(),
            department: "Computer Science".to_string(),
            year: "3rd Year".to_string(),
            roll_number: "CS2021001".to_string(),
            enrolled_courses: vec![
                CourseId::new("CS301"),
                CourseId::new("CS302"),
                CourseId::new("CS303"),
                CourseId::new("MA301"),
            ],
            face_data: FaceData {
                is_registered: true,
                registered_at: Some(date_time(2024, 1, 15, 0, 0)),
                last_updated: Some(date_time(2024, 9, 1, 0, 0)),
                confidence: 95.2,
            },
        },
        StudentProfile {
            id: UserId::new("student_002"),
            name: "Alice Johnson".to_string(),
            email: "alice.johnson@college.edu".to_string(),
            department: "Computer Science".to_string(),
            year: "3rd Year".to_string(),
            roll_number: "CS2021002".to_string(),
            enrolled_courses: vec![
                CourseId::new("CS301"),
                CourseId::new("CS302"),
                CourseId::new("CS303"),
            ],
            face_data: FaceData::registered(92.8, date_time(2024, 2, 10, 0, 0)),
        },
        StudentProfile {
            id: UserId::new("student_003"),
            name: "Bob Wilson".to_string(),
            email: "bob.wilson@college.edu".to_string(),
            department: "Computer Science".to_string(),
            year: "3rd Year".to_string(),
            roll_number: "CS2021003".to_string(),
            enrolled_courses: vec![CourseId::new("CS301"), CourseId::new("CS303")],
            face_data: FaceData::unregistered(),
        },
        StudentProfile {
            id: UserId::new("student_004"),
            name: "Sarah Davis".to_string(),
            email: "sarah.davis@college.edu".to_string(),
            department: "Computer Science".to_string(),
            year: "3rd Year".to_string(),
            roll_number: "CS2021004".to_string(),
            enrolled_courses: vec![
                CourseId::new("CS301"),
                CourseId::new("CS302"),
                CourseId::new("MA301"),
            ],
            face_data: FaceData::registered(97.1, date_time(2024, 1, 20, 0, 0)),
        },
    ]
}

fn demo_courses() -> Vec<Course> {
    vec![
        Course {
            id: CourseId::new("CS301"),
            name: "Data Structures and Algorithms".to_string(),
            code: "CS301".to_string(),
            department: "Computer Science".to_string(),
            faculty_id: UserId::new("faculty_001"),
            faculty_name: "Dr. Sarah Wilson".to_string(),
            schedule: CourseSchedule::new(
                vec![Weekday::Mon, Weekday::Wed, Weekday::Fri],
                "09:00 AM - 10:30 AM",
                "CS-101",
            ),
            semester: "Fall 2024".to_string(),
            total_classes: 45,
            conducted_classes: 32,
        },
        Course {
            id: CourseId::new("CS302"),
            name: "Database Management Systems".to_string(),
            code: "CS302".to_string(),
            department: "Computer Science".to_string(),
            faculty_id: UserId::new("faculty_001"),
            faculty_name: "Dr. Robert Brown".to_string(),
            schedule: CourseSchedule::new(
                vec![Weekday::Tue, Weekday::Thu],
                "11:00 AM - 12:30 PM",
                "CS-102",
            ),
            semester: "Fall 2024".to_string(),
            total_classes: 30,
            conducted_classes: 24,
        },
        Course {
            id: CourseId::new("CS303"),
            name: "Computer Networks".to_string(),
            code: "CS303".to_string(),
            department: "Computer Science".to_string(),
            faculty_id: UserId::new("faculty_001"),
            faculty_name: "Dr. Emily Davis".to_string(),
            schedule: CourseSchedule::new(
                vec![Weekday::Mon, Weekday::Thu],
                "02:00 PM - 03:30 PM",
                "CS-103",
            ),
            semester: "Fall 2024".to_string(),
            total_classes: 30,
            conducted_classes: 22,
        },
        Course {
            id: CourseId::new("MA301"),
            name: "Discrete Mathematics".to_string(),
            code: "MA301".to_string(),
            department: "Mathematics".to_string(),
            faculty_id: UserId::new("faculty_002"),
            faculty_name: "Dr. James Miller".to_string(),
            schedule: CourseSchedule::new(
                vec![Weekday::Tue, Weekday::Fri],
                "10:00 AM - 11:30 AM",
                "MA-101",
            ),
            semester: "Fall 2024".to_string(),
            total_classes: 30,
            conducted_classes: 25,
        },
    ]
}

fn curated_records() -> Vec<AttendanceRecord> {
    vec![
        AttendanceRecord {
            id: RecordId::new("att_001"),
            student_id: UserId::new("student_001"),
            course_id: CourseId::new("CS301"),
            course_name: "Data Structures and Algorithms".to_string(),
            session_id: SessionId::new("session_001"),
            date: date(2024, 9, 16),
            status: AttendanceStatus::Present,
            marked_at: Some(date_time(2024, 9, 16, 9, 5)),
            marked_by: UserId::new("faculty_001"),
            method: AttendanceMethod::Qr,
            metadata: RecordMetadata::qr("CS-101"),
        },
        AttendanceRecord {
            id: RecordId::new("att_002"),
            student_id: UserId::new("student_001"),
            course_id: CourseId::new("CS302"),
            course_name: "Database Management Systems".to_string(),
            session_id: SessionId::new("session_002"),
            date: date(2024, 9, 15),
            status: AttendanceStatus::Present,
            marked_at: Some(date_time(2024, 9, 15, 11, 2)),
            marked_by: UserId::new("student_001"),
            method: AttendanceMethod::FacialRecognition,
            metadata: RecordMetadata::facial("CS-102", 94.8),
        },
        AttendanceRecord {
            id: RecordId::new("att_003"),
            student_id: UserId::new("student_001"),
            course_id: CourseId::new("CS301"),
            course_name: "Data Structures and Algorithms".to_string(),
            session_id: SessionId::new("session_003"),
            date: date(2024, 9, 14),
            status: AttendanceStatus::Late,
            marked_at: Some(date_time(2024, 9, 14, 9, 15)),
            marked_by: UserId::new("faculty_001"),
            method: AttendanceMethod::Manual,
            metadata: RecordMetadata::manual("CS-101", Some("Arrived 15 minutes late".to_string())),
        },
        AttendanceRecord {
            id: RecordId::new("att_004"),
            student_id: UserId::new("student_001"),
            course_id: CourseId::new("CS303"),
            course_name: "Computer Networks".to_string(),
            session_id: SessionId::new("session_004"),
            date: date(2024, 9, 13),
            status: AttendanceStatus::Absent,
            marked_at: None,
            marked_by: UserId::new("faculty_001"),
            method: AttendanceMethod::Manual,
            metadata: RecordMetadata::manual("CS-103", Some("Medical leave".to_string())),
        },
    ]
}

fn demo_departments() -> Vec<String> {
    vec![
        "Computer Science".to_string(),
        "Mathematics".to_string(),
        "Physics".to_string(),
        "Chemistry".to_string(),
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("demo seed dates are valid")
}

fn date_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("demo seed timestamps are valid")
}
