//! Integration tests for attendance marking and QR generation

use attendance_mock_service::api::faculty::{ManualMarkRequest, ManualStudentMark, QrSessionRequest};
use attendance_mock_service::api::student::{FaceMarkRequest, QrMarkRequest};
use attendance_mock_service::api::{ApiError, MockApi};
use attendance_mock_service::store::EntityStore;
use attendance_mock_service::types::{
    AttendanceMethod, AttendanceStatus, CourseId, ServiceConfig, SessionId, UserId,
};
use chrono::{Duration, NaiveDate};

fn api_with(config: ServiceConfig) -> MockApi {
    MockApi::new(EntityStore::demo(), config).expect("valid config")
}

fn api() -> MockApi {
    api_with(ServiceConfig { seed: Some(1), ..Default::default() })
}

fn qr_request(code: &str) -> QrMarkRequest {
    QrMarkRequest {
        code: code.to_string(),
        student_id: UserId::new("student_001"),
        course_id: CourseId::new("CS301"),
        course_name: "Data Structures and Algorithms".to_string(),
        session_id: SessionId::new("session_qr_1"),
        location: "CS-101".to_string(),
    }
}

/// A code with the marker prefix yields a present/qr record
#[tokio::test(start_paused = true)]
async fn qr_marking_accepts_prefixed_code() {
    let api = api();

    let response = api
        .student()
        .mark_attendance_qr(&qr_request("ATTEND_CS301_12345"))
        .await
        .unwrap();

    assert!(response.success);
    assert_eq!(response.record.status, AttendanceStatus::Present);
    assert_eq!(response.record.method, AttendanceMethod::Qr);
    assert_eq!(response.record.marked_by, UserId::new("student_001"));
    assert!(response.record.marked_at.is_some());
    assert_eq!(response.record.metadata.device_info, "Mobile App");
    assert_eq!(response.message, "Attendance marked successfully via QR code");
}

/// A code without the marker prefix rejects with the invalid-code message
#[tokio::test(start_paused = true)]
async fn qr_marking_rejects_garbage_code() {
    let api = api();

    let result = api.student().mark_attendance_qr(&qr_request("garbage")).await;
    let error = result.unwrap_err();

    assert!(matches!(error, ApiError::InvalidQrCode));
    assert_eq!(error.message(), "Invalid QR code");
}

/// Face marking succeeds above the default threshold and carries confidence
#[tokio::test(start_paused = true)]
async fn face_marking_succeeds_above_threshold() {
    let api = api();

    let response = api
        .student()
        .mark_attendance_face(&FaceMarkRequest {
            student_id: UserId::new("student_001"),
            course_id: CourseId::new("CS302"),
            course_name: "Database Management Systems".to_string(),
            session_id: SessionId::new("session_face_1"),
            location: "CS-102".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.record.method, AttendanceMethod::FacialRecognition);
    // Simulated confidence draws land in [90, 100)
    assert!((90.0..100.0).contains(&response.record.metadata.confidence));
    assert!(response.message.contains("face recognition"));
    assert_eq!(response.record.metadata.verification_attempts, Some(1));
}

/// Raising the threshold above the draw range forces biometric rejection
#[tokio::test(start_paused = true)]
async fn face_marking_rejects_below_threshold() {
    let api = api_with(ServiceConfig {
        seed: Some(1),
        face_confidence_threshold: 100.0,
        ..Default::default()
    });

    let result = api
        .student()
        .mark_attendance_face(&FaceMarkRequest {
            student_id: UserId::new("student_001"),
            course_id: CourseId::new("CS302"),
            course_name: "Database Management Systems".to_string(),
            session_id: SessionId::new("session_face_2"),
            location: "CS-102".to_string(),
        })
        .await;

    let error = result.unwrap_err();
    assert!(matches!(error, ApiError::FaceRecognitionFailed { .. }));
    assert!(error.message().starts_with("Face recognition failed"));
}

/// Generated QR codes expire exactly the configured number of minutes later
#[tokio::test(start_paused = true)]
async fn generated_qr_code_expires_after_configured_window() {
    let api = api();

    let descriptor = api
        .faculty()
        .generate_qr_code(&QrSessionRequest {
            course_id: CourseId::new("CS301"),
            course_name: "Data Structures and Algorithms".to_string(),
            faculty_id: UserId::new("faculty_001"),
            location: "CS-101".to_string(),
        })
        .await
        .unwrap();

    assert!(descriptor.is_active);
    assert!(descriptor.code.starts_with("ATTEND_CS301_"));
    assert_eq!(descriptor.expires_at - descriptor.created_at, Duration::minutes(30));

    // The generated code is accepted by the student marking endpoint
    let response = api
        .student()
        .mark_attendance_qr(&QrMarkRequest {
            code: descriptor.code.clone(),
            student_id: UserId::new("student_001"),
            course_id: descriptor.course_id.clone(),
            course_name: descriptor.course_name.clone(),
            session_id: descriptor.session_id.clone(),
            location: descriptor.location.clone(),
        })
        .await
        .unwrap();
    assert_eq!(response.record.session_id, descriptor.session_id);
}

/// Manual batches produce one record per student with the marking invariant
#[tokio::test(start_paused = true)]
async fn manual_batch_marks_every_student() {
    let api = api();

    let request = ManualMarkRequest {
        course_id: CourseId::new("CS301"),
        course_name: "Data Structures and Algorithms".to_string(),
        session_id: SessionId::new("session_manual_1"),
        date: NaiveDate::from_ymd_opt(2024, 10, 14).unwrap(),
        faculty_id: UserId::new("faculty_001"),
        location: "CS-101".to_string(),
        students: vec![
            ManualStudentMark {
                student_id: UserId::new("student_001"),
                status: AttendanceStatus::Present,
                notes: None,
            },
            ManualStudentMark {
                student_id: UserId::new("student_002"),
                status: AttendanceStatus::Late,
                notes: Some("Arrived 10 minutes late".to_string()),
            },
            ManualStudentMark {
                student_id: UserId::new("student_003"),
                status: AttendanceStatus::Absent,
                notes: Some("Medical leave".to_string()),
            },
        ],
    };

    let response = api.faculty().mark_attendance(&request).await.unwrap();

    assert_eq!(response.records.len(), 3);
    assert_eq!(response.message, "Attendance marked for 3 students");

    for record in &response.records {
        assert_eq!(record.method, AttendanceMethod::Manual);
        assert_eq!(record.marked_by, UserId::new("faculty_001"));
        assert_eq!(record.metadata.device_info, "Faculty Portal");
        assert!(record.is_consistent());
    }

    let absent = response
        .records
        .iter()
        .find(|r| r.student_id == UserId::new("student_003"))
        .unwrap();
    assert_eq!(absent.status, AttendanceStatus::Absent);
    assert!(absent.marked_at.is_none());
}

/// Marking endpoints trust caller ids even without a known enrollment
#[tokio::test(start_paused = true)]
async fn marking_trusts_caller_supplied_ids() {
    let api = api();

    // student_003 is not enrolled in MA301; the mock still accepts the mark
    let response = api
        .student()
        .mark_attendance_qr(&QrMarkRequest {
            code: "ATTEND_MA301_1".to_string(),
            student_id: UserId::new("student_003"),
            course_id: CourseId::new("MA301"),
            course_name: "Discrete Mathematics".to_string(),
            session_id: SessionId::new("session_qr_2"),
            location: "MA-101".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.record.course_id, CourseId::new("MA301"));
}
