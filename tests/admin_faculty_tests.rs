//! Integration tests for the faculty and admin capability groups

use attendance_mock_service::api::admin::{
    AdvancedReportRequest, NewUserRequest, UserFilters,
};
use attendance_mock_service::api::faculty::ReportRequest;
use attendance_mock_service::api::{ApiError, MockApi};
use attendance_mock_service::store::EntityStore;
use attendance_mock_service::types::{CourseId, Role, ServiceConfig, UserId};

fn api() -> MockApi {
    let config = ServiceConfig { seed: Some(1), ..Default::default() };
    MockApi::new(EntityStore::demo(), config).expect("valid config")
}

/// Faculty dashboard aggregates the teaching load from the store
#[tokio::test(start_paused = true)]
async fn faculty_dashboard_aggregates_courses() {
    let api = api();

    let dashboard = api.faculty().get_dashboard(&UserId::new("faculty_001")).await.unwrap();

    assert_eq!(dashboard.faculty.role, Role::Faculty);
    assert_eq!(dashboard.overview.total_courses, 3);
    assert_eq!(dashboard.courses.len(), 3);
    assert_eq!(dashboard.overview.total_students, 4);
    assert_eq!(dashboard.overview.students_with_face, 3);
    assert_eq!(dashboard.overview.face_registration_rate, 75);
    assert_eq!(dashboard.overview.total_classes, 78);
    assert_eq!(dashboard.recent_activity.len(), 3);

    for stats in &dashboard.courses {
        assert!((75..=95).contains(&stats.average_attendance));
    }
}

/// Course rosters carry per-student standings derived from generated history
#[tokio::test(start_paused = true)]
async fn course_roster_reports_standings() {
    let api = api();

    let roster = api.faculty().get_course_students(&CourseId::new("CS303")).await.unwrap();

    // student_001, student_002, student_003 take CS303
    assert_eq!(roster.students.len(), 3);
    for standing in &roster.students {
        assert!(standing.student.is_enrolled_in(&CourseId::new("CS303")));
        let tally = &standing.attendance;
        assert_eq!(tally.total, tally.present + tally.late + tally.absent);

        // Per-course recency view is capped at 5 and date-descending
        assert!(standing.recent_attendance.len() <= 5);
        for pair in standing.recent_attendance.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
        if tally.total > 0 {
            let last = standing.last_attendance.as_ref().unwrap();
            assert_eq!(last.course_id, CourseId::new("CS303"));
        }
    }

    let missing = api.faculty().get_course_students(&CourseId::new("XX999")).await;
    assert!(matches!(missing, Err(ApiError::UnknownCourse(_))));
}

/// Faculty analytics cover every taught course
#[tokio::test(start_paused = true)]
async fn faculty_analytics_cover_courses() {
    let api = api();

    let analytics = api.faculty().get_analytics(&UserId::new("faculty_001")).await.unwrap();

    assert_eq!(analytics.course_performance.len(), 3);
    assert_eq!(analytics.weekly_trends.len(), 7);
    for course in &analytics.course_performance {
        assert!((75.0..95.0).contains(&course.attendance_rate));
    }

    let usage: u8 = analytics.method_breakdown.iter().map(|m| m.percentage).sum();
    assert_eq!(usage, 100);
}

/// Faculty report generation echoes the request scope
#[tokio::test(start_paused = true)]
async fn faculty_report_echoes_scope() {
    let api = api();

    let report = api
        .faculty()
        .generate_report(&ReportRequest {
            report_type: "attendance_summary".to_string(),
            course_id: Some(CourseId::new("CS301")),
            date_range: Some("last_30_days".to_string()),
        })
        .await
        .unwrap();

    assert!(report.id.starts_with("report_"));
    assert_eq!(report.report_type, "attendance_summary");
    assert_eq!(report.course_id, Some(CourseId::new("CS301")));
    assert!(report.download_url.starts_with("/api/reports/download/"));
}

/// Admin dashboard counts come from the store where ground truth exists
#[tokio::test(start_paused = true)]
async fn admin_dashboard_counts_from_store() {
    let api = api();

    let dashboard = api.admin().get_dashboard(&UserId::new("admin_001")).await.unwrap();

    assert_eq!(dashboard.admin.role, Role::Admin);
    assert_eq!(dashboard.overview.total_users, 6);
    assert_eq!(dashboard.overview.total_students, 4);
    assert_eq!(dashboard.overview.total_faculty, 1);
    assert_eq!(dashboard.overview.total_courses, 4);
    assert_eq!(dashboard.overview.total_departments, 4);
    assert_eq!(dashboard.overview.biometric_registration, 75);
    assert_eq!(dashboard.system_health.server_status, "Healthy");
    assert_eq!(dashboard.recent_activity.len(), 4);

    let cs = dashboard
        .department_stats
        .iter()
        .find(|d| d.name == "Computer Science")
        .unwrap();
    assert_eq!(cs.faculty, 1);
    assert_eq!(cs.students, 4);
    assert_eq!(cs.courses, 3);
    assert_eq!(cs.face_registration, 75);

    let physics = dashboard
        .department_stats
        .iter()
        .find(|d| d.name == "Physics")
        .unwrap();
    assert_eq!(physics.students, 0);
    // No ground truth for an empty department; figure is synthesized
    assert!((70..=100).contains(&physics.face_registration));
}

/// User listing merges login users with the student roster and filters
#[tokio::test(start_paused = true)]
async fn admin_user_listing_filters() {
    let api = api();

    let everyone = api.admin().get_users(&UserFilters::default()).await.unwrap();
    assert_eq!(everyone.len(), 6);

    let students = api
        .admin()
        .get_users(&UserFilters { role: Some(Role::Student), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(students.len(), 4);

    let alices = api
        .admin()
        .get_users(&UserFilters { search: Some("alice".to_string()), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(alices.len(), 1);
    assert_eq!(alices[0].user.name, "Alice Johnson");
}

/// User management operations echo without persisting
#[tokio::test(start_paused = true)]
async fn admin_user_management_echoes() {
    let api = api();

    let created = api
        .admin()
        .create_user(&NewUserRequest {
            name: "Dr. Emily Clark".to_string(),
            email: "emily.clark@college.edu".to_string(),
            role: Role::Faculty,
            department: Some("Computer Science".to_string()),
        })
        .await
        .unwrap();
    assert!(created.user.id.as_str().starts_with("faculty_"));
    assert!(created.last_login.is_none());

    // The store is untouched
    assert!(api.store().user(&created.user.id).is_none());

    let deleted = api.admin().delete_user(&created.user.id).await.unwrap();
    assert_eq!(deleted.message, "User deleted successfully");
}

/// Course listing decorates catalog entries with enrollment counts
#[tokio::test(start_paused = true)]
async fn admin_course_listing_counts_enrollment() {
    let api = api();

    let courses = api.admin().get_courses().await.unwrap();
    assert_eq!(courses.len(), 4);

    let cs301 = courses.iter().find(|c| c.course.id == CourseId::new("CS301")).unwrap();
    assert_eq!(cs301.enrolled_count, 4);

    let ma301 = courses.iter().find(|c| c.course.id == CourseId::new("MA301")).unwrap();
    assert_eq!(ma301.enrolled_count, 2);
}

/// Settings round-trip through the echo update
#[tokio::test(start_paused = true)]
async fn admin_settings_round_trip() {
    let api = api();

    let mut settings = api.admin().get_system_settings().await.unwrap();
    assert_eq!(settings.attendance.qr_code_expiry, 30);
    assert_eq!(settings.face_recognition.confidence_threshold, 85);

    settings.attendance.minimum_attendance = 80;
    let echoed = api.admin().update_system_settings(settings.clone()).await.unwrap();
    assert_eq!(echoed, settings);
}

/// Biometric report mixes real registration counts with synthesized history
#[tokio::test(start_paused = true)]
async fn admin_biometric_report() {
    let api = api();

    let report = api.admin().get_biometric_data().await.unwrap();

    assert_eq!(report.stats.total_registrations, 3);
    assert_eq!(report.stats.total_users, 4);
    assert_eq!(report.history.len(), 30);
    assert_eq!(report.users.len(), 4);

    // History is oldest-first
    for pair in report.history.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }

    let unregistered = report
        .users
        .iter()
        .find(|u| u.student.id == UserId::new("student_003"))
        .unwrap();
    assert!(unregistered.registration_date.is_none());
    assert_eq!(unregistered.accuracy, 0.0);
}

/// Advanced reports aggregate department counts from the store
#[tokio::test(start_paused = true)]
async fn admin_advanced_report() {
    let api = api();

    let report = api
        .admin()
        .generate_advanced_report(&AdvancedReportRequest {
            report_type: "institution_summary".to_string(),
            date_range: None,
        })
        .await
        .unwrap();

    assert!(report.id.starts_with("admin_report_"));
    assert_eq!(report.department_analysis.len(), 4);
    assert_eq!(report.trends.weekly.len(), 7);
    assert_eq!(report.trends.monthly.len(), 12);

    let cs = report
        .department_analysis
        .iter()
        .find(|d| d.department == "Computer Science")
        .unwrap();
    assert_eq!(cs.students, 4);
    assert_eq!(cs.courses, 3);
}

/// Department analytics aggregate known departments and synthesize the rest
#[tokio::test(start_paused = true)]
async fn admin_department_analytics() {
    let api = api();

    let analytics = api.admin().get_department_analytics("Computer Science").await.unwrap();
    assert_eq!(analytics.overview.total_faculty, 1);
    assert_eq!(analytics.overview.total_students, 4);
    assert_eq!(analytics.overview.total_courses, 3);
    assert!((75..=95).contains(&analytics.overview.avg_attendance));
    assert_eq!(analytics.method_preferences.len(), 3);

    // Unknown departments aggregate to zero rather than failing
    let unknown = api.admin().get_department_analytics("Alchemy").await.unwrap();
    assert_eq!(unknown.overview.total_students, 0);
    assert_eq!(unknown.overview.total_courses, 0);
}
