//! Faculty-scoped operations

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::api::request::{RequestSimulator, RequestWeight};
use crate::attendance::{AttendanceRecord, HistoryGenerator, RecordMetadata};
use crate::stats::{
    weekly_trends, CourseTeachingStats, FacultyOverview, StudentCourseStanding, WeeklyTrend,
};
use crate::store::{Course, EntityStore, User};
use crate::types::{
    AttendanceMethod, AttendanceStatus, CourseId, QrCodeId, RecordId, ServiceConfig, SessionId,
    UserId,
};

/// Kinds of events surfaced in the faculty activity feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacultyActivityKind {
    /// A QR code was generated for a session
    QrGenerated,
    /// Attendance was recorded for a session
    AttendanceMarked,
    /// A student registered face data
    StudentRegistered,
}

/// One entry in the faculty activity feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyActivityEntry {
    /// Feed position
    pub id: u32,
    /// What happened
    pub kind: FacultyActivityKind,
    /// Course the event relates to
    pub course: CourseId,
    /// Relative time label
    pub time: String,
    /// Human-readable description
    pub description: String,
}

/// Faculty dashboard payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyDashboard {
    /// The faculty member
    pub faculty: User,
    /// Headline teaching figures
    pub overview: FacultyOverview,
    /// Per-course teaching statistics
    pub courses: Vec<CourseTeachingStats>,
    /// Recent activity feed
    pub recent_activity: Vec<FacultyActivityEntry>,
}

/// Roster payload for one course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRoster {
    /// The course
    pub course: Course,
    /// Enrolled students with their standing in the course
    pub students: Vec<StudentCourseStanding>,
}

/// Parameters for generating a session QR code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrSessionRequest {
    /// Course the session belongs to
    pub course_id: CourseId,
    /// Course display name
    pub course_name: String,
    /// Faculty member running the session
    pub faculty_id: UserId,
    /// Where the session takes place
    pub location: String,
}

/// A generated attendance QR code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrCodeDescriptor {
    /// QR code identifier
    pub id: QrCodeId,
    /// Scannable code carrying the `ATTEND_` marker prefix
    pub code: String,
    /// Course the code marks attendance for
    pub course_id: CourseId,
    /// Course display name
    pub course_name: String,
    /// Session the code belongs to
    pub session_id: SessionId,
    /// Faculty member who generated the code
    pub faculty_id: UserId,
    /// Where the session takes place
    pub location: String,
    /// When the code expires
    pub expires_at: DateTime<Utc>,
    /// When the code was created
    pub created_at: DateTime<Utc>,
    /// Whether the code is currently usable
    pub is_active: bool,
}

/// One student's status in a manual marking batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualStudentMark {
    /// Student being marked
    pub student_id: UserId,
    /// Status to record
    pub status: AttendanceStatus,
    /// Optional note, e.g. a lateness reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Parameters for a manual marking batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualMarkRequest {
    /// Course the session belongs to
    pub course_id: CourseId,
    /// Course display name
    pub course_name: String,
    /// Session being marked
    pub session_id: SessionId,
    /// Session date
    pub date: NaiveDate,
    /// Faculty member recording the batch
    pub faculty_id: UserId,
    /// Where the session took place
    pub location: String,
    /// Per-student statuses
    pub students: Vec<ManualStudentMark>,
}

/// Payload for a completed manual marking batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkBatchResponse {
    /// Always true
    pub success: bool,
    /// The newly created records, one per student
    pub records: Vec<AttendanceRecord>,
    /// User-facing confirmation message
    pub message: String,
}

/// Headline analytics figures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsOverview {
    /// Sessions held in the period
    pub total_sessions: u32,
    /// Average attendance percentage
    pub average_attendance: u8,
    /// QR scans in the period
    pub qr_scans: u32,
    /// Face recognitions in the period
    pub face_recognitions: u32,
    /// Manual entries in the period
    pub manual_entries: u32,
}

/// Usage of one capture method within analytics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodBreakdown {
    /// Method display label
    pub method: String,
    /// Marks captured with this method
    pub count: u32,
    /// Share of all marks, in percent
    pub percentage: u8,
}

/// Attendance performance of one course within analytics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoursePerformance {
    /// The course
    pub course_id: CourseId,
    /// Course display name
    pub course_name: String,
    /// Synthesized attendance rate
    pub attendance_rate: f64,
    /// Students enrolled
    pub students_enrolled: usize,
    /// Sessions completed so far
    pub sessions_completed: u32,
}

/// Faculty analytics payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyAnalytics {
    /// Headline figures
    pub overview: AnalyticsOverview,
    /// Per-method usage split
    pub method_breakdown: Vec<MethodBreakdown>,
    /// Per-course performance
    pub course_performance: Vec<CoursePerformance>,
    /// Seven-day attendance trend
    pub weekly_trends: Vec<WeeklyTrend>,
}

/// Parameters for generating a course report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Report type label, e.g. "attendance_summary"
    pub report_type: String,
    /// Course the report covers, if scoped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<CourseId>,
    /// Date range label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
}

/// Summary block of a generated report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Classes covered by the report
    pub total_classes: u32,
    /// Average attendance percentage
    pub average_attendance: u8,
    /// Students tracked
    pub students_tracked: u32,
    /// Capture methods observed
    pub methods_used: Vec<String>,
}

/// Per-method counts within a generated report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMethodCounts {
    /// Marks captured with this method
    pub count: u32,
    /// Share of all marks, in percent
    pub percentage: u8,
}

/// A generated attendance report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceReport {
    /// Report identifier
    pub id: String,
    /// Report type label
    pub report_type: String,
    /// Course the report covers, if scoped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<CourseId>,
    /// Date range label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Summary figures
    pub summary: ReportSummary,
    /// QR capture counts
    pub qr: ReportMethodCounts,
    /// Face recognition capture counts
    pub face: ReportMethodCounts,
    /// Manual capture counts
    pub manual: ReportMethodCounts,
    /// Where the rendered report can be fetched
    pub download_url: String,
}

/// Faculty capability group
#[derive(Debug, Clone, Copy)]
pub struct FacultyApi<'a> {
    pub(crate) store: &'a EntityStore,
    pub(crate) config: &'a ServiceConfig,
    pub(crate) simulator: &'a RequestSimulator,
}

impl FacultyApi<'_> {
    /// Assemble the faculty dashboard
    pub async fn get_dashboard(&self, faculty_id: &UserId) -> ApiResult<FacultyDashboard> {
        let outcome = self.build_dashboard(faculty_id);
        self.simulator.run(RequestWeight::Dashboard, outcome).await
    }

    fn build_dashboard(&self, faculty_id: &UserId) -> ApiResult<FacultyDashboard> {
        let faculty = self
            .store
            .user(faculty_id)
            .cloned()
            .ok_or_else(|| ApiError::UnknownUser(faculty_id.clone()))?;

        let faculty_courses = self.store.courses_by_faculty(faculty_id);
        let overview = FacultyOverview::compute(self.store, &faculty_courses);

        let mut rng = self.config.rng();
        let courses = faculty_courses
            .into_iter()
            .map(|course| CourseTeachingStats::compute(self.store, course.clone(), &mut *rng))
            .collect();

        Ok(FacultyDashboard {
            faculty,
            overview,
            courses,
            recent_activity: demo_activity_feed(),
        })
    }

    /// Fetch the roster of a course with each student's standing
    pub async fn get_course_students(&self, course_id: &CourseId) -> ApiResult<CourseRoster> {
        let outcome = self.build_roster(course_id);
        self.simulator.run(RequestWeight::Query, outcome).await
    }

    fn build_roster(&self, course_id: &CourseId) -> ApiResult<CourseRoster> {
        let course = self
            .store
            .course(course_id)
            .cloned()
            .ok_or_else(|| ApiError::UnknownCourse(course_id.clone()))?;

        let students = self
            .store
            .students_in_course(course_id)
            .into_iter()
            .map(|student| {
                let records = HistoryGenerator::from_config(self.config)
                    .generate_now(self.store, &student.id);
                StudentCourseStanding::compute(
                    student.clone(),
                    course_id,
                    &records,
                    self.config.recent_course_window,
                )
            })
            .collect();

        Ok(CourseRoster { course, students })
    }

    /// Generate a session QR code with the configured expiry
    pub async fn generate_qr_code(&self, request: &QrSessionRequest) -> ApiResult<QrCodeDescriptor> {
        let created_at = Utc::now();
        let descriptor = QrCodeDescriptor {
            id: QrCodeId::generate(),
            code: format!("ATTEND_{}_{}", request.course_id, Uuid::new_v4().simple()),
            course_id: request.course_id.clone(),
            course_name: request.course_name.clone(),
            session_id: SessionId::generate(),
            faculty_id: request.faculty_id.clone(),
            location: request.location.clone(),
            expires_at: created_at + Duration::minutes(self.config.qr_expiry_minutes),
            created_at,
            is_active: true,
        };
        self.simulator.run(RequestWeight::Auth, Ok(descriptor)).await
    }

    /// Record a manual marking batch, one record per student
    pub async fn mark_attendance(&self, request: &ManualMarkRequest) -> ApiResult<MarkBatchResponse> {
        let records: Vec<AttendanceRecord> = request
            .students
            .iter()
            .map(|mark| AttendanceRecord {
                id: RecordId::generate(),
                student_id: mark.student_id.clone(),
                course_id: request.course_id.clone(),
                course_name: request.course_name.clone(),
                session_id: request.session_id.clone(),
                date: request.date,
                status: mark.status,
                marked_at: mark.status.is_marked().then(Utc::now),
                marked_by: request.faculty_id.clone(),
                method: AttendanceMethod::Manual,
                metadata: RecordMetadata::manual(request.location.clone(), mark.notes.clone()),
            })
            .collect();

        let message = format!("Attendance marked for {} students", records.len());
        self.simulator
            .run(RequestWeight::Marking, Ok(MarkBatchResponse { success: true, records, message }))
            .await
    }

    /// Assemble attendance analytics for a faculty member's courses
    pub async fn get_analytics(&self, faculty_id: &UserId) -> ApiResult<FacultyAnalytics> {
        let faculty_courses = self.store.courses_by_faculty(faculty_id);
        let mut rng = self.config.rng();

        let course_performance = faculty_courses
            .iter()
            .map(|course| CoursePerformance {
                course_id: course.id.clone(),
                course_name: course.name.clone(),
                attendance_rate: 75.0 + rng.gen_range(0.0..20.0),
                students_enrolled: self.store.students_in_course(&course.id).len(),
                sessions_completed: course.conducted_classes,
            })
            .collect();

        let analytics = FacultyAnalytics {
            overview: AnalyticsOverview {
                total_sessions: 120,
                average_attendance: 82,
                qr_scans: 450,
                face_recognitions: 380,
                manual_entries: 45,
            },
            method_breakdown: vec![
                MethodBreakdown { method: "QR Code".to_string(), count: 450, percentage: 52 },
                MethodBreakdown {
                    method: "Face Recognition".to_string(),
                    count: 380,
                    percentage: 43,
                },
                MethodBreakdown { method: "Manual".to_string(), count: 45, percentage: 5 },
            ],
            course_performance,
            weekly_trends: weekly_trends(&mut *rng),
        };

        self.simulator.run(RequestWeight::Analytics, Ok(analytics)).await
    }

    /// Generate an attendance report for a course or date range
    pub async fn generate_report(&self, request: &ReportRequest) -> ApiResult<AttendanceReport> {
        let report = AttendanceReport {
            id: format!("report_{}", Uuid::new_v4().simple()),
            report_type: request.report_type.clone(),
            course_id: request.course_id.clone(),
            date_range: request.date_range.clone(),
            generated_at: Utc::now(),
            summary: ReportSummary {
                total_classes: 32,
                average_attendance: 84,
                students_tracked: 25,
                methods_used: vec![
                    "QR Code".to_string(),
                    "Face Recognition".to_string(),
                    "Manual".to_string(),
                ],
            },
            qr: ReportMethodCounts { count: 156, percentage: 55 },
            face: ReportMethodCounts { count: 98, percentage: 35 },
            manual: ReportMethodCounts { count: 28, percentage: 10 },
            download_url: format!("/api/reports/download/{}", Uuid::new_v4().simple()),
        };
        self.simulator.run(RequestWeight::Heavy, Ok(report)).await
    }
}

/// The demo activity feed shown on the faculty dashboard
fn demo_activity_feed() -> Vec<FacultyActivityEntry> {
    vec![
        FacultyActivityEntry {
            id: 1,
            kind: FacultyActivityKind::QrGenerated,
            course: CourseId::new("CS301"),
            time: "2 hours ago".to_string(),
            description: "QR code generated for Data Structures class".to_string(),
        },
        FacultyActivityEntry {
            id: 2,
            kind: FacultyActivityKind::AttendanceMarked,
            course: CourseId::new("CS302"),
            time: "1 day ago".to_string(),
            description: "28 students marked present via face recognition".to_string(),
        },
        FacultyActivityEntry {
            id: 3,
            kind: FacultyActivityKind::StudentRegistered,
            course: CourseId::new("CS301"),
            time: "2 days ago".to_string(),
            description: "New student registered face data".to_string(),
        },
    ]
}
