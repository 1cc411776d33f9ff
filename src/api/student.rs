//! Student-scoped operations
//!
//! Every operation re-derives its data from the read-only store with fresh
//! random draws, so concurrent invocations never share state.

use chrono::{NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api::error::{ApiError, ApiResult};
use crate::api::request::{RequestSimulator, RequestWeight};
use crate::attendance::{AttendanceRecord, HistoryGenerator, RecordMetadata};
use crate::stats::{recent_records, AttendanceOverview, CourseAttendance};
use crate::store::{EntityStore, FaceData, StudentProfile};
use crate::types::{
    AttendanceMethod, AttendanceStatus, CourseId, RecordId, ServiceConfig, SessionId, UserId,
};

/// Student dashboard payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentDashboard {
    /// The student the dashboard belongs to
    pub student: StudentProfile,
    /// Headline attendance figures
    pub overview: AttendanceOverview,
    /// Per-course breakdowns, in catalog order
    pub courses: Vec<CourseAttendance>,
    /// Most recent records, date-descending
    pub recent_attendance: Vec<AttendanceRecord>,
}

/// Filters for attendance history queries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryFilters {
    /// Restrict to one course
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<CourseId>,
    /// Earliest date to include
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Latest date to include
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Restrict to one status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AttendanceStatus>,
}

impl HistoryFilters {
    fn matches(&self, record: &AttendanceRecord) -> bool {
        if let Some(course_id) = &self.course_id {
            if &record.course_id != course_id {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if record.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if record.date > end {
                return false;
            }
        }
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        true
    }
}

/// Parameters for marking attendance by QR scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrMarkRequest {
    /// Scanned code; must carry the `ATTEND_` marker prefix
    pub code: String,
    /// Student marking themselves present
    pub student_id: UserId,
    /// Course the session belongs to
    pub course_id: CourseId,
    /// Course display name
    pub course_name: String,
    /// Session being marked
    pub session_id: SessionId,
    /// Where the scan happened
    pub location: String,
}

/// Parameters for marking attendance by face recognition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceMarkRequest {
    /// Student verifying themselves
    pub student_id: UserId,
    /// Course the session belongs to
    pub course_id: CourseId,
    /// Course display name
    pub course_name: String,
    /// Session being marked
    pub session_id: SessionId,
    /// Where the verification happened
    pub location: String,
}

/// Successful attendance-marking payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkResponse {
    /// Always true
    pub success: bool,
    /// The newly created record
    pub record: AttendanceRecord,
    /// User-facing confirmation message
    pub message: String,
}

/// Profile fields a student may submit for update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New department
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// New academic year label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

/// Echo payload for a profile update
///
/// The store is never mutated; the submitted data is returned as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdateReceipt {
    /// Student the update was submitted for
    pub id: UserId,
    /// The submitted fields
    #[serde(flatten)]
    pub update: ProfileUpdate,
    /// User-facing confirmation message
    pub message: String,
}

/// Payload for a completed face registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceRegistrationReceipt {
    /// The registered face data
    pub face_data: FaceData,
    /// User-facing confirmation message
    pub message: String,
}

/// Student capability group
#[derive(Debug, Clone, Copy)]
pub struct StudentApi<'a> {
    pub(crate) store: &'a EntityStore,
    pub(crate) config: &'a ServiceConfig,
    pub(crate) simulator: &'a RequestSimulator,
}

impl StudentApi<'_> {
    /// Fetch a student profile
    pub async fn get_profile(&self, student_id: &UserId) -> ApiResult<StudentProfile> {
        let outcome = self
            .store
            .student(student_id)
            .cloned()
            .ok_or_else(|| ApiError::UnknownUser(student_id.clone()));
        self.simulator.run(RequestWeight::Lookup, outcome).await
    }

    /// Assemble the student dashboard: profile, overview, per-course
    /// breakdowns, and the recent-attendance view
    pub async fn get_dashboard(&self, student_id: &UserId) -> ApiResult<StudentDashboard> {
        let outcome = self.build_dashboard(student_id);
        self.simulator.run(RequestWeight::Dashboard, outcome).await
    }

    fn build_dashboard(&self, student_id: &UserId) -> ApiResult<StudentDashboard> {
        let student = self
            .store
            .student(student_id)
            .cloned()
            .ok_or_else(|| ApiError::UnknownUser(student_id.clone()))?;

        let enrolled = self.store.enrolled_courses(&student);
        let records =
            HistoryGenerator::from_config(self.config).generate_now(self.store, student_id);

        let overview = AttendanceOverview::compute(enrolled.len(), &records);
        let courses = enrolled
            .into_iter()
            .map(|course| CourseAttendance::compute(course.clone(), &records))
            .collect();
        let recent_attendance = recent_records(&records, self.config.recent_dashboard_window);

        Ok(StudentDashboard { student, overview, courses, recent_attendance })
    }

    /// Fetch a student's attendance history, optionally filtered,
    /// date-descending
    pub async fn get_attendance_history(
        &self,
        student_id: &UserId,
        filters: &HistoryFilters,
    ) -> ApiResult<Vec<AttendanceRecord>> {
        let records =
            HistoryGenerator::from_config(self.config).generate_now(self.store, student_id);
        let filtered: Vec<AttendanceRecord> =
            records.into_iter().filter(|r| filters.matches(r)).collect();
        let sorted = recent_records(&filtered, filtered.len());

        self.simulator.run(RequestWeight::Query, Ok(sorted)).await
    }

    /// Mark attendance by QR scan
    ///
    /// The caller-supplied ids are trusted; an unknown enrollment pair is
    /// logged but not rejected.
    pub async fn mark_attendance_qr(&self, request: &QrMarkRequest) -> ApiResult<MarkResponse> {
        let outcome = self.validate_and_mark_qr(request);
        self.simulator.run(RequestWeight::Marking, outcome).await
    }

    fn validate_and_mark_qr(&self, request: &QrMarkRequest) -> ApiResult<MarkResponse> {
        if !request.code.starts_with("ATTEND_") {
            return Err(ApiError::InvalidQrCode);
        }

        self.warn_on_unknown_enrollment(&request.student_id, &request.course_id);

        let record = AttendanceRecord {
            id: RecordId::generate(),
            student_id: request.student_id.clone(),
            course_id: request.course_id.clone(),
            course_name: request.course_name.clone(),
            session_id: request.session_id.clone(),
            date: Utc::now().date_naive(),
            status: AttendanceStatus::Present,
            marked_at: Some(Utc::now()),
            marked_by: request.student_id.clone(),
            method: AttendanceMethod::Qr,
            metadata: RecordMetadata::qr(request.location.clone()),
        };

        Ok(MarkResponse {
            success: true,
            record,
            message: "Attendance marked successfully via QR code".to_string(),
        })
    }

    /// Mark attendance by face recognition
    ///
    /// The simulated match confidence must exceed the configured threshold;
    /// otherwise the request rejects with a biometric failure.
    pub async fn mark_attendance_face(&self, request: &FaceMarkRequest) -> ApiResult<MarkResponse> {
        let outcome = self.verify_and_mark_face(request);
        self.simulator.run(RequestWeight::Heavy, outcome).await
    }

    fn verify_and_mark_face(&self, request: &FaceMarkRequest) -> ApiResult<MarkResponse> {
        let confidence: f64 = self.config.rng().gen_range(90.0..100.0);

        if confidence <= self.config.face_confidence_threshold {
            return Err(ApiError::FaceRecognitionFailed { confidence });
        }

        self.warn_on_unknown_enrollment(&request.student_id, &request.course_id);

        let rounded = (confidence * 100.0).round() / 100.0;
        let record = AttendanceRecord {
            id: RecordId::generate(),
            student_id: request.student_id.clone(),
            course_id: request.course_id.clone(),
            course_name: request.course_name.clone(),
            session_id: request.session_id.clone(),
            date: Utc::now().date_naive(),
            status: AttendanceStatus::Present,
            marked_at: Some(Utc::now()),
            marked_by: request.student_id.clone(),
            method: AttendanceMethod::FacialRecognition,
            metadata: RecordMetadata::facial(request.location.clone(), rounded),
        };

        Ok(MarkResponse {
            success: true,
            record,
            message: format!(
                "Attendance marked successfully via face recognition ({:.1}% confidence)",
                confidence
            ),
        })
    }

    /// Echo a profile update without persisting it
    pub async fn update_profile(
        &self,
        student_id: &UserId,
        update: ProfileUpdate,
    ) -> ApiResult<ProfileUpdateReceipt> {
        let receipt = ProfileUpdateReceipt {
            id: student_id.clone(),
            update,
            message: "Profile updated successfully".to_string(),
        };
        self.simulator.run(RequestWeight::Auth, Ok(receipt)).await
    }

    /// Simulate a face-data registration
    pub async fn register_face(&self, student_id: &UserId) -> ApiResult<FaceRegistrationReceipt> {
        let outcome = self
            .store
            .student(student_id)
            .map(|_| FaceRegistrationReceipt {
                face_data: FaceData::registered(98.5, Utc::now()),
                message: "Face data registered successfully".to_string(),
            })
            .ok_or_else(|| ApiError::UnknownUser(student_id.clone()));
        self.simulator.run(RequestWeight::Heavy, outcome).await
    }

    fn warn_on_unknown_enrollment(&self, student_id: &UserId, course_id: &CourseId) {
        if !self.store.is_enrollment(student_id, course_id) {
            warn!(
                student = %student_id,
                course = %course_id,
                "marking attendance for an unverified enrollment"
            );
        }
    }
}
