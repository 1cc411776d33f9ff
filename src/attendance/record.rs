//! Attendance records and their capture metadata

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AttendanceMethod, AttendanceStatus, CourseId, RecordId, SessionId, UserId};

/// Method-specific context attached to an attendance record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordMetadata {
    /// Recognition confidence; 100 for non-biometric methods
    pub confidence: f64,
    /// Descriptor of the capturing device
    pub device_info: String,
    /// Where the observation was captured, typically the course room
    pub location: String,
    /// Free-text note, used for manual entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Number of verification attempts for biometric captures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_attempts: Option<u32>,
}

impl RecordMetadata {
    /// Metadata for a QR code capture
    pub fn qr(location: impl Into<String>) -> Self {
        Self {
            confidence: 100.0,
            device_info: AttendanceMethod::Qr.device_info().to_string(),
            location: location.into(),
            notes: None,
            verification_attempts: None,
        }
    }

    /// Metadata for a face recognition capture with the measured confidence
    pub fn facial(location: impl Into<String>, confidence: f64) -> Self {
        Self {
            confidence,
            device_info: AttendanceMethod::FacialRecognition.device_info().to_string(),
            location: location.into(),
            notes: None,
            verification_attempts: Some(1),
        }
    }

    /// Metadata for a manual portal entry
    pub fn manual(location: impl Into<String>, notes: Option<String>) -> Self {
        Self {
            confidence: 100.0,
            device_info: AttendanceMethod::Manual.device_info().to_string(),
            location: location.into(),
            notes,
            verification_attempts: None,
        }
    }

    /// Build metadata for the given method with a caller-supplied confidence
    pub fn for_method(
        method: AttendanceMethod,
        location: impl Into<String>,
        confidence: f64,
    ) -> Self {
        match method {
            AttendanceMethod::Qr => Self::qr(location),
            AttendanceMethod::FacialRecognition => Self::facial(location, confidence),
            AttendanceMethod::Manual => Self::manual(location, None),
        }
    }
}

/// One observation of a student's presence for a specific course session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique record identifier
    pub id: RecordId,
    /// Student the observation is about
    pub student_id: UserId,
    /// Course the session belongs to
    pub course_id: CourseId,
    /// Course display name, denormalized for dashboard consumers
    pub course_name: String,
    /// Session the observation was captured in
    pub session_id: SessionId,
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Presence status
    pub status: AttendanceStatus,
    /// When the status was recorded; `None` iff the student was absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marked_at: Option<DateTime<Utc>>,
    /// User who recorded the status; the student themself for self-service methods
    pub marked_by: UserId,
    /// Capture modality
    pub method: AttendanceMethod,
    /// Method-specific context
    pub metadata: RecordMetadata,
}

impl AttendanceRecord {
    /// Whether the student was present on time
    pub fn is_present(&self) -> bool {
        matches!(self.status, AttendanceStatus::Present)
    }

    /// Whether the student arrived late
    pub fn is_late(&self) -> bool {
        matches!(self.status, AttendanceStatus::Late)
    }

    /// Whether the student was absent
    pub fn is_absent(&self) -> bool {
        matches!(self.status, AttendanceStatus::Absent)
    }

    /// Check the marking invariant: `marked_at` is present exactly when the
    /// status is not absent
    pub fn is_consistent(&self) -> bool {
        self.marked_at.is_some() == self.status.is_marked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn present_record() -> AttendanceRecord {
        AttendanceRecord {
            id: RecordId::new("att_001"),
            student_id: UserId::new("student_001"),
            course_id: CourseId::new("CS301"),
            course_name: "Data Structures and Algorithms".to_string(),
            session_id: SessionId::new("session_001"),
            date: NaiveDate::from_ymd_opt(2024, 9, 16).unwrap(),
            status: AttendanceStatus::Present,
            marked_at: Some(Utc.with_ymd_and_hms(2024, 9, 16, 9, 5, 0).unwrap()),
            marked_by: UserId::new("faculty_001"),
            method: AttendanceMethod::Qr,
            metadata: RecordMetadata::qr("CS-101"),
        }
    }

    #[test]
    fn test_status_predicates() {
        let record = present_record();
        assert!(record.is_present());
        assert!(!record.is_late());
        assert!(!record.is_absent());
    }

    #[test]
    fn test_marking_invariant() {
        let record = present_record();
        assert!(record.is_consistent());

        let absent = AttendanceRecord {
            status: AttendanceStatus::Absent,
            marked_at: None,
            ..present_record()
        };
        assert!(absent.is_consistent());

        // Absent with a timestamp violates the invariant
        let broken = AttendanceRecord { status: AttendanceStatus::Absent, ..present_record() };
        assert!(!broken.is_consistent());
    }

    #[test]
    fn test_metadata_constructors() {
        let qr = RecordMetadata::qr("CS-101");
        assert_eq!(qr.confidence, 100.0);
        assert_eq!(qr.device_info, "Mobile App");
        assert!(qr.verification_attempts.is_none());

        let facial = RecordMetadata::facial("CS-102", 94.8);
        assert_eq!(facial.confidence, 94.8);
        assert_eq!(facial.device_info, "Web Camera");
        assert_eq!(facial.verification_attempts, Some(1));

        let manual = RecordMetadata::manual("CS-101", Some("Arrived 15 minutes late".to_string()));
        assert_eq!(manual.confidence, 100.0);
        assert_eq!(manual.device_info, "Faculty Portal");
        assert_eq!(manual.notes.as_deref(), Some("Arrived 15 minutes late"));
    }

    #[test]
    fn test_for_method_normalizes_confidence() {
        // Non-biometric methods pin confidence at 100 regardless of input
        let qr = RecordMetadata::for_method(AttendanceMethod::Qr, "CS-101", 42.0);
        assert_eq!(qr.confidence, 100.0);

        let facial = RecordMetadata::for_method(AttendanceMethod::FacialRecognition, "CS-101", 91.5);
        assert_eq!(facial.confidence, 91.5);
    }

    #[test]
    fn test_record_serialization_omits_null_marked_at() {
        let absent = AttendanceRecord {
            status: AttendanceStatus::Absent,
            marked_at: None,
            ..present_record()
        };
        let json = serde_json::to_string(&absent).unwrap();
        assert!(!json.contains("marked_at"));
        assert!(json.contains("\"status\":\"absent\""));
    }
}
