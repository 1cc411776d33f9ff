//! Aggregation over attendance records
//!
//! All summary statistics are derived from record sets without mutating
//! them. Late attendances count as half weight toward the attendance
//! percentage; this is institutional policy, not an accident of rounding.

use serde::{Deserialize, Serialize};

use crate::attendance::AttendanceRecord;
use crate::store::{Course, StudentProfile};
use crate::types::CourseId;

/// Attendance percentage over raw counts
///
/// `round(((present + 0.5 * late) / total) * 100)`, defined as 0 for an
/// empty record set.
pub fn attendance_percentage(present: usize, late: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (((present as f64 + late as f64 * 0.5) / total as f64) * 100.0).round() as u8
}

/// Raw status counts over a record set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    /// Records with status present
    pub present: usize,
    /// Records with status late
    pub late: usize,
    /// Records with status absent
    pub absent: usize,
}

impl StatusCounts {
    /// Tally statuses across a record set
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        let mut counts = Self::default();
        for record in records {
            if record.is_present() {
                counts.present += 1;
            } else if record.is_late() {
                counts.late += 1;
            } else {
                counts.absent += 1;
            }
        }
        counts
    }

    /// Total number of records tallied
    pub fn total(&self) -> usize {
        self.present + self.late + self.absent
    }

    /// Weighted attendance percentage for these counts
    pub fn percentage(&self) -> u8 {
        attendance_percentage(self.present, self.late, self.total())
    }
}

/// Wire-format attendance tally with the derived percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceTally {
    /// Weighted attendance percentage
    pub percentage: u8,
    /// Present count
    pub present: usize,
    /// Late count
    pub late: usize,
    /// Absent count
    pub absent: usize,
    /// Total records
    pub total: usize,
}

impl From<StatusCounts> for AttendanceTally {
    fn from(counts: StatusCounts) -> Self {
        Self {
            percentage: counts.percentage(),
            present: counts.present,
            late: counts.late,
            absent: counts.absent,
            total: counts.total(),
        }
    }
}

/// Headline attendance figures for a student dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceOverview {
    /// Number of courses the student is enrolled in
    pub total_courses: usize,
    /// Weighted attendance percentage across all records
    pub overall_attendance: u8,
    /// Present count across all records
    pub present_classes: usize,
    /// Late count across all records
    pub late_classes: usize,
    /// Absent count across all records
    pub absent_classes: usize,
    /// Total records considered
    pub total_classes: usize,
}

impl AttendanceOverview {
    /// Compute the overview for a student with `total_courses` enrollments
    pub fn compute(total_courses: usize, records: &[AttendanceRecord]) -> Self {
        let counts = StatusCounts::from_records(records);
        Self {
            total_courses,
            overall_attendance: counts.percentage(),
            present_classes: counts.present,
            late_classes: counts.late,
            absent_classes: counts.absent,
            total_classes: counts.total(),
        }
    }
}

/// Per-course attendance breakdown for a student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseAttendance {
    /// The course the breakdown is about
    #[serde(flatten)]
    pub course: Course,
    /// Weighted attendance percentage in this course
    pub attendance_percentage: u8,
    /// Present count in this course
    pub present_classes: usize,
    /// Late count in this course
    pub late_classes: usize,
    /// Absent count in this course
    pub absent_classes: usize,
    /// Records for this course
    pub total_attended: usize,
}

impl CourseAttendance {
    /// Compute the breakdown for one course from a student's full record set
    pub fn compute(course: Course, records: &[AttendanceRecord]) -> Self {
        let course_records: Vec<AttendanceRecord> =
            records.iter().filter(|r| r.course_id == course.id).cloned().collect();
        let counts = StatusCounts::from_records(&course_records);

        Self {
            course,
            attendance_percentage: counts.percentage(),
            present_classes: counts.present,
            late_classes: counts.late,
            absent_classes: counts.absent,
            total_attended: counts.total(),
        }
    }
}

/// A student's standing within one course, for faculty roster views
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentCourseStanding {
    /// The student
    #[serde(flatten)]
    pub student: StudentProfile,
    /// Tally of the student's records within the course
    pub attendance: AttendanceTally,
    /// Most recent records within the course, date-descending
    pub recent_attendance: Vec<AttendanceRecord>,
    /// Most recent record within the course, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_attendance: Option<AttendanceRecord>,
}

impl StudentCourseStanding {
    /// Compute the standing of a student within one course, keeping the
    /// `window` most recent records
    pub fn compute(
        student: StudentProfile,
        course_id: &CourseId,
        records: &[AttendanceRecord],
        window: usize,
    ) -> Self {
        let course_records: Vec<AttendanceRecord> =
            records.iter().filter(|r| &r.course_id == course_id).cloned().collect();
        let counts = StatusCounts::from_records(&course_records);
        let recent_attendance = recent_records(&course_records, window);
        let last_attendance = recent_attendance.first().cloned();

        Self { student, attendance: counts.into(), recent_attendance, last_attendance }
    }
}

/// Sort records by date descending and truncate to the view window
///
/// The sort is stable, so records sharing a date keep their input order.
pub fn recent_records(records: &[AttendanceRecord], window: usize) -> Vec<AttendanceRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(window);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attendance::RecordMetadata;
    use crate::types::{AttendanceMethod, AttendanceStatus, RecordId, SessionId, UserId};
    use chrono::NaiveDate;

    fn record(id: &str, course: &str, day: u32, status: AttendanceStatus) -> AttendanceRecord {
        let date = NaiveDate::from_ymd_opt(2024, 9, day).unwrap();
        AttendanceRecord {
            id: RecordId::new(id),
            student_id: UserId::new("student_001"),
            course_id: CourseId::new(course),
            course_name: course.to_string(),
            session_id: SessionId::new(format!("session_{}", id)),
            date,
            status,
            marked_at: status
                .is_marked()
                .then(|| date.and_hms_opt(9, 0, 0).unwrap().and_utc()),
            marked_by: UserId::new("student_001"),
            method: AttendanceMethod::Qr,
            metadata: RecordMetadata::qr("CS-101"),
        }
    }

    #[test]
    fn test_percentage_formula() {
        // 8 present, 2 late, 10 total -> (8 + 1) / 10 = 90
        assert_eq!(attendance_percentage(8, 2, 10), 90);
        // 1 present, 1 late, 3 total -> 1.5 / 3 = 50
        assert_eq!(attendance_percentage(1, 1, 3), 50);
        // rounding: 2 present, 1 late, 3 total -> 2.5 / 3 = 83.33 -> 83
        assert_eq!(attendance_percentage(2, 1, 3), 83);
        // rounding up: 5 present, 1 late, 7 total -> 5.5 / 7 = 78.57 -> 79
        assert_eq!(attendance_percentage(5, 1, 7), 79);
        // all present
        assert_eq!(attendance_percentage(4, 0, 4), 100);
    }

    #[test]
    fn test_percentage_of_empty_set_is_zero() {
        assert_eq!(attendance_percentage(0, 0, 0), 0);
        assert_eq!(StatusCounts::default().percentage(), 0);
    }

    #[test]
    fn test_status_counts() {
        let records = vec![
            record("a", "CS301", 2, AttendanceStatus::Present),
            record("b", "CS301", 3, AttendanceStatus::Late),
            record("c", "CS301", 4, AttendanceStatus::Absent),
            record("d", "CS302", 5, AttendanceStatus::Present),
        ];
        let counts = StatusCounts::from_records(&records);

        assert_eq!(counts.present, 2);
        assert_eq!(counts.late, 1);
        assert_eq!(counts.absent, 1);
        assert_eq!(counts.total(), 4);
        // (2 + 0.5) / 4 = 62.5 -> 63
        assert_eq!(counts.percentage(), 63);
    }

    #[test]
    fn test_overview_computation() {
        let records = vec![
            record("a", "CS301", 2, AttendanceStatus::Present),
            record("b", "CS301", 3, AttendanceStatus::Late),
        ];
        let overview = AttendanceOverview::compute(4, &records);

        assert_eq!(overview.total_courses, 4);
        assert_eq!(overview.total_classes, 2);
        assert_eq!(overview.present_classes, 1);
        assert_eq!(overview.late_classes, 1);
        assert_eq!(overview.absent_classes, 0);
        // (1 + 0.5) / 2 = 75
        assert_eq!(overview.overall_attendance, 75);
    }

    #[test]
    fn test_course_breakdown_filters_by_course() {
        let store = crate::store::EntityStore::demo();
        let course = store.course(&CourseId::new("CS301")).unwrap().clone();

        let records = vec![
            record("a", "CS301", 2, AttendanceStatus::Present),
            record("b", "CS301", 3, AttendanceStatus::Absent),
            record("c", "CS302", 4, AttendanceStatus::Present),
        ];
        let breakdown = CourseAttendance::compute(course, &records);

        assert_eq!(breakdown.total_attended, 2);
        assert_eq!(breakdown.present_classes, 1);
        assert_eq!(breakdown.absent_classes, 1);
        assert_eq!(breakdown.attendance_percentage, 50);
    }

    #[test]
    fn test_unknown_course_aggregates_to_zero() {
        let store = crate::store::EntityStore::demo();
        let course = store.course(&CourseId::new("MA301")).unwrap().clone();

        let records = vec![record("a", "CS301", 2, AttendanceStatus::Present)];
        let breakdown = CourseAttendance::compute(course, &records);

        assert_eq!(breakdown.total_attended, 0);
        assert_eq!(breakdown.attendance_percentage, 0);
    }

    #[test]
    fn test_recent_records_sorted_and_truncated() {
        let records = vec![
            record("a", "CS301", 2, AttendanceStatus::Present),
            record("b", "CS301", 9, AttendanceStatus::Present),
            record("c", "CS301", 5, AttendanceStatus::Present),
            record("d", "CS301", 7, AttendanceStatus::Present),
        ];
        let recent = recent_records(&records, 3);

        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].id, RecordId::new("b"));
        assert_eq!(recent[1].id, RecordId::new("d"));
        assert_eq!(recent[2].id, RecordId::new("c"));
    }

    #[test]
    fn test_recent_records_stable_on_ties() {
        let records = vec![
            record("first", "CS301", 5, AttendanceStatus::Present),
            record("second", "CS302", 5, AttendanceStatus::Present),
        ];
        let recent = recent_records(&records, 2);

        assert_eq!(recent[0].id, RecordId::new("first"));
        assert_eq!(recent[1].id, RecordId::new("second"));
    }

    #[test]
    fn test_student_course_standing() {
        let store = crate::store::EntityStore::demo();
        let student = store.student(&UserId::new("student_001")).unwrap().clone();

        let records = vec![
            record("a", "CS301", 2, AttendanceStatus::Present),
            record("b", "CS301", 9, AttendanceStatus::Late),
            record("c", "CS302", 5, AttendanceStatus::Present),
        ];
        let standing =
            StudentCourseStanding::compute(student, &CourseId::new("CS301"), &records, 5);

        assert_eq!(standing.attendance.total, 2);
        assert_eq!(standing.attendance.present, 1);
        assert_eq!(standing.attendance.late, 1);
        // (1 + 0.5) / 2 = 75
        assert_eq!(standing.attendance.percentage, 75);
        assert_eq!(standing.recent_attendance.len(), 2);
        assert_eq!(standing.last_attendance.unwrap().id, RecordId::new("b"));
    }

    #[test]
    fn test_standing_window_truncates() {
        let store = crate::store::EntityStore::demo();
        let student = store.student(&UserId::new("student_001")).unwrap().clone();

        let records: Vec<AttendanceRecord> = (1..=9)
            .map(|day| record(&format!("r{}", day), "CS301", day, AttendanceStatus::Present))
            .collect();
        let standing =
            StudentCourseStanding::compute(student, &CourseId::new("CS301"), &records, 5);

        assert_eq!(standing.attendance.total, 9);
        assert_eq!(standing.recent_attendance.len(), 5);
        assert_eq!(standing.recent_attendance[0].id, RecordId::new("r9"));
        assert_eq!(standing.last_attendance.unwrap().id, RecordId::new("r9"));
    }

    #[test]
    fn test_standing_with_no_records() {
        let store = crate::store::EntityStore::demo();
        let student = store.student(&UserId::new("student_003")).unwrap().clone();

        let standing =
            StudentCourseStanding::compute(student, &CourseId::new("CS301"), &[], 5);
        assert_eq!(standing.attendance.total, 0);
        assert_eq!(standing.attendance.percentage, 0);
        assert!(standing.recent_attendance.is_empty());
        assert!(standing.last_attendance.is_none());
    }
}
