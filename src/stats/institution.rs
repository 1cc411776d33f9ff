//! Institution-wide rollups for faculty and admin dashboards
//!
//! Counts with ground truth in the entity store (role totals, per-department
//! rosters, biometric registration) are aggregated from the store. Figures
//! with no ground truth in the mock domain (average attendance rates, usage
//! trends) are synthesized demo data; every synthetic draw flows through the
//! caller-provided random source so seeded runs stay reproducible.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::store::{Course, EntityStore};
use crate::types::Role;

/// Demo system-activity constants surfaced on the admin dashboard
mod activity {
    /// Reported system uptime percentage
    pub const SYSTEM_UPTIME: f64 = 99.8;
    /// Logins counted for the current day
    pub const DAILY_LOGINS: u32 = 145;
    /// Attendance marks counted for the current day
    pub const ATTENDANCE_TODAY: u32 = 320;
    /// Institution-wide average attendance shown to faculty
    pub const AVERAGE_ATTENDANCE: u8 = 82;
}

fn percentage_of(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        0
    } else {
        ((part as f64 / whole as f64) * 100.0).round() as u8
    }
}

/// Institution-wide headline figures for the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminOverview {
    /// Distinct users across roles
    pub total_users: usize,
    /// Faculty count
    pub total_faculty: usize,
    /// Student count
    pub total_students: usize,
    /// Courses in the catalog
    pub total_courses: usize,
    /// Known departments
    pub total_departments: usize,
    /// Percentage of students with registered face data
    pub biometric_registration: u8,
    /// Reported system uptime percentage
    pub system_uptime: f64,
    /// Active users today
    pub daily_active_users: u32,
    /// Attendance marks recorded today
    pub attendance_today: u32,
}

impl AdminOverview {
    /// Aggregate the overview from the entity store
    pub fn from_store(store: &EntityStore) -> Self {
        let total_students = store.role_count(Role::Student);
        Self {
            total_users: store.total_user_count(),
            total_faculty: store.role_count(Role::Faculty),
            total_students,
            total_courses: store.courses().len(),
            total_departments: store.departments().len(),
            biometric_registration: percentage_of(
                store.registered_student_count(),
                store.students().len(),
            ),
            system_uptime: activity::SYSTEM_UPTIME,
            daily_active_users: activity::DAILY_LOGINS,
            attendance_today: activity::ATTENDANCE_TODAY,
        }
    }
}

/// Per-department figures for the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentStats {
    /// Department name
    pub name: String,
    /// Faculty members affiliated with the department
    pub faculty: usize,
    /// Students affiliated with the department
    pub students: usize,
    /// Courses offered by the department
    pub courses: usize,
    /// Average attendance percentage (synthesized demo figure)
    pub avg_attendance: u8,
    /// Face registration percentage; real where the store has students,
    /// synthesized otherwise
    pub face_registration: u8,
}

/// Compute per-department stats across every known department
pub fn department_stats(store: &EntityStore, rng: &mut dyn RngCore) -> Vec<DepartmentStats> {
    store
        .departments()
        .iter()
        .map(|department| {
            let faculty = store
                .users()
                .iter()
                .filter(|u| {
                    u.role == Role::Faculty && u.department.as_deref() == Some(department.as_str())
                })
                .count();
            let students: Vec<_> = store
                .students()
                .iter()
                .filter(|s| &s.department == department)
                .collect();
            let courses = store
                .courses()
                .iter()
                .filter(|c| &c.department == department)
                .count();

            let face_registration = if students.is_empty() {
                rng.gen_range(70..=100)
            } else {
                percentage_of(
                    students.iter().filter(|s| s.face_data.is_registered).count(),
                    students.len(),
                )
            };

            DepartmentStats {
                name: department.clone(),
                faculty,
                students: students.len(),
                courses,
                avg_attendance: rng.gen_range(75..=95),
                face_registration,
            }
        })
        .collect()
}

/// System health snapshot for the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemHealth {
    /// Application server status label
    pub server_status: String,
    /// Database status label
    pub database_status: String,
    /// Representative API response time label
    pub api_response_time: String,
    /// Storage usage percentage
    pub storage_usage: u8,
    /// Relative time of the last backup
    pub last_backup: String,
}

impl SystemHealth {
    /// The nominal all-healthy snapshot the mock always reports
    pub fn nominal() -> Self {
        Self {
            server_status: "Healthy".to_string(),
            database_status: "Healthy".to_string(),
            api_response_time: "120ms".to_string(),
            storage_usage: 68,
            last_backup: "2 hours ago".to_string(),
        }
    }
}

/// Usage share and trend for one capture method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodUsage {
    /// Share of attendance marks using this method, in percent
    pub usage: u8,
    /// Period-over-period trend label, e.g. "+5%"
    pub trend: String,
}

/// Capture-method usage analytics for the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodAnalytics {
    /// QR code usage
    pub qr_code: MethodUsage,
    /// Face recognition usage
    pub face_recognition: MethodUsage,
    /// Manual entry usage
    pub manual: MethodUsage,
}

impl MethodAnalytics {
    /// The demo usage split
    pub fn demo() -> Self {
        Self {
            qr_code: MethodUsage { usage: 52, trend: "+5%".to_string() },
            face_recognition: MethodUsage { usage: 38, trend: "+12%".to_string() },
            manual: MethodUsage { usage: 10, trend: "-3%".to_string() },
        }
    }
}

/// One day in a weekly attendance trend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyTrend {
    /// Short day label
    pub day: String,
    /// Synthesized attendance percentage for the day
    pub attendance: f64,
}

/// Synthesize a seven-day attendance trend
pub fn weekly_trends(rng: &mut dyn RngCore) -> Vec<WeeklyTrend> {
    ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        .iter()
        .map(|day| WeeklyTrend {
            day: day.to_string(),
            attendance: 70.0 + rng.gen_range(0.0..25.0),
        })
        .collect()
}

/// One month in a yearly attendance trend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTrend {
    /// Month number, 1-12
    pub month: u32,
    /// Synthesized attendance percentage for the month
    pub attendance: f64,
}

/// Synthesize a twelve-month attendance trend
pub fn monthly_trends(rng: &mut dyn RngCore) -> Vec<MonthlyTrend> {
    (1..=12)
        .map(|month| MonthlyTrend { month, attendance: 75.0 + rng.gen_range(0.0..20.0) })
        .collect()
}

/// Headline figures for the faculty dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyOverview {
    /// Courses taught by the faculty member
    pub total_courses: usize,
    /// Students on the roster
    pub total_students: usize,
    /// Students with registered face data
    pub students_with_face: usize,
    /// Percentage of students with registered face data
    pub face_registration_rate: u8,
    /// Classes conducted across the faculty member's courses
    pub total_classes: u32,
    /// Institution average attendance percentage
    pub average_attendance: u8,
}

impl FacultyOverview {
    /// Aggregate the overview for one faculty member's courses
    pub fn compute(store: &EntityStore, faculty_courses: &[&Course]) -> Self {
        let total_students = store.students().len();
        let students_with_face = store.registered_student_count();
        Self {
            total_courses: faculty_courses.len(),
            total_students,
            students_with_face,
            face_registration_rate: percentage_of(students_with_face, total_students),
            total_classes: faculty_courses.iter().map(|c| c.conducted_classes).sum(),
            average_attendance: activity::AVERAGE_ATTENDANCE,
        }
    }
}

/// Per-course teaching statistics for the faculty dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseTeachingStats {
    /// The course
    #[serde(flatten)]
    pub course: Course,
    /// Students enrolled in the course
    pub enrolled_students: usize,
    /// Average attendance percentage (synthesized demo figure)
    pub average_attendance: u8,
    /// Enrolled students with registered face data
    pub students_with_face: usize,
    /// Sessions conducted so far
    pub recent_sessions: u32,
}

impl CourseTeachingStats {
    /// Compute teaching stats for one course
    pub fn compute(store: &EntityStore, course: Course, rng: &mut dyn RngCore) -> Self {
        let enrolled = store.students_in_course(&course.id);
        let students_with_face =
            enrolled.iter().filter(|s| s.face_data.is_registered).count();
        let recent_sessions = course.conducted_classes;

        Self {
            enrolled_students: enrolled.len(),
            average_attendance: rng.gen_range(75..=95),
            students_with_face,
            recent_sessions,
            course,
        }
    }
}
