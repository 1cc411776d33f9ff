//! Admin-scoped operations
//!
//! Dashboard figures with ground truth in the entity store are aggregated
//! from it; figures the mock domain has no data for are synthesized demo
//! values drawn from the configured random source. Entity management
//! operations echo their inputs without persisting anything.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::api::request::{RequestSimulator, RequestWeight};
use crate::stats::{
    department_stats, monthly_trends, weekly_trends, AdminOverview, DepartmentStats,
    MethodAnalytics, MonthlyTrend, SystemHealth, WeeklyTrend,
};
use crate::store::{Course, CourseSchedule, EntityStore, StudentProfile, User};
use crate::types::{CourseId, Role, ServiceConfig, UserId};

/// Kinds of events surfaced in the admin activity feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminActivityKind {
    /// A user account was created
    UserCreated,
    /// A system setting changed
    SystemUpdate,
    /// A scheduled backup finished
    BackupCompleted,
    /// A course was added to the catalog
    CourseCreated,
}

/// One entry in the admin activity feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminActivityEntry {
    /// Feed position
    pub id: u32,
    /// What happened
    pub kind: AdminActivityKind,
    /// Human-readable description
    pub description: String,
    /// Relative time label
    pub time: String,
    /// Department the event relates to
    pub department: String,
}

/// Admin dashboard payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminDashboard {
    /// The admin user
    pub admin: User,
    /// Institution-wide headline figures
    pub overview: AdminOverview,
    /// Per-department figures
    pub department_stats: Vec<DepartmentStats>,
    /// System health snapshot
    pub system_health: SystemHealth,
    /// Recent activity feed
    pub recent_activity: Vec<AdminActivityEntry>,
    /// Capture-method usage analytics
    pub method_analytics: MethodAnalytics,
}

/// Filters for the user management listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserFilters {
    /// Restrict to one role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Restrict to one department
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Case-insensitive substring match on name or email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl UserFilters {
    fn matches(&self, user: &User) -> bool {
        if let Some(role) = self.role {
            if user.role != role {
                return false;
            }
        }
        if let Some(department) = &self.department {
            if user.department.as_deref() != Some(department.as_str()) {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !user.name.to_lowercase().contains(&needle)
                && !user.email.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        true
    }
}

/// Account lifecycle status shown in the management listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// Account is usable
    Active,
    /// Account is disabled
    Inactive,
}

/// A user decorated with management metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagedUser {
    /// The underlying user
    #[serde(flatten)]
    pub user: User,
    /// Last login time, if the user has logged in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    /// Account lifecycle status
    pub account_status: AccountStatus,
    /// Account creation time
    pub created_at: DateTime<Utc>,
}

/// Parameters for creating a user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserRequest {
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Role to create the account with
    pub role: Role,
    /// Department affiliation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// Fields an admin may submit when updating a user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New login email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New department
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// New role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Echo payload for a user update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdateReceipt {
    /// User the update was submitted for
    pub id: UserId,
    /// The submitted fields
    #[serde(flatten)]
    pub update: UserUpdate,
    /// When the update was acknowledged
    pub updated_at: DateTime<Utc>,
    /// User-facing confirmation message
    pub message: String,
}

/// Acknowledgement payload for a user deletion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletionReceipt {
    /// Always true
    pub success: bool,
    /// User-facing confirmation message
    pub message: String,
}

/// A course decorated with management metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagedCourse {
    /// The underlying course
    #[serde(flatten)]
    pub course: Course,
    /// Students enrolled, from the store
    pub enrolled_count: usize,
    /// Completion rate percentage (synthesized demo figure)
    pub completion_rate: u8,
    /// Average attendance percentage (synthesized demo figure)
    pub avg_attendance: u8,
    /// Catalog entry creation time
    pub created_at: DateTime<Utc>,
}

/// Parameters for creating a course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCourseRequest {
    /// Full course name
    pub name: String,
    /// Course code
    pub code: String,
    /// Department offering the course
    pub department: String,
    /// Faculty member teaching the course
    pub faculty_id: UserId,
    /// Display name of the teaching faculty member
    pub faculty_name: String,
    /// Weekly meeting pattern
    pub schedule: CourseSchedule,
    /// Semester label
    pub semester: String,
    /// Classes planned for the semester
    pub total_classes: u32,
}

/// Attendance-related system settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendancePolicy {
    /// QR code validity in minutes
    pub qr_code_expiry: u32,
    /// Minutes after start before a mark counts as late
    pub late_threshold: u32,
    /// Minimum acceptable attendance percentage
    pub minimum_attendance: u8,
    /// Whether proxy attendance is permitted
    pub allow_proxy_attendance: bool,
}

/// Face recognition system settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceRecognitionPolicy {
    /// Minimum acceptance confidence percentage
    pub confidence_threshold: u8,
    /// Maximum verification attempts per session
    pub max_attempts: u8,
    /// Session timeout in minutes
    pub session_timeout: u32,
    /// Whether multiple faces per frame are allowed
    pub enable_multiface: bool,
    /// Whether liveness detection is required
    pub require_liveness: bool,
}

/// Notification system settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPolicy {
    /// Email notifications enabled
    pub email_notifications: bool,
    /// SMS notifications enabled
    pub sms_notifications: bool,
    /// Alerts on low attendance enabled
    pub low_attendance_alerts: bool,
    /// Maintenance alerts enabled
    pub system_maintenance_alerts: bool,
}

/// Security system settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityPolicy {
    /// Session timeout in minutes
    pub session_timeout: u32,
    /// Password expiry in days
    pub password_expiry: u32,
    /// Two-factor authentication enabled
    pub two_factor_auth: bool,
    /// Audit logging enabled
    pub audit_logging: bool,
}

/// Privacy system settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivacyPolicy {
    /// Data retention in days
    pub data_retention: u32,
    /// Face data encrypted at rest
    pub face_data_encryption: bool,
    /// Whether consent is required before biometric capture
    pub consent_required: bool,
    /// Whether users may export their data
    pub allow_data_export: bool,
}

/// Full system settings tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSettings {
    /// Attendance policy
    pub attendance: AttendancePolicy,
    /// Face recognition policy
    pub face_recognition: FaceRecognitionPolicy,
    /// Notification policy
    pub notifications: NotificationPolicy,
    /// Security policy
    pub security: SecurityPolicy,
    /// Privacy policy
    pub privacy: PrivacyPolicy,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            attendance: AttendancePolicy {
                qr_code_expiry: 30,
                late_threshold: 15,
                minimum_attendance: 75,
                allow_proxy_attendance: false,
            },
            face_recognition: FaceRecognitionPolicy {
                confidence_threshold: 85,
                max_attempts: 3,
                session_timeout: 120,
                enable_multiface: false,
                require_liveness: true,
            },
            notifications: NotificationPolicy {
                email_notifications: true,
                sms_notifications: false,
                low_attendance_alerts: true,
                system_maintenance_alerts: true,
            },
            security: SecurityPolicy {
                session_timeout: 480,
                password_expiry: 90,
                two_factor_auth: false,
                audit_logging: true,
            },
            privacy: PrivacyPolicy {
                data_retention: 365,
                face_data_encryption: true,
                consent_required: true,
                allow_data_export: true,
            },
        }
    }
}

/// Aggregate biometric figures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiometricStats {
    /// Students with registered face data
    pub total_registrations: usize,
    /// Students tracked
    pub total_users: usize,
    /// Average recognition accuracy
    pub average_accuracy: f64,
    /// Registrations in the recent period
    pub recent_registrations: u32,
    /// Failed verification attempts in the recent period
    pub failed_attempts: u32,
    /// Registration percentage per department (synthesized demo figures)
    pub registrations_by_department: BTreeMap<String, u8>,
}

/// One day in the registration history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationDay {
    /// Calendar date
    pub date: NaiveDate,
    /// Registrations that day
    pub registrations: u32,
    /// Average accuracy that day
    pub accuracy: f64,
}

/// A student's biometric management row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiometricUser {
    /// The student
    #[serde(flatten)]
    pub student: StudentProfile,
    /// When the face data was registered, if it was
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<DateTime<Utc>>,
    /// Last verification time
    pub last_verification: DateTime<Utc>,
    /// Verifications performed for this student
    pub verification_count: u32,
    /// Recognition accuracy at registration
    pub accuracy: f64,
}

/// Biometric management payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiometricReport {
    /// Aggregate figures
    pub stats: BiometricStats,
    /// Thirty days of registration history, oldest first
    pub history: Vec<RegistrationDay>,
    /// Per-student rows
    pub users: Vec<BiometricUser>,
}

/// Parameters for generating an institution-wide report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvancedReportRequest {
    /// Report type label
    pub report_type: String,
    /// Date range label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
}

/// Institution summary block of an advanced report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstitutionSummary {
    /// Sessions held in the period
    pub total_sessions: u32,
    /// Attendance marks recorded in the period
    pub total_attendance: u32,
    /// Average attendance percentage
    pub average_attendance: f64,
    /// QR share of marks, in percent
    pub qr: u8,
    /// Face recognition share of marks, in percent
    pub face: u8,
    /// Manual share of marks, in percent
    pub manual: u8,
}

/// Per-department block of an advanced report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentAnalysis {
    /// Department name
    pub department: String,
    /// Attendance percentage (synthesized demo figure)
    pub attendance: f64,
    /// Students affiliated with the department
    pub students: usize,
    /// Courses offered by the department
    pub courses: usize,
    /// Most used capture method
    pub preferred_method: String,
}

/// Trend block of an advanced report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportTrends {
    /// Seven-day attendance trend
    pub weekly: Vec<WeeklyTrend>,
    /// Twelve-month attendance trend
    pub monthly: Vec<MonthlyTrend>,
}

/// A generated institution-wide report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvancedReport {
    /// Report identifier
    pub id: String,
    /// Report type label
    pub report_type: String,
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Institution summary figures
    pub institution_summary: InstitutionSummary,
    /// Per-department analysis
    pub department_analysis: Vec<DepartmentAnalysis>,
    /// Attendance trends
    pub trends: ReportTrends,
    /// Where the rendered report can be fetched
    pub download_url: String,
}

/// One metric in the department performance block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceMetric {
    /// Current value
    pub current: f64,
    /// Target value
    pub target: f64,
    /// Period-over-period trend label
    pub trend: String,
}

/// Method preference row in department analytics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodPreference {
    /// Method display label
    pub method: String,
    /// Share of marks using this method, in percent
    pub usage: u8,
    /// Satisfaction score out of 5
    pub satisfaction: f64,
}

/// Headline block of department analytics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentOverview {
    /// Faculty members affiliated with the department
    pub total_faculty: usize,
    /// Students affiliated with the department
    pub total_students: usize,
    /// Courses offered by the department
    pub total_courses: usize,
    /// Average attendance percentage (synthesized demo figure)
    pub avg_attendance: u8,
}

/// Department analytics payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentAnalytics {
    /// Headline figures
    pub overview: DepartmentOverview,
    /// Per-method preference rows
    pub method_preferences: Vec<MethodPreference>,
    /// Attendance performance metric
    pub attendance: PerformanceMetric,
    /// Engagement performance metric
    pub engagement: PerformanceMetric,
    /// Completion performance metric
    pub completion: PerformanceMetric,
}

/// Admin capability group
#[derive(Debug, Clone, Copy)]
pub struct AdminApi<'a> {
    pub(crate) store: &'a EntityStore,
    pub(crate) config: &'a ServiceConfig,
    pub(crate) simulator: &'a RequestSimulator,
}

impl AdminApi<'_> {
    /// Assemble the admin dashboard
    pub async fn get_dashboard(&self, admin_id: &UserId) -> ApiResult<AdminDashboard> {
        let outcome = self.build_dashboard(admin_id);
        self.simulator.run(RequestWeight::Auth, outcome).await
    }

    fn build_dashboard(&self, admin_id: &UserId) -> ApiResult<AdminDashboard> {
        let admin = self
            .store
            .user(admin_id)
            .cloned()
            .ok_or_else(|| ApiError::UnknownUser(admin_id.clone()))?;

        let mut rng = self.config.rng();
        Ok(AdminDashboard {
            admin,
            overview: AdminOverview::from_store(self.store),
            department_stats: department_stats(self.store, &mut *rng),
            system_health: SystemHealth::nominal(),
            recent_activity: demo_activity_feed(),
            method_analytics: MethodAnalytics::demo(),
        })
    }

    /// List users for management, optionally filtered
    pub async fn get_users(&self, filters: &UserFilters) -> ApiResult<Vec<ManagedUser>> {
        let mut rng = self.config.rng();
        let now = Utc::now();

        // Students without a login entry still appear in the listing
        let extra_students: Vec<User> = self
            .store
            .students()
            .iter()
            .filter(|s| self.store.user(&s.id).is_none())
            .map(|s| s.as_user())
            .collect();

        let users = self
            .store
            .users()
            .iter()
            .cloned()
            .chain(extra_students)
            .filter(|user| filters.matches(user))
            .map(|user| ManagedUser {
                user,
                last_login: Some(now - Duration::seconds(rng.gen_range(0..7 * 24 * 3600))),
                account_status: if rng.gen::<f64>() > 0.1 {
                    AccountStatus::Active
                } else {
                    AccountStatus::Inactive
                },
                created_at: now - Duration::seconds(rng.gen_range(0..365 * 24 * 3600)),
            })
            .collect();

        self.simulator.run(RequestWeight::Dashboard, Ok(users)).await
    }

    /// Echo a user creation without persisting it
    pub async fn create_user(&self, request: &NewUserRequest) -> ApiResult<ManagedUser> {
        let user = User::new(
            UserId::new(format!("{}_{}", request.role, Uuid::new_v4().simple())),
            request.name.clone(),
            request.email.clone(),
            request.role,
            request.department.clone(),
        );
        let managed = ManagedUser {
            user,
            last_login: None,
            account_status: AccountStatus::Active,
            created_at: Utc::now(),
        };
        self.simulator.run(RequestWeight::Mutation, Ok(managed)).await
    }

    /// Echo a user update without persisting it
    pub async fn update_user(
        &self,
        user_id: &UserId,
        update: UserUpdate,
    ) -> ApiResult<UserUpdateReceipt> {
        let receipt = UserUpdateReceipt {
            id: user_id.clone(),
            update,
            updated_at: Utc::now(),
            message: "User updated successfully".to_string(),
        };
        self.simulator.run(RequestWeight::Auth, Ok(receipt)).await
    }

    /// Acknowledge a user deletion without persisting it
    pub async fn delete_user(&self, _user_id: &UserId) -> ApiResult<DeletionReceipt> {
        let receipt = DeletionReceipt {
            success: true,
            message: "User deleted successfully".to_string(),
        };
        self.simulator.run(RequestWeight::Dashboard, Ok(receipt)).await
    }

    /// List courses for management with derived enrollment counts
    pub async fn get_courses(&self) -> ApiResult<Vec<ManagedCourse>> {
        let mut rng = self.config.rng();
        let now = Utc::now();

        let courses = self
            .store
            .courses()
            .iter()
            .map(|course| ManagedCourse {
                enrolled_count: self.store.students_in_course(&course.id).len(),
                completion_rate: rng.gen_range(70..=99),
                avg_attendance: rng.gen_range(70..=94),
                created_at: now - Duration::seconds(rng.gen_range(0..180 * 24 * 3600)),
                course: course.clone(),
            })
            .collect();

        self.simulator.run(RequestWeight::Query, Ok(courses)).await
    }

    /// Echo a course creation without persisting it
    pub async fn create_course(&self, request: &NewCourseRequest) -> ApiResult<ManagedCourse> {
        let course = Course {
            id: CourseId::generate(),
            name: request.name.clone(),
            code: request.code.clone(),
            department: request.department.clone(),
            faculty_id: request.faculty_id.clone(),
            faculty_name: request.faculty_name.clone(),
            schedule: request.schedule.clone(),
            semester: request.semester.clone(),
            total_classes: request.total_classes,
            conducted_classes: 0,
        };
        let managed = ManagedCourse {
            course,
            enrolled_count: 0,
            completion_rate: 0,
            avg_attendance: 0,
            created_at: Utc::now(),
        };
        self.simulator.run(RequestWeight::Mutation, Ok(managed)).await
    }

    /// Fetch the system settings tree
    pub async fn get_system_settings(&self) -> ApiResult<SystemSettings> {
        self.simulator.run(RequestWeight::Settings, Ok(SystemSettings::default())).await
    }

    /// Echo a settings update without persisting it
    pub async fn update_system_settings(
        &self,
        settings: SystemSettings,
    ) -> ApiResult<SystemSettings> {
        self.simulator.run(RequestWeight::Auth, Ok(settings)).await
    }

    /// Assemble the biometric management payload
    pub async fn get_biometric_data(&self) -> ApiResult<BiometricReport> {
        let mut rng = self.config.rng();
        let now = Utc::now();
        let today = now.date_naive();

        let registrations_by_department = self
            .store
            .departments()
            .iter()
            .map(|dept| (dept.clone(), rng.gen_range(70..=95)))
            .collect();

        let stats = BiometricStats {
            total_registrations: self.store.registered_student_count(),
            total_users: self.store.students().len(),
            average_accuracy: 94.2,
            recent_registrations: 12,
            failed_attempts: 5,
            registrations_by_department,
        };

        let history = (0..30)
            .rev()
            .map(|offset| RegistrationDay {
                date: today - Duration::days(offset),
                registrations: rng.gen_range(1..=10),
                accuracy: 90.0 + rng.gen_range(0.0..10.0),
            })
            .collect();

        let users = self
            .store
            .students()
            .iter()
            .map(|student| BiometricUser {
                registration_date: student.face_data.registered_at,
                last_verification: now - Duration::seconds(rng.gen_range(0..7 * 24 * 3600)),
                verification_count: rng.gen_range(10..=59),
                accuracy: student.face_data.confidence,
                student: student.clone(),
            })
            .collect();

        self.simulator
            .run(RequestWeight::Analytics, Ok(BiometricReport { stats, history, users }))
            .await
    }

    /// Generate an institution-wide report
    pub async fn generate_advanced_report(
        &self,
        request: &AdvancedReportRequest,
    ) -> ApiResult<AdvancedReport> {
        let mut rng = self.config.rng();
        let methods = ["QR Code", "Face Recognition", "Manual"];

        let department_analysis = self
            .store
            .departments()
            .iter()
            .map(|dept| DepartmentAnalysis {
                department: dept.clone(),
                attendance: 75.0 + rng.gen_range(0.0..20.0),
                students: self
                    .store
                    .students()
                    .iter()
                    .filter(|s| &s.department == dept)
                    .count(),
                courses: self.store.courses().iter().filter(|c| &c.department == dept).count(),
                preferred_method: methods[rng.gen_range(0..methods.len())].to_string(),
            })
            .collect();

        let report = AdvancedReport {
            id: format!("admin_report_{}", Uuid::new_v4().simple()),
            report_type: request.report_type.clone(),
            generated_at: Utc::now(),
            institution_summary: InstitutionSummary {
                total_sessions: 450,
                total_attendance: 15680,
                average_attendance: 82.3,
                qr: 52,
                face: 38,
                manual: 10,
            },
            department_analysis,
            trends: ReportTrends {
                weekly: weekly_trends(&mut *rng),
                monthly: monthly_trends(&mut *rng),
            },
            download_url: format!("/api/admin/reports/download/{}", Uuid::new_v4().simple()),
        };

        self.simulator.run(RequestWeight::Report, Ok(report)).await
    }

    /// Assemble analytics for one department
    pub async fn get_department_analytics(
        &self,
        department: &str,
    ) -> ApiResult<DepartmentAnalytics> {
        let mut rng = self.config.rng();

        let total_faculty = self
            .store
            .users()
            .iter()
            .filter(|u| u.role == Role::Faculty && u.department.as_deref() == Some(department))
            .count();
        let total_students = self
            .store
            .students()
            .iter()
            .filter(|s| s.department == department)
            .count();
        let total_courses = self
            .store
            .courses()
            .iter()
            .filter(|c| c.department == department)
            .count();

        let analytics = DepartmentAnalytics {
            overview: DepartmentOverview {
                total_faculty,
                total_students,
                total_courses,
                avg_attendance: rng.gen_range(75..=95),
            },
            method_preferences: vec![
                MethodPreference { method: "QR Code".to_string(), usage: 45, satisfaction: 4.2 },
                MethodPreference {
                    method: "Face Recognition".to_string(),
                    usage: 40,
                    satisfaction: 4.5,
                },
                MethodPreference { method: "Manual".to_string(), usage: 15, satisfaction: 3.8 },
            ],
            attendance: PerformanceMetric { current: 82.5, target: 85.0, trend: "+2.3%".to_string() },
            engagement: PerformanceMetric { current: 78.2, target: 80.0, trend: "+1.8%".to_string() },
            completion: PerformanceMetric { current: 91.4, target: 90.0, trend: "+3.2%".to_string() },
        };

        self.simulator.run(RequestWeight::Dashboard, Ok(analytics)).await
    }
}

/// The demo activity feed shown on the admin dashboard
fn demo_activity_feed() -> Vec<AdminActivityEntry> {
    vec![
        AdminActivityEntry {
            id: 1,
            kind: AdminActivityKind::UserCreated,
            description: "New faculty account created for Dr. Emily Clark".to_string(),
            time: "30 minutes ago".to_string(),
            department: "Computer Science".to_string(),
        },
        AdminActivityEntry {
            id: 2,
            kind: AdminActivityKind::SystemUpdate,
            description: "Face recognition accuracy threshold updated to 85%".to_string(),
            time: "2 hours ago".to_string(),
            department: "System".to_string(),
        },
        AdminActivityEntry {
            id: 3,
            kind: AdminActivityKind::BackupCompleted,
            description: "Daily database backup completed successfully".to_string(),
            time: "3 hours ago".to_string(),
            department: "System".to_string(),
        },
        AdminActivityEntry {
            id: 4,
            kind: AdminActivityKind::CourseCreated,
            description: "New course \"Advanced Algorithms\" added to CS department".to_string(),
            time: "1 day ago".to_string(),
            department: "Computer Science".to_string(),
        },
    ]
}
