//! Statistics derived from attendance records and the entity store
//!
//! The engine submodule aggregates record sets into percentages, counts, and
//! breakdowns; the institution submodule rolls figures up to the faculty and
//! admin views. Aggregation never mutates its inputs.

pub mod engine;
pub mod institution;

pub use engine::{
    attendance_percentage, recent_records, AttendanceOverview, AttendanceTally, CourseAttendance,
    StatusCounts, StudentCourseStanding,
};
pub use institution::{
    department_stats, monthly_trends, weekly_trends, AdminOverview, CourseTeachingStats,
    DepartmentStats, FacultyOverview, MethodAnalytics, MethodUsage, MonthlyTrend, SystemHealth,
    WeeklyTrend,
};
