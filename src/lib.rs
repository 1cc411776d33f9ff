//! Attendance Mock Service
//!
//! A mock attendance data and service layer: the browser-side dashboards of
//! a student-attendance product talk to this crate exactly as they would to
//! a real backend, without one existing. Entities are seeded in a read-only
//! store, attendance history is synthesized over a rolling day window,
//! statistics are derived on demand, and every operation resolves through an
//! artificially delayed asynchronous request contract.
//!
//! # Overview
//!
//! - **Entity store**: seeded users, students, and courses with validated
//!   referential integrity; explicit instances, never process-wide state
//! - **History generation**: per-student synthetic attendance respecting
//!   course schedules and weekday filtering, with injectable randomness
//! - **Aggregation**: attendance percentages, per-course breakdowns, and
//!   institution rollups derived without mutating inputs
//! - **Request simulation**: fixed artificial latency per operation weight
//!   with a binary resolve/reject outcome
//! - **Facade**: role-scoped operation groups (student, faculty, admin)
//!   plus unauthenticated login
//!
//! # Quick Start
//!
//! ```no_run
//! use attendance_mock_service::api::{Credentials, MockApi};
//! use attendance_mock_service::types::Role;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let api = MockApi::demo();
//!
//! let login = api
//!     .login(&Credentials {
//!         email: "student@demo.com".to_string(),
//!         password: "password".to_string(),
//!         role: Role::Student,
//!     })
//!     .await?;
//!
//! let dashboard = api.student().get_dashboard(&login.user.id).await?;
//! println!("attendance: {}%", dashboard.overview.overall_attendance);
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`types`]: identifiers, enums, and configuration
//! - [`store`]: seeded entities and the read-only entity store
//! - [`attendance`]: attendance records and history generation
//! - [`stats`]: aggregation over records and institution rollups
//! - [`api`]: the facade, request simulation, sessions, and logging
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod api;
pub mod attendance;
pub mod stats;
pub mod store;
pub mod types;

pub use api::{
    ApiError, ApiResult, Credentials, FailurePayload, LoginResponse, MockApi, RequestSimulator,
    RequestWeight, SessionStore,
};
pub use attendance::{AttendanceRecord, HistoryGenerator, RecordMetadata};
pub use stats::{attendance_percentage, AttendanceOverview, CourseAttendance};
pub use store::{Course, EntityStore, FaceData, StudentProfile, User};
pub use types::{
    AttendanceMethod, AttendanceStatus, CourseId, RecordId, Role, ServiceConfig, SessionId, UserId,
};
