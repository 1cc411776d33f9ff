//! Core types and identifiers for the attendance mock service
//!
//! This module contains the foundational data types used throughout the
//! service layer:
//!
//! - **Identifiers**: stable string identifiers for seeded entities and
//!   prefixed UUID identifiers for runtime-minted records
//! - **Enums**: roles, attendance statuses, and capture methods
//! - **Configuration**: validated service configuration with CLI support

pub mod config;
pub mod enums;
pub mod identifiers;

pub use config::{CliArgs, ConfigFile, ConfigValidationError, ServiceConfig};
pub use enums::{AttendanceMethod, AttendanceStatus, Role};
pub use identifiers::{CourseId, QrCodeId, RecordId, SessionId, UserId};
