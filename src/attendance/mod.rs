//! Attendance records and synthetic history generation

pub mod generator;
pub mod record;

pub use generator::HistoryGenerator;
pub use record::{AttendanceRecord, RecordMetadata};
