//! Seeded entities and the read-only entity store
//!
//! The store module holds the ground-truth data for the mock domain: users,
//! student profiles, courses, and the curated attendance records the
//! synthetic history builds on. Stores are explicit instances handed to the
//! service layer at construction, not process-wide state, so test fixtures
//! can build as many isolated stores as they need.

pub mod course;
pub mod registry;
pub mod seed;
pub mod user;

pub use course::{Course, CourseSchedule};
pub use registry::{EntityStore, StoreError};
pub use seed::DEMO_FACULTY_ID;
pub use user::{FaceData, StudentProfile, User};
