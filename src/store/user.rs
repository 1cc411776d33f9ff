//! User and student entities
//!
//! Users are seeded at store construction and never mutated by the service
//! layer; profile-update operations echo data back without persisting it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CourseId, Role, UserId};

/// Identity record for any user of the system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Stable unique identifier
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Login email; unique per role
    pub email: String,
    /// Role this identity authenticates as
    pub role: Role,
    /// Department affiliation, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl User {
    /// Create a new user
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        department: Option<String>,
    ) -> Self {
        Self { id: id.into(), name: name.into(), email: email.into(), role, department }
    }

    /// Whether this user matches a login credential pair
    pub fn matches_credentials(&self, email: &str, role: Role) -> bool {
        self.email == email && self.role == role
    }
}

/// Biometric registration state for a student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceData {
    /// Whether face data has been captured for this student
    pub is_registered: bool,
    /// When the face data was first registered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<DateTime<Utc>>,
    /// When the face data was last refreshed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    /// Recognition confidence recorded at registration time
    pub confidence: f64,
}

impl FaceData {
    /// Face data for a registered student
    pub fn registered(confidence: f64, registered_at: DateTime<Utc>) -> Self {
        Self {
            is_registered: true,
            registered_at: Some(registered_at),
            last_updated: Some(registered_at),
            confidence,
        }
    }

    /// Face data for a student who has not registered
    pub fn unregistered() -> Self {
        Self { is_registered: false, registered_at: None, last_updated: None, confidence: 0.0 }
    }

    /// Check the registration invariant: unregistered face data must carry
    /// zero confidence and no registration timestamp
    pub fn is_consistent(&self) -> bool {
        self.is_registered || (self.confidence == 0.0 && self.registered_at.is_none())
    }
}

/// Student entity: identity plus enrollment and biometric state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    /// Stable unique identifier
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Department the student belongs to
    pub department: String,
    /// Academic year label, e.g. "3rd Year"
    pub year: String,
    /// Institution roll number
    pub roll_number: String,
    /// Courses the student is enrolled in; every id must exist in the course set
    pub enrolled_courses: Vec<CourseId>,
    /// Biometric registration state
    pub face_data: FaceData,
}

impl StudentProfile {
    /// Whether the student is enrolled in the given course
    pub fn is_enrolled_in(&self, course_id: &CourseId) -> bool {
        self.enrolled_courses.contains(course_id)
    }

    /// Project this profile down to its identity record
    pub fn as_user(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: Role::Student,
            department: Some(self.department.clone()),
        }
    }
}
