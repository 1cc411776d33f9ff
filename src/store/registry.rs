//! The entity store: seeded ground truth for the mock domain
//!
//! The store is an explicitly constructed, read-only registry of users,
//! students, courses, and curated attendance records. Construction validates
//! referential integrity up front so every later lookup can trust the data;
//! nothing in the service layer mutates a store after it is built.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::attendance::AttendanceRecord;
use crate::store::{Course, StudentProfile, User};
use crate::types::{CourseId, Role, UserId};

/// Errors raised while constructing an entity store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Two entities share an identifier
    #[error("Duplicate identifier: {0}")]
    DuplicateId(String),

    /// Two users share a login credential pair
    #[error("Duplicate credential: {email} already registered for role {role}")]
    DuplicateCredential {
        /// Conflicting email
        email: String,
        /// Conflicting role
        role: Role,
    },

    /// A student references a course that does not exist
    #[error("Student {student} is enrolled in unknown course {course}")]
    UnknownEnrolledCourse {
        /// Offending student
        student: UserId,
        /// Missing course
        course: CourseId,
    },

    /// A student's face data violates the registration invariant
    #[error("Student {0} has inconsistent face data")]
    InconsistentFaceData(UserId),

    /// A course reports more conducted classes than planned
    #[error("Course {0} has conducted more classes than its total")]
    InvalidClassCounts(CourseId),

    /// A curated attendance record violates an invariant
    #[error("Curated record {id} is invalid: {message}")]
    InvalidRecord {
        /// Offending record id
        id: String,
        /// What failed
        message: String,
    },
}

/// Read-only registry of seeded entities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityStore {
    users: Vec<User>,
    students: Vec<StudentProfile>,
    courses: Vec<Course>,
    curated_records: Vec<AttendanceRecord>,
    departments: Vec<String>,
}

impl EntityStore {
    /// Build a store, validating referential integrity and entity invariants
    pub fn new(
        users: Vec<User>,
        students: Vec<StudentProfile>,
        courses: Vec<Course>,
        curated_records: Vec<AttendanceRecord>,
        departments: Vec<String>,
    ) -> Result<Self, StoreError> {
        let store = Self { users, students, courses, curated_records, departments };
        store.validate()?;
        Ok(store)
    }

    /// Build the demo fixture used by the facade out of the box
    pub fn demo() -> Self {
        super::seed::demo_store()
    }

    fn validate(&self) -> Result<(), StoreError> {
        use std::collections::HashSet;

        let mut user_ids = HashSet::new();
        let mut credentials = HashSet::new();
        for user in &self.users {
            if !user_ids.insert(user.id.as_str()) {
                return Err(StoreError::DuplicateId(user.id.to_string()));
            }
            if !credentials.insert((user.email.clone(), user.role)) {
                return Err(StoreError::DuplicateCredential {
                    email: user.email.clone(),
                    role: user.role,
                });
            }
        }

        let mut course_ids = HashSet::new();
        for course in &self.courses {
            if !course_ids.insert(course.id.as_str()) {
                return Err(StoreError::DuplicateId(course.id.to_string()));
            }
            if !course.is_consistent() {
                return Err(StoreError::InvalidClassCounts(course.id.clone()));
            }
        }

        let mut student_ids = HashSet::new();
        for student in &self.students {
            if !student_ids.insert(student.id.as_str()) {
                return Err(StoreError::DuplicateId(student.id.to_string()));
            }
            if !student.face_data.is_consistent() {
                return Err(StoreError::InconsistentFaceData(student.id.clone()));
            }
            for course_id in &student.enrolled_courses {
                if !course_ids.contains(course_id.as_str()) {
                    return Err(StoreError::UnknownEnrolledCourse {
                        student: student.id.clone(),
                        course: course_id.clone(),
                    });
                }
            }
        }

        for record in &self.curated_records {
            if !record.is_consistent() {
                return Err(StoreError::InvalidRecord {
                    id: record.id.to_string(),
                    message: "marked_at must be present exactly when status is not absent"
                        .to_string(),
                });
            }
            if !self.is_enrollment(&record.student_id, &record.course_id) {
                return Err(StoreError::InvalidRecord {
                    id: record.id.to_string(),
                    message: format!(
                        "({}, {}) is not a known enrollment",
                        record.student_id, record.course_id
                    ),
                });
            }
        }

        Ok(())
    }

    /// Look up a login-capable user by id
    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    /// Look up a user by login credential pair
    pub fn user_by_credentials(&self, email: &str, role: Role) -> Option<&User> {
        self.users.iter().find(|u| u.matches_credentials(email, role))
    }

    /// Look up a student profile by id
    pub fn student(&self, id: &UserId) -> Option<&StudentProfile> {
        self.students.iter().find(|s| &s.id == id)
    }

    /// All student profiles
    pub fn students(&self) -> &[StudentProfile] {
        &self.students
    }

    /// All login-capable users
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Look up a course by id
    pub fn course(&self, id: &CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| &c.id == id)
    }

    /// All courses in the catalog
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Known departments
    pub fn departments(&self) -> &[String] {
        &self.departments
    }

    /// Courses a student is enrolled in, in catalog order
    pub fn enrolled_courses(&self, student: &StudentProfile) -> Vec<&Course> {
        self.courses.iter().filter(|c| student.is_enrolled_in(&c.id)).collect()
    }

    /// Students enrolled in a course
    pub fn students_in_course(&self, course_id: &CourseId) -> Vec<&StudentProfile> {
        self.students.iter().filter(|s| s.is_enrolled_in(course_id)).collect()
    }

    /// Courses taught by a faculty member
    pub fn courses_by_faculty(&self, faculty_id: &UserId) -> Vec<&Course> {
        self.courses.iter().filter(|c| &c.faculty_id == faculty_id).collect()
    }

    /// Whether (student, course) is a known enrollment relationship
    pub fn is_enrollment(&self, student_id: &UserId, course_id: &CourseId) -> bool {
        self.student(student_id).is_some_and(|s| s.is_enrolled_in(course_id))
    }

    /// Curated attendance records belonging to a student
    pub fn curated_records_for(&self, student_id: &UserId) -> Vec<AttendanceRecord> {
        self.curated_records
            .iter()
            .filter(|r| &r.student_id == student_id)
            .cloned()
            .collect()
    }

    /// Number of students with registered face data
    pub fn registered_student_count(&self) -> usize {
        self.students.iter().filter(|s| s.face_data.is_registered).count()
    }

    /// Number of users with the given role, counting students not present in
    /// the login-capable user list
    pub fn role_count(&self, role: Role) -> usize {
        let direct = self.users.iter().filter(|u| u.role == role).count();
        if role == Role::Student {
            let extra = self
                .students
                .iter()
                .filter(|s| self.user(&s.id).is_none())
                .count();
            direct + extra
        } else {
            direct
        }
    }

    /// Total distinct users across the login list and the student roster
    pub fn total_user_count(&self) -> usize {
        let extra_students =
            self.students.iter().filter(|s| self.user(&s.id).is_none()).count();
        self.users.len() + extra_students
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FaceData;

    fn minimal_course(id: &str) -> Course {
        use crate::store::CourseSchedule;
        use chrono::Weekday;

        Course {
            id: CourseId::new(id),
            name: format!("Course {}", id),
            code: id.to_string(),
            department: "Computer Science".to_string(),
            faculty_id: UserId::new("faculty_001"),
            faculty_name: "Dr. Sarah Wilson".to_string(),
            schedule: CourseSchedule::new(vec![Weekday::Mon], "09:00 AM - 10:30 AM", "CS-101"),
            semester: "Fall 2024".to_string(),
            total_classes: 30,
            conducted_classes: 10,
        }
    }

    fn minimal_student(id: &str, courses: Vec<CourseId>) -> StudentProfile {
        StudentProfile {
            id: UserId::new(id),
            name: "Test Student".to_string(),
            email: format!("{}@college.edu", id),
            department: "Computer Science".to_string(),
            year: "3rd Year".to_string(),
            roll_number: "CS2021099".to_string(),
            enrolled_courses: courses,
            face_data: FaceData::unregistered(),
        }
    }

    #[test]
    fn test_demo_store_is_valid() {
        let store = EntityStore::demo();
        assert!(store.validate().is_ok());
        assert!(!store.courses().is_empty());
        assert!(!store.students().is_empty());
    }

    #[test]
    fn test_unknown_enrollment_rejected() {
        let result = EntityStore::new(
            Vec::new(),
            vec![minimal_student("student_x", vec![CourseId::new("GHOST")])],
            vec![minimal_course("CS301")],
            Vec::new(),
            Vec::new(),
        );

        assert!(matches!(result, Err(StoreError::UnknownEnrolledCourse { .. })));
    }

    #[test]
    fn test_duplicate_course_id_rejected() {
        let result = EntityStore::new(
            Vec::new(),
            Vec::new(),
            vec![minimal_course("CS301"), minimal_course("CS301")],
            Vec::new(),
            Vec::new(),
        );

        assert!(matches!(result, Err(StoreError::DuplicateId(_))));
    }

    #[test]
    fn test_inconsistent_face_data_rejected() {
        let mut student = minimal_student("student_x", vec![CourseId::new("CS301")]);
        student.face_data.confidence = 50.0; // unregistered but nonzero

        let result = EntityStore::new(
            Vec::new(),
            vec![student],
            vec![minimal_course("CS301")],
            Vec::new(),
            Vec::new(),
        );

        assert!(matches!(result, Err(StoreError::InconsistentFaceData(_))));
    }

    #[test]
    fn test_demo_store_lookups() {
        let store = EntityStore::demo();

        let student = store.student(&UserId::new("student_001")).unwrap();
        assert_eq!(student.enrolled_courses.len(), 4);
        assert_eq!(store.enrolled_courses(student).len(), 4);

        let user = store.user_by_credentials("student@demo.com", Role::Student).unwrap();
        assert_eq!(user.id, student.id);
        assert!(store.user_by_credentials("student@demo.com", Role::Admin).is_none());

        let cs301 = CourseId::new("CS301");
        assert!(store.is_enrollment(&student.id, &cs301));
        assert!(!store.is_enrollment(&UserId::new("ghost"), &cs301));
    }

    #[test]
    fn test_demo_store_counts() {
        let store = EntityStore::demo();

        // 3 login users + 4 students, one of whom is also a login user
        assert_eq!(store.total_user_count(), 6);
        assert_eq!(store.role_count(Role::Student), 4);
        assert_eq!(store.role_count(Role::Faculty), 1);
        assert_eq!(store.role_count(Role::Admin), 1);
        assert_eq!(store.registered_student_count(), 3);
    }

    #[test]
    fn test_curated_records_scoped_to_student() {
        let store = EntityStore::demo();

        let records = store.curated_records_for(&UserId::new("student_001"));
        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|r| r.student_id == UserId::new("student_001")));

        assert!(store.curated_records_for(&UserId::new("student_002")).is_empty());
    }
}
