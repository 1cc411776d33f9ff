//! Course entities and schedules

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::types::{CourseId, UserId};

/// Weekly meeting pattern for a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSchedule {
    /// Weekdays on which the course meets
    pub days: Vec<Weekday>,
    /// Human-readable time window, e.g. "09:00 AM - 10:30 AM"
    pub time: String,
    /// Room the course meets in
    pub room: String,
}

impl CourseSchedule {
    /// Create a new schedule
    pub fn new(days: Vec<Weekday>, time: impl Into<String>, room: impl Into<String>) -> Self {
        Self { days, time: time.into(), room: room.into() }
    }

    /// Whether the course meets on the given weekday
    pub fn meets_on(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }
}

/// A course offered by the institution
///
/// The referenced faculty member teaches the course but does not own its
/// lifecycle; the reference is not validated against the user set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Stable unique identifier
    pub id: CourseId,
    /// Full course name
    pub name: String,
    /// Course code, e.g. "CS301"
    pub code: String,
    /// Department offering the course
    pub department: String,
    /// Faculty member teaching the course
    pub faculty_id: UserId,
    /// Display name of the teaching faculty member
    pub faculty_name: String,
    /// Weekly meeting pattern
    pub schedule: CourseSchedule,
    /// Semester label, e.g. "Fall 2024"
    pub semester: String,
    /// Classes planned for the semester
    pub total_classes: u32,
    /// Classes conducted so far; never exceeds `total_classes`
    pub conducted_classes: u32,
}

impl Course {
    /// Whether the course meets on the given weekday
    pub fn meets_on(&self, day: Weekday) -> bool {
        self.schedule.meets_on(day)
    }

    /// Check the class-count invariant
    pub fn is_consistent(&self) -> bool {
        self.conducted_classes <= self.total_classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_course() -> Course {
        Course {
            id: CourseId::new("CS301"),
            name: "Data Structures and Algorithms".to_string(),
            code: "CS301".to_string(),
            department: "Computer Science".to_string(),
            faculty_id: UserId::new("faculty_001"),
            faculty_name: "Dr. Sarah Wilson".to_string(),
            schedule: CourseSchedule::new(
                vec![Weekday::Mon, Weekday::Wed, Weekday::Fri],
                "09:00 AM - 10:30 AM",
                "CS-101",
            ),
            semester: "Fall 2024".to_string(),
            total_classes: 45,
            conducted_classes: 32,
        }
    }

    #[test]
    fn test_schedule_matching() {
        let course = sample_course();

        assert!(course.meets_on(Weekday::Mon));
        assert!(course.meets_on(Weekday::Fri));
        assert!(!course.meets_on(Weekday::Tue));
        assert!(!course.meets_on(Weekday::Sun));
    }

    #[test]
    fn test_class_count_invariant() {
        let mut course = sample_course();
        assert!(course.is_consistent());

        course.conducted_classes = 46;
        assert!(!course.is_consistent());
    }

    #[test]
    fn test_course_serialization() {
        let course = sample_course();
        let json = serde_json::to_string(&course).unwrap();
        let back: Course = serde_json::from_str(&json).unwrap();
        assert_eq!(back, course);
    }
}
