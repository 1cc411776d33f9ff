//! Synthetic attendance history generation
//!
//! The generator derives a student's attendance history for the trailing
//! 30-day window from the course catalog and the student's enrollments.
//! Curated seed records are included as-is; synthetic records start at day
//! offset 5 so they never collide with the curated dates.
//!
//! Every random draw flows through an injected random source. Callers that
//! need reproducible output construct the generator with a seed; unseeded
//! generators produce a fresh sample on every invocation, and callers must
//! not assume stable results across calls.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Utc, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::fmt;
use tracing::debug;

use crate::attendance::{AttendanceRecord, RecordMetadata};
use crate::store::{EntityStore, DEMO_FACULTY_ID};
use crate::types::{
    AttendanceMethod, AttendanceStatus, RecordId, ServiceConfig, SessionId, UserId,
};

/// Status pool; present is weighted at 60%, late and absent at 20% each
const STATUS_POOL: [AttendanceStatus; 5] = [
    AttendanceStatus::Present,
    AttendanceStatus::Present,
    AttendanceStatus::Present,
    AttendanceStatus::Late,
    AttendanceStatus::Absent,
];

/// Capture methods drawn uniformly
const METHOD_POOL: [AttendanceMethod; 3] = [
    AttendanceMethod::Qr,
    AttendanceMethod::FacialRecognition,
    AttendanceMethod::Manual,
];

/// Generator for synthetic per-student attendance history
pub struct HistoryGenerator {
    rng: Box<dyn RngCore>,
    window_days: u32,
    start_offset: u32,
}

impl fmt::Debug for HistoryGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryGenerator")
            .field("window_days", &self.window_days)
            .field("start_offset", &self.start_offset)
            .finish()
    }
}

impl HistoryGenerator {
    /// Create a generator drawing from thread-local entropy
    pub fn new() -> Self {
        Self { rng: Box::new(rand::thread_rng()), window_days: 30, start_offset: 5 }
    }

    /// Create a generator with a specific seed for reproducible results
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: Box::new(StdRng::seed_from_u64(seed)), window_days: 30, start_offset: 5 }
    }

    /// Create a generator honoring the configured window and seed
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            rng: config.rng(),
            window_days: config.history_window_days,
            start_offset: config.history_start_offset,
        }
    }

    /// Generate the full attendance history attributable to a student as of
    /// `today`: curated seed records plus one synthetic record for every
    /// scheduled meeting of an enrolled course inside the window
    ///
    /// Weekends never produce records. An unknown student yields only its
    /// (empty) curated set rather than an error.
    pub fn generate(
        &mut self,
        store: &EntityStore,
        student_id: &UserId,
        today: NaiveDate,
    ) -> Vec<AttendanceRecord> {
        let mut records = store.curated_records_for(student_id);

        let Some(student) = store.student(student_id) else {
            debug!(student = %student_id, "history requested for unknown student");
            return records;
        };

        for offset in self.start_offset..=self.window_days {
            let date = today - Duration::days(i64::from(offset));
            let weekday = date.weekday();

            if matches!(weekday, Weekday::Sat | Weekday::Sun) {
                continue;
            }

            for (course_index, course) in store.courses().iter().enumerate() {
                if !student.is_enrolled_in(&course.id) || !course.meets_on(weekday) {
                    continue;
                }

                records.push(self.synthesize_record(
                    student_id,
                    course_index,
                    course,
                    date,
                    offset,
                ));
            }
        }

        debug!(
            student = %student_id,
            count = records.len(),
            "generated attendance history"
        );
        records
    }

    /// Generate history relative to the current date
    pub fn generate_now(&mut self, store: &EntityStore, student_id: &UserId) -> Vec<AttendanceRecord> {
        self.generate(store, student_id, Utc::now().date_naive())
    }

    fn synthesize_record(
        &mut self,
        student_id: &UserId,
        course_index: usize,
        course: &crate::store::Course,
        date: NaiveDate,
        offset: u32,
    ) -> AttendanceRecord {
        let status = STATUS_POOL[self.rng.gen_range(0..STATUS_POOL.len())];
        let method = METHOD_POOL[self.rng.gen_range(0..METHOD_POOL.len())];

        let marked_at = if status.is_marked() {
            let delay = Duration::seconds(self.rng.gen_range(0..3600));
            Some((date.and_time(NaiveTime::MIN) + delay).and_utc())
        } else {
            None
        };

        let confidence = if method == AttendanceMethod::FacialRecognition {
            self.rng.gen_range(90.0..100.0)
        } else {
            100.0
        };

        let marked_by = if method == AttendanceMethod::Manual {
            UserId::new(DEMO_FACULTY_ID)
        } else {
            student_id.clone()
        };

        AttendanceRecord {
            id: RecordId::synthetic(offset, course_index),
            student_id: student_id.clone(),
            course_id: course.id.clone(),
            course_name: course.name.clone(),
            session_id: SessionId::synthetic(offset, course_index),
            date,
            status,
            marked_at,
            marked_by,
            method,
            metadata: RecordMetadata::for_method(method, course.schedule.room.clone(), confidence),
        }
    }
}

impl Default for HistoryGenerator {
    fn default() -> Self {
        Self::new()
    }
}
