use chrono::{DateTime, Utc};
use rollbook_core_types::{CourseId, EnrollmentId, PersonId};
use serde::{Deserialize, Serialize};

/// Enrollment - links a student to a course, with an optional grade
///
/// Both references are non-owning handles; the registry does not require
/// that they point at tracked entities at creation time. For lookup the
/// record is identified by its (student, course) pair - nothing prevents
/// two records for the same pair, in which case the first-created one
/// wins pair lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Unique handle for this enrollment (UUID v7)
    pub id: EnrollmentId,

    /// The enrolled student
    pub student_id: PersonId,

    /// The course enrolled in
    pub course_id: CourseId,

    /// Assigned grade; unset until `assign_grade`
    pub grade: Option<u32>,

    /// Timestamp when this enrollment was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this enrollment was last updated
    pub updated_at: DateTime<Utc>,
}

impl Enrollment {
    /// Create a new ungraded enrollment
    pub fn new(id: EnrollmentId, student_id: PersonId, course_id: CourseId) -> Self {
        let now = Utc::now();
        Self {
            id,
            student_id,
            course_id,
            grade: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the grade for this enrollment
    pub fn assign_grade(&mut self, grade: u32) {
        self.grade = Some(grade);
        self.updated_at = Utc::now();
    }

    /// Check if a grade has been assigned
    pub fn has_grade(&self) -> bool {
        self.grade.is_some()
    }

    /// Check if this record is for the given (student, course) pair
    pub fn matches_pair(&self, student_id: &PersonId, course_id: &CourseId) -> bool {
        self.student_id == *student_id && self.course_id == *course_id
    }
}
