use chrono::{DateTime, Utc};
use rollbook_core_types::{CourseId, PersonId};
use serde::{Deserialize, Serialize};

/// Course - a tracked course offering with its enrollment roster
///
/// The roster holds non-owning student handles in enrollment order.
/// Duplicates are permitted: enrolling the same student twice records the
/// handle twice. The roster is appended to when a student enrolls but is
/// NOT pruned when students or enrollments are removed - it reflects the
/// history of enroll calls, not the current enrollment set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique handle for this course (UUID v7)
    pub id: CourseId,

    /// Course title, e.g. "Introduction to Programming"
    pub name: String,

    /// Caller-facing course identifier, e.g. "CS101"; never used for lookup
    pub code: String,

    /// Student handles in enrollment order; duplicates permitted
    pub enrolled_students: Vec<PersonId>,

    /// Timestamp when this course was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this course was last updated
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Create a new course with an empty roster
    pub fn new(id: CourseId, name: String, code: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            code,
            enrolled_students: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a student handle to the roster
    ///
    /// No dedup: a second append for the same handle records it twice.
    pub fn add_student(&mut self, student_id: PersonId) {
        self.enrolled_students.push(student_id);
    }

    /// Remove the first roster occurrence of a student handle, if present
    ///
    /// The registry never calls this during cascades; it exists for callers
    /// that prune rosters by hand.
    pub fn remove_student(&mut self, student_id: &PersonId) {
        if let Some(pos) = self.enrolled_students.iter().position(|s| s == student_id) {
            self.enrolled_students.remove(pos);
        }
    }

    /// Check if the roster is empty
    pub fn has_enrollments(&self) -> bool {
        !self.enrolled_students.is_empty()
    }
}
