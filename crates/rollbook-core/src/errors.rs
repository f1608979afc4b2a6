use rollbook_core_types::{CourseId, PersonId};
use thiserror::Error;

/// Result type alias using RollbookError
pub type Result<T> = std::result::Result<T, RollbookError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// The registry's default semantics are permissive: mutating or querying an
/// untracked entity is a silent no-op or an empty result. These kinds cover
/// the strict opt-in surface (the `Registry` accessors and the render/CLI
/// paths that want explicit not-found signaling). Each kind maps to a stable
/// error code usable for programmatic handling and test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollbookErrorKind {
    StudentNotFound,
    InstructorNotFound,
    CourseNotFound,
    EnrollmentNotFound,
}

impl RollbookErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            RollbookErrorKind::StudentNotFound => "ERR_STUDENT_NOT_FOUND",
            RollbookErrorKind::InstructorNotFound => "ERR_INSTRUCTOR_NOT_FOUND",
            RollbookErrorKind::CourseNotFound => "ERR_COURSE_NOT_FOUND",
            RollbookErrorKind::EnrollmentNotFound => "ERR_ENROLLMENT_NOT_FOUND",
        }
    }
}

/// Error type for strict registry accessors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RollbookError {
    /// No tracked student under this handle
    #[error("Student not found: {student_id}")]
    StudentNotFound { student_id: PersonId },

    /// No tracked instructor under this handle
    #[error("Instructor not found: {instructor_id}")]
    InstructorNotFound { instructor_id: PersonId },

    /// No tracked course under this handle
    #[error("Course not found: {course_id}")]
    CourseNotFound { course_id: CourseId },

    /// No enrollment recorded for this (student, course) pair
    #[error("Enrollment not found: student={student_id}, course={course_id}")]
    EnrollmentNotFound {
        student_id: PersonId,
        course_id: CourseId,
    },
}

impl RollbookError {
    /// Get the canonical kind for this error
    pub fn kind(&self) -> RollbookErrorKind {
        match self {
            RollbookError::StudentNotFound { .. } => RollbookErrorKind::StudentNotFound,
            RollbookError::InstructorNotFound { .. } => RollbookErrorKind::InstructorNotFound,
            RollbookError::CourseNotFound { .. } => RollbookErrorKind::CourseNotFound,
            RollbookError::EnrollmentNotFound { .. } => RollbookErrorKind::EnrollmentNotFound,
        }
    }

    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}
