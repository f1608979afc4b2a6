//! Query module for read-only operations
//!
//! Derived views over the registry's collections. Queries never mutate,
//! and untracked handles yield empty results rather than errors.

pub mod roster_queries;

pub use roster_queries::{courses_by_student, enrollment_get, students_by_course};
