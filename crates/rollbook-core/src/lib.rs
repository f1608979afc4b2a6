//! Rollbook Core - in-memory academic records registry
//!
//! This crate provides the data structures and operations for Rollbook,
//! including:
//! - Person (student/instructor), Course, and Enrollment models with full
//!   CRUD semantics
//! - The Registry owning all tracked records, with cascade deletion of
//!   enrollments when their student or course is removed
//! - Read-only roster queries with insertion-order guarantees
//! - One-line describe rendering for every entity
//!
//! The registry is permissive by default: operating on an untracked handle
//! is a silent no-op or an empty result. Strict not-found signaling is
//! available through the `Registry` accessors and the error facility.

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;
pub mod render;

// Re-export commonly used types
pub use errors::{Result, RollbookError, RollbookErrorKind};
pub use model::{Course, Enrollment, Person, Role};
pub use ops::Registry;
