//! Core types shared across Rollbook facilities
//!
//! This crate provides foundational types used by the registry kernel,
//! error handling, and logging facilities:
//!
//! - **Entity handles**: PersonId, CourseId, EnrollmentId
//! - **Schema constants**: Canonical field keys and event names

pub mod id;
pub mod schema;

pub use id::{CourseId, EnrollmentId, PersonId};
