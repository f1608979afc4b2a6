//! Structured logging facility for Rollbook
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Correlation of operation lifecycles via canonical field keys
//!
//! Driver layers (the CLI) own lifecycle logging with the `log_op_*`
//! macros; the registry operations themselves emit only `tracing::debug!`
//! internals.
//!
//! # Usage
//!
//! ```rust
//! use rollbook_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Test);
//! ```

pub mod init;
pub mod macros;

pub use init::{init, Profile};
