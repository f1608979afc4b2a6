//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_STUDENT_ID: &str = "student_id";
pub const FIELD_INSTRUCTOR_ID: &str = "instructor_id";
pub const FIELD_COURSE_ID: &str = "course_id";
pub const FIELD_ENROLLMENT_ID: &str = "enrollment_id";

// Collection sizes
pub const FIELD_ROSTER_LEN: &str = "roster_len";
pub const FIELD_ENROLLMENT_COUNT: &str = "enrollment_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
