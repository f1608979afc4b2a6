//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use rollbook_core::log_op_start;
/// log_op_start!("add_student");
/// log_op_start!("add_student", student_id = "s123");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = rollbook_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = rollbook_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use rollbook_core::log_op_end;
/// log_op_end!("add_student", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = rollbook_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = rollbook_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation that ended in an error
///
/// # Example
///
/// ```
/// # use rollbook_core::log_op_error;
/// # use rollbook_core::RollbookError;
/// # use rollbook_core_types::PersonId;
/// let err = RollbookError::StudentNotFound { student_id: PersonId::new() };
/// log_op_error!("describe_student", err, duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = rollbook_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?$err.kind(),
            err_code = $err.code(),
        );
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = rollbook_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?$err.kind(),
            err_code = $err.code(),
            $($field)*
        );
    };
}
