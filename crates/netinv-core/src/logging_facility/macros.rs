//! Canonical logging macros
//!
//! Callers must depend on `tracing` and `netinv-core-types`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use netinv_core::log_op_start;
/// log_op_start!("create_record");
/// log_op_start!("get_record", record_id = "r123");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = netinv_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = netinv_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use netinv_core::log_op_end;
/// log_op_end!("create_record", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = netinv_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = netinv_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Client errors (not found, conflict, validation) are logged at `warn`,
/// everything else at `error`.
///
/// # Example
///
/// ```
/// # use netinv_core::{log_op_error, InventoryError};
/// let err = InventoryError::NotFound { id: "r1".to_string() };
/// log_op_error!("get_record", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        if ex_err.kind().is_client_error() {
            tracing::warn!(
                component = module_path!(),
                op = $op,
                event = netinv_core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err.kind = ?ex_err.kind(),
                err.code = ex_err.code(),
            );
        } else {
            tracing::error!(
                component = module_path!(),
                op = $op,
                event = netinv_core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err.kind = ?ex_err.kind(),
                err.code = ex_err.code(),
                err.message = ex_err.message(),
            );
        }
    }};
}
