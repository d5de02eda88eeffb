//! Error types for the interceptor.

use rowguard_sql::SqlGuardError;
use thiserror::Error;

/// Hard failures that abort a query before it executes.
///
/// These two are the guard's core promise and propagate to the caller;
/// every other condition inside the interceptor resolves to "continue
/// unchanged".
#[derive(Debug, Error)]
pub enum InterceptError {
    /// A caller-requested page size or row limit exceeds the configured
    /// maximum. `field` names the parameter field the value came from, or
    /// is `None` when the limit arrived through execution options.
    #[error("{}: {value} exceeds maximum {max}", .field.as_deref().unwrap_or("row limit"))]
    LimitExceeded {
        field: Option<String>,
        value: u64,
        max: u64,
    },

    /// The bound detector could not parse the query text. The query is not
    /// executed: text the guard cannot verify must not proceed unbounded.
    #[error("malformed query: {0}")]
    MalformedQuery(String),
}

impl From<SqlGuardError> for InterceptError {
    fn from(err: SqlGuardError) -> Self {
        match err {
            SqlGuardError::Parse(message) => InterceptError::MalformedQuery(message),
        }
    }
}
