//! Error types for the SQL crate.

use thiserror::Error;

/// Errors that can occur while analyzing query text.
#[derive(Debug, Error)]
pub enum SqlGuardError {
    /// SQL parsing failed.
    #[error("failed to parse SQL: {0}")]
    Parse(String),
}
