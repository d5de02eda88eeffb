//! Shared types for the rowguard query guard.
//!
//! This crate holds the configuration value the guard is constructed with and
//! the statement/parameter model it operates on. The decision logic itself
//! lives in `rowguard-intercept`; bound detection in `rowguard-sql`.

pub mod config;
pub mod parameter;
pub mod statement;

pub use config::{ConfigError, LimitConfig};
pub use parameter::{NamedFields, QueryParameter};
pub use statement::{
    CachePolicy, ResultSetBehavior, SqlSource, StatementDescriptor, StatementKind, StaticSqlSource,
};
