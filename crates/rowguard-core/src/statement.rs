//! Statement descriptors.
//!
//! A [`StatementDescriptor`] carries everything the execution engine needs
//! to issue a query: where the text comes from, cache policy, driver hints,
//! result/parameter mappings. Descriptors are immutable — rewriting one
//! means building a new descriptor that shares every attribute except its
//! SQL source, so concurrent invocations holding the same original never
//! observe each other's replacements.

use crate::parameter::QueryParameter;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Produces the SQL text for a statement at invocation time.
///
/// A dynamic statement may assemble different text per call from the
/// parameter; a rewritten statement returns fixed text unconditionally.
pub trait SqlSource: Send + Sync {
    /// Resolve the SQL text for this call.
    fn sql(&self, parameter: Option<&QueryParameter>) -> String;
}

/// A source that returns the same text regardless of the call parameters.
pub struct StaticSqlSource {
    sql: String,
}

impl StaticSqlSource {
    pub fn new(sql: impl Into<String>) -> Self {
        Self { sql: sql.into() }
    }
}

impl SqlSource for StaticSqlSource {
    fn sql(&self, _parameter: Option<&QueryParameter>) -> String {
        self.sql.clone()
    }
}

/// The kind of statement a descriptor executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
}

/// Cursor behavior requested from the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSetBehavior {
    ForwardOnly,
    ScrollInsensitive,
    ScrollSensitive,
}

/// Second-level cache settings carried by a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePolicy {
    /// Name of the cache this statement participates in.
    pub cache_ref: String,
    /// Whether executing the statement flushes the cache.
    pub flush_required: bool,
    /// Whether results may be served from the cache.
    pub use_cache: bool,
}

/// Everything needed to (re-)issue a query.
#[derive(Clone)]
pub struct StatementDescriptor {
    /// Hierarchical, dot-separated identifier of the statement definition.
    pub id: String,
    /// Where the query text comes from.
    pub source: Arc<dyn SqlSource>,
    pub kind: StatementKind,
    /// Identifier of the resource the statement was defined in.
    pub resource: Option<String>,
    pub fetch_size: Option<u32>,
    pub timeout: Option<Duration>,
    pub result_maps: Vec<String>,
    pub parameter_map: Option<String>,
    pub key_generator: Option<String>,
    pub key_properties: Vec<String>,
    pub result_set_behavior: Option<ResultSetBehavior>,
    pub cache: Option<CachePolicy>,
}

impl StatementDescriptor {
    /// A select statement backed by fixed text, with no driver hints.
    /// Remaining attributes can be filled in with struct update syntax.
    pub fn select(id: impl Into<String>, sql: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: Arc::new(StaticSqlSource::new(sql)),
            kind: StatementKind::Select,
            resource: None,
            fetch_size: None,
            timeout: None,
            result_maps: Vec::new(),
            parameter_map: None,
            key_generator: None,
            key_properties: Vec::new(),
            result_set_behavior: None,
            cache: None,
        }
    }

    /// Resolve the SQL text for this call.
    pub fn sql_for(&self, parameter: Option<&QueryParameter>) -> String {
        self.source.sql(parameter)
    }

    /// A copy of this descriptor with only the SQL source replaced.
    pub fn with_source(&self, source: Arc<dyn SqlSource>) -> Self {
        Self {
            source,
            ..self.clone()
        }
    }
}

impl fmt::Debug for StatementDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatementDescriptor")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("resource", &self.resource)
            .field("fetch_size", &self.fetch_size)
            .field("timeout", &self.timeout)
            .field("result_maps", &self.result_maps)
            .field("parameter_map", &self.parameter_map)
            .field("key_generator", &self.key_generator)
            .field("key_properties", &self.key_properties)
            .field("result_set_behavior", &self.result_set_behavior)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_source_ignores_parameter() {
        let source = StaticSqlSource::new("SELECT * FROM orders");
        assert_eq!(source.sql(None), "SELECT * FROM orders");
    }

    #[test]
    fn test_with_source_preserves_attributes() {
        let original = StatementDescriptor {
            resource: Some("mapper/OrderMapper.xml".to_string()),
            fetch_size: Some(200),
            timeout: Some(Duration::from_secs(30)),
            result_maps: vec!["orderResult".to_string()],
            key_properties: vec!["id".to_string()],
            result_set_behavior: Some(ResultSetBehavior::ForwardOnly),
            cache: Some(CachePolicy {
                cache_ref: "orders".to_string(),
                flush_required: false,
                use_cache: true,
            }),
            ..StatementDescriptor::select("com.example.OrderMapper.selectAll", "SELECT * FROM orders")
        };

        let rewritten =
            original.with_source(Arc::new(StaticSqlSource::new("SELECT * FROM orders LIMIT 50")));

        assert_eq!(rewritten.id, original.id);
        assert_eq!(rewritten.kind, original.kind);
        assert_eq!(rewritten.resource, original.resource);
        assert_eq!(rewritten.fetch_size, original.fetch_size);
        assert_eq!(rewritten.timeout, original.timeout);
        assert_eq!(rewritten.result_maps, original.result_maps);
        assert_eq!(rewritten.key_properties, original.key_properties);
        assert_eq!(rewritten.result_set_behavior, original.result_set_behavior);
        assert_eq!(rewritten.cache, original.cache);
        assert_eq!(rewritten.sql_for(None), "SELECT * FROM orders LIMIT 50");
        // The original still resolves its own text.
        assert_eq!(original.sql_for(None), "SELECT * FROM orders");
    }
}
