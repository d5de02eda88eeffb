//! Caller-supplied query parameters.
//!
//! The guard only ever reads parameters; it needs just enough structure to
//! look up configured page-size fields. Keyed mappings are inspected
//! directly. Structured parameter objects opt in through [`NamedFields`] —
//! the implementor decides which fields the guard may see, private storage
//! included, instead of the guard reaching into them reflectively.

use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Read access to named fields of a structured parameter object.
pub trait NamedFields: Send + Sync {
    /// The value of `name`, or `None` when no such field exists.
    fn field(&self, name: &str) -> Option<Value>;
}

/// The parameter shape handed to a query invocation.
#[derive(Clone)]
pub enum QueryParameter {
    /// A keyed mapping of placeholder names to values.
    Map(Map<String, Value>),
    /// A structured object exposing fields through [`NamedFields`].
    Object(Arc<dyn NamedFields>),
}

impl QueryParameter {
    /// Extract a numeric field value.
    ///
    /// An absent field, a non-numeric value, or a fractional value that
    /// still fits an integer reading all resolve the way a dynamic-typed
    /// caller would expect: numbers come back truncated to an integer,
    /// everything else is `None`. Extraction never fails.
    pub fn numeric_field(&self, name: &str) -> Option<i64> {
        let value = match self {
            QueryParameter::Map(map) => map.get(name).cloned(),
            QueryParameter::Object(object) => object.field(name),
        }?;
        match value {
            Value::Number(number) => number
                .as_i64()
                .or_else(|| number.as_f64().map(|float| float as i64)),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for QueryParameter {
    fn from(map: Map<String, Value>) -> Self {
        QueryParameter::Map(map)
    }
}

impl fmt::Debug for QueryParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryParameter::Map(map) => f.debug_tuple("Map").field(map).finish(),
            QueryParameter::Object(_) => f.write_str("Object(..)"),
        }
    }
}
