//! Guard configuration.
//!
//! Loaded once at process start (inline or from a YAML file) and shared
//! read-only with every interceptor invocation. Absent fields fall back to
//! the documented defaults, so an empty document is a valid — disabled —
//! configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Configuration for automatic row bounding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitConfig {
    /// Whether the guard is active at all.
    #[serde(default)]
    pub enabled: bool,

    /// Bound injected into unbounded queries, and the ceiling against which
    /// caller-supplied limits and page sizes are checked.
    #[serde(default = "default_limit")]
    pub default_limit: u64,

    /// Statement identifiers the guard targets. An entry may name a single
    /// statement or a whole namespace (everything before the identifier's
    /// last `.`).
    #[serde(default)]
    pub target_ids: HashSet<String>,

    /// Interpretation of `target_ids`. When false it is an inclusion list:
    /// only listed statements are bounded. When true it is an exclusion
    /// list: every statement is bounded except those listed.
    #[serde(default)]
    pub reverse_targets: bool,

    /// Statements whose trailing method name contains one of these
    /// fragments are skipped entirely — they already paginate or count.
    /// Matched case-insensitively.
    #[serde(default = "default_skip_method_fragments")]
    pub skip_method_fragments: HashSet<String>,

    /// Parameter field names treated as explicit page-size requests,
    /// checked in order.
    #[serde(default = "default_page_size_fields")]
    pub page_size_fields: Vec<String>,

    /// Log the final bounded text for every injected bound.
    #[serde(default)]
    pub verbose_logging: bool,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            default_limit: default_limit(),
            target_ids: HashSet::new(),
            reverse_targets: false,
            skip_method_fragments: default_skip_method_fragments(),
            page_size_fields: default_page_size_fields(),
            verbose_logging: false,
        }
    }
}

impl LimitConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yaml::from_str(content)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants a loaded configuration must satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_limit == 0 {
            return Err(ConfigError::Config(
                "default_limit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    fn normalize(&mut self) {
        self.skip_method_fragments = self
            .skip_method_fragments
            .iter()
            .map(|fragment| fragment.to_lowercase())
            .collect();
    }

    /// Whether the guard targets this statement.
    ///
    /// A statement matches the list through its own identifier or through
    /// its parent namespace, so a single entry can cover a whole mapper.
    /// With an empty list, inclusion mode targets nothing and exclusion
    /// mode targets everything.
    pub fn is_targeted(&self, statement_id: &str) -> bool {
        let listed = self.target_ids.contains(statement_id)
            || parent_id(statement_id).is_some_and(|parent| self.target_ids.contains(parent));
        if self.reverse_targets { !listed } else { listed }
    }

    /// Whether this statement's trailing method name marks it as one the
    /// guard should leave alone.
    pub fn skips_method(&self, statement_id: &str) -> bool {
        let method = trailing_method(statement_id).to_lowercase();
        self.skip_method_fragments
            .iter()
            .any(|fragment| method.contains(fragment.as_str()))
    }
}

/// The namespace portion of a hierarchical statement identifier.
fn parent_id(statement_id: &str) -> Option<&str> {
    statement_id.rsplit_once('.').map(|(parent, _)| parent)
}

/// The method portion of a statement identifier; the whole identifier when
/// it carries no namespace.
fn trailing_method(statement_id: &str) -> &str {
    statement_id
        .rsplit_once('.')
        .map_or(statement_id, |(_, method)| method)
}

// Default value functions
fn default_limit() -> u64 {
    1000
}

fn default_skip_method_fragments() -> HashSet<String> {
    ["page", "paging", "count"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_page_size_fields() -> Vec<String> {
    vec!["pageSize".to_string(), "limit".to_string()]
}
