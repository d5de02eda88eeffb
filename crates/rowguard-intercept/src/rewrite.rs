//! Statement rewriting.

use rowguard_core::{StatementDescriptor, StaticSqlSource};
use std::sync::Arc;

/// Append the bound clause to the query text.
pub fn bounded_text(sql: &str, limit: u64) -> String {
    format!("{sql} LIMIT {limit}")
}

/// Build a replacement descriptor around fixed, already-bounded text.
///
/// The replacement is identical to `descriptor` in every attribute except
/// its source, which returns `sql` unconditionally. The original is left
/// untouched; invocations that still hold it are unaffected.
pub fn rebind(descriptor: &StatementDescriptor, sql: String) -> StatementDescriptor {
    descriptor.with_source(Arc::new(StaticSqlSource::new(sql)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bounded_text() {
        assert_eq!(bounded_text("SELECT * FROM t", 50), "SELECT * FROM t LIMIT 50");
    }

    #[test]
    fn test_rebind_swaps_only_the_source() {
        let original = StatementDescriptor {
            fetch_size: Some(100),
            ..StatementDescriptor::select("com.example.OrderMapper.selectAll", "SELECT * FROM t")
        };
        let replacement = rebind(&original, bounded_text("SELECT * FROM t", 50));

        assert_eq!(replacement.id, original.id);
        assert_eq!(replacement.fetch_size, original.fetch_size);
        assert_eq!(replacement.sql_for(None), "SELECT * FROM t LIMIT 50");
        assert_eq!(original.sql_for(None), "SELECT * FROM t");
    }
}
