//! Bound detection over raw query text.

use crate::error::SqlGuardError;
use sqlparser::ast::{LimitClause, Query, Statement};
use sqlparser::dialect::GenericDialect;
use sqlparser::parser::Parser;

const LIMIT_KEYWORD: &str = "limit";

/// Detects whether query text already carries a top-level row bound.
pub struct LimitDetector {
    dialect: GenericDialect,
}

impl Clone for LimitDetector {
    fn clone(&self) -> Self {
        Self {
            dialect: GenericDialect {},
        }
    }
}

impl Default for LimitDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LimitDetector {
    /// Create a new detector.
    pub fn new() -> Self {
        Self {
            dialect: GenericDialect {},
        }
    }

    /// Parse a SQL string into statements.
    pub fn parse(&self, sql: &str) -> Result<Vec<Statement>, SqlGuardError> {
        Parser::parse_sql(&self.dialect, sql).map_err(|e| SqlGuardError::Parse(e.to_string()))
    }

    /// Whether `sql` still needs a row bound appended.
    ///
    /// Text without the `LIMIT` keyword needs one, no parsing required.
    /// When the keyword is present, the text is parsed and only the
    /// outermost query's own clause counts: a compound set-operation chain
    /// carries the clause on the chain itself, while a `LIMIT` inside a
    /// subquery or derived table leaves the outer query unbounded.
    ///
    /// Parse failure is a hard error — text the detector cannot verify must
    /// not proceed.
    pub fn needs_limit(&self, sql: &str) -> Result<bool, SqlGuardError> {
        if !contains_limit_keyword(sql) {
            return Ok(true);
        }
        let statements = self.parse(sql)?;
        let Some(statement) = statements.first() else {
            // The keyword survived only inside comments.
            return Ok(true);
        };
        match statement {
            Statement::Query(query) => Ok(!has_own_limit(query)),
            _ => {
                // Not a read query; appending LIMIT would corrupt it.
                tracing::debug!("limit keyword in non-query statement, leaving text untouched");
                Ok(false)
            }
        }
    }
}

fn contains_limit_keyword(sql: &str) -> bool {
    sql.to_ascii_lowercase().contains(LIMIT_KEYWORD)
}

fn has_own_limit(query: &Query) -> bool {
    match &query.limit_clause {
        Some(LimitClause::LimitOffset { limit, .. }) => limit.is_some(),
        Some(LimitClause::OffsetCommaLimit { .. }) => true,
        None => false,
    }
}
