//! Per-invocation rule evaluation.

use crate::error::InterceptError;
use rowguard_core::LimitConfig;

/// What the rules say should happen to one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ruling {
    /// Execute unchanged.
    Proceed,
    /// Execute unchanged once the page-size guard has passed.
    ProceedAfterGuard,
    /// Inject the default bound.
    Rewrite,
}

/// Evaluate the bounding rules for a statement, cheapest checks first.
///
/// Identifier checks short-circuit before the explicit-limit check; SQL
/// inspection and rewriting are left to the caller and only happen when
/// this returns [`Ruling::Rewrite`].
pub fn evaluate(
    config: &LimitConfig,
    statement_id: &str,
    explicit_limit: Option<u64>,
) -> Result<Ruling, InterceptError> {
    if !config.enabled {
        return Ok(Ruling::Proceed);
    }
    if config.skips_method(statement_id) {
        // Skipped methods still get their parameters checked; a paginating
        // method can ask for an oversized page.
        return Ok(Ruling::ProceedAfterGuard);
    }
    if !config.is_targeted(statement_id) {
        return Ok(Ruling::Proceed);
    }
    if let Some(limit) = explicit_limit {
        // The caller knows what it is doing; honor its bound once it passes
        // the ceiling check, with no SQL rewriting.
        if limit > config.default_limit {
            return Err(InterceptError::LimitExceeded {
                field: None,
                value: limit,
                max: config.default_limit,
            });
        }
        return Ok(Ruling::Proceed);
    }
    Ok(Ruling::Rewrite)
}
