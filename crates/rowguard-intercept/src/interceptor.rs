//! Interceptor orchestration.

use crate::error::InterceptError;
use crate::evaluator::{self, Ruling};
use crate::guard;
use crate::rewrite;
use rowguard_core::{LimitConfig, QueryParameter, StatementDescriptor};
use rowguard_sql::LimitDetector;
use std::sync::Arc;

/// One intercepted query call.
///
/// Built at the start of the call and discarded when it returns; never
/// retained or shared across invocations.
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    /// The statement being executed.
    pub descriptor: &'a StatementDescriptor,
    /// Caller-supplied parameter, if any.
    pub parameter: Option<&'a QueryParameter>,
    /// Row limit from execution options; `None` means the caller supplied
    /// no explicit bound.
    pub explicit_limit: Option<u64>,
    /// The query text resolved for this call.
    pub sql: &'a str,
}

/// What the pipeline should do with the invocation.
#[derive(Debug)]
pub enum Decision {
    /// Execute the original statement untouched.
    ContinueUnchanged,
    /// Execute the replacement statement carrying the bounded text.
    ContinueWithReplacement(StatementDescriptor),
}

/// Dry-run report of what [`LimitInterceptor::intercept`] would do.
#[derive(Debug, Clone)]
pub struct Explanation {
    pub statement_id: String,
    pub original_sql: String,
    /// The text the replacement statement would carry; `None` when the
    /// invocation proceeds unchanged.
    pub bounded_sql: Option<String>,
}

/// The query guard: evaluates the configured rules, checks caller-supplied
/// page sizes, and rewrites unbounded statements.
///
/// Holds no per-invocation state; one instance serves any number of
/// concurrent callers.
pub struct LimitInterceptor {
    config: Arc<LimitConfig>,
    detector: LimitDetector,
}

impl LimitInterceptor {
    /// Create an interceptor over an already-validated configuration.
    pub fn new(config: Arc<LimitConfig>) -> Self {
        Self {
            config,
            detector: LimitDetector::new(),
        }
    }

    /// Decide whether the invocation proceeds unchanged or with a bounded
    /// replacement statement.
    ///
    /// Only [`InterceptError::LimitExceeded`] and
    /// [`InterceptError::MalformedQuery`] abort the call. A statement the
    /// rules select for rewriting but that already carries a top-level
    /// bound proceeds unchanged — detection overrides evaluation.
    pub fn intercept(&self, invocation: &Invocation<'_>) -> Result<Decision, InterceptError> {
        let ruling = evaluator::evaluate(
            &self.config,
            &invocation.descriptor.id,
            invocation.explicit_limit,
        )?;
        match ruling {
            Ruling::Proceed => Ok(Decision::ContinueUnchanged),
            Ruling::ProceedAfterGuard => {
                guard::check_page_size(invocation.parameter, &self.config)?;
                Ok(Decision::ContinueUnchanged)
            }
            Ruling::Rewrite => {
                if !self.detector.needs_limit(invocation.sql)? {
                    tracing::debug!(
                        statement = %invocation.descriptor.id,
                        "query already bounded, skipping rewrite"
                    );
                    return Ok(Decision::ContinueUnchanged);
                }
                let bounded = rewrite::bounded_text(invocation.sql, self.config.default_limit);
                if self.config.verbose_logging {
                    tracing::info!(
                        statement = %invocation.descriptor.id,
                        sql = %bounded,
                        "injected row bound"
                    );
                }
                let replacement = rewrite::rebind(invocation.descriptor, bounded);
                Ok(Decision::ContinueWithReplacement(replacement))
            }
        }
    }

    /// Report what [`Self::intercept`] would do without executing anything.
    pub fn explain(&self, invocation: &Invocation<'_>) -> Result<Explanation, InterceptError> {
        let decision = self.intercept(invocation)?;
        Ok(Explanation {
            statement_id: invocation.descriptor.id.clone(),
            original_sql: invocation.sql.to_string(),
            bounded_sql: match &decision {
                Decision::ContinueUnchanged => None,
                Decision::ContinueWithReplacement(replacement) => {
                    Some(replacement.sql_for(invocation.parameter))
                }
            },
        })
    }
}
