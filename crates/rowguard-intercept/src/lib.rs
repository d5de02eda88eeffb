//! # rowguard-intercept
//!
//! The query guard itself: a synchronous interceptor placed in front of the
//! execution engine that makes sure read queries carry a row bound.
//!
//! Per invocation the interceptor evaluates the configured rules, checks
//! caller-supplied page sizes, and — when a targeted statement arrives
//! without any bound — hands back a replacement statement carrying one:
//!
//! **Before (from the mapper):**
//! ```sql
//! SELECT * FROM orders WHERE status = 'pending'
//! ```
//!
//! **After (to the engine):**
//! ```sql
//! SELECT * FROM orders WHERE status = 'pending' LIMIT 1000
//! ```
//!
//! ## Decision surface
//!
//! | Condition | Outcome |
//! |-----------|---------|
//! | Guard disabled, statement not targeted | continue unchanged |
//! | Trailing method name blacklisted | page-size check, then continue unchanged |
//! | Caller supplied a row limit within the maximum | continue unchanged |
//! | Caller supplied a row limit over the maximum | [`InterceptError::LimitExceeded`] |
//! | Query already bounded at the top level | continue unchanged |
//! | Query unbounded | continue with a bounded replacement |
//! | Query text unparseable | [`InterceptError::MalformedQuery`] |
//!
//! Only the two listed errors ever abort a call. Everything else the guard
//! runs into resolves to "continue unchanged": a defect in the limiting
//! feature degrades to no limiting, never to queries failing.

pub mod error;
pub mod evaluator;
pub mod guard;
pub mod interceptor;
pub mod rewrite;

pub use error::InterceptError;
pub use evaluator::{evaluate, Ruling};
pub use guard::check_page_size;
pub use interceptor::{Decision, Explanation, Invocation, LimitInterceptor};
pub use rewrite::{bounded_text, rebind};
