//! # rowguard-sql
//!
//! SQL parsing and bound detection for rowguard.
//!
//! The detector answers one question: does this query text already carry a
//! row bound at the level where it counts? A textual scan alone gets both
//! directions wrong — `LIMIT` hidden inside a subquery does not bound the
//! outer query, and the word appearing in a literal or a column name is not
//! a bound at all — so a positive scan is confirmed by parsing the text and
//! inspecting the outermost query node.
//!
//! **Still unbounded (keyword only in a nested scope):**
//! ```sql
//! SELECT * FROM (SELECT * FROM orders LIMIT 10) recent
//! ```
//!
//! **Bounded (clause on the compound chain itself):**
//! ```sql
//! SELECT id FROM orders UNION SELECT id FROM archived_orders LIMIT 10
//! ```

pub mod detector;
pub mod error;

pub use detector::LimitDetector;
pub use error::SqlGuardError;
