//! # sqlq-query
//!
//! A dialect-aware SQL fragment assembler.
//!
//! This crate turns identifiers, literal values and clause fragments into
//! escaped SQL text for MySQL, PostgreSQL, and SQLite. Nothing is executed:
//! the output is plain text, with values inlined as dialect-correct literals
//! rather than bound as parameters.
//!
//! ## Features
//!
//! - **Literal formatting** - strings, booleans, integers, floats, timestamps,
//!   bytes, NULL and lists, each rendered the way the target dialect expects
//! - **Identifier formatting** - quoting, `table.column` qualification,
//!   `table.*`, and `expr AS alias` detection
//! - **Escape control** - a persistent on/off switch plus a one-shot bypass for
//!   injecting raw SQL into the next formatted fragment
//! - **Clause builders** - SELECT, WHERE, JOIN, ORDER BY, pagination, UNION,
//!   INSERT, UPDATE and DELETE fragments
//! - **Composition** - [`Query`] collects fragments; [`Condition`] picks one
//!   fragment out of several alternatives
//!
//! ## Architecture
//!
//! - [`value`]: the [`Value`] enum of everything that can become a literal
//! - [`types`]: [`Ident`] (parsed identifiers) and [`Order`]
//! - [`backend`]: per-dialect quoting and escaping ([`Backend`],
//!   [`MySqlBackend`], [`PostgresBackend`], [`SqliteBackend`]) and [`Dialect`]
//! - [`escape`]: the escape state machine ([`EscapePolicy`], [`Escaping`])
//! - [`formatter`]: the stateless [`Formatter`]
//! - [`session`]: [`Sqlq`], which ties a formatter to an escape policy
//! - [`query`]: the clause builders
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlq_query::prelude::*;
//!
//! let mut q = Sqlq::new("mysql", true);
//! let select = q.select(["id", "name"]);
//! let from = q.from("users");
//! let active = q.compare("active", "=", true);
//! let name = q.like("name", "?%", "Jo");
//! let order = q.order_by("name", "asc");
//! let page = q.paginate(2, 10);
//!
//! let sql = Sqlq::query([select, from, Sqlq::where_([active, name]), order, page]);
//! assert_eq!(
//!     sql.to_string(),
//!     "SELECT `id`, `name` FROM `users` WHERE ((`active` = 1) AND (`name` LIKE 'Jo%')) \
//!      ORDER BY `name` ASC LIMIT 10 OFFSET 10"
//! );
//! ```
//!
//! ## Raw SQL
//!
//! ```rust
//! use sqlq_query::prelude::*;
//!
//! let mut q = Sqlq::new("postgres", true);
//!
//! // One fragment only
//! assert_eq!(q.raw().identifier("COUNT(*)"), "COUNT(*)");
//! assert_eq!(q.identifier("count"), r#""count""#);
//!
//! // Until escaping is turned back on
//! q.stop_escape();
//! assert_eq!(q.literal("NOW()"), "NOW()");
//! q.start_escape();
//! assert_eq!(q.literal("NOW()"), "'NOW()'");
//! ```
//!
//! ## Backend Differences
//!
//! | Feature | PostgreSQL | MySQL | SQLite |
//! |---------|-----------|-------|--------|
//! | Identifier quoting | `"name"` | `` `name` `` | `"name"` |
//! | String escaping | `''` | backslash | `''` |
//! | Booleans | `TRUE` / `FALSE` | `1` / `0` | `1` / `0` |
//! | Bytes | `E'\\xabcd'` | `0xabcd` | `X'abcd'` |

// Core modules
pub mod error;
pub mod types;
pub mod value;

// Backend implementations
pub mod backend;

// Formatting
pub mod escape;
pub mod formatter;
pub mod session;

// Clause builders
pub mod query;

/// Prelude module for convenient imports.
///
/// ```rust
/// use sqlq_query::prelude::*;
/// ```
pub mod prelude {
	// Backends
	pub use crate::backend::{Backend, Dialect, MySqlBackend, PostgresBackend, SqliteBackend};
	// Errors
	pub use crate::error::{QueryError, QueryResult};
	// Formatting
	pub use crate::escape::{EscapePolicy, Escaping};
	pub use crate::formatter::Formatter;
	pub use crate::session::Sqlq;
	// Clause composition
	pub use crate::query::{Condition, JoinType, Query};
	// Type system
	pub use crate::types::{Ident, IdentArg, IntoIdents, Order};
	// Value system
	pub use crate::value::Value;
}

// Re-export commonly used types at crate root
pub use prelude::*;
