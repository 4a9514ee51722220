//! # sqlq
//!
//! A dialect-aware SQL fragment assembler.
//!
//! sqlq turns identifiers, literal values and clause fragments into
//! syntactically valid, safely escaped SQL text for MySQL, PostgreSQL and
//! SQLite. It never talks to a database: every builder returns a `String`.
//!
//! ## Core Principles
//!
//! - **Escaping by default**: every identifier is quoted and every literal is
//!   escaped for the target dialect unless the caller opts out
//! - **Explicit raw SQL**: escaping can be switched off persistently
//!   ([`Sqlq::stop_escape`]) or for a single fragment ([`Sqlq::raw`])
//! - **Lenient by default, strict on request**: unknown dialects fall back to
//!   MySQL, while [`Sqlq::strict`] reports them
//!
//! ## Feature Flags
//!
//! - `conf` (default) - layered settings from defaults, TOML and environment
//!   variables ([`conf`])
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlq::prelude::*;
//!
//! let mut q = Sqlq::new("postgres", true);
//! let select = q.select(["id", "email"]);
//! let from = q.from("users");
//! let domain = q.like("email", "%@?", "example.com");
//! let alive = q.is_null("deleted_at");
//! let limit = q.limit(50);
//!
//! let sql = Sqlq::query([select, from, Sqlq::where_([domain, alive]), limit]);
//! assert_eq!(
//!     sql.to_string(),
//!     r#"SELECT "id", "email" FROM "users" WHERE (("email" LIKE '%@example.com') AND ("deleted_at" IS NULL)) LIMIT 50"#
//! );
//! ```

// Module re-exports
#[cfg(feature = "conf")]
pub mod conf;
pub mod query;

// Re-export the formatting API at the crate root
pub use sqlq_query::{
	Backend, Condition, Dialect, EscapePolicy, Escaping, Formatter, Ident, IdentArg, IntoIdents,
	JoinType, MySqlBackend, Order, PostgresBackend, Query, QueryError, QueryResult, Sqlq,
	SqliteBackend, Value,
};

// Re-export settings from dedicated crate
#[cfg(feature = "conf")]
pub use sqlq_conf::{ConfigError, ConfigResult, SqlqSettings};

/// Prelude module for convenient imports.
///
/// ```rust
/// use sqlq::prelude::*;
/// ```
pub mod prelude {
	pub use sqlq_query::prelude::*;

	#[cfg(feature = "conf")]
	pub use sqlq_conf::{ConfigError, SqlqSettings};
}
