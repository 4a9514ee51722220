//! SQL dialect backends
//!
//! This module provides dialect-specific literal and identifier rendering for
//! MySQL, PostgreSQL and SQLite.

use std::{fmt, str::FromStr};

use chrono::{DateTime, FixedOffset, Utc};

use crate::{error::QueryError, types::Ident, value::Value};

mod mysql;
mod postgres;
mod sqlite;

pub use mysql::MySqlBackend;
pub use postgres::PostgresBackend;
pub use sqlite::SqliteBackend;

/// Timestamp layout shared by every dialect (microsecond precision).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Dialect-specific rendering rules
///
/// Implementations only supply the parts that differ between databases
/// (quote character, string escaping, boolean and binary literals); the
/// provided methods walk [`Value`] and [`Ident`] trees on top of them.
///
/// # Implementations
///
/// - [`MySqlBackend`] - MySQL backend
/// - [`PostgresBackend`] - PostgreSQL backend
/// - [`SqliteBackend`] - SQLite backend
///
/// # Examples
///
/// ```rust
/// use sqlq_query::backend::{Backend, PostgresBackend};
/// use sqlq_query::{Ident, Value};
///
/// let backend = PostgresBackend::new();
/// assert_eq!(backend.format_value(&Value::from("it's")), "'it''s'");
/// assert_eq!(backend.format_ident(&Ident::parse("u.*")), r#""u".*"#);
/// ```
pub trait Backend: fmt::Debug + Send + Sync {
	/// Name of the dialect, as accepted by [`Dialect::from_name`].
	fn name(&self) -> &'static str;

	/// Character used to quote identifiers.
	fn identifier_quote(&self) -> char;

	/// Quote and escape a string literal.
	fn escape_string(&self, s: &str) -> String;

	/// Render a boolean literal.
	fn format_bool(&self, value: bool) -> &'static str;

	/// Render a binary literal.
	fn format_bytes(&self, bytes: &[u8]) -> String;

	/// Quote a single identifier name.
	///
	/// Embedded quote characters are doubled so the name cannot terminate
	/// the quoted identifier early.
	///
	/// # Examples
	///
	/// - PostgreSQL: `escape_identifier("user")` -> `"user"`
	/// - MySQL: `escape_identifier("user")` -> `` `user` ``
	/// - SQLite: `escape_identifier("user")` -> `"user"`
	fn escape_identifier(&self, ident: &str) -> String {
		let quote = self.identifier_quote();
		let mut out = String::with_capacity(ident.len() + 2);
		out.push(quote);
		for c in ident.chars() {
			if c == quote {
				out.push(quote);
			}
			out.push(c);
		}
		out.push(quote);
		out
	}

	/// Render a timestamp literal, normalized to UTC.
	fn format_timestamp(&self, ts: &DateTime<FixedOffset>) -> String {
		format!("'{}'", ts.with_timezone(&Utc).format(TIMESTAMP_FORMAT))
	}

	/// Render any value as a literal of this dialect.
	///
	/// Lists are rendered element-wise and joined with `", "`, without
	/// parentheses.
	fn format_value(&self, value: &Value) -> String {
		match value {
			Value::Null => "NULL".to_string(),
			Value::Bool(v) => self.format_bool(*v).to_string(),
			Value::String(s) => self.escape_string(s),
			Value::Bytes(b) => self.format_bytes(b),
			Value::Timestamp(ts) => self.format_timestamp(ts),
			Value::List(values) => values
				.iter()
				.map(|v| self.format_value(v))
				.collect::<Vec<_>>()
				.join(", "),
			// Numbers share the plain decimal rendering
			numeric => numeric.to_string(),
		}
	}

	/// Render a structured identifier.
	fn format_ident(&self, ident: &Ident) -> String {
		match ident {
			Ident::Name(name) => self.escape_identifier(name),
			Ident::Qualified(prefix, suffix) => {
				format!("{}.{}", self.format_ident(prefix), self.format_ident(suffix))
			}
			Ident::QualifiedAsterisk(prefix) => format!("{}.*", self.format_ident(prefix)),
			Ident::Aliased(expr, alias) => {
				format!("{} AS {}", self.format_ident(expr), self.format_ident(alias))
			}
		}
	}
}

/// Supported SQL dialects.
///
/// # Example
///
/// ```rust
/// use sqlq_query::Dialect;
///
/// assert_eq!(Dialect::from_name("Postgres"), Dialect::Postgres);
/// assert_eq!(Dialect::from_name("oracle"), Dialect::MySql);
/// assert!("oracle".parse::<Dialect>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
	/// MySQL / MariaDB (default)
	#[default]
	MySql,
	/// PostgreSQL
	Postgres,
	/// SQLite 3
	Sqlite,
}

static MYSQL: MySqlBackend = MySqlBackend;
static POSTGRES: PostgresBackend = PostgresBackend;
static SQLITE: SqliteBackend = SqliteBackend;

impl Dialect {
	/// Lenient lookup: unknown names fall back to [`Dialect::MySql`].
	pub fn from_name(name: &str) -> Self {
		name.parse().unwrap_or_else(|_| {
			tracing::debug!(dialect = name, "unknown SQL dialect, falling back to mysql");
			Self::MySql
		})
	}

	/// Canonical name of the dialect.
	pub fn name(&self) -> &'static str {
		self.backend().name()
	}

	/// Rendering rules for this dialect.
	pub fn backend(&self) -> &'static dyn Backend {
		match self {
			Self::MySql => &MYSQL,
			Self::Postgres => &POSTGRES,
			Self::Sqlite => &SQLITE,
		}
	}
}

impl FromStr for Dialect {
	type Err = QueryError;

	/// Case-insensitive match on `mysql`, `postgres` and `sqlite3`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"mysql" => Ok(Self::MySql),
			"postgres" => Ok(Self::Postgres),
			"sqlite3" => Ok(Self::Sqlite),
			_ => Err(QueryError::UnknownDialect(s.to_string())),
		}
	}
}

impl fmt::Display for Dialect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	#[case::mysql("mysql", Dialect::MySql)]
	#[case::mysql_upper("MySQL", Dialect::MySql)]
	#[case::postgres("postgres", Dialect::Postgres)]
	#[case::postgres_upper("POSTGRES", Dialect::Postgres)]
	#[case::sqlite3("sqlite3", Dialect::Sqlite)]
	#[case::sqlite3_mixed("SQLite3", Dialect::Sqlite)]
	fn test_dialect_from_str(#[case] name: &str, #[case] expected: Dialect) {
		assert_eq!(name.parse::<Dialect>(), Ok(expected));
		assert_eq!(Dialect::from_name(name), expected);
	}

	#[rstest]
	#[case::oracle("oracle")]
	#[case::empty("")]
	#[case::mssql("mssql")]
	#[case::sqlite_alias("sqlite")]
	#[case::postgresql_alias("postgresql")]
	fn test_unknown_dialect_falls_back_to_mysql(#[case] name: &str) {
		assert_eq!(Dialect::from_name(name), Dialect::MySql);
		assert_eq!(
			name.parse::<Dialect>(),
			Err(QueryError::UnknownDialect(name.to_string()))
		);
	}

	#[rstest]
	fn test_dialect_names_round_trip() {
		for dialect in [Dialect::MySql, Dialect::Postgres, Dialect::Sqlite] {
			assert_eq!(Dialect::from_name(dialect.name()), dialect);
			assert_eq!(dialect.to_string(), dialect.name());
		}
	}

	#[rstest]
	#[case::mysql(Dialect::MySql)]
	#[case::postgres(Dialect::Postgres)]
	#[case::sqlite(Dialect::Sqlite)]
	fn test_timestamp_is_utc_with_microseconds(#[case] dialect: Dialect) {
		let offset = FixedOffset::east_opt(9 * 3600).unwrap();
		let ts = offset
			.with_ymd_and_hms(2024, 1, 1, 8, 30, 0)
			.unwrap()
			.checked_add_signed(chrono::TimeDelta::microseconds(1_234))
			.unwrap();
		assert_eq!(
			dialect.backend().format_value(&Value::Timestamp(ts)),
			"'2023-12-31 23:30:00.001234'"
		);
	}

	#[rstest]
	#[case::mysql(Dialect::MySql)]
	#[case::postgres(Dialect::Postgres)]
	#[case::sqlite(Dialect::Sqlite)]
	fn test_null_and_numbers_are_unquoted(#[case] dialect: Dialect) {
		let backend = dialect.backend();
		assert_eq!(backend.format_value(&Value::Null), "NULL");
		assert_eq!(backend.format_value(&Value::Int(-7)), "-7");
		assert_eq!(backend.format_value(&Value::BigUnsigned(u64::MAX)), "18446744073709551615");
		assert_eq!(backend.format_value(&Value::Double(2.5)), "2.5");
		assert_eq!(backend.format_value(&Value::Float(0.5)), "0.5");
	}

	#[rstest]
	fn test_list_is_flat_and_unparenthesized() {
		let backend = Dialect::Postgres.backend();
		let list = Value::list(vec![
			Value::from(1),
			Value::from("a'b"),
			Value::Null,
			Value::Bool(true),
			Value::list([2, 3]),
		]);
		assert_eq!(backend.format_value(&list), "1, 'a''b', NULL, TRUE, 2, 3");
	}

	#[rstest]
	fn test_empty_list_renders_empty() {
		let backend = Dialect::MySql.backend();
		assert_eq!(backend.format_value(&Value::List(vec![])), "");
	}
}
