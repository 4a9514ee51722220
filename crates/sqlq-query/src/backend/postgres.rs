//! PostgreSQL backend

use super::Backend;

/// PostgreSQL rendering rules
///
/// - Identifiers: double quotes (`"table_name"`)
/// - Strings: standard-conforming literals, single quotes doubled
/// - Booleans: `TRUE` / `FALSE`
/// - Binary: escape-string `bytea` hex form (`E'\\x...'`)
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresBackend;

impl PostgresBackend {
	/// Create a new PostgreSQL backend
	pub fn new() -> Self {
		Self
	}
}

impl Backend for PostgresBackend {
	fn name(&self) -> &'static str {
		"postgres"
	}

	fn identifier_quote(&self) -> char {
		'"'
	}

	// https://www.postgresql.org/docs/current/sql-syntax-lexical.html
	fn escape_string(&self, s: &str) -> String {
		format!("'{}'", s.replace('\'', "''"))
	}

	fn format_bool(&self, value: bool) -> &'static str {
		if value { "TRUE" } else { "FALSE" }
	}

	fn format_bytes(&self, bytes: &[u8]) -> String {
		format!(r"E'\\x{}'", hex::encode(bytes))
	}
}
