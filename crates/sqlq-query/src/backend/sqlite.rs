//! SQLite backend

use super::Backend;

/// SQLite rendering rules
///
/// - Identifiers: double quotes (`"table_name"`)
/// - Strings: single quotes doubled
/// - Booleans: `1` / `0`
/// - Binary: blob literal (`X'...'`)
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteBackend;

impl SqliteBackend {
	/// Create a new SQLite backend
	pub fn new() -> Self {
		Self
	}
}

impl Backend for SqliteBackend {
	fn name(&self) -> &'static str {
		"sqlite3"
	}

	fn identifier_quote(&self) -> char {
		'"'
	}

	// https://www.sqlite.org/lang_expr.html#literal_values_constants_
	fn escape_string(&self, s: &str) -> String {
		format!("'{}'", s.replace('\'', "''"))
	}

	fn format_bool(&self, value: bool) -> &'static str {
		if value { "1" } else { "0" }
	}

	fn format_bytes(&self, bytes: &[u8]) -> String {
		format!("X'{}'", hex::encode(bytes))
	}
}
