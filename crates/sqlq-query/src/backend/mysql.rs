//! MySQL backend
//!
//! String literals use backslash escapes; identifiers use backticks.

use super::Backend;

/// MySQL rendering rules
///
/// - Identifiers: backticks (`` `table_name` ``)
/// - Strings: single quotes with backslash escapes for control characters,
///   quotes and backslash
/// - Booleans: `1` / `0`
/// - Binary: `0x` followed by lowercase hex
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlBackend;

impl MySqlBackend {
	/// Create a new MySQL backend
	pub fn new() -> Self {
		Self
	}
}

impl Backend for MySqlBackend {
	fn name(&self) -> &'static str {
		"mysql"
	}

	fn identifier_quote(&self) -> char {
		'`'
	}

	// https://dev.mysql.com/doc/refman/8.0/en/string-literals.html
	//
	// Every escaped character is ASCII, and UTF-8 continuation bytes are never
	// ASCII, so walking chars gives the same result as walking bytes.
	fn escape_string(&self, s: &str) -> String {
		let mut out = String::with_capacity(s.len() + 2);
		out.push('\'');
		for c in s.chars() {
			match c {
				'\0' => out.push_str("\\0"),
				'\'' => out.push_str("\\'"),
				'"' => out.push_str("\\\""),
				'\u{8}' => out.push_str("\\b"),
				'\n' => out.push_str("\\n"),
				'\r' => out.push_str("\\r"),
				'\t' => out.push_str("\\t"),
				'\u{1a}' => out.push_str("\\Z"),
				'\\' => out.push_str("\\\\"),
				_ => out.push(c),
			}
		}
		out.push('\'');
		out
	}

	fn format_bool(&self, value: bool) -> &'static str {
		if value { "1" } else { "0" }
	}

	fn format_bytes(&self, bytes: &[u8]) -> String {
		format!("0x{}", hex::encode(bytes))
	}
}
