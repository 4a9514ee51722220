//! Stateless formatting primitives.
//!
//! [`Formatter`] holds nothing but a [`Dialect`]; the escaping mode is passed
//! on every call. It is `Copy`, `Send` and `Sync`, so one value can be shared
//! freely between threads. [`Sqlq`](crate::Sqlq) wraps it with an
//! [`EscapePolicy`](crate::EscapePolicy) to derive the mode per call.

use crate::{
	backend::Dialect,
	escape::Escaping,
	types::{IdentArg, Order},
	value::Value,
};

/// Dialect-bound literal, identifier and order formatter.
///
/// # Example
///
/// ```rust
/// use sqlq_query::{Dialect, Escaping, Formatter, IdentArg, Value};
///
/// let fmt = Formatter::new(Dialect::Sqlite);
/// assert_eq!(fmt.literal(&Value::from(true), Escaping::Apply), "1");
/// assert_eq!(
///     fmt.identifiers(&[IdentArg::from("t.a"), IdentArg::from("b")], Escaping::Apply),
///     r#""t"."a", "b""#
/// );
/// assert_eq!(fmt.literal(&Value::from("NOW()"), Escaping::Raw), "NOW()");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Formatter {
	dialect: Dialect,
}

impl Formatter {
	/// Create a formatter for a dialect.
	pub fn new(dialect: Dialect) -> Self {
		Self { dialect }
	}

	/// The target dialect.
	pub fn dialect(&self) -> Dialect {
		self.dialect
	}

	/// Render a literal value.
	pub fn literal(&self, value: &Value, escaping: Escaping) -> String {
		match escaping {
			Escaping::Apply => self.dialect.backend().format_value(value),
			Escaping::Raw => value.to_string(),
		}
	}

	/// Render one or more identifiers, joined with `", "`.
	pub fn identifiers(&self, idents: &[IdentArg], escaping: Escaping) -> String {
		idents
			.iter()
			.map(|ident| self.identifier(ident, escaping))
			.collect::<Vec<_>>()
			.join(", ")
	}

	/// Render a single identifier.
	pub fn identifier(&self, ident: &IdentArg, escaping: Escaping) -> String {
		match escaping {
			Escaping::Apply => self.dialect.backend().format_ident(&ident.to_ident()),
			Escaping::Raw => ident.to_string(),
		}
	}

	/// Render an order direction.
	///
	/// Escaped, anything other than `ASC`/`DESC` (any case) becomes `ASC`.
	/// Raw, the text passes through unchanged.
	pub fn order(&self, text: &str, escaping: Escaping) -> String {
		match escaping {
			Escaping::Apply => Order::from_name(text).as_str().to_string(),
			Escaping::Raw => text.to_string(),
		}
	}
}
