//! The formatting session: dialect plus escape state.

use crate::{
	backend::Dialect,
	error::QueryResult,
	escape::EscapePolicy,
	formatter::Formatter,
	types::IntoIdents,
	value::Value,
};

/// A SQL fragment builder for one dialect.
///
/// `Sqlq` owns the escape state ([`EscapePolicy`]) and renders literals,
/// identifiers and order directions through a [`Formatter`]. The clause
/// builders (`select`, `where_`, `insert_into`, ...) are implemented on top
/// of the three policy-driven primitives [`Sqlq::literal`],
/// [`Sqlq::identifier`] and [`Sqlq::order`].
///
/// Formatting calls take `&mut self` because they consume the one-shot skip
/// armed by [`Sqlq::skip_escape_once`] / [`Sqlq::raw`]. Use one instance per
/// statement-building thread.
///
/// # Example
///
/// ```rust
/// use sqlq_query::Sqlq;
///
/// let mut q = Sqlq::new("postgres", true);
/// let select = q.select(["id", "u.name AS n"]);
/// let from = q.from("users AS u");
/// let active = q.compare("u.active", "=", true);
///
/// let sql = Sqlq::query([select, from, Sqlq::where_([active])]).to_string();
/// assert_eq!(
///     sql,
///     r#"SELECT "id", "u"."name" AS "n" FROM "users" AS "u" WHERE ("u"."active" = TRUE)"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sqlq {
	formatter: Formatter,
	policy: EscapePolicy,
}

impl Sqlq {
	/// Create a session.
	///
	/// `dialect` is matched case-insensitively against `mysql`, `postgres`
	/// and `sqlite3`; anything else silently selects MySQL.
	pub fn new(dialect: &str, escape: bool) -> Self {
		Self::with_dialect(Dialect::from_name(dialect), escape)
	}

	/// Create a session, rejecting unknown dialect names.
	///
	/// # Errors
	///
	/// Returns [`QueryError::UnknownDialect`](crate::QueryError::UnknownDialect)
	/// if `dialect` is not a supported name.
	pub fn strict(dialect: &str, escape: bool) -> QueryResult<Self> {
		Ok(Self::with_dialect(dialect.parse()?, escape))
	}

	/// Create a session for an already resolved dialect.
	pub fn with_dialect(dialect: Dialect, escape: bool) -> Self {
		Self {
			formatter: Formatter::new(dialect),
			policy: EscapePolicy::new(escape),
		}
	}

	/// The target dialect.
	pub fn dialect(&self) -> Dialect {
		self.formatter.dialect()
	}

	/// The stateless formatter behind this session.
	pub fn formatter(&self) -> Formatter {
		self.formatter
	}

	/// The current escape state.
	pub fn policy(&self) -> &EscapePolicy {
		&self.policy
	}

	/// Whether escaping is enabled.
	pub fn escape_enabled(&self) -> bool {
		self.policy.is_enabled()
	}

	/// Turn escaping on.
	pub fn start_escape(&mut self) {
		tracing::debug!(dialect = %self.dialect(), "escaping enabled");
		self.policy.enable();
	}

	/// Turn escaping off until [`Sqlq::start_escape`] is called.
	pub fn stop_escape(&mut self) {
		tracing::debug!(dialect = %self.dialect(), "escaping disabled");
		self.policy.disable();
	}

	/// Skip escaping for the next formatting call only.
	pub fn skip_escape_once(&mut self) {
		self.policy.skip_next();
	}

	/// Arm the one-shot skip and return `self` for chaining.
	///
	/// # Example
	///
	/// ```rust
	/// use sqlq_query::Sqlq;
	///
	/// let mut q = Sqlq::new("mysql", true);
	/// assert_eq!(q.raw().compare("NOW()", ">", "x"), "(NOW() > 'x')");
	/// ```
	pub fn raw(&mut self) -> &mut Self {
		self.skip_escape_once();
		self
	}

	/// Render a literal with explicit skip arguments.
	///
	/// Escaping is skipped when it is disabled, when `raw` is set, or when
	/// `consume_one_shot` is set and the one-shot skip is armed. The one-shot
	/// skip is cleared by this call either way.
	pub fn format_literal(
		&mut self,
		value: impl Into<Value>,
		raw: bool,
		consume_one_shot: bool,
	) -> String {
		let escaping = self.policy.decide(raw, consume_one_shot);
		self.formatter.literal(&value.into(), escaping)
	}

	/// Render a literal under the session's escape policy.
	///
	/// # Example
	///
	/// ```rust
	/// use sqlq_query::Sqlq;
	///
	/// let mut q = Sqlq::new("mysql", true);
	/// assert_eq!(q.literal("a'b"), r"'a\'b'");
	/// assert_eq!(q.literal(vec![0xabu8, 0xcd]), "0xabcd");
	/// assert_eq!(q.literal(Option::<i32>::None), "NULL");
	/// ```
	pub fn literal(&mut self, value: impl Into<Value>) -> String {
		self.format_literal(value, false, true)
	}

	/// Render identifiers with explicit skip arguments.
	pub fn format_identifier(
		&mut self,
		idents: impl IntoIdents,
		raw: bool,
		consume_one_shot: bool,
	) -> String {
		let escaping = self.policy.decide(raw, consume_one_shot);
		self.formatter.identifiers(&idents.into_idents(), escaping)
	}

	/// Render identifiers under the session's escape policy.
	pub fn identifier(&mut self, idents: impl IntoIdents) -> String {
		self.format_identifier(idents, false, true)
	}

	/// Render an order direction with explicit skip arguments.
	pub fn format_order(&mut self, text: &str, raw: bool, consume_one_shot: bool) -> String {
		let escaping = self.policy.decide(raw, consume_one_shot);
		self.formatter.order(text, escaping)
	}

	/// Render an order direction under the session's escape policy.
	pub fn order(&mut self, text: &str) -> String {
		self.format_order(text, false, true)
	}
}

impl Default for Sqlq {
	/// MySQL with escaping enabled.
	fn default() -> Self {
		Self::with_dialect(Dialect::default(), true)
	}
}
