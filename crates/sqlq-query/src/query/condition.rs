//! WHERE clauses and the predicates that go into them.

use crate::{session::Sqlq, types::IdentArg, value::Value};

/// Comparison operators accepted by [`Sqlq::compare`].
const COMPARISON_OPERATORS: [&str; 7] = ["<", ">", "<=", ">=", "=", "<>", "!="];

fn join_conditions<I, S>(conditions: I, separator: &str) -> String
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let conditions: Vec<String> = conditions
		.into_iter()
		.filter(|c| !c.as_ref().is_empty())
		.map(|c| c.as_ref().to_string())
		.collect();

	match conditions.as_slice() {
		[] => String::new(),
		[only] => only.clone(),
		_ => format!("({})", conditions.join(separator)),
	}
}

impl Sqlq {
	/// `WHERE ` followed by the conditions combined with `AND`.
	///
	/// # Example
	///
	/// ```rust
	/// use sqlq_query::Sqlq;
	///
	/// let mut q = Sqlq::new("mysql", true);
	/// let age = q.compare("age", ">=", 18);
	/// let name = q.is_not_null("name");
	/// assert_eq!(
	///     Sqlq::where_([age, name]),
	///     "WHERE ((`age` >= 18) AND (`name` IS NOT NULL))"
	/// );
	/// ```
	pub fn where_<I, S>(conditions: I) -> String
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		format!("WHERE {}", Self::conditions(conditions))
	}

	/// Combine conditions with `AND`.
	///
	/// Empty strings are dropped. No conditions give an empty string, a single
	/// condition is returned as is, and several are wrapped in parentheses.
	pub fn conditions<I, S>(conditions: I) -> String
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		join_conditions(conditions, " AND ")
	}

	/// Combine conditions with `OR`, following the rules of [`Sqlq::conditions`].
	pub fn or_conditions<I, S>(conditions: I) -> String
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		join_conditions(conditions, " OR ")
	}

	/// `(<column> <operator> <value>)`.
	///
	/// Operators other than `<`, `>`, `<=`, `>=`, `=`, `<>` and `!=` are
	/// replaced with `=`.
	pub fn compare(
		&mut self,
		column: impl Into<IdentArg>,
		operator: &str,
		value: impl Into<Value>,
	) -> String {
		let operator = if COMPARISON_OPERATORS.contains(&operator) {
			operator
		} else {
			tracing::debug!(operator, "unsupported comparison operator, using `=`");
			"="
		};
		let column = self.identifier(column.into());
		let value = self.literal(value);
		format!("({column} {operator} {value})")
	}

	/// `(<column> BETWEEN <low> AND <high>)`.
	pub fn between(
		&mut self,
		column: impl Into<IdentArg>,
		low: impl Into<Value>,
		high: impl Into<Value>,
	) -> String {
		self.range("BETWEEN", column.into(), low.into(), high.into())
	}

	/// `(<column> NOT BETWEEN <low> AND <high>)`.
	pub fn not_between(
		&mut self,
		column: impl Into<IdentArg>,
		low: impl Into<Value>,
		high: impl Into<Value>,
	) -> String {
		self.range("NOT BETWEEN", column.into(), low.into(), high.into())
	}

	fn range(&mut self, keyword: &str, column: IdentArg, low: Value, high: Value) -> String {
		let column = self.identifier(column);
		let low = self.literal(low);
		let high = self.literal(high);
		format!("({column} {keyword} {low} AND {high})")
	}

	/// `(<column> IS NULL)`.
	pub fn is_null(&mut self, column: impl Into<IdentArg>) -> String {
		format!("({} IS NULL)", self.identifier(column.into()))
	}

	/// `(<column> IS NOT NULL)`.
	pub fn is_not_null(&mut self, column: impl Into<IdentArg>) -> String {
		format!("({} IS NOT NULL)", self.identifier(column.into()))
	}

	/// `(<column> LIKE <pattern>)`.
	///
	/// The first `?` in `pattern` is replaced with the plain text of `value`,
	/// and the result is rendered as a literal.
	///
	/// # Example
	///
	/// ```rust
	/// use sqlq_query::Sqlq;
	///
	/// let mut q = Sqlq::new("postgres", true);
	/// assert_eq!(q.like("name", "%?%", "o'b"), r#"("name" LIKE '%o''b%')"#);
	/// ```
	pub fn like(
		&mut self,
		column: impl Into<IdentArg>,
		pattern: &str,
		value: impl Into<Value>,
	) -> String {
		self.pattern_match("LIKE", column.into(), pattern, value.into())
	}

	/// `(<column> NOT LIKE <pattern>)`, see [`Sqlq::like`].
	pub fn not_like(
		&mut self,
		column: impl Into<IdentArg>,
		pattern: &str,
		value: impl Into<Value>,
	) -> String {
		self.pattern_match("NOT LIKE", column.into(), pattern, value.into())
	}

	fn pattern_match(
		&mut self,
		keyword: &str,
		column: IdentArg,
		pattern: &str,
		value: Value,
	) -> String {
		let pattern = pattern.replacen('?', &value.to_string(), 1);
		let column = self.identifier(column);
		let pattern = self.literal(pattern);
		format!("({column} {keyword} {pattern})")
	}

	/// `(<column> IN (<values>))`.
	///
	/// # Example
	///
	/// ```rust
	/// use sqlq_query::Sqlq;
	///
	/// let mut q = Sqlq::new("sqlite3", true);
	/// assert_eq!(q.in_("id", [1, 2, 3]), r#"("id" IN (1, 2, 3))"#);
	/// ```
	pub fn in_<I, T>(&mut self, column: impl Into<IdentArg>, values: I) -> String
	where
		I: IntoIterator<Item = T>,
		T: Into<Value>,
	{
		self.membership("IN", column.into(), Value::list(values))
	}

	/// `(<column> NOT IN (<values>))`.
	pub fn not_in<I, T>(&mut self, column: impl Into<IdentArg>, values: I) -> String
	where
		I: IntoIterator<Item = T>,
		T: Into<Value>,
	{
		self.membership("NOT IN", column.into(), Value::list(values))
	}

	fn membership(&mut self, keyword: &str, column: IdentArg, values: Value) -> String {
		let column = self.identifier(column);
		let values = self.literal(values);
		format!("({column} {keyword} ({values}))")
	}
}
