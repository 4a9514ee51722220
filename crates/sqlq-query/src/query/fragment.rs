//! Composing clause fragments into statements.

use std::fmt;

use crate::session::Sqlq;

/// An ordered list of SQL text fragments.
///
/// `Display` joins the fragments with a single space, so a statement can be
/// built clause by clause and rendered once at the end.
///
/// # Example
///
/// ```rust
/// use sqlq_query::{Query, Sqlq};
///
/// let mut q = Sqlq::new("sqlite3", true);
/// let mut stmt: Query = Sqlq::query([q.select("*"), q.from("users")]);
/// stmt.push([q.limit(1)]);
/// assert_eq!(stmt.to_string(), r#"SELECT * FROM "users" LIMIT 1"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Query {
	parts: Vec<String>,
}

impl Query {
	/// An empty query.
	pub fn new() -> Self {
		Self::default()
	}

	/// Add fragments at the end.
	pub fn push<I, S>(&mut self, parts: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.parts.extend(parts.into_iter().map(Into::into));
		self
	}

	/// Add the fragments of other queries at the end, in order.
	pub fn append<I>(&mut self, queries: I) -> &mut Self
	where
		I: IntoIterator<Item = Query>,
	{
		for query in queries {
			self.parts.extend(query.parts);
		}
		self
	}

	/// The fragments, in order.
	pub fn parts(&self) -> &[String] {
		&self.parts
	}

	/// Whether no fragments have been added.
	pub fn is_empty(&self) -> bool {
		self.parts.is_empty()
	}
}

impl fmt::Display for Query {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.parts.join(" "))
	}
}

impl From<Query> for String {
	fn from(query: Query) -> Self {
		query.to_string()
	}
}

impl<S: Into<String>> FromIterator<S> for Query {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self {
			parts: iter.into_iter().map(Into::into).collect(),
		}
	}
}

impl Sqlq {
	/// Start a [`Query`] from fragments.
	pub fn query<I, S>(parts: I) -> Query
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		parts.into_iter().collect()
	}

	/// Merge several queries into a new one.
	///
	/// # Example
	///
	/// ```rust
	/// use sqlq_query::Sqlq;
	///
	/// let head = Sqlq::query(["SELECT *", "FROM t"]);
	/// let tail = Sqlq::query(["LIMIT 5"]);
	/// assert_eq!(Sqlq::concat([head, tail]).to_string(), "SELECT * FROM t LIMIT 5");
	/// ```
	pub fn concat<I>(queries: I) -> Query
	where
		I: IntoIterator<Item = Query>,
	{
		let mut merged = Query::new();
		merged.append(queries);
		merged
	}
}
