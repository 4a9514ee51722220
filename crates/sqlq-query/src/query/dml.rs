//! INSERT, UPDATE and DELETE.

use crate::{session::Sqlq, types::IdentArg, value::Value};

impl Sqlq {
	/// `INSERT INTO <table> (<columns>) VALUES (<values>)`.
	///
	/// Columns keep the order in which the pairs are given.
	///
	/// # Example
	///
	/// ```rust
	/// use sqlq_query::{Sqlq, Value};
	///
	/// let mut q = Sqlq::new("postgres", true);
	/// assert_eq!(
	///     q.insert_into("users", [("name", Value::from("Ann")), ("admin", Value::from(false))]),
	///     r#"INSERT INTO "users" ("name", "admin") VALUES ('Ann', FALSE)"#
	/// );
	/// ```
	pub fn insert_into<I, K, V>(&mut self, table: impl Into<IdentArg>, columns: I) -> String
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<IdentArg>,
		V: Into<Value>,
	{
		let table = self.identifier(table.into());
		let (names, values): (Vec<String>, Vec<String>) = columns
			.into_iter()
			.map(|(column, value)| (self.identifier(column.into()), self.literal(value)))
			.unzip();
		format!(
			"INSERT INTO {table} ({}) VALUES ({})",
			names.join(", "),
			values.join(", ")
		)
	}

	/// `UPDATE <table> SET <column>=<value>, ...`.
	pub fn update<I, K, V>(&mut self, table: impl Into<IdentArg>, columns: I) -> String
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<IdentArg>,
		V: Into<Value>,
	{
		let table = self.identifier(table.into());
		let assignments: Vec<String> = columns
			.into_iter()
			.map(|(column, value)| {
				let column = self.identifier(column.into());
				format!("{column}={}", self.literal(value))
			})
			.collect();
		format!("UPDATE {table} SET {}", assignments.join(", "))
	}

	/// `DELETE FROM <table>`.
	pub fn delete(&mut self, table: impl Into<IdentArg>) -> String {
		format!("DELETE FROM {}", self.identifier(table.into()))
	}
}
