//! SELECT-side clauses: projections, sources, grouping, ordering, pagination
//! and set operations.

use crate::{
	session::Sqlq,
	types::{IdentArg, IntoIdents},
};

fn is_single_asterisk(columns: &[IdentArg]) -> bool {
	matches!(columns, [only] if only.is_asterisk())
}

impl Sqlq {
	/// `SELECT <columns>`; a lone `*` renders as `SELECT *`.
	///
	/// # Example
	///
	/// ```rust
	/// use sqlq_query::Sqlq;
	///
	/// let mut q = Sqlq::new("mysql", true);
	/// assert_eq!(q.select(["id", "name"]), "SELECT `id`, `name`");
	/// assert_eq!(q.select("*"), "SELECT *");
	/// ```
	pub fn select(&mut self, columns: impl IntoIdents) -> String {
		let columns = columns.into_idents();
		if is_single_asterisk(&columns) {
			return "SELECT *".to_string();
		}
		format!("SELECT {}", self.identifier(columns))
	}

	/// `SELECT DISTINCT <columns>`; a lone `*` renders as `SELECT DISTINCT *`.
	pub fn select_distinct(&mut self, columns: impl IntoIdents) -> String {
		let columns = columns.into_idents();
		if is_single_asterisk(&columns) {
			return "SELECT DISTINCT *".to_string();
		}
		format!("SELECT DISTINCT {}", self.identifier(columns))
	}

	/// `SELECT COUNT(<column>)`.
	pub fn count(&mut self, column: impl Into<IdentArg>) -> String {
		let column = column.into();
		if column.is_asterisk() {
			return "SELECT COUNT(*)".to_string();
		}
		format!("SELECT COUNT({})", self.identifier(column))
	}

	/// `SELECT COUNT(DISTINCT <column>)`.
	pub fn count_distinct(&mut self, column: impl Into<IdentArg>) -> String {
		let column = column.into();
		if column.is_asterisk() {
			return "SELECT COUNT(DISTINCT *)".to_string();
		}
		format!("SELECT COUNT(DISTINCT {})", self.identifier(column))
	}

	/// `INTO <table>`.
	pub fn into_table(&mut self, table: impl Into<IdentArg>) -> String {
		format!("INTO {}", self.identifier(table.into()))
	}

	/// `FROM <tables>`.
	pub fn from(&mut self, tables: impl IntoIdents) -> String {
		format!("FROM {}", self.identifier(tables))
	}

	/// `GROUP BY <columns>`.
	pub fn group_by(&mut self, columns: impl IntoIdents) -> String {
		format!("GROUP BY {}", self.identifier(columns))
	}

	/// `ORDER BY <column> <direction>`.
	///
	/// The direction goes through [`Sqlq::order`], so unknown text becomes
	/// `ASC` while escaping applies. If it renders empty (raw empty text), it
	/// is omitted.
	///
	/// # Example
	///
	/// ```rust
	/// use sqlq_query::Sqlq;
	///
	/// let mut q = Sqlq::new("sqlite3", true);
	/// assert_eq!(q.order_by("created_at", "desc"), r#"ORDER BY "created_at" DESC"#);
	/// assert_eq!(q.order_by("id", "sideways"), r#"ORDER BY "id" ASC"#);
	/// ```
	pub fn order_by(&mut self, column: impl Into<IdentArg>, order: &str) -> String {
		let column = self.identifier(column.into());
		let order = self.order(order);
		if order.is_empty() {
			return format!("ORDER BY {column}");
		}
		format!("ORDER BY {column} {order}")
	}

	/// `LIMIT <n>`.
	pub fn limit(&mut self, value: u64) -> String {
		format!("LIMIT {}", self.literal(value))
	}

	/// `OFFSET <n>`.
	pub fn offset(&mut self, value: u64) -> String {
		format!("OFFSET {}", self.literal(value))
	}

	/// `LIMIT <per_page> OFFSET <(page - 1) * per_page>`, pages counted from 1.
	///
	/// Page 0 is treated as page 1.
	///
	/// # Example
	///
	/// ```rust
	/// use sqlq_query::Sqlq;
	///
	/// let mut q = Sqlq::default();
	/// assert_eq!(q.paginate(3, 20), "LIMIT 20 OFFSET 40");
	/// ```
	pub fn paginate(&mut self, page: u64, per_page: u64) -> String {
		let offset = page.saturating_sub(1).saturating_mul(per_page);
		let limit = self.limit(per_page);
		let offset = self.offset(offset);
		format!("{limit} {offset}")
	}

	/// Statements joined with ` UNION `.
	pub fn union<I, S>(statements: I) -> String
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		join_statements(statements, " UNION ")
	}

	/// Statements joined with ` UNION ALL `.
	pub fn union_all<I, S>(statements: I) -> String
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		join_statements(statements, " UNION ALL ")
	}
}

fn join_statements<I, S>(statements: I, separator: &str) -> String
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	statements
		.into_iter()
		.map(|s| s.as_ref().to_string())
		.collect::<Vec<_>>()
		.join(separator)
}

#[cfg(test)]
mod tests {
	use crate::{session::Sqlq, types::Ident};
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	#[case::mysql("mysql", "SELECT `a`, `t`.`b` AS `c`")]
	#[case::postgres("postgres", r#"SELECT "a", "t"."b" AS "c""#)]
	fn test_select(#[case] dialect: &str, #[case] expected: &str) {
		let mut q = Sqlq::new(dialect, true);
		assert_eq!(q.select(["a", "t.b AS c"]), expected);
	}

	#[rstest]
	fn test_select_asterisk_variants() {
		let mut q = Sqlq::new("mysql", true);
		assert_eq!(q.select("*"), "SELECT *");
		assert_eq!(q.select(vec!["*"]), "SELECT *");
		assert_eq!(q.select_distinct("*"), "SELECT DISTINCT *");
		assert_eq!(q.select("t.*"), "SELECT `t`.*");
		// `*` among other columns is an ordinary identifier
		assert_eq!(q.select(["*", "id"]), "SELECT `*`, `id`");
	}

	#[rstest]
	fn test_select_asterisk_does_not_consume_one_shot() {
		let mut q = Sqlq::new("mysql", true);
		q.skip_escape_once();
		assert_eq!(q.select("*"), "SELECT *");
		assert_eq!(q.from("COUNT(1)"), "FROM COUNT(1)");
	}

	#[rstest]
	fn test_select_distinct() {
		let mut q = Sqlq::new("sqlite3", true);
		assert_eq!(q.select_distinct(["city"]), r#"SELECT DISTINCT "city""#);
	}

	#[rstest]
	fn test_count() {
		let mut q = Sqlq::new("postgres", true);
		assert_eq!(q.count("*"), "SELECT COUNT(*)");
		assert_eq!(q.count("id"), r#"SELECT COUNT("id")"#);
		assert_eq!(q.count_distinct("*"), "SELECT COUNT(DISTINCT *)");
		assert_eq!(q.count_distinct("u.email"), r#"SELECT COUNT(DISTINCT "u"."email")"#);
	}

	#[rstest]
	fn test_into_from_group_by() {
		let mut q = Sqlq::new("mysql", true);
		assert_eq!(q.into_table("archive"), "INTO `archive`");
		assert_eq!(q.from(["users AS u", "posts"]), "FROM `users` AS `u`, `posts`");
		assert_eq!(q.group_by(vec!["a", "b"]), "GROUP BY `a`, `b`");
		assert_eq!(
			q.from(Ident::name("weird.table")),
			"FROM `weird.table`"
		);
	}

	#[rstest]
	fn test_order_by() {
		let mut q = Sqlq::new("mysql", true);
		assert_eq!(q.order_by("name", "DESC"), "ORDER BY `name` DESC");
		assert_eq!(q.order_by("name", "; DROP"), "ORDER BY `name` ASC");
	}

	#[rstest]
	fn test_order_by_with_escaping_disabled() {
		let mut q = Sqlq::new("mysql", false);
		assert_eq!(q.order_by("FIELD(id, 3, 1)", ""), "ORDER BY FIELD(id, 3, 1)");
		assert_eq!(q.order_by("id", "desc NULLS LAST"), "ORDER BY id desc NULLS LAST");
	}

	#[rstest]
	fn test_limit_offset_paginate() {
		let mut q = Sqlq::new("postgres", true);
		assert_eq!(q.limit(10), "LIMIT 10");
		assert_eq!(q.offset(5), "OFFSET 5");
		assert_eq!(q.paginate(1, 25), "LIMIT 25 OFFSET 0");
		assert_eq!(q.paginate(4, 25), "LIMIT 25 OFFSET 75");
		assert_eq!(q.paginate(0, 25), "LIMIT 25 OFFSET 0");
	}

	#[rstest]
	fn test_union() {
		assert_eq!(
			Sqlq::union(["SELECT 1", "SELECT 2", "SELECT 3"]),
			"SELECT 1 UNION SELECT 2 UNION SELECT 3"
		);
		assert_eq!(
			Sqlq::union_all(vec!["SELECT a".to_string(), "SELECT b".to_string()]),
			"SELECT a UNION ALL SELECT b"
		);
		assert_eq!(Sqlq::union(Vec::<String>::new()), "");
	}
}
