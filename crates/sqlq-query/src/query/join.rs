//! JOIN clauses.

use std::fmt;

use crate::{session::Sqlq, types::IdentArg};

/// Join type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JoinType {
	/// `JOIN`
	#[default]
	Join,
	/// `INNER JOIN`
	InnerJoin,
	/// `LEFT JOIN`
	LeftJoin,
	/// `LEFT OUTER JOIN`
	LeftOuterJoin,
	/// `RIGHT JOIN`
	RightJoin,
	/// `RIGHT OUTER JOIN`
	RightOuterJoin,
	/// `FULL JOIN`
	FullJoin,
	/// `FULL OUTER JOIN`
	FullOuterJoin,
}

impl JoinType {
	/// The SQL keyword(s) for this join type.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Join => "JOIN",
			Self::InnerJoin => "INNER JOIN",
			Self::LeftJoin => "LEFT JOIN",
			Self::LeftOuterJoin => "LEFT OUTER JOIN",
			Self::RightJoin => "RIGHT JOIN",
			Self::RightOuterJoin => "RIGHT OUTER JOIN",
			Self::FullJoin => "FULL JOIN",
			Self::FullOuterJoin => "FULL OUTER JOIN",
		}
	}
}

impl fmt::Display for JoinType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Sqlq {
	/// `<kind> <table> ON <left>=<right>`.
	///
	/// # Example
	///
	/// ```rust
	/// use sqlq_query::{JoinType, Sqlq};
	///
	/// let mut q = Sqlq::new("postgres", true);
	/// assert_eq!(
	///     q.join_with(JoinType::LeftJoin, "posts AS p", "p.user_id", "u.id"),
	///     r#"LEFT JOIN "posts" AS "p" ON "p"."user_id"="u"."id""#
	/// );
	/// ```
	pub fn join_with(
		&mut self,
		kind: JoinType,
		table: impl Into<IdentArg>,
		left: impl Into<IdentArg>,
		right: impl Into<IdentArg>,
	) -> String {
		let table = self.identifier(table.into());
		let left = self.identifier(left.into());
		let right = self.identifier(right.into());
		format!("{kind} {table} ON {left}={right}")
	}

	/// `JOIN <table> ON <left>=<right>`.
	pub fn join(
		&mut self,
		table: impl Into<IdentArg>,
		left: impl Into<IdentArg>,
		right: impl Into<IdentArg>,
	) -> String {
		self.join_with(JoinType::Join, table, left, right)
	}

	/// `INNER JOIN <table> ON <left>=<right>`.
	pub fn inner_join(
		&mut self,
		table: impl Into<IdentArg>,
		left: impl Into<IdentArg>,
		right: impl Into<IdentArg>,
	) -> String {
		self.join_with(JoinType::InnerJoin, table, left, right)
	}

	/// `LEFT JOIN <table> ON <left>=<right>`.
	pub fn left_join(
		&mut self,
		table: impl Into<IdentArg>,
		left: impl Into<IdentArg>,
		right: impl Into<IdentArg>,
	) -> String {
		self.join_with(JoinType::LeftJoin, table, left, right)
	}

	/// `LEFT OUTER JOIN <table> ON <left>=<right>`.
	pub fn left_outer_join(
		&mut self,
		table: impl Into<IdentArg>,
		left: impl Into<IdentArg>,
		right: impl Into<IdentArg>,
	) -> String {
		self.join_with(JoinType::LeftOuterJoin, table, left, right)
	}

	/// `RIGHT JOIN <table> ON <left>=<right>`.
	pub fn right_join(
		&mut self,
		table: impl Into<IdentArg>,
		left: impl Into<IdentArg>,
		right: impl Into<IdentArg>,
	) -> String {
		self.join_with(JoinType::RightJoin, table, left, right)
	}

	/// `RIGHT OUTER JOIN <table> ON <left>=<right>`.
	pub fn right_outer_join(
		&mut self,
		table: impl Into<IdentArg>,
		left: impl Into<IdentArg>,
		right: impl Into<IdentArg>,
	) -> String {
		self.join_with(JoinType::RightOuterJoin, table, left, right)
	}

	/// `FULL JOIN <table> ON <left>=<right>`.
	pub fn full_join(
		&mut self,
		table: impl Into<IdentArg>,
		left: impl Into<IdentArg>,
		right: impl Into<IdentArg>,
	) -> String {
		self.join_with(JoinType::FullJoin, table, left, right)
	}

	/// `FULL OUTER JOIN <table> ON <left>=<right>`.
	pub fn full_outer_join(
		&mut self,
		table: impl Into<IdentArg>,
		left: impl Into<IdentArg>,
		right: impl Into<IdentArg>,
	) -> String {
		self.join_with(JoinType::FullOuterJoin, table, left, right)
	}
}
