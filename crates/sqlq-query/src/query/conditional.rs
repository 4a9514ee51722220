//! Picking one fragment out of several alternatives.

use crate::session::Sqlq;

/// An `if` / `else if` / `else` chain over SQL fragments.
///
/// The first branch whose condition holds wins; later branches are ignored.
///
/// # Example
///
/// ```rust
/// use sqlq_query::Sqlq;
///
/// let mut q = Sqlq::new("mysql", true);
/// let newest = q.order_by("created_at", "DESC");
/// let by_name = q.order_by("name", "ASC");
///
/// let sort = "name";
/// let clause = Sqlq::if_(sort == "new", [newest])
///     .else_if(sort == "name", [by_name])
///     .else_(["ORDER BY `id`"]);
/// assert_eq!(clause, "ORDER BY `name` ASC");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "call `else_` to obtain the selected fragment"]
pub struct Condition {
	matched: bool,
	text: String,
}

impl Condition {
	fn new<I, S>(matched: bool, parts: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			matched,
			text: Sqlq::query(parts).to_string(),
		}
	}

	/// Whether some branch has matched so far.
	pub fn is_matched(&self) -> bool {
		self.matched
	}

	/// Take `parts` if no earlier branch matched and `condition` holds.
	pub fn else_if<I, S>(self, condition: bool, parts: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		if self.matched {
			return self;
		}
		Self::new(condition, parts)
	}

	/// The text of the matched branch, or `parts` joined if none matched.
	pub fn else_<I, S>(self, parts: I) -> String
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		if self.matched {
			return self.text;
		}
		Sqlq::query(parts).to_string()
	}
}

impl Sqlq {
	/// Start a conditional chain with `parts` as the first branch.
	pub fn if_<I, S>(condition: bool, parts: I) -> Condition
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Condition::new(condition, parts)
	}
}
