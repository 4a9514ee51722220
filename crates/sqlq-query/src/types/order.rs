//! Ordering direction for ORDER BY clauses.

use std::{fmt, str::FromStr};

use crate::error::QueryError;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
	/// Ascending order (default)
	#[default]
	Asc,
	/// Descending order
	Desc,
}

impl Order {
	/// Lenient parse: `ASC`/`DESC` in any case, everything else is [`Order::Asc`].
	///
	/// # Example
	///
	/// ```rust
	/// use sqlq_query::Order;
	///
	/// assert_eq!(Order::from_name("desc"), Order::Desc);
	/// assert_eq!(Order::from_name("sideways"), Order::Asc);
	/// ```
	pub fn from_name(text: &str) -> Self {
		text.parse().unwrap_or_default()
	}

	/// SQL keyword for this direction.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Asc => "ASC",
			Self::Desc => "DESC",
		}
	}
}

impl FromStr for Order {
	type Err = QueryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.eq_ignore_ascii_case("ASC") {
			Ok(Self::Asc)
		} else if s.eq_ignore_ascii_case("DESC") {
			Ok(Self::Desc)
		} else {
			Err(QueryError::UnknownOrder(s.to_string()))
		}
	}
}

impl fmt::Display for Order {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
