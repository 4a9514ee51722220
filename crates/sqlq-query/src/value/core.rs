//! Core Value enum definition.

use std::fmt;

use chrono::{DateTime, FixedOffset};

/// A value that can be rendered as a SQL literal.
///
/// This is a closed set: every value a caller wants to inline into SQL text is
/// classified up front, either explicitly or through one of the `From`
/// conversions. Types that have no variant of their own go through
/// [`Value::display`], which stringifies them and treats the result as a
/// string literal.
///
/// ## Example
///
/// ```rust
/// use sqlq_query::Value;
///
/// let int_val = Value::from(42);
/// let null_val = Value::from(Option::<i32>::None);
/// let list_val = Value::list([1, 2, 3]);
///
/// assert_eq!(int_val, Value::Int(42));
/// assert!(null_val.is_null());
/// assert_eq!(list_val.to_string(), "1, 2, 3");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
	/// Absence of a value, rendered as `NULL`
	Null,
	/// Boolean value
	Bool(bool),

	// -------------------------------------------------------------------------
	// Integers
	// -------------------------------------------------------------------------
	/// 8-bit signed integer
	TinyInt(i8),
	/// 16-bit signed integer
	SmallInt(i16),
	/// 32-bit signed integer
	Int(i32),
	/// 64-bit signed integer
	BigInt(i64),
	/// 8-bit unsigned integer
	TinyUnsigned(u8),
	/// 16-bit unsigned integer
	SmallUnsigned(u16),
	/// 32-bit unsigned integer
	Unsigned(u32),
	/// 64-bit unsigned integer
	BigUnsigned(u64),

	// -------------------------------------------------------------------------
	// Floating point
	// -------------------------------------------------------------------------
	/// 32-bit floating point
	Float(f32),
	/// 64-bit floating point
	Double(f64),

	// -------------------------------------------------------------------------
	// Text, binary and time
	// -------------------------------------------------------------------------
	/// String value
	String(String),
	/// Binary data
	Bytes(Vec<u8>),
	/// Point in time with its original offset; literals normalize it to UTC
	Timestamp(DateTime<FixedOffset>),

	// -------------------------------------------------------------------------
	// Sequences
	// -------------------------------------------------------------------------
	/// Heterogeneous list of values, rendered comma-separated
	List(Vec<Value>),
}

impl Value {
	/// Returns `true` if this value is null.
	///
	/// # Example
	///
	/// ```rust
	/// use sqlq_query::Value;
	///
	/// assert!(Value::Null.is_null());
	/// assert!(!Value::Int(42).is_null());
	/// ```
	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Returns `true` for integer and floating point variants.
	#[must_use]
	pub fn is_numeric(&self) -> bool {
		matches!(
			self,
			Self::TinyInt(_)
				| Self::SmallInt(_)
				| Self::Int(_)
				| Self::BigInt(_)
				| Self::TinyUnsigned(_)
				| Self::SmallUnsigned(_)
				| Self::Unsigned(_)
				| Self::BigUnsigned(_)
				| Self::Float(_)
				| Self::Double(_)
		)
	}

	/// Build a list value from anything convertible to values.
	///
	/// # Example
	///
	/// ```rust
	/// use sqlq_query::Value;
	///
	/// let v = Value::list(["a", "b"]);
	/// assert_eq!(v, Value::List(vec![Value::from("a"), Value::from("b")]));
	/// ```
	pub fn list<I, T>(items: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<Value>,
	{
		Self::List(items.into_iter().map(Into::into).collect())
	}

	/// Stringify any displayable value and treat it as a string literal.
	///
	/// This is the fallback for types without a dedicated variant (UUIDs,
	/// decimals, user types): they are quoted and escaped like text.
	///
	/// # Example
	///
	/// ```rust
	/// use sqlq_query::Value;
	///
	/// let v = Value::display(std::net::Ipv4Addr::LOCALHOST);
	/// assert_eq!(v, Value::String("127.0.0.1".to_string()));
	/// ```
	pub fn display<T: fmt::Display>(value: T) -> Self {
		Self::String(value.to_string())
	}
}

/// Plain stringification, used when escaping is skipped.
///
/// No quoting or escaping happens here: strings are written verbatim, bytes as
/// (lossy) UTF-8 text, null as `NULL`, and list elements joined with `", "`.
impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => f.write_str("NULL"),
			Self::Bool(v) => write!(f, "{v}"),
			Self::TinyInt(v) => write!(f, "{v}"),
			Self::SmallInt(v) => write!(f, "{v}"),
			Self::Int(v) => write!(f, "{v}"),
			Self::BigInt(v) => write!(f, "{v}"),
			Self::TinyUnsigned(v) => write!(f, "{v}"),
			Self::SmallUnsigned(v) => write!(f, "{v}"),
			Self::Unsigned(v) => write!(f, "{v}"),
			Self::BigUnsigned(v) => write!(f, "{v}"),
			Self::Float(v) => write!(f, "{v}"),
			Self::Double(v) => write!(f, "{v}"),
			Self::String(v) => f.write_str(v),
			Self::Bytes(v) => f.write_str(&String::from_utf8_lossy(v)),
			Self::Timestamp(v) => write!(f, "{}", v.format("%Y-%m-%d %H:%M:%S%.6f %:z")),
			Self::List(values) => {
				for (i, value) in values.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					fmt::Display::fmt(value, f)?;
				}
				Ok(())
			}
		}
	}
}

impl Default for Value {
	/// Returns the default value, which is `NULL`.
	fn default() -> Self {
		Self::Null
	}
}
