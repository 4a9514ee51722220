//! Value types for SQL literals.
//!
//! - [`Value`]: the closed set of literal kinds the formatter understands
//! - `From` conversions from Rust primitives, strings, byte buffers, chrono
//!   timestamps, `Option` (mapping `None` to `NULL`) and `Vec<Value>`

mod core;

pub use self::core::Value;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

macro_rules! impl_from_primitive {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for Value {
				fn from(v: $ty) -> Self {
					Self::$variant(v)
				}
			}
		)*
	};
}

impl_from_primitive! {
	bool => Bool,
	i8 => TinyInt,
	i16 => SmallInt,
	i32 => Int,
	i64 => BigInt,
	u8 => TinyUnsigned,
	u16 => SmallUnsigned,
	u32 => Unsigned,
	u64 => BigUnsigned,
	f32 => Float,
	f64 => Double,
	String => String,
}

impl From<isize> for Value {
	fn from(v: isize) -> Self {
		Self::BigInt(v as i64)
	}
}

impl From<usize> for Value {
	fn from(v: usize) -> Self {
		Self::BigUnsigned(v as u64)
	}
}

impl From<char> for Value {
	fn from(v: char) -> Self {
		Self::String(v.to_string())
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Self::String(v.to_string())
	}
}

impl From<&String> for Value {
	fn from(v: &String) -> Self {
		Self::String(v.clone())
	}
}

impl From<std::borrow::Cow<'_, str>> for Value {
	fn from(v: std::borrow::Cow<'_, str>) -> Self {
		Self::String(v.into_owned())
	}
}

impl From<Vec<u8>> for Value {
	fn from(v: Vec<u8>) -> Self {
		Self::Bytes(v)
	}
}

impl From<&[u8]> for Value {
	fn from(v: &[u8]) -> Self {
		Self::Bytes(v.to_vec())
	}
}

impl<const N: usize> From<[u8; N]> for Value {
	fn from(v: [u8; N]) -> Self {
		Self::Bytes(v.to_vec())
	}
}

impl From<DateTime<Utc>> for Value {
	fn from(v: DateTime<Utc>) -> Self {
		Self::Timestamp(v.fixed_offset())
	}
}

impl From<DateTime<Local>> for Value {
	fn from(v: DateTime<Local>) -> Self {
		Self::Timestamp(v.fixed_offset())
	}
}

impl From<DateTime<chrono::FixedOffset>> for Value {
	fn from(v: DateTime<chrono::FixedOffset>) -> Self {
		Self::Timestamp(v)
	}
}

/// Naive timestamps carry no offset and are taken to be UTC.
impl From<NaiveDateTime> for Value {
	fn from(v: NaiveDateTime) -> Self {
		Self::Timestamp(Utc.from_utc_datetime(&v).fixed_offset())
	}
}

impl From<Vec<Value>> for Value {
	fn from(v: Vec<Value>) -> Self {
		Self::List(v)
	}
}

impl From<()> for Value {
	fn from(_: ()) -> Self {
		Self::Null
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(v: Option<T>) -> Self {
		v.map_or(Self::Null, Into::into)
	}
}
