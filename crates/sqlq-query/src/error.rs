//! Error types for the strict formatting surface.
//!
//! The default formatting API never fails: unknown dialects, order directions
//! and identifier shapes all fall back to a sensible rendering. The types in
//! this module are only returned by the opt-in strict constructors and parsers
//! ([`Sqlq::strict`](crate::Sqlq::strict), [`Dialect`](crate::Dialect)'s
//! `FromStr`, [`Order`](crate::Order)'s `FromStr` and
//! [`Ident::parse_strict`](crate::Ident::parse_strict)).

/// Errors reported by strict parsing.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
	/// The dialect name is not one of the supported backends.
	#[error("unknown SQL dialect: {0:?} (expected mysql, postgres or sqlite3)")]
	UnknownDialect(String),

	/// The order direction is neither `ASC` nor `DESC`.
	#[error("unknown order direction: {0:?} (expected ASC or DESC)")]
	UnknownOrder(String),

	/// The identifier text is empty or has an empty qualified component.
	#[error("invalid identifier: {0:?}")]
	InvalidIdentifier(String),
}

/// Result alias for strict parsing.
pub type QueryResult<T> = Result<T, QueryError>;
