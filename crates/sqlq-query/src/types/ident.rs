//! Identifier types for SQL fragments.
//!
//! This module provides types for referencing tables and columns:
//!
//! - [`Ident`]: structured identifier (bare, qualified, `prefix.*`, aliased)
//! - [`IdentArg`]: one identifier argument, either text or a pre-built [`Ident`]
//! - [`IntoIdents`]: conversion trait for one or many identifier arguments

use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::error::{QueryError, QueryResult};

/// `<expr> AS <alias>`, case-insensitive.
///
/// Both groups are greedy, so the split happens at the last ` AS ` of the
/// leftmost match.
static ALIAS_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)(.*) AS (.*)").expect("alias pattern is a valid regex"));

/// A structured SQL identifier.
///
/// Identifiers are either built directly by the caller or parsed from text
/// with [`Ident::parse`]. Building them directly skips all text splitting, so
/// a name containing a dot or the word `AS` stays a single quoted name.
///
/// # Example
///
/// ```rust
/// use sqlq_query::Ident;
///
/// let parsed = Ident::parse("users.name AS n");
/// let built = Ident::qualified("users", "name").alias("n");
/// assert_eq!(parsed, built);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ident {
	/// Bare name (e.g., `name`)
	Name(String),
	/// Qualified name (e.g., `users.name`)
	Qualified(Box<Ident>, Box<Ident>),
	/// Qualified asterisk (e.g., `users.*`); the `*` is never quoted
	QualifiedAsterisk(Box<Ident>),
	/// Aliased expression (e.g., `users.name AS n`)
	Aliased(Box<Ident>, Box<Ident>),
}

impl Ident {
	/// Create a bare identifier. The name is used as-is, dots included.
	pub fn name(name: impl Into<String>) -> Self {
		Self::Name(name.into())
	}

	/// Create a `prefix.suffix` identifier.
	///
	/// # Example
	///
	/// ```rust
	/// use sqlq_query::Ident;
	///
	/// let ident = Ident::qualified("users", "id");
	/// assert_eq!(ident.to_string(), "users.id");
	/// ```
	pub fn qualified(prefix: impl Into<Ident>, suffix: impl Into<Ident>) -> Self {
		Self::Qualified(Box::new(prefix.into()), Box::new(suffix.into()))
	}

	/// Create a `prefix.*` identifier.
	pub fn qualified_asterisk(prefix: impl Into<Ident>) -> Self {
		Self::QualifiedAsterisk(Box::new(prefix.into()))
	}

	/// Alias this identifier (`self AS alias`).
	pub fn alias(self, alias: impl Into<Ident>) -> Self {
		Self::Aliased(Box::new(self), Box::new(alias.into()))
	}

	/// Parse identifier text.
	///
	/// The rules are applied recursively:
	///
	/// 1. If the text matches `(?i)(.*) AS (.*)`, both captures are parsed
	///    and joined as an alias. The left group is greedy, so
	///    `a AS b AS c` splits into `a AS b` and `c`.
	/// 2. Otherwise, the text is split on its first dot. A suffix of exactly
	///    `*` yields [`Ident::QualifiedAsterisk`]; anything else is parsed again.
	/// 3. Otherwise, the text is a bare name.
	///
	/// Parsing never fails; see [`Ident::parse_strict`] for validation.
	pub fn parse(text: &str) -> Self {
		if let Some(caps) = ALIAS_RE.captures(text) {
			let expr = caps.get(1).map_or("", |m| m.as_str());
			let alias = caps.get(2).map_or("", |m| m.as_str());
			return Self::parse(expr).alias(Self::parse(alias));
		}

		match text.split_once('.') {
			Some((prefix, "*")) => Self::qualified_asterisk(Self::parse(prefix)),
			Some((prefix, suffix)) => Self::qualified(Self::parse(prefix), Self::parse(suffix)),
			None => Self::Name(text.to_string()),
		}
	}

	/// Parse identifier text, rejecting empty names.
	///
	/// # Errors
	///
	/// Returns [`QueryError::InvalidIdentifier`] if the text, or any
	/// qualified or aliased component of it, is empty.
	///
	/// # Example
	///
	/// ```rust
	/// use sqlq_query::Ident;
	///
	/// assert!(Ident::parse_strict("users.id").is_ok());
	/// assert!(Ident::parse_strict("users.").is_err());
	/// ```
	pub fn parse_strict(text: &str) -> QueryResult<Self> {
		let ident = Self::parse(text);
		if ident.has_empty_name() {
			return Err(QueryError::InvalidIdentifier(text.to_string()));
		}
		Ok(ident)
	}

	fn has_empty_name(&self) -> bool {
		match self {
			Self::Name(name) => name.is_empty(),
			Self::Qualified(prefix, suffix) | Self::Aliased(prefix, suffix) => {
				prefix.has_empty_name() || suffix.has_empty_name()
			}
			Self::QualifiedAsterisk(prefix) => prefix.has_empty_name(),
		}
	}
}

impl fmt::Display for Ident {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Name(name) => f.write_str(name),
			Self::Qualified(prefix, suffix) => write!(f, "{prefix}.{suffix}"),
			Self::QualifiedAsterisk(prefix) => write!(f, "{prefix}.*"),
			Self::Aliased(expr, alias) => write!(f, "{expr} AS {alias}"),
		}
	}
}

impl From<&str> for Ident {
	fn from(name: &str) -> Self {
		Self::Name(name.to_string())
	}
}

impl From<String> for Ident {
	fn from(name: String) -> Self {
		Self::Name(name)
	}
}

/// One identifier argument to the formatter.
///
/// Text is kept verbatim until formatting: it is parsed with [`Ident::parse`]
/// when escaping applies, and passed through untouched when it does not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdentArg {
	/// Identifier text, parsed when formatted
	Text(String),
	/// Pre-built identifier
	Ident(Ident),
}

impl IdentArg {
	/// The structured form of this argument.
	pub fn to_ident(&self) -> Ident {
		match self {
			Self::Text(text) => Ident::parse(text),
			Self::Ident(ident) => ident.clone(),
		}
	}

	/// Returns `true` if this argument is exactly `*`.
	pub fn is_asterisk(&self) -> bool {
		match self {
			Self::Text(text) => text == "*",
			Self::Ident(Ident::Name(name)) => name == "*",
			Self::Ident(_) => false,
		}
	}
}

/// Text as written, or the canonical text of a built identifier.
impl fmt::Display for IdentArg {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text(text) => f.write_str(text),
			Self::Ident(ident) => fmt::Display::fmt(ident, f),
		}
	}
}

impl From<&str> for IdentArg {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl From<String> for IdentArg {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<&String> for IdentArg {
	fn from(text: &String) -> Self {
		Self::Text(text.clone())
	}
}

impl From<Ident> for IdentArg {
	fn from(ident: Ident) -> Self {
		Self::Ident(ident)
	}
}

/// Conversion trait for one or more identifier arguments.
///
/// Single values produce one argument; vectors, arrays and slices produce one
/// argument per element, rendered comma-separated.
pub trait IntoIdents {
	/// Convert into a list of identifier arguments.
	fn into_idents(self) -> Vec<IdentArg>;
}

impl IntoIdents for &str {
	fn into_idents(self) -> Vec<IdentArg> {
		vec![self.into()]
	}
}

impl IntoIdents for String {
	fn into_idents(self) -> Vec<IdentArg> {
		vec![self.into()]
	}
}

impl IntoIdents for &String {
	fn into_idents(self) -> Vec<IdentArg> {
		vec![self.into()]
	}
}

impl IntoIdents for Ident {
	fn into_idents(self) -> Vec<IdentArg> {
		vec![self.into()]
	}
}

impl IntoIdents for IdentArg {
	fn into_idents(self) -> Vec<IdentArg> {
		vec![self]
	}
}

impl<T: Into<IdentArg>> IntoIdents for Vec<T> {
	fn into_idents(self) -> Vec<IdentArg> {
		self.into_iter().map(Into::into).collect()
	}
}

impl<T: Into<IdentArg>, const N: usize> IntoIdents for [T; N] {
	fn into_idents(self) -> Vec<IdentArg> {
		self.into_iter().map(Into::into).collect()
	}
}

impl<T: Into<IdentArg> + Clone> IntoIdents for &[T] {
	fn into_idents(self) -> Vec<IdentArg> {
		self.iter().cloned().map(Into::into).collect()
	}
}
