//! Layered settings for [`Sqlq`] sessions
//!
//! Settings are merged from several [`ConfigSource`]s in priority order
//! (environment variables > TOML > defaults). Every source may leave any field
//! unset; fields no source sets take their default.

pub mod sources;

use serde::{Deserialize, Serialize};
use sqlq_query::{Dialect, Sqlq};

use crate::error::{ConfigError, ConfigResult};
use sources::{ConfigSource, DefaultSource, EnvSource};

/// Default dialect name.
pub const DEFAULT_DIALECT: &str = "mysql";

/// Default environment variable prefix.
pub const DEFAULT_ENV_PREFIX: &str = "SQLQ_";

/// Construction-time settings of a [`Sqlq`] session.
///
/// # Example
///
/// ```rust
/// use sqlq_conf::SqlqSettings;
///
/// let settings: SqlqSettings = toml::from_str(r#"dialect = "postgres""#).unwrap();
/// assert!(settings.escape);
///
/// let mut q = settings.build();
/// assert_eq!(q.identifier("t.c"), r#""t"."c""#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SqlqSettings {
	/// Dialect name (`mysql`, `postgres`, `sqlite3`)
	pub dialect: String,
	/// Whether escaping starts enabled
	pub escape: bool,
}

impl Default for SqlqSettings {
	fn default() -> Self {
		Self {
			dialect: DEFAULT_DIALECT.to_string(),
			escape: true,
		}
	}
}

impl SqlqSettings {
	/// Start a builder with no sources.
	pub fn builder() -> SettingsBuilder {
		SettingsBuilder::new()
	}

	/// Defaults overridden by `SQLQ_*` environment variables.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::InvalidValue`] if a variable cannot be parsed.
	pub fn from_env() -> ConfigResult<Self> {
		Self::builder()
			.add_source(DefaultSource::new())
			.add_source(EnvSource::new())
			.build()
	}

	/// The configured dialect; unknown names resolve to MySQL.
	pub fn dialect(&self) -> Dialect {
		Dialect::from_name(&self.dialect)
	}

	/// Create a session from these settings.
	pub fn build(&self) -> Sqlq {
		Sqlq::with_dialect(self.dialect(), self.escape)
	}

	/// Create a session, rejecting unknown dialect names.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Query`] wrapping
	/// [`QueryError::UnknownDialect`](sqlq_query::QueryError::UnknownDialect).
	pub fn build_strict(&self) -> ConfigResult<Sqlq> {
		Ok(Sqlq::strict(&self.dialect, self.escape)?)
	}
}

/// Settings as provided by one source, every field optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PartialSettings {
	/// Dialect name, if this source sets one
	pub dialect: Option<String>,
	/// Initial escape flag, if this source sets one
	pub escape: Option<bool>,
}

impl PartialSettings {
	/// Overlay `other` on top of `self`: fields set in `other` win.
	pub fn merge(self, other: PartialSettings) -> Self {
		Self {
			dialect: other.dialect.or(self.dialect),
			escape: other.escape.or(self.escape),
		}
	}

	/// Whether this source sets no field at all.
	pub fn is_empty(&self) -> bool {
		self.dialect.is_none() && self.escape.is_none()
	}

	/// Fill unset fields with defaults.
	pub fn into_settings(self) -> SqlqSettings {
		let defaults = SqlqSettings::default();
		SqlqSettings {
			dialect: self.dialect.unwrap_or(defaults.dialect),
			escape: self.escape.unwrap_or(defaults.escape),
		}
	}
}

impl From<SqlqSettings> for PartialSettings {
	fn from(settings: SqlqSettings) -> Self {
		Self {
			dialect: Some(settings.dialect),
			escape: Some(settings.escape),
		}
	}
}

/// Collects sources and merges them by priority.
///
/// # Example
///
/// ```rust
/// use sqlq_conf::settings::sources::{DefaultSource, TomlSource};
/// use sqlq_conf::SqlqSettings;
///
/// let settings = SqlqSettings::builder()
///     .add_source(DefaultSource::new().with_dialect("sqlite3"))
///     .add_source(TomlSource::inline("[sqlq]\nescape = false"))
///     .build()
///     .unwrap();
/// assert_eq!(settings.dialect, "sqlite3");
/// assert!(!settings.escape);
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	/// Create a builder with no sources.
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a source. Order of addition only matters between sources of equal
	/// priority, where the later one wins.
	pub fn add_source(mut self, source: impl ConfigSource + 'static) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	/// Load every source and merge the results.
	///
	/// # Errors
	///
	/// Returns the first error reported by a source.
	pub fn build(mut self) -> ConfigResult<SqlqSettings> {
		self.sources.sort_by_key(|source| source.priority());

		let mut merged = PartialSettings::default();
		for source in &self.sources {
			let layer = source.load()?;
			tracing::debug!(
				source = %source.description(),
				dialect = ?layer.dialect,
				escape = ?layer.escape,
				"applied settings source"
			);
			merged = merged.merge(layer);
		}
		Ok(merged.into_settings())
	}
}

/// Parse a boolean setting.
///
/// Accepts `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off`, ignoring case
/// and surrounding whitespace.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for anything else.
pub fn parse_bool(key: &str, value: &str) -> ConfigResult<bool> {
	match value.trim().to_ascii_lowercase().as_str() {
		"true" | "1" | "yes" | "on" => Ok(true),
		"false" | "0" | "no" | "off" => Ok(false),
		_ => Err(ConfigError::InvalidValue {
			key: key.to_string(),
			value: value.to_string(),
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let settings = SqlqSettings::default();
		assert_eq!(settings.dialect, "mysql");
		assert!(settings.escape);
		assert_eq!(settings.dialect(), Dialect::MySql);
	}

	#[rstest]
	fn test_merge_prefers_overlay() {
		let base = PartialSettings {
			dialect: Some("postgres".to_string()),
			escape: Some(true),
		};
		let overlay = PartialSettings {
			dialect: None,
			escape: Some(false),
		};
		assert_eq!(
			base.merge(overlay),
			PartialSettings {
				dialect: Some("postgres".to_string()),
				escape: Some(false),
			}
		);
	}

	#[rstest]
	fn test_into_settings_fills_defaults() {
		let partial = PartialSettings {
			dialect: Some("sqlite3".to_string()),
			escape: None,
		};
		assert_eq!(
			partial.into_settings(),
			SqlqSettings {
				dialect: "sqlite3".to_string(),
				escape: true,
			}
		);
		assert!(PartialSettings::default().is_empty());
	}

	#[rstest]
	#[case("true", true)]
	#[case("TRUE", true)]
	#[case(" 1 ", true)]
	#[case("yes", true)]
	#[case("On", true)]
	#[case("false", false)]
	#[case("0", false)]
	#[case("no", false)]
	#[case("OFF", false)]
	fn test_parse_bool(#[case] value: &str, #[case] expected: bool) {
		assert_eq!(parse_bool("ESCAPE", value).unwrap(), expected);
	}

	#[rstest]
	#[case("")]
	#[case("maybe")]
	#[case("2")]
	fn test_parse_bool_rejects(#[case] value: &str) {
		let err = parse_bool("SQLQ_ESCAPE", value).unwrap_err();
		assert!(matches!(
			err,
			ConfigError::InvalidValue { ref key, .. } if key == "SQLQ_ESCAPE"
		));
	}

	#[rstest]
	fn test_build_and_build_strict() {
		let settings = SqlqSettings {
			dialect: "oracle".to_string(),
			escape: false,
		};
		let q = settings.build();
		assert_eq!(q.dialect(), Dialect::MySql);
		assert!(!q.escape_enabled());
		assert!(matches!(settings.build_strict(), Err(ConfigError::Query(_))));

		let settings = SqlqSettings {
			dialect: "Postgres".to_string(),
			escape: true,
		};
		assert_eq!(settings.build_strict().unwrap().dialect(), Dialect::Postgres);

		let settings = SqlqSettings {
			dialect: "postgresql".to_string(),
			escape: true,
		};
		assert_eq!(settings.build().dialect(), Dialect::MySql);
		assert!(settings.build_strict().is_err());
	}

	#[rstest]
	fn test_builder_without_sources_is_default() {
		assert_eq!(SettingsBuilder::new().build().unwrap(), SqlqSettings::default());
	}
}
