//! Configuration sources for layered settings
//!
//! Provides the sources that [`SettingsBuilder`](super::SettingsBuilder)
//! merges, in priority order (environment variables > TOML > defaults).

use std::{env, fs, path::PathBuf};

use super::{DEFAULT_ENV_PREFIX, PartialSettings, SqlqSettings, parse_bool};
use crate::error::{ConfigError, ConfigResult};

/// Name of the optional table holding the settings inside a larger TOML file.
pub const TOML_TABLE: &str = "sqlq";

/// Trait for configuration sources
pub trait ConfigSource: Send + Sync {
	/// Load the settings this source provides
	fn load(&self) -> ConfigResult<PartialSettings>;

	/// Get the priority of this source (higher = more important)
	fn priority(&self) -> u8;

	/// Get a description of this source
	fn description(&self) -> String;
}

/// Fixed values, lowest priority
#[derive(Debug, Clone)]
pub struct DefaultSource {
	values: PartialSettings,
}

impl DefaultSource {
	/// The built-in defaults (`mysql`, escaping enabled)
	pub fn new() -> Self {
		Self {
			values: SqlqSettings::default().into(),
		}
	}

	/// Override the default dialect
	pub fn with_dialect(mut self, dialect: impl Into<String>) -> Self {
		self.values.dialect = Some(dialect.into());
		self
	}

	/// Override the default escape flag
	pub fn with_escape(mut self, escape: bool) -> Self {
		self.values.escape = Some(escape);
		self
	}
}

impl Default for DefaultSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for DefaultSource {
	fn load(&self) -> ConfigResult<PartialSettings> {
		Ok(self.values.clone())
	}

	fn priority(&self) -> u8 {
		0 // Lowest priority
	}

	fn description(&self) -> String {
		"Default values".to_string()
	}
}

#[derive(Debug, Clone)]
enum TomlInput {
	File(PathBuf),
	Inline(String),
}

/// TOML configuration source
///
/// Settings are read from a `[sqlq]` table when the document has one, and
/// from the top level otherwise. A missing file provides nothing.
///
/// # Examples
///
/// ```
/// use sqlq_conf::settings::sources::{ConfigSource, TomlSource};
///
/// let source = TomlSource::inline("dialect = \"postgres\"");
/// let values = source.load().unwrap();
/// assert_eq!(values.dialect.as_deref(), Some("postgres"));
/// assert_eq!(values.escape, None);
/// ```
#[derive(Debug, Clone)]
pub struct TomlSource {
	input: TomlInput,
}

impl TomlSource {
	/// Read settings from a TOML file
	pub fn file(path: impl Into<PathBuf>) -> Self {
		Self {
			input: TomlInput::File(path.into()),
		}
	}

	/// Read settings from TOML text
	pub fn inline(content: impl Into<String>) -> Self {
		Self {
			input: TomlInput::Inline(content.into()),
		}
	}

	fn parse(content: &str) -> ConfigResult<PartialSettings> {
		let mut document: toml::Table = toml::from_str(content)?;
		let table = match document.remove(TOML_TABLE) {
			Some(toml::Value::Table(table)) => table,
			Some(other) => {
				return Err(ConfigError::InvalidValue {
					key: TOML_TABLE.to_string(),
					value: other.to_string(),
				});
			}
			None => document,
		};
		Ok(toml::Value::Table(table).try_into()?)
	}
}

impl ConfigSource for TomlSource {
	fn load(&self) -> ConfigResult<PartialSettings> {
		match &self.input {
			TomlInput::File(path) => {
				if !path.exists() {
					return Ok(PartialSettings::default());
				}
				let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
					path: path.clone(),
					source,
				})?;
				Self::parse(&content)
			}
			TomlInput::Inline(content) => Self::parse(content),
		}
	}

	fn priority(&self) -> u8 {
		50 // Medium priority
	}

	fn description(&self) -> String {
		match &self.input {
			TomlInput::File(path) => format!("TOML file: {}", path.display()),
			TomlInput::Inline(_) => "TOML text".to_string(),
		}
	}
}

/// Environment variable configuration source
///
/// Reads `<prefix>DIALECT` and `<prefix>ESCAPE` (default prefix `SQLQ_`).
#[derive(Debug, Clone)]
pub struct EnvSource {
	prefix: String,
}

impl EnvSource {
	/// Create a source with the `SQLQ_` prefix
	///
	/// # Examples
	///
	/// ```
	/// use sqlq_conf::settings::sources::EnvSource;
	///
	/// let source = EnvSource::new().with_prefix("APP_SQL_");
	/// // Reads APP_SQL_DIALECT and APP_SQL_ESCAPE
	/// ```
	pub fn new() -> Self {
		Self {
			prefix: DEFAULT_ENV_PREFIX.to_string(),
		}
	}

	/// Set the variable name prefix
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	fn var(&self, name: &str) -> ConfigResult<Option<(String, String)>> {
		let key = format!("{}{}", self.prefix, name);
		match env::var(&key) {
			Ok(value) => Ok(Some((key, value))),
			Err(env::VarError::NotPresent) => Ok(None),
			Err(env::VarError::NotUnicode(raw)) => Err(ConfigError::InvalidValue {
				value: raw.to_string_lossy().into_owned(),
				key,
			}),
		}
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for EnvSource {
	fn load(&self) -> ConfigResult<PartialSettings> {
		let dialect = self.var("DIALECT")?.map(|(_, value)| value);
		let escape = match self.var("ESCAPE")? {
			Some((key, value)) => Some(parse_bool(&key, &value)?),
			None => None,
		};
		Ok(PartialSettings { dialect, escape })
	}

	fn priority(&self) -> u8 {
		100 // Highest priority
	}

	fn description(&self) -> String {
		format!("Environment variables (prefix: {})", self.prefix)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use serial_test::serial;
	use std::io::Write;
	use tempfile::TempDir;

	#[rstest]
	fn test_default_source() {
		let values = DefaultSource::new().with_escape(false).load().unwrap();
		assert_eq!(values.dialect.as_deref(), Some("mysql"));
		assert_eq!(values.escape, Some(false));
	}

	#[rstest]
	#[case::top_level("dialect = \"sqlite3\"\nescape = false")]
	#[case::table("name = \"app\"\n\n[sqlq]\ndialect = \"sqlite3\"\nescape = false")]
	fn test_toml_inline(#[case] content: &str) {
		let values = TomlSource::inline(content).load().unwrap();
		assert_eq!(
			values,
			PartialSettings {
				dialect: Some("sqlite3".to_string()),
				escape: Some(false),
			}
		);
	}

	#[rstest]
	fn test_toml_ignores_unrelated_keys() {
		let values = TomlSource::inline("port = 8080").load().unwrap();
		assert!(values.is_empty());
	}

	#[rstest]
	fn test_toml_rejects_wrong_types() {
		assert!(matches!(
			TomlSource::inline("escape = \"sometimes\"").load(),
			Err(ConfigError::Toml(_))
		));
		assert!(matches!(
			TomlSource::inline("sqlq = 1").load(),
			Err(ConfigError::InvalidValue { .. })
		));
		assert!(matches!(
			TomlSource::inline("dialect = ").load(),
			Err(ConfigError::Toml(_))
		));
	}

	#[rstest]
	fn test_toml_file() {
		let temp_dir = TempDir::new().unwrap();
		let config_path = temp_dir.path().join("sqlq.toml");

		let mut file = fs::File::create(&config_path).unwrap();
		writeln!(file, "[sqlq]\ndialect = \"postgres\"").unwrap();

		let source = TomlSource::file(&config_path);
		let values = source.load().unwrap();
		assert_eq!(values.dialect.as_deref(), Some("postgres"));
		assert!(source.description().contains("sqlq.toml"));
	}

	#[rstest]
	fn test_missing_toml_file_is_empty() {
		let temp_dir = TempDir::new().unwrap();
		let source = TomlSource::file(temp_dir.path().join("absent.toml"));
		assert!(source.load().unwrap().is_empty());
	}

	#[rstest]
	#[serial(sqlq_env)]
	fn test_env_source() {
		// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::set_var("SQLQ_UNIT_DIALECT", "postgres");
			env::set_var("SQLQ_UNIT_ESCAPE", "off");
		}

		let values = EnvSource::new().with_prefix("SQLQ_UNIT_").load();

		// SAFETY: Removing environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::remove_var("SQLQ_UNIT_DIALECT");
			env::remove_var("SQLQ_UNIT_ESCAPE");
		}

		assert_eq!(
			values.unwrap(),
			PartialSettings {
				dialect: Some("postgres".to_string()),
				escape: Some(false),
			}
		);
	}

	#[rstest]
	#[serial(sqlq_env)]
	fn test_env_source_invalid_bool() {
		// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::set_var("SQLQ_BAD_ESCAPE", "perhaps");
		}

		let result = EnvSource::new().with_prefix("SQLQ_BAD_").load();

		// SAFETY: Removing environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::remove_var("SQLQ_BAD_ESCAPE");
		}

		assert!(matches!(
			result,
			Err(ConfigError::InvalidValue { ref key, ref value })
				if key == "SQLQ_BAD_ESCAPE" && value == "perhaps"
		));
	}

	#[rstest]
	fn test_priorities() {
		assert!(DefaultSource::new().priority() < TomlSource::inline("").priority());
		assert!(TomlSource::inline("").priority() < EnvSource::new().priority());
	}
}
