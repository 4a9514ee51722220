//! Settings layering across defaults, TOML files and the environment

use std::{env, fs};

use pretty_assertions::assert_eq;
use rstest::*;
use serial_test::serial;
use sqlq_conf::*;
use sqlq_query::Dialect;
use tempfile::TempDir;

/// Sets environment variables for one test and removes them on drop.
struct ScopedEnv {
	keys: Vec<&'static str>,
}

impl ScopedEnv {
	fn set(vars: &[(&'static str, &str)]) -> Self {
		for (key, value) in vars {
			// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
			// Every test using ScopedEnv is #[serial] to ensure exclusive access.
			unsafe {
				env::set_var(key, value);
			}
		}
		Self {
			keys: vars.iter().map(|(key, _)| *key).collect(),
		}
	}
}

impl Drop for ScopedEnv {
	fn drop(&mut self) {
		for key in &self.keys {
			// SAFETY: Removing environment variables is unsafe in multi-threaded programs.
			// Every test using ScopedEnv is #[serial] to ensure exclusive access.
			unsafe {
				env::remove_var(key);
			}
		}
	}
}

#[fixture]
fn config_dir() -> TempDir {
	TempDir::new().unwrap()
}

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
	let path = dir.path().join("sqlq.toml");
	fs::write(&path, content).unwrap();
	path
}

/// Test: TOML overrides defaults, unset fields keep the default
#[rstest]
fn test_toml_over_defaults(config_dir: TempDir) {
	let path = write_config(&config_dir, "[sqlq]\ndialect = \"postgres\"\n");

	let settings = SqlqSettings::builder()
		.add_source(DefaultSource::new())
		.add_source(TomlSource::file(path))
		.build()
		.unwrap();

	assert_eq!(
		settings,
		SqlqSettings {
			dialect: "postgres".to_string(),
			escape: true,
		}
	);
}

/// Test: environment overrides TOML regardless of insertion order
#[rstest]
#[serial(sqlq_env)]
fn test_env_over_toml(config_dir: TempDir) {
	let path = write_config(&config_dir, "dialect = \"postgres\"\nescape = true\n");
	let _env = ScopedEnv::set(&[("SQLQ_LAYER_ESCAPE", "no")]);

	let settings = SqlqSettings::builder()
		.add_source(EnvSource::new().with_prefix("SQLQ_LAYER_"))
		.add_source(TomlSource::file(path))
		.add_source(DefaultSource::new())
		.build()
		.unwrap();

	assert_eq!(settings.dialect(), Dialect::Postgres);
	assert!(!settings.escape);

	let mut q = settings.build();
	assert_eq!(q.literal("a'b"), "a'b");
}

#[rstest]
#[serial(sqlq_env)]
fn test_from_env_uses_default_prefix() {
	let _env = ScopedEnv::set(&[("SQLQ_DIALECT", "SQLite3"), ("SQLQ_ESCAPE", "1")]);

	let settings = SqlqSettings::from_env().unwrap();
	assert_eq!(settings.dialect(), Dialect::Sqlite);

	let mut q = settings.build_strict().unwrap();
	assert_eq!(q.literal(vec![0x01u8]), "X'01'");
}

#[rstest]
#[serial(sqlq_env)]
fn test_from_env_without_variables_is_default() {
	// SAFETY: Removing environment variables is unsafe in multi-threaded programs.
	// This test is #[serial] to ensure exclusive access.
	unsafe {
		env::remove_var("SQLQ_DIALECT");
		env::remove_var("SQLQ_ESCAPE");
	}
	assert_eq!(SqlqSettings::from_env().unwrap(), SqlqSettings::default());
}

#[rstest]
#[serial(sqlq_env)]
fn test_invalid_env_value_is_reported() {
	let _env = ScopedEnv::set(&[("SQLQ_ERR_ESCAPE", "sometimes")]);

	let err = SqlqSettings::builder()
		.add_source(EnvSource::new().with_prefix("SQLQ_ERR_"))
		.build()
		.unwrap_err();
	assert_eq!(err.to_string(), "invalid value for SQLQ_ERR_ESCAPE: \"sometimes\"");
}

#[rstest]
fn test_unknown_dialect_lenient_and_strict(config_dir: TempDir) {
	let path = write_config(&config_dir, "[sqlq]\ndialect = \"oracle\"\n");
	let settings = SqlqSettings::builder()
		.add_source(TomlSource::file(path))
		.build()
		.unwrap();

	assert_eq!(settings.build().dialect(), Dialect::MySql);
	assert!(matches!(settings.build_strict(), Err(ConfigError::Query(_))));
}

#[rstest]
fn test_unreadable_path_is_io_error(config_dir: TempDir) {
	// A directory exists but cannot be read as a file
	let err = SqlqSettings::builder()
		.add_source(TomlSource::file(config_dir.path()))
		.build()
		.unwrap_err();
	assert!(matches!(err, ConfigError::Io { .. }));
}

#[rstest]
fn test_later_source_wins_on_equal_priority() {
	let settings = SqlqSettings::builder()
		.add_source(TomlSource::inline("dialect = \"postgres\""))
		.add_source(TomlSource::inline("dialect = \"sqlite3\""))
		.build()
		.unwrap();
	assert_eq!(settings.dialect, "sqlite3");
}
