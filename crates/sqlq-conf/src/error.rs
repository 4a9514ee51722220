//! Settings errors

use std::path::PathBuf;

use sqlq_query::QueryError;

/// Error type for loading settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to read {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("invalid value for {key}: {value:?}")]
	InvalidValue { key: String, value: String },

	#[error(transparent)]
	Query(#[from] QueryError),
}

/// Result type for settings operations
pub type ConfigResult<T> = Result<T, ConfigError>;
