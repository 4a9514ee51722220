//! # sqlq-conf
//!
//! Layered settings for constructing [`Sqlq`](sqlq_query::Sqlq) sessions.
//!
//! ## Features
//!
//! - **Multiple configuration sources**: built-in defaults, TOML files or
//!   text, and environment variables
//! - **Priority merging**: environment variables override TOML, which
//!   overrides defaults; unset fields fall through to the next layer
//! - **Strict construction**: [`SqlqSettings::build_strict`] rejects unknown
//!   dialect names instead of falling back to MySQL
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlq_conf::{DefaultSource, SqlqSettings, TomlSource};
//!
//! let settings = SqlqSettings::builder()
//!     .add_source(DefaultSource::new())
//!     .add_source(TomlSource::inline("[sqlq]\ndialect = \"sqlite3\""))
//!     .build()
//!     .unwrap();
//!
//! let mut q = settings.build();
//! assert_eq!(q.literal(true), "1");
//! assert_eq!(q.identifier("users"), r#""users""#);
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Meaning | Values |
//! |----------|---------|--------|
//! | `SQLQ_DIALECT` | Target dialect | `mysql`, `postgres`, `sqlite3` |
//! | `SQLQ_ESCAPE` | Initial escape flag | `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off` |

pub mod error;
pub mod settings;

pub use error::{ConfigError, ConfigResult};
pub use settings::sources::{ConfigSource, DefaultSource, EnvSource, TomlSource};
pub use settings::{PartialSettings, SettingsBuilder, SqlqSettings, parse_bool};
