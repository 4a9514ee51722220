//! Settings module.
//!
//! This module provides layered settings (defaults, TOML, environment
//! variables) for constructing [`Sqlq`](crate::Sqlq) sessions.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "conf")]
//! # {
//! use sqlq::conf::{DefaultSource, EnvSource, SqlqSettings};
//!
//! let settings = SqlqSettings::builder()
//!     .add_source(DefaultSource::new().with_dialect("postgres"))
//!     .add_source(EnvSource::new().with_prefix("MY_APP_SQLQ_"))
//!     .build()
//!     .unwrap();
//! assert_eq!(settings.dialect, "postgres");
//! # }
//! ```

#[cfg(feature = "conf")]
pub use sqlq_conf::*;
