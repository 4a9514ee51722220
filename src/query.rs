//! Formatting and clause building module.
//!
//! This module provides the value and identifier models, the dialect
//! backends, the escape policy and the clause builders.
//!
//! # Examples
//!
//! ```rust
//! use sqlq::query::backend::{Backend, MySqlBackend};
//! use sqlq::query::value::Value;
//!
//! assert_eq!(MySqlBackend::new().format_value(&Value::from("it's")), r"'it\'s'");
//! ```

pub use sqlq_query::*;
