//! Type definitions for identifiers and ordering.
//!
//! - [`Ident`]: structured identifier (bare, qualified, qualified asterisk, aliased)
//! - [`IdentArg`]: identifier argument (raw text or a pre-built [`Ident`])
//! - [`IntoIdents`]: conversion trait accepted by every identifier-taking API
//! - [`Order`]: sort direction

mod ident;
mod order;

pub use ident::{Ident, IdentArg, IntoIdents};
pub use order::Order;
