//! Clause builders
//!
//! Everything in this module is string assembly on top of the three
//! formatting primitives of [`Sqlq`](crate::Sqlq). Each builder renders its
//! identifiers and literals in reading order, so an armed one-shot skip
//! ([`Sqlq::raw`](crate::Sqlq::raw)) applies to the first identifier or
//! literal of the clause.
//!
//! - [`select`]: projections, sources, grouping, ordering and pagination
//! - [`condition`]: WHERE conditions and predicates
//! - [`join`]: JOIN clauses ([`JoinType`])
//! - [`dml`]: INSERT, UPDATE and DELETE
//! - [`fragment`]: composing clauses into statements ([`Query`])
//! - [`conditional`]: choosing a fragment by condition ([`Condition`])

pub mod condition;
pub mod conditional;
pub mod dml;
pub mod fragment;
pub mod join;
pub mod select;

pub use conditional::Condition;
pub use fragment::Query;
pub use join::JoinType;
