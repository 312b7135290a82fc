//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `travel` - Travel preference profile and its normalization
//! - `mood` - Mood assessment records and keyword rule tables

pub mod foundation;
pub mod mood;
pub mod travel;
