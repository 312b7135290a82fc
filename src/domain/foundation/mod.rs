//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the trip context domain.

mod errors;
mod ids;
mod unit_weight;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::UserId;
pub use unit_weight::UnitWeight;
