//! Foundation types shared across the domain layer.

mod errors;
mod ids;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SessionId;
