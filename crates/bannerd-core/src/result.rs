//! Result type aliases for bannerd.

use crate::BannerdError;

/// A specialized `Result` type for bannerd operations.
pub type BannerdResult<T> = Result<T, BannerdError>;
