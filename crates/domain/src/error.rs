//! Unified error type for the domain layer
//!
//! Only validation failures are errors. Referential inconsistency (a twink
//! whose main no longer resolves, a twink list naming a missing record) is
//! an expected condition handled by skip-on-aggregate and the orphan
//! listing, never through this type.

use thiserror::Error;

use crate::entities::{MAX_GROUP_SIZE, MIN_GROUP_SIZE};

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An active record with this name already exists
    #[error("a character named '{0}' is already active")]
    DuplicateActiveName(String),

    /// A twink was added without selecting a main
    #[error("a twink must be linked to a main at creation")]
    MainNotSelected,

    /// Shard group created with an out-of-range player count
    #[error("a shard group needs between {MIN_GROUP_SIZE} and {MAX_GROUP_SIZE} players, got {got}")]
    GroupSize { got: usize },

    /// Validation failed (e.g., invalid field values)
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Creates a validation error for field-level failures
    /// (empty names, unknown class strings).
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
