//! Seating error types.

use thiserror::Error;

use super::group::GroupId;

/// Seating errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeatingError {
    /// Departure for a group that is neither seated nor waiting
    #[error("Unknown group {0}: never arrived or already left")]
    UnknownGroup(GroupId),

    /// Venue built without any table
    #[error("A venue needs at least one table")]
    NoTables,

    /// Table capacity must be positive
    #[error("Invalid capacity {capacity} for table {index}")]
    InvalidCapacity { index: usize, capacity: usize },

    /// Party size must be positive
    #[error("Invalid party size: {0}")]
    InvalidPartySize(usize),

    /// Venue configuration could not be used
    #[error("Invalid venue configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for seating operations
pub type SeatingResult<T> = Result<T, SeatingError>;
