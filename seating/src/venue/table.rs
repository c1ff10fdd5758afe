//! Tables and their seat accounting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a table in the venue's table list.
///
/// Ids are handed out in construction order and double as the tie-break
/// order for best-fit selection.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct TableId(pub usize);

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// A table with a fixed number of chairs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Table {
    id: TableId,
    capacity: usize,
    free_seats: usize,
}

impl Table {
    /// Create an empty table. Capacity is validated by the manager.
    pub fn new(id: TableId, capacity: usize) -> Self {
        Self {
            id,
            capacity,
            free_seats: capacity,
        }
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn free_seats(&self) -> usize {
        self.free_seats
    }

    pub fn is_occupied(&self) -> bool {
        self.free_seats != self.capacity
    }

    /// Whether a party of `group_size` fits in the remaining seats.
    pub fn can_fit(&self, group_size: usize) -> bool {
        self.free_seats >= group_size
    }

    /// Take `group_size` seats.
    ///
    /// # Panics
    ///
    /// Panics if the table can't fit the group. Callers check `can_fit`
    /// first, so reaching this is a bug in the caller.
    pub fn occupy(&mut self, group_size: usize) {
        assert!(
            self.can_fit(group_size),
            "Table {} over-occupied: {} free, {} requested",
            self.id,
            self.free_seats,
            group_size
        );
        self.free_seats -= group_size;
    }

    /// Free every seat, whatever was taken before.
    pub fn release(&mut self) {
        self.free_seats = self.capacity;
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_occupied() { "(!)" } else { "" };
        write!(f, "{marker}table {}/{}", self.free_seats, self.capacity)
    }
}
