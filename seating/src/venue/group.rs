//! Client groups.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{
    errors::{SeatingError, SeatingResult},
    table::TableId,
};

/// Identity of a group inside one manager, minted in arrival order.
///
/// Two groups of the same size are still different groups.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct GroupId(pub u64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A party of clients that must sit together at one table.
#[derive(Clone, Debug)]
pub struct ClientGroup {
    id: Option<GroupId>,
    party_size: usize,
    table: Option<TableId>,
}

impl ClientGroup {
    /// Create a group that hasn't arrived yet.
    ///
    /// # Errors
    ///
    /// Returns `SeatingError::InvalidPartySize` for an empty party.
    pub fn new(party_size: usize) -> SeatingResult<Self> {
        if party_size == 0 {
            return Err(SeatingError::InvalidPartySize(party_size));
        }
        Ok(Self {
            id: None,
            party_size,
            table: None,
        })
    }

    /// Identity given by the manager on arrival.
    pub fn id(&self) -> Option<GroupId> {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: GroupId) {
        self.id = Some(id);
    }

    pub fn party_size(&self) -> usize {
        self.party_size
    }

    /// Point the group at a table. Seat accounting is left to the table.
    pub fn assign(&mut self, table: TableId) {
        self.table = Some(table);
    }

    pub fn clear_assignment(&mut self) {
        self.table = None;
    }

    pub fn current_table(&self) -> Option<TableId> {
        self.table
    }

    pub fn is_seated(&self) -> bool {
        self.table.is_some()
    }
}

impl PartialEq for ClientGroup {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => std::ptr::eq(self, other),
        }
    }
}

impl Eq for ClientGroup {}

impl fmt::Display for ClientGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "client {}", self.party_size)
    }
}
