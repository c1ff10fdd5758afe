use serde::{Deserialize, Serialize};
use std::fmt;

use super::{group::GroupId, table::TableId};

/// State changes recorded by the manager, in the order they happened.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum SeatingEvent {
    // Seated straight away on arrival.
    Seated { group: GroupId, table: TableId },
    // No table fits right now; `position` is 0-based from the front.
    Waitlisted { group: GroupId, position: usize },
    // A seated group left and its table was freed.
    Released { group: GroupId, table: TableId },
    // A waiting group got a freed table.
    Promoted { group: GroupId, table: TableId },
    // A waiting group gave up before being seated.
    Abandoned { group: GroupId },
}

impl fmt::Display for SeatingEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Seated { group, table } => format!("{group} seated at {table}"),
            Self::Waitlisted { group, position } => {
                format!("{group} waitlisted at position {position}")
            }
            Self::Released { group, table } => format!("{group} left {table}"),
            Self::Promoted { group, table } => format!("{group} promoted to {table}"),
            Self::Abandoned { group } => format!("{group} left the waitlist"),
        };
        write!(f, "{repr}")
    }
}

/// Outcome of an arrival.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Arrival {
    Seated { group: GroupId, table: TableId },
    Waitlisted { group: GroupId, position: usize },
}

impl Arrival {
    pub fn group(&self) -> GroupId {
        match self {
            Self::Seated { group, .. } | Self::Waitlisted { group, .. } => *group,
        }
    }

    pub fn table(&self) -> Option<TableId> {
        match self {
            Self::Seated { table, .. } => Some(*table),
            Self::Waitlisted { .. } => None,
        }
    }
}

/// Outcome of a departure.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Departure {
    /// The group was seated; its table was freed and possibly handed on.
    Served {
        group: GroupId,
        table: TableId,
        promoted: Option<GroupId>,
    },
    /// The group was still waiting.
    Abandoned { group: GroupId },
}

impl Departure {
    pub fn promoted(&self) -> Option<GroupId> {
        match self {
            Self::Served { promoted, .. } => *promoted,
            Self::Abandoned { .. } => None,
        }
    }
}
