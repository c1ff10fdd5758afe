//! Read-only snapshots of a venue for display and logging.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{group::GroupId, table::TableId};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TableView {
    pub id: TableId,
    pub capacity: usize,
    pub free_seats: usize,
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.free_seats != self.capacity {
            "(!)"
        } else {
            ""
        };
        write!(f, "{marker}table {}/{}", self.free_seats, self.capacity)
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct WaitingView {
    pub group: GroupId,
    pub party_size: usize,
}

impl fmt::Display for WaitingView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "client {}", self.party_size)
    }
}

/// Tables in venue order and the waitlist in arrival order.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct VenueView {
    pub tables: Vec<TableView>,
    pub waitlist: Vec<WaitingView>,
}

impl VenueView {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "]")
}

impl fmt::Display for VenueView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.tables)?;
        writeln!(f)?;
        write_list(f, &self.waitlist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VenueView {
        VenueView {
            tables: vec![
                TableView {
                    id: TableId(0),
                    capacity: 2,
                    free_seats: 2,
                },
                TableView {
                    id: TableId(1),
                    capacity: 4,
                    free_seats: 1,
                },
            ],
            waitlist: vec![WaitingView {
                group: GroupId(3),
                party_size: 5,
            }],
        }
    }

    #[test]
    fn test_text_rendering() {
        assert_eq!(
            sample().to_string(),
            "[table 2/2, (!)table 1/4]\n[client 5]"
        );
    }

    #[test]
    fn test_empty_waitlist_rendering() {
        let mut view = sample();
        view.waitlist.clear();
        assert!(view.to_string().ends_with("\n[]"));
    }

    #[test]
    fn test_json_rendering() {
        let json = sample().to_json().unwrap();
        let back: VenueView = serde_json::from_str(&json).unwrap();
        assert_eq!(back.tables[1].free_seats, 1);
        assert_eq!(back.waitlist[0].group, GroupId(3));
    }
}
