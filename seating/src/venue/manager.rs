//! Seating manager: best-fit assignment on arrival, FIFO promotion on release.

use log::{debug, error, warn};
use std::{
    collections::{HashMap, VecDeque},
    fmt,
};

use super::{
    config::VenueConfig,
    errors::{SeatingError, SeatingResult},
    events::{Arrival, Departure, SeatingEvent},
    group::{ClientGroup, GroupId},
    table::{Table, TableId},
    view::{TableView, VenueView, WaitingView},
};

/// Owns the venue's tables, every live group and the waitlist.
#[derive(Debug)]
pub struct SeatingManager {
    /// Fixed at construction, indexed by `TableId`
    tables: Vec<Table>,

    /// Groups that are seated or waiting. Departed groups are dropped.
    groups: HashMap<GroupId, ClientGroup>,

    /// Waiting groups in arrival order
    waitlist: VecDeque<GroupId>,

    next_group_id: u64,

    /// Events not yet drained by the caller
    events: VecDeque<SeatingEvent>,
}

impl SeatingManager {
    /// Create a manager over tables with the given capacities, in order.
    ///
    /// # Errors
    ///
    /// * `SeatingError::NoTables` - `capacities` is empty
    /// * `SeatingError::InvalidCapacity` - a table has no chairs
    pub fn new(capacities: &[usize]) -> SeatingResult<Self> {
        if capacities.is_empty() {
            return Err(SeatingError::NoTables);
        }

        let tables = capacities
            .iter()
            .enumerate()
            .map(|(index, &capacity)| {
                if capacity == 0 {
                    Err(SeatingError::InvalidCapacity { index, capacity })
                } else {
                    Ok(Table::new(TableId(index), capacity))
                }
            })
            .collect::<SeatingResult<Vec<_>>>()?;

        Ok(Self {
            tables,
            groups: HashMap::new(),
            waitlist: VecDeque::new(),
            next_group_id: 0,
            events: VecDeque::new(),
        })
    }

    pub fn from_config(config: &VenueConfig) -> SeatingResult<Self> {
        config.validate()?;
        debug!(
            "Opening {} with {} table(s)",
            config.name,
            config.table_capacities.len()
        );
        Self::new(&config.table_capacities)
    }

    /// Seat a new group on the best-fitting table, or put it at the back of
    /// the waitlist. Never fails.
    ///
    /// The outcome is also queued as a `SeatingEvent`; the queue grows until
    /// `drain_events` is called.
    pub fn arrive(&mut self, mut group: ClientGroup) -> Arrival {
        let id = GroupId(self.next_group_id);
        self.next_group_id += 1;
        group.set_id(id);

        let party_size = group.party_size();
        let arrival = match self.select_best_table(party_size) {
            Some(table_id) => {
                self.tables[table_id.0].occupy(party_size);
                group.assign(table_id);
                debug!("{id} ({group}) seated at {table_id}");
                self.events.push_back(SeatingEvent::Seated {
                    group: id,
                    table: table_id,
                });
                Arrival::Seated {
                    group: id,
                    table: table_id,
                }
            }
            None => {
                if party_size > self.max_capacity() {
                    warn!(
                        "{id} ({group}) is larger than every table and will wait until it leaves"
                    );
                }
                let position = self.waitlist.len();
                self.waitlist.push_back(id);
                debug!("{id} ({group}) waitlisted at position {position}");
                self.events.push_back(SeatingEvent::Waitlisted {
                    group: id,
                    position,
                });
                Arrival::Waitlisted {
                    group: id,
                    position,
                }
            }
        };

        self.groups.insert(id, group);
        arrival
    }

    /// Best table for a party among those that currently fit it.
    ///
    /// Tables are folded left to right. An exact fit on free seats beats any
    /// other table; between two exact fits, or two loose ones, the strictly
    /// smaller table wins. Ties keep the earlier table.
    pub fn select_best_table(&self, party_size: usize) -> Option<TableId> {
        self.tables
            .iter()
            .filter(|table| table.can_fit(party_size))
            .fold(None, |best: Option<&Table>, candidate| match best {
                None => Some(candidate),
                Some(best) => Some(better_fit(party_size, best, candidate)),
            })
            .map(Table::id)
    }

    /// A group leaves, served or out of patience.
    ///
    /// A seated group frees its whole table, which is then offered to the
    /// waitlist. A waiting group is just dropped from the waitlist.
    ///
    /// # Errors
    ///
    /// Returns `SeatingError::UnknownGroup` if the group never arrived or
    /// already left, or if it is tracked but neither seated nor waiting.
    /// Nothing is changed in that case.
    ///
    /// Every change is queued as a `SeatingEvent` until `drain_events`.
    pub fn leave(&mut self, id: GroupId) -> SeatingResult<Departure> {
        let Some(group) = self.groups.get(&id) else {
            return Err(SeatingError::UnknownGroup(id));
        };
        let waiting_at = self.waitlist.iter().position(|waiting| *waiting == id);
        if !group.is_seated() && waiting_at.is_none() {
            error!("{id} was neither seated nor waitlisted");
            return Err(SeatingError::UnknownGroup(id));
        }
        let Some(mut group) = self.groups.remove(&id) else {
            return Err(SeatingError::UnknownGroup(id));
        };

        match group.current_table() {
            Some(table_id) => {
                self.tables[table_id.0].release();
                group.clear_assignment();
                debug!("{id} ({group}) left {table_id}");
                self.events.push_back(SeatingEvent::Released {
                    group: id,
                    table: table_id,
                });

                let promoted = self.promote_waiting(table_id);
                Ok(Departure::Served {
                    group: id,
                    table: table_id,
                    promoted,
                })
            }
            None => {
                if let Some(position) = waiting_at {
                    self.waitlist.remove(position);
                }
                debug!("{id} ({group}) left the waitlist");
                self.events.push_back(SeatingEvent::Abandoned { group: id });
                Ok(Departure::Abandoned { group: id })
            }
        }
    }

    /// Hand a table to the earliest waiting group it can fit.
    ///
    /// At most one group is promoted, even if a later group would fit more
    /// tightly.
    fn promote_waiting(&mut self, table_id: TableId) -> Option<GroupId> {
        let table = self.tables.get(table_id.0)?;
        let position = self.waitlist.iter().position(|id| {
            self.groups
                .get(id)
                .is_some_and(|group| table.can_fit(group.party_size()))
        })?;
        let id = self.waitlist.remove(position)?;

        let Some(group) = self.groups.get_mut(&id) else {
            error!("Waitlisted group {id} is missing from the registry");
            return None;
        };
        self.tables[table_id.0].occupy(group.party_size());
        group.assign(table_id);
        debug!("{id} ({group}) promoted to {table_id}");
        self.events.push_back(SeatingEvent::Promoted {
            group: id,
            table: table_id,
        });
        Some(id)
    }

    /// Table the group sits at, if it's seated.
    pub fn lookup(&self, id: GroupId) -> Option<&Table> {
        let table_id = self.groups.get(&id)?.current_table()?;
        self.tables.get(table_id.0)
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn table(&self, id: TableId) -> Option<&Table> {
        self.tables.get(id.0)
    }

    pub fn group(&self, id: GroupId) -> Option<&ClientGroup> {
        self.groups.get(&id)
    }

    /// Waiting groups, front of the line first.
    pub fn waitlist(&self) -> impl Iterator<Item = &ClientGroup> {
        self.waitlist.iter().filter_map(|id| self.groups.get(id))
    }

    pub fn is_waiting(&self, id: GroupId) -> bool {
        self.waitlist.contains(&id)
    }

    pub fn waiting_count(&self) -> usize {
        self.waitlist.len()
    }

    pub fn seated_count(&self) -> usize {
        self.groups.values().filter(|group| group.is_seated()).count()
    }

    pub fn max_capacity(&self) -> usize {
        self.tables
            .iter()
            .map(Table::capacity)
            .max()
            .unwrap_or(0)
    }

    /// Take every event recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<SeatingEvent> {
        self.events.drain(..).collect()
    }

    pub fn view(&self) -> VenueView {
        VenueView {
            tables: self
                .tables
                .iter()
                .map(|table| TableView {
                    id: table.id(),
                    capacity: table.capacity(),
                    free_seats: table.free_seats(),
                })
                .collect(),
            waitlist: self
                .waitlist
                .iter()
                .filter_map(|id| {
                    self.groups.get(id).map(|group| WaitingView {
                        group: *id,
                        party_size: group.party_size(),
                    })
                })
                .collect(),
        }
    }
}

fn better_fit<'a>(party_size: usize, best: &'a Table, candidate: &'a Table) -> &'a Table {
    match (
        best.free_seats() == party_size,
        candidate.free_seats() == party_size,
    ) {
        (true, false) => best,
        (false, true) => candidate,
        _ if candidate.capacity() < best.capacity() => candidate,
        _ => best,
    }
}

impl fmt::Display for SeatingManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.view())
    }
}
