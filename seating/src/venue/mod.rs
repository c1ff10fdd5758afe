//! Venue module: tables, client groups and the seating manager.
//!
//! This module implements:
//! - Table: fixed capacity with free-seat accounting
//! - ClientGroup: a party that sits together, pointing at its table
//! - SeatingManager: best-fit seating on arrival and FIFO promotion on release
//!
//! ## Seating policy
//!
//! A new group gets the best table among those that fit it right now: an
//! exact fit on free seats first, otherwise the smallest table, otherwise the
//! earliest in venue order. If nothing fits, the group joins the back of the
//! waitlist.
//!
//! When a seated group leaves, its whole table is freed and given to the
//! earliest waiting group it can fit. Only one group is promoted per release.
//!
//! ## Example
//!
//! ```
//! use seating::venue::{Arrival, ClientGroup, SeatingManager, TableId};
//!
//! let mut manager = SeatingManager::new(&[2, 4]).unwrap();
//!
//! let arrival = manager.arrive(ClientGroup::new(3).unwrap());
//! assert!(matches!(arrival, Arrival::Seated { table: TableId(1), .. }));
//!
//! let waiting = manager.arrive(ClientGroup::new(4).unwrap()).group();
//! assert!(manager.lookup(waiting).is_none());
//!
//! manager.leave(arrival.group()).unwrap();
//! assert_eq!(manager.lookup(waiting).map(|t| t.id()), Some(TableId(1)));
//! ```

pub mod config;
pub mod errors;
pub mod events;
pub mod group;
pub mod manager;
pub mod table;
pub mod view;

pub use config::VenueConfig;
pub use errors::{SeatingError, SeatingResult};
pub use events::{Arrival, Departure, SeatingEvent};
pub use group::{ClientGroup, GroupId};
pub use manager::SeatingManager;
pub use table::{Table, TableId};
pub use view::{TableView, VenueView, WaitingView};
