//! # Seating
//!
//! Seats arriving groups of clients at the tables of a venue with a fixed
//! set of fixed-capacity tables.
//!
//! Groups that can't be seated wait in a first-come, first-served line and
//! are reseated as tables free up. A group always sits at exactly one table.
//!
//! ## Core Modules
//!
//! - [`venue`]: tables, groups, the seating manager and its events and views
//!
//! ## Example
//!
//! ```
//! use seating::{ClientGroup, SeatingManager, VenueConfig};
//!
//! let mut manager = SeatingManager::from_config(&VenueConfig::default()).unwrap();
//! let group = manager.arrive(ClientGroup::new(3).unwrap()).group();
//!
//! let table = manager.lookup(group).unwrap();
//! assert_eq!(table.capacity(), 3);
//! ```

/// Tables, groups and seating policy.
pub mod venue;
pub use venue::{
    Arrival, ClientGroup, Departure, GroupId, SeatingError, SeatingEvent, SeatingManager,
    SeatingResult, Table, TableId, VenueConfig, VenueView,
};
