//! Driver for the seating engine: parses arrival/departure scripts, loads
//! venue configuration and renders the venue after every step.

pub mod commands;
pub mod config;
pub mod driver;
pub mod logging;
