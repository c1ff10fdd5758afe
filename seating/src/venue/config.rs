//! Venue configuration models.

use serde::{Deserialize, Serialize};

use super::errors::{SeatingError, SeatingResult};

/// Venue configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueConfig {
    /// Venue name, used in logs only
    pub name: String,

    /// Chairs per table, in table order
    pub table_capacities: Vec<usize>,
}

impl Default for VenueConfig {
    fn default() -> Self {
        Self {
            name: "Reference Venue".to_string(),
            table_capacities: vec![2, 2, 3, 4, 5, 6, 6],
        }
    }
}

impl VenueConfig {
    /// Build a configuration from a comma-separated capacity list such as `2,2,3,4`.
    ///
    /// # Errors
    ///
    /// Returns `SeatingError::InvalidConfig` if an entry isn't a number, and
    /// the `validate` errors otherwise.
    pub fn from_capacity_list(name: &str, list: &str) -> SeatingResult<Self> {
        let table_capacities = list
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                entry.parse::<usize>().map_err(|_| {
                    SeatingError::InvalidConfig(format!("'{entry}' is not a table capacity"))
                })
            })
            .collect::<SeatingResult<Vec<_>>>()?;

        let config = Self {
            name: name.to_string(),
            table_capacities,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> SeatingResult<()> {
        if self.table_capacities.is_empty() {
            return Err(SeatingError::NoTables);
        }

        if let Some(index) = self.table_capacities.iter().position(|&c| c == 0) {
            return Err(SeatingError::InvalidCapacity { index, capacity: 0 });
        }

        Ok(())
    }

    /// Largest party any table could ever hold
    pub fn max_capacity(&self) -> usize {
        self.table_capacities.iter().copied().max().unwrap_or(0)
    }

    pub fn total_seats(&self) -> usize {
        self.table_capacities.iter().sum()
    }
}
