//! Driver configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use seating::{SeatingError, VenueConfig};
use std::{fmt::Display, path::PathBuf, str::FromStr};

/// Where the driver gets its commands from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSource {
    /// The built-in reference scenario
    Reference,
    /// A script file, one command per line
    Script(PathBuf),
    /// Random arrivals and departures
    Simulate { events: usize, seed: u64 },
}

/// How each step is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// Values given on the command line; they win over the environment
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub tables: Option<String>,
    pub script: Option<PathBuf>,
    pub simulate: Option<usize>,
    pub seed: Option<u64>,
    pub format: Option<String>,
}

/// Complete driver configuration loaded from CLI flags and environment variables
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Venue layout
    pub venue: VenueConfig,
    /// Command source
    pub source: EventSource,
    /// Output format
    pub format: OutputFormat,
}

impl DriverConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `overrides` - Values from the command line
    ///
    /// # Errors
    ///
    /// Returns error if a variable is present but invalid
    pub fn from_env(overrides: CliOverrides) -> Result<Self, ConfigError> {
        let name = std::env::var("SEATING_VENUE_NAME").unwrap_or_else(|_| "Venue".to_string());

        let venue = match overrides
            .tables
            .or_else(|| std::env::var("SEATING_TABLES").ok())
        {
            Some(list) => VenueConfig::from_capacity_list(&name, &list)?,
            None => VenueConfig::default(),
        };

        let format = match overrides.format {
            Some(value) => parse_setting("--format", &value)?,
            None => parse_env("SEATING_FORMAT")?.unwrap_or(OutputFormat::Text),
        };

        let script = overrides
            .script
            .or_else(|| std::env::var("SEATING_SCRIPT").ok().map(PathBuf::from));
        let simulate = match overrides.simulate {
            Some(events) => Some(events),
            None => parse_env("SEATING_SIMULATE")?,
        };

        let source = match (script, simulate) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::Invalid {
                    var: "SEATING_SCRIPT".to_string(),
                    reason: "Cannot replay a script and simulate at the same time".to_string(),
                });
            }
            (Some(path), None) => EventSource::Script(path),
            (None, Some(events)) => EventSource::Simulate {
                events,
                seed: match overrides.seed {
                    Some(seed) => seed,
                    None => parse_env("SEATING_SEED")?.unwrap_or(42),
                },
            },
            (None, None) => EventSource::Reference,
        };

        Ok(DriverConfig {
            venue,
            source,
            format,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.venue.validate()?;

        if let EventSource::Simulate { events: 0, .. } = self.source {
            return Err(ConfigError::Invalid {
                var: "SEATING_SIMULATE".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },

    #[error("Invalid venue: {0}")]
    Venue(#[from] SeatingError),
}

/// Parse a setting, naming its flag or variable on failure
fn parse_setting<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    value.parse().map_err(|err: T::Err| ConfigError::Invalid {
        var: var.to_string(),
        reason: format!("'{value}': {err}"),
    })
}

/// Parse an environment variable if it is set
fn parse_env<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    std::env::var(key)
        .ok()
        .map(|value| parse_setting(key, &value))
        .transpose()
}
