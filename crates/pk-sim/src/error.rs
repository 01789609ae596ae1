//! Error types for pk-sim.
//!
//! [`ConfigError`] covers everything that can go wrong while turning a
//! configuration document into a park; a failed load commits nothing.
//! [`SimError`] is what the driver returns, wrapping configuration errors
//! and the runtime invariant violations raised by activities.

use std::path::PathBuf;

use pk_activity::{ActivityError, BuildError};
use pk_core::{ActivityId, CoreError, ParkgoerId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("activity {activity:?}: unknown station {station:?}, expected \"before\" or \"after\"")]
    UnknownStation { activity: String, station: String },

    #[error("activity {activity:?}: popularity {value} is outside (0, 1]")]
    Popularity { activity: String, value: f64 },

    #[error("activity {activity:?}, process {index}: duration {value} must be finite and non-negative")]
    Duration { activity: String, index: usize, value: f64 },

    #[error("activity {activity:?}, process {index}: capacity must be at least 1")]
    Capacity { activity: String, index: usize },

    #[error("parkgoers.{0} must list at least one entry")]
    EmptyDistribution(&'static str),

    #[error("parkgoers.{field}: probability {value} is outside [0, 1]")]
    Probability { field: &'static str, value: f64 },

    #[error("parkgoers.groupsize: group size must be at least 1")]
    GroupSize,

    #[error("parkgoers.{field}: {value} must be finite and non-negative")]
    Speed { field: &'static str, value: f64 },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invariant violated: {0}")]
    Invariant(#[from] ActivityError),

    #[error("arrival sampling failed: {0}")]
    Arrivals(#[from] CoreError),

    #[error("a party needs at least one person")]
    EmptyParty,

    #[error("no park is loaded")]
    NotLoaded,

    #[error("unknown parkgoer {0}")]
    UnknownParkgoer(ParkgoerId),

    #[error("unknown activity {0}")]
    UnknownActivity(ActivityId),

    #[error("{live} parkgoers still in the park {overtime} ticks after closing at tick {duration}")]
    Overtime { duration: u64, overtime: u64, live: usize },
}

pub type SimResult<T> = Result<T, SimError>;
