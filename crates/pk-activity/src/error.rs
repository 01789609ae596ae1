//! Error types for pk-activity.
//!
//! Two taxonomies are kept apart on purpose:
//!
//! - [`BuildError`]: raised while constructing an activity from its
//!   configuration.  Nothing has been committed to simulation state yet.
//! - [`ActivityError`]: a runtime invariant violation discovered during a
//!   tick.  These are deterministic given the current state; retrying the
//!   same tick would fail the same way.

use thiserror::Error;

/// Runtime invariant violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActivityError {
    #[error("seating {incoming} people would exceed process capacity {capacity} (occupied {occupied})")]
    CapacityExceeded {
        capacity: u32,
        occupied: u32,
        incoming: u32,
    },

    #[error("cannot start a process with no occupants")]
    EmptyProcess,

    #[error("activity {activity:?} has no queue accepting privileges {privileges:?}")]
    NoAssignableQueue {
        activity:   String,
        privileges: Vec<String>,
    },
}

/// Load-time construction errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("activity {0:?}: at least one process is required")]
    NoProcesses(String),

    #[error("activity {0:?}: at least one queue is required")]
    NoQueues(String),

    #[error("unknown process type {0:?}: expected \"group\" or \"person\"")]
    UnknownProcessKind(String),

    #[error("unknown consumer policy {0:?}: expected \"longestQueue\", \"turnBased\" or \"tiered\"")]
    UnknownConsumer(String),

    #[error("unknown station {0:?}: expected \"before\" or \"after\"")]
    UnknownStation(String),

    #[error("unknown assigner policy {0:?}: expected \"shortestQueue\" or \"privileged\"")]
    UnknownAssigner(String),

    #[error("activity {0:?}: relative processes need a positive total process duration")]
    RelativeWindow(String),

    #[error("too many activities: the registry holds at most {max}")]
    TooManyActivities { max: usize },
}

pub type ActivityResult<T> = Result<T, ActivityError>;
pub type BuildResult<T> = Result<T, BuildError>;
