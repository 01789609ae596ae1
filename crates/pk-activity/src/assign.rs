//! Assignment policies: which queue an arriving party joins.

use std::str::FromStr;

use pk_core::Privileges;

use crate::{BuildError, Queue};

/// Closed set of assignment strategies, resolved from the configuration
/// name once at load time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum AssignPolicy {
    /// Minimum people-weighted length among all queues.
    ShortestQueue,
    /// Shortest among the queues the party's privileges admit.
    #[default]
    Privileged,
}

impl AssignPolicy {
    /// Resolve an optional configuration name; `None` gives the default.
    pub fn from_name(name: Option<&str>) -> Result<Self, BuildError> {
        name.map_or(Ok(Self::default()), |n| n.parse())
    }

    /// Index of the queue a party holding `privileges` would join, or
    /// `None` when no queue admits it.
    pub fn select(self, queues: &[Queue], privileges: &Privileges) -> Option<usize> {
        match self {
            AssignPolicy::ShortestQueue => shortest(queues.iter().enumerate()),
            AssignPolicy::Privileged    => shortest(
                queues.iter().enumerate().filter(|(_, q)| q.admits(privileges)),
            ),
        }
    }
}

impl FromStr for AssignPolicy {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shortestQueue" => Ok(AssignPolicy::ShortestQueue),
            "privileged"    => Ok(AssignPolicy::Privileged),
            other           => Err(BuildError::UnknownAssigner(other.to_owned())),
        }
    }
}

/// First candidate with the minimum length (ties keep the earliest).
fn shortest<'a>(candidates: impl Iterator<Item = (usize, &'a Queue)>) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (i, q) in candidates {
        let len = q.len();
        if best.is_none_or(|(_, b)| len < b) {
            best = Some((i, len));
        }
    }
    best.map(|(i, _)| i)
}
