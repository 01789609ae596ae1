//! `Group`: the handle queues and processes hold for a parkgoer party.
//!
//! Queues and processes never own the full `Parkgoer`; they hold a copyable
//! `(id, people)` pair.  `people` is all they need for weighted lengths and
//! capacity checks, and the id lets the driver find the parkgoer again when
//! a process seats or releases it.

use std::collections::BTreeSet;

use crate::ParkgoerId;

/// Privilege tags carried by a parkgoer or required by a queue.
pub type Privileges = BTreeSet<String>;

/// Privilege automatically granted to parties of exactly one person.
pub const SINGLE_PRIVILEGE: &str = "single";

/// A party of `people` visitors travelling together.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    pub id:     ParkgoerId,
    pub people: u32,
}

impl Group {
    #[inline]
    pub fn new(id: ParkgoerId, people: u32) -> Self {
        Self { id, people }
    }
}
