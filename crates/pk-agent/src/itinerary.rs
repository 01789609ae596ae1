//! `Itinerary`: the activities a parkgoer still has to visit.
//!
//! Three buckets, visited strictly in order:
//!
//! | Bucket   | Order                                                   |
//! |----------|---------------------------------------------------------|
//! | `before` | fixed, front to back                                    |
//! | `rides`  | greedy: shortest prospective queue first, ties to the earliest entry |
//! | `after`  | fixed, front to back                                    |

use std::collections::VecDeque;

use pk_core::ActivityId;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Itinerary {
    before: VecDeque<ActivityId>,
    rides:  Vec<ActivityId>,
    after:  VecDeque<ActivityId>,
}

impl Itinerary {
    pub fn new(
        before: impl IntoIterator<Item = ActivityId>,
        rides:  impl IntoIterator<Item = ActivityId>,
        after:  impl IntoIterator<Item = ActivityId>,
    ) -> Self {
        Self {
            before: before.into_iter().collect(),
            rides:  rides.into_iter().collect(),
            after:  after.into_iter().collect(),
        }
    }

    pub fn before(&self) -> &VecDeque<ActivityId> {
        &self.before
    }

    pub fn rides(&self) -> &[ActivityId] {
        &self.rides
    }

    pub fn after(&self) -> &VecDeque<ActivityId> {
        &self.after
    }

    pub fn is_empty(&self) -> bool {
        self.before.is_empty() && self.rides.is_empty() && self.after.is_empty()
    }

    /// Activities left to visit, across all buckets.
    pub fn remaining(&self) -> usize {
        self.before.len() + self.rides.len() + self.after.len()
    }

    /// Drop `visited` from whichever bucket holds it.  Returns `false` if it
    /// was not on the itinerary.
    pub fn remove(&mut self, visited: ActivityId) -> bool {
        if let Some(i) = self.before.iter().position(|&a| a == visited) {
            self.before.remove(i);
            return true;
        }
        if let Some(i) = self.rides.iter().position(|&a| a == visited) {
            self.rides.remove(i);
            return true;
        }
        if let Some(i) = self.after.iter().position(|&a| a == visited) {
            self.after.remove(i);
            return true;
        }
        false
    }

    /// The next activity to head for, or `None` once everything is visited.
    ///
    /// `prospective` reports the queue length a ride would currently offer;
    /// it is only consulted while before-stations are exhausted and rides
    /// remain.
    pub fn next_target<E, F>(&self, mut prospective: F) -> Result<Option<ActivityId>, E>
    where
        F: FnMut(ActivityId) -> Result<u32, E>,
    {
        if let Some(&head) = self.before.front() {
            return Ok(Some(head));
        }
        if !self.rides.is_empty() {
            let mut best: Option<(ActivityId, u32)> = None;
            for &ride in &self.rides {
                let len = prospective(ride)?;
                if best.is_none_or(|(_, b)| len < b) {
                    best = Some((ride, len));
                }
            }
            return Ok(best.map(|(ride, _)| ride));
        }
        Ok(self.after.front().copied())
    }
}
