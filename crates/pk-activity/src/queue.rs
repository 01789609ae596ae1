//! `Queue`: a FIFO waiting line with a privilege filter and wait-time
//! tracking.
//!
//! Length is people-weighted: a party of four occupies four units of
//! `len()` but a single FIFO slot.  Consumption policies choose *which*
//! queue to draw from; nothing ever reorders members within a queue.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use pk_core::{Group, ParkgoerId, Point, Privileges, Tick};

/// Distance from the activity anchor to the head of a queue configured
/// with an angular offset.
const QUEUE_OFFSET_RADIUS: f64 = 0.025;

// ── QueueDisplay ──────────────────────────────────────────────────────────────

/// Cosmetic layout for drawing queue members.
///
/// Holds only offsets.  The anchor (the owning activity's position) is
/// supplied by the caller on every lookup so the queue never refers back to
/// its activity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QueueDisplay {
    pub offset:  Point,
    /// Direction the line extends in, compass degrees.
    pub angle:   f64,
    pub spacing: f64,
}

impl QueueDisplay {
    /// Layout whose head offset is given as a compass angle.
    pub fn with_angular_offset(offset_angle: f64, angle: f64, spacing: f64) -> Self {
        Self {
            offset: Point::polar(offset_angle, QUEUE_OFFSET_RADIUS),
            angle,
            spacing,
        }
    }

    /// Position of slot `slot` (1-based) relative to `anchor`.
    pub fn slot_position(&self, anchor: Point, slot: usize) -> Point {
        anchor + self.offset + Point::polar(self.angle, slot as f64 * self.spacing)
    }
}

// ── QueueSample ───────────────────────────────────────────────────────────────

/// One per-tick snapshot of a queue.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueSample {
    pub time:   Tick,
    pub length: u32,
}

// ── Queue ─────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct Queue {
    members:     VecDeque<Group>,
    /// Empty = unrestricted.
    privileges:  Privileges,
    display:     Option<QueueDisplay>,
    enqueued_at: FxHashMap<ParkgoerId, Tick>,
    wait_times:  Vec<u64>,
    record:      Vec<QueueSample>,
}

impl Queue {
    pub fn new(privileges: Privileges, display: Option<QueueDisplay>) -> Self {
        Self {
            members: VecDeque::new(),
            privileges,
            display,
            enqueued_at: FxHashMap::default(),
            wait_times: Vec::new(),
            record: Vec::new(),
        }
    }

    /// An unrestricted queue with no display geometry.
    pub fn open() -> Self {
        Self::new(Privileges::new(), None)
    }

    pub fn privileges(&self) -> &Privileges {
        &self.privileges
    }

    pub fn is_restricted(&self) -> bool {
        !self.privileges.is_empty()
    }

    pub fn has_privilege(&self, tag: &str) -> bool {
        self.privileges.contains(tag)
    }

    /// `true` if the queue is unrestricted or shares at least one tag with
    /// `held`.
    pub fn admits(&self, held: &Privileges) -> bool {
        !self.is_restricted() || self.privileges.iter().any(|p| held.contains(p))
    }

    pub fn display(&self) -> Option<&QueueDisplay> {
        self.display.as_ref()
    }

    /// Append `group` at the tail.
    pub fn push(&mut self, group: Group, now: Tick) {
        self.members.push_back(group);
        self.enqueued_at.insert(group.id, now);
    }

    /// The head, without removing it.
    pub fn peek(&self) -> Option<Group> {
        self.members.front().copied()
    }

    /// Remove the head.
    ///
    /// Appends one wait-time sample per person in the departing party.
    pub fn pop(&mut self, now: Tick) -> Option<Group> {
        let group = self.members.pop_front()?;
        if let Some(since) = self.enqueued_at.remove(&group.id) {
            let waited = now.since(since);
            self.wait_times
                .extend(std::iter::repeat_n(waited, group.people as usize));
        }
        Some(group)
    }

    /// People-weighted length.
    pub fn len(&self) -> u32 {
        self.members.iter().map(|g| g.people).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of parties waiting (unweighted).
    pub fn party_count(&self) -> usize {
        self.members.len()
    }

    /// Zero-based FIFO position of a party.
    pub fn position_of(&self, id: ParkgoerId) -> Option<usize> {
        self.members.iter().position(|g| g.id == id)
    }

    pub fn wait_times(&self) -> &[u64] {
        &self.wait_times
    }

    /// Mean wait over all departed people, `None` before anyone left.
    pub fn mean_wait(&self) -> Option<f64> {
        if self.wait_times.is_empty() {
            return None;
        }
        let total: u64 = self.wait_times.iter().sum();
        Some(total as f64 / self.wait_times.len() as f64)
    }

    pub fn record(&self) -> &[QueueSample] {
        &self.record
    }

    pub fn log(&mut self, time: Tick) {
        self.record.push(QueueSample { time, length: self.len() });
    }
}
