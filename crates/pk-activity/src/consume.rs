//! Consumption policies: which queue an idle process draws from next.
//!
//! Each policy is a small stateful object living on its `Activity` for the
//! whole run.  The activity calls [`ConsumePolicy::select`] repeatedly while
//! filling one idle process; state such as a rotation index or a cached rank
//! order carries over between calls and between ticks.
//!
//! A queue is only ever returned when its head would fit the process
//! (`!process.is_full(Some(head))`), so the caller can pop and seat without
//! re-checking.

use std::str::FromStr;

use pk_core::SINGLE_PRIVILEGE;

use crate::{BuildError, Process, Queue};

/// Privilege tag that marks fast-lane queues for the tiered consumer.
pub const PRIORITY_PRIVILEGE: &str = "priority";

/// Share of capacity the tiered consumer reserves for priority parties.
const PRIORITY_RATIO: f64 = 0.5;

/// Stateful "pick a queue for this idle process" strategy.
pub trait ConsumePolicy {
    /// Called once before filling each idle process.
    fn begin_fill(&mut self) {}

    /// The queue to pop next for `process`, or `None` to stop filling.
    fn select(&mut self, process: &Process, queues: &[Queue]) -> Option<usize>;
}

#[inline]
fn head_fits(process: &Process, queue: &Queue) -> bool {
    queue.peek().is_some_and(|head| !process.is_full(Some(head)))
}

// ── LongestQueue ──────────────────────────────────────────────────────────────

/// Draw from the longest queue whose head fits.
///
/// The rank order persists between calls and is re-sorted stably each time,
/// so queues of equal length keep their previous relative rank.
#[derive(Clone, Debug)]
pub struct LongestQueue {
    order: Vec<usize>,
}

impl LongestQueue {
    pub fn new(queue_count: usize) -> Self {
        Self { order: (0..queue_count).collect() }
    }

    /// Current rank order (longest first as of the last call).
    pub fn order(&self) -> &[usize] {
        &self.order
    }
}

impl ConsumePolicy for LongestQueue {
    fn select(&mut self, process: &Process, queues: &[Queue]) -> Option<usize> {
        self.order.sort_by_key(|&i| std::cmp::Reverse(queues[i].len()));
        self.order
            .iter()
            .copied()
            .find(|&i| head_fits(process, &queues[i]))
    }
}

// ── TurnBased ─────────────────────────────────────────────────────────────────

/// Round-robin over the queue list.
///
/// The index moves past each queue that is served, so with equally eligible
/// queues successive seats come from 0, 1, 2, 0, 1, 2, …  When no head fits
/// the index stays where it is.
#[derive(Clone, Debug, Default)]
pub struct TurnBased {
    index: usize,
}

impl TurnBased {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl ConsumePolicy for TurnBased {
    fn select(&mut self, process: &Process, queues: &[Queue]) -> Option<usize> {
        let n = queues.len();
        if n == 0 {
            return None;
        }
        if !queues.iter().any(|q| head_fits(process, q)) {
            return None;
        }
        loop {
            let i = self.index;
            self.index = (i + 1) % n;
            if head_fits(process, &queues[i]) {
                return Some(i);
            }
        }
    }
}

// ── Tiered ────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
enum Tier {
    #[default]
    Priority,
    Normal,
    Single,
    Exhausted,
}

/// Priority lane up to half capacity, then unrestricted queues, then the
/// single-rider lane.  Each tier is finished before the next starts.
#[derive(Clone, Debug, Default)]
pub struct Tiered {
    tier: Tier,
}

impl Tiered {
    pub fn new() -> Self {
        Self::default()
    }

    fn first_fit<P>(process: &Process, queues: &[Queue], in_tier: P) -> Option<usize>
    where
        P: Fn(&Queue) -> bool,
    {
        queues
            .iter()
            .position(|q| in_tier(q) && head_fits(process, q))
    }
}

impl ConsumePolicy for Tiered {
    fn begin_fill(&mut self) {
        self.tier = Tier::Priority;
    }

    fn select(&mut self, process: &Process, queues: &[Queue]) -> Option<usize> {
        loop {
            let found = match self.tier {
                Tier::Priority => {
                    if (process.occupied() as f64) < PRIORITY_RATIO * process.capacity() as f64 {
                        Self::first_fit(process, queues, |q| q.has_privilege(PRIORITY_PRIVILEGE))
                    } else {
                        None
                    }
                }
                Tier::Normal    => Self::first_fit(process, queues, |q| !q.is_restricted()),
                Tier::Single    => Self::first_fit(process, queues, |q| q.has_privilege(SINGLE_PRIVILEGE)),
                Tier::Exhausted => return None,
            };
            if found.is_some() {
                return found;
            }
            self.tier = match self.tier {
                Tier::Priority => Tier::Normal,
                Tier::Normal   => Tier::Single,
                _              => Tier::Exhausted,
            };
        }
    }
}

// ── Consumer ──────────────────────────────────────────────────────────────────

/// The closed set of consumption policies an activity can carry.
#[derive(Clone, Debug)]
pub enum Consumer {
    LongestQueue(LongestQueue),
    TurnBased(TurnBased),
    Tiered(Tiered),
}

/// Policy name without the per-activity state, as parsed from configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ConsumerKind {
    LongestQueue,
    TurnBased,
    #[default]
    Tiered,
}

impl ConsumerKind {
    /// Resolve an optional configuration name; `None` gives the tiered
    /// consumer.
    pub fn from_name(name: Option<&str>) -> Result<Self, BuildError> {
        name.map_or(Ok(Self::default()), |n| n.parse())
    }
}

impl FromStr for ConsumerKind {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "longestQueue" => Ok(ConsumerKind::LongestQueue),
            "turnBased"    => Ok(ConsumerKind::TurnBased),
            "tiered"       => Ok(ConsumerKind::Tiered),
            other          => Err(BuildError::UnknownConsumer(other.to_owned())),
        }
    }
}

impl Consumer {
    /// Fresh policy state for an activity with `queue_count` queues.
    pub fn new(kind: ConsumerKind, queue_count: usize) -> Self {
        match kind {
            ConsumerKind::LongestQueue => Consumer::LongestQueue(LongestQueue::new(queue_count)),
            ConsumerKind::TurnBased    => Consumer::TurnBased(TurnBased::new()),
            ConsumerKind::Tiered       => Consumer::Tiered(Tiered::new()),
        }
    }

    pub fn kind(&self) -> ConsumerKind {
        match self {
            Consumer::LongestQueue(_) => ConsumerKind::LongestQueue,
            Consumer::TurnBased(_)    => ConsumerKind::TurnBased,
            Consumer::Tiered(_)       => ConsumerKind::Tiered,
        }
    }
}

impl ConsumePolicy for Consumer {
    fn begin_fill(&mut self) {
        match self {
            Consumer::LongestQueue(p) => p.begin_fill(),
            Consumer::TurnBased(p)    => p.begin_fill(),
            Consumer::Tiered(p)       => p.begin_fill(),
        }
    }

    fn select(&mut self, process: &Process, queues: &[Queue]) -> Option<usize> {
        match self {
            Consumer::LongestQueue(p) => p.select(process, queues),
            Consumer::TurnBased(p)    => p.select(process, queues),
            Consumer::Tiered(p)       => p.select(process, queues),
        }
    }
}
