//! `Parkgoer`: one party and its three-state machine.
//!
//! ```text
//!            arrive + assign            seat
//!   Free ──────────────────▶ Wait ──────────────▶ Busy
//!    ▲                                             │
//!    └─────────────── complete (release) ──────────┘
//! ```
//!
//! A `Free` parkgoer with no target has finished its itinerary and is
//! archived by the driver.

use std::fmt;

use pk_core::{ActivityId, Group, ParkgoerId, Point, Privileges, SimRng, Tick, SINGLE_PRIVILEGE};

use crate::Itinerary;

// ── ParkgoerState ─────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum ParkgoerState {
    /// Walking toward the current target.
    #[default]
    Free,
    /// Standing in one of the target's queues.
    Wait,
    /// Seated in one of the target's processes.
    Busy,
}

impl ParkgoerState {
    pub fn as_str(self) -> &'static str {
        match self {
            ParkgoerState::Free => "FREE",
            ParkgoerState::Wait => "WAIT",
            ParkgoerState::Busy => "BUSY",
        }
    }
}

impl fmt::Display for ParkgoerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── History ───────────────────────────────────────────────────────────────────

/// One per-tick snapshot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEntry {
    pub tick:   Tick,
    pub state:  ParkgoerState,
    /// Target at logging time; `None` once the itinerary is exhausted.
    pub target: Option<ActivityId>,
}

/// Fraction of logged ticks spent in each state.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateProportions {
    pub free: f64,
    pub wait: f64,
    pub busy: f64,
}

// ── Movement ──────────────────────────────────────────────────────────────────

/// Walking speed shared by every parkgoer in a run.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Movement {
    /// Mean distance covered per tick.
    pub speed: f64,
    /// Per-tick jitter: each step is `speed ± range`.
    pub range: f64,
}

impl Movement {
    pub fn new(speed: f64, range: f64) -> Self {
        Self { speed, range }
    }

    /// Largest possible single step; anything closer counts as arrived.
    pub fn reach(&self) -> f64 {
        self.speed + self.range
    }
}

// ── Parkgoer ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Parkgoer {
    id:         ParkgoerId,
    people:     u32,
    privileges: Privileges,
    itinerary:  Itinerary,
    target:     Option<ActivityId>,
    position:   Point,
    state:      ParkgoerState,
    spawned_at: Tick,
    history:    Vec<HistoryEntry>,
}

impl Parkgoer {
    /// A new party standing at `position` with no target yet.
    ///
    /// Parties of exactly one person always hold the `"single"` privilege.
    pub fn new(
        id:         ParkgoerId,
        people:     u32,
        mut privileges: Privileges,
        itinerary:  Itinerary,
        position:   Point,
        spawned_at: Tick,
    ) -> Self {
        if people == 1 {
            privileges.insert(SINGLE_PRIVILEGE.to_owned());
        }
        Self {
            id,
            people,
            privileges,
            itinerary,
            target: None,
            position,
            state: ParkgoerState::Free,
            spawned_at,
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> ParkgoerId {
        self.id
    }

    pub fn people(&self) -> u32 {
        self.people
    }

    /// The handle queues and processes hold for this party.
    pub fn group(&self) -> Group {
        Group::new(self.id, self.people)
    }

    pub fn privileges(&self) -> &Privileges {
        &self.privileges
    }

    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    pub fn target(&self) -> Option<ActivityId> {
        self.target
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn state(&self) -> ParkgoerState {
        self.state
    }

    pub fn spawned_at(&self) -> Tick {
        self.spawned_at
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// `true` once the itinerary is exhausted and no target remains.
    pub fn is_done(&self) -> bool {
        self.target.is_none()
    }

    /// Pick the next target from the itinerary.
    ///
    /// `prospective(activity, privileges)` returns the length of the queue
    /// this party would join at `activity`.
    pub fn retarget<E, F>(&mut self, mut prospective: F) -> Result<Option<ActivityId>, E>
    where
        F: FnMut(ActivityId, &Privileges) -> Result<u32, E>,
    {
        let privileges = &self.privileges;
        let next = self.itinerary.next_target(|a| prospective(a, privileges))?;
        self.target = next;
        Ok(next)
    }

    /// Walk one tick toward `destination`.
    ///
    /// Returns `true` on arrival, in which case the position snaps onto
    /// `destination`.  Otherwise moves by `speed ± range`.
    pub fn step_toward(&mut self, destination: Point, movement: &Movement, rng: &mut SimRng) -> bool {
        if self.position.distance(destination) <= movement.reach() {
            self.position = destination;
            return true;
        }
        let step = movement.speed + rng.jitter(movement.range);
        self.position.move_toward(destination, step);
        false
    }

    /// Joined a queue at the current target.
    pub fn enqueue(&mut self) {
        self.state = ParkgoerState::Wait;
    }

    /// Taken from a queue into a process.
    pub fn seat(&mut self) {
        self.state = ParkgoerState::Busy;
    }

    /// Released by a process at `target_position`: stand there, strike the
    /// visited activity off the itinerary, and choose what comes next.
    pub fn complete<E, F>(&mut self, target_position: Point, prospective: F) -> Result<Option<ActivityId>, E>
    where
        F: FnMut(ActivityId, &Privileges) -> Result<u32, E>,
    {
        self.position = target_position;
        if let Some(visited) = self.target.take() {
            self.itinerary.remove(visited);
        }
        self.state = ParkgoerState::Free;
        self.retarget(prospective)
    }

    pub fn log(&mut self, tick: Tick) {
        self.history.push(HistoryEntry { tick, state: self.state, target: self.target });
    }

    /// Fraction of logged ticks spent in each state; all zero before the
    /// first log.
    pub fn state_proportions(&self) -> StateProportions {
        let total = self.history.len();
        if total == 0 {
            return StateProportions::default();
        }
        let count = |s: ParkgoerState| self.history.iter().filter(|h| h.state == s).count() as f64;
        let total = total as f64;
        StateProportions {
            free: count(ParkgoerState::Free) / total,
            wait: count(ParkgoerState::Wait) / total,
            busy: count(ParkgoerState::Busy) / total,
        }
    }
}
