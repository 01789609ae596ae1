//! `Process`: one unit of service capacity (a ride vehicle, a register).
//!
//! # Lifecycle
//!
//! ```text
//! idle ──seat()*──▶ idle+occupied ──start()──▶ active ──tick()×N──▶ release() ──▶ idle
//! ```
//!
//! `start` samples a fresh target duration and sets `elapsed = 1`.  Each
//! subsequent `tick` increments `elapsed` until it reaches the target; the
//! tick after that releases every occupant at once.

use std::str::FromStr;

use pk_core::{Group, SimRng, Tick};

use crate::{ActivityError, ActivityResult, BuildError};

// ── CapacityKind ──────────────────────────────────────────────────────────────

/// What `capacity` counts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CapacityKind {
    /// Capacity is a number of parties, whatever their size.
    Group,
    /// Capacity is a number of people.
    #[default]
    Person,
}

impl FromStr for CapacityKind {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "group"  => Ok(CapacityKind::Group),
            "person" => Ok(CapacityKind::Person),
            other    => Err(BuildError::UnknownProcessKind(other.to_owned())),
        }
    }
}

// ── DurationSource ────────────────────────────────────────────────────────────

/// How long one service cycle lasts, resolved once at load time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DurationSource {
    Fixed(f64),
    /// Uniform in `[base - spread, base + spread)`.
    Ranged { base: f64, spread: f64 },
}

impl DurationSource {
    /// The configured base duration (used by the relative-window formula).
    pub fn base(&self) -> f64 {
        match *self {
            DurationSource::Fixed(v)             => v,
            DurationSource::Ranged { base, .. }  => base,
        }
    }

    /// Sample one cycle length in whole ticks.
    pub fn sample(&self, rng: &mut SimRng) -> u32 {
        match *self {
            DurationSource::Fixed(v)                => round_ticks(v),
            DurationSource::Ranged { base, spread } => round_ticks(base + rng.jitter(spread)),
        }
    }
}

/// Round to the nearest tick; negative samples clamp to zero.
fn round_ticks(v: f64) -> u32 {
    v.round().max(0.0) as u32
}

// ── ProcessSample ─────────────────────────────────────────────────────────────

/// One per-tick snapshot of a process.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProcessSample {
    pub time:             Tick,
    /// Occupancy in the process's own unit (groups or people).
    pub occupants:        u32,
    pub people:           u32,
    pub active:           bool,
    pub progress:         u32,
    pub current_duration: u32,
}

// ── Process ───────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct Process {
    capacity:        u32,
    kind:            CapacityKind,
    occupants:       Vec<Group>,
    active:          bool,
    elapsed:         u32,
    target_duration: u32,
    duration:        DurationSource,
    record:          Vec<ProcessSample>,
}

impl Process {
    /// Create an idle, empty process.  The target duration starts at the
    /// rounded base duration until the first `start` samples a real one.
    pub fn new(capacity: u32, kind: CapacityKind, duration: DurationSource) -> Self {
        Self {
            capacity,
            kind,
            occupants: Vec::new(),
            active: false,
            elapsed: 0,
            target_duration: round_ticks(duration.base()),
            duration,
            record: Vec::new(),
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn kind(&self) -> CapacityKind {
        self.kind
    }

    pub fn duration(&self) -> DurationSource {
        self.duration
    }

    pub fn occupants(&self) -> &[Group] {
        &self.occupants
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn target_duration(&self) -> u32 {
        self.target_duration
    }

    pub fn record(&self) -> &[ProcessSample] {
        &self.record
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// Total people seated, regardless of kind.
    pub fn people(&self) -> u32 {
        self.occupants.iter().map(|g| g.people).sum()
    }

    /// Occupancy measured in the unit `capacity` counts.
    pub fn occupied(&self) -> u32 {
        match self.kind {
            CapacityKind::Group  => self.occupants.len() as u32,
            CapacityKind::Person => self.people(),
        }
    }

    /// Whether the process can take no more (or cannot take `candidate`).
    ///
    /// The two kinds differ at the boundary and must stay that way:
    /// - `Group`: full iff occupant count == capacity; the candidate is
    ///   ignored.
    /// - `Person`: full iff `people + candidate.people > capacity`, so a seat
    ///   that lands exactly on capacity is allowed.
    pub fn is_full(&self, candidate: Option<Group>) -> bool {
        match self.kind {
            CapacityKind::Group  => self.occupied() == self.capacity,
            CapacityKind::Person => {
                self.occupied() + candidate.map_or(0, |g| g.people) > self.capacity
            }
        }
    }

    /// Add `group` to the occupants.
    pub fn seat(&mut self, group: Group) -> ActivityResult<()> {
        if self.is_full(Some(group)) {
            return Err(ActivityError::CapacityExceeded {
                capacity: self.capacity,
                occupied: self.occupied(),
                incoming: match self.kind {
                    CapacityKind::Group  => 1,
                    CapacityKind::Person => group.people,
                },
            });
        }
        self.occupants.push(group);
        Ok(())
    }

    /// Begin a service cycle with a freshly sampled duration.
    pub fn start(&mut self, rng: &mut SimRng) -> ActivityResult<()> {
        if self.is_empty() {
            return Err(ActivityError::EmptyProcess);
        }
        self.target_duration = self.duration.sample(rng);
        self.elapsed = 1;
        self.active = true;
        Ok(())
    }

    /// Age the current cycle by one tick.
    ///
    /// Returns the released occupants when the cycle completes this tick,
    /// otherwise an empty `Vec`.  No-op while inactive.
    pub fn tick(&mut self) -> Vec<Group> {
        if !self.active {
            return Vec::new();
        }
        if self.elapsed < self.target_duration {
            self.elapsed += 1;
            Vec::new()
        } else {
            self.release()
        }
    }

    /// Release all occupants simultaneously and return to idle.
    pub fn release(&mut self) -> Vec<Group> {
        self.elapsed = 0;
        self.active = false;
        std::mem::take(&mut self.occupants)
    }

    pub fn log(&mut self, time: Tick) {
        self.record.push(ProcessSample {
            time,
            occupants:        self.occupied(),
            people:           self.people(),
            active:           self.active,
            progress:         self.elapsed,
            current_duration: self.target_duration,
        });
    }
}
