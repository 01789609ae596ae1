//! `SimulationState` and its tick loop.
//!
//! # One tick
//!
//! ```text
//! 0. Arrivals    while tick < duration: sample entrants, spawn parties,
//!                give each a ride set and a first target.
//! 1. Parkgoers   over a snapshot of live ids: archive the finished, walk
//!                the free toward their target, enqueue on arrival.
//! 2. Activities  before-stations, rides, after-stations; tick each, then
//!                mark its seated parties Busy and complete its released
//!                ones before the next activity ticks.
//! 3. Logging     every live parkgoer, then every activity.
//! ```

use pk_activity::{ActivityRegistry, TickOutcome};
use pk_agent::{Itinerary, ParkgoerState, ParkgoerStore};
use pk_core::{ActivityId, ParkgoerId, Point, Privileges, SimRng, Tick};
use serde::Serialize;
use tracing::{debug, info, trace};

use crate::arrivals::Party;
use crate::builder::{Park, ParkBuilder};
use crate::config::ParkConfig;
use crate::{SimError, SimObserver, SimResult};

// ── Per-tick telemetry ────────────────────────────────────────────────────────

/// Counters collected during one [`SimulationState::tick`].
///
/// The population fields (`live_people` and the three state counts) are
/// measured after the logging phase.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TickSummary {
    pub tick:            Tick,
    pub spawned_groups:  u64,
    pub spawned_people:  u64,
    pub exited_people:   u64,
    pub seated_people:   u64,
    pub released_people: u64,
    pub live_people:     u64,
    pub free_people:     u64,
    pub wait_people:     u64,
    pub busy_people:     u64,
}

/// People-weighted population by state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StateCounts {
    pub free: u64,
    pub wait: u64,
    pub busy: u64,
}

/// People at one activity right now.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ActivityLoad {
    pub queued:     u32,
    pub processing: u32,
}

// ── SimulationState ───────────────────────────────────────────────────────────

/// The whole simulation: the loaded park, every parkgoer, the clock, and the
/// one random generator all draws go through.
///
/// Driven through three operations: [`load`](Self::load),
/// [`tick`](Self::tick) and [`reset`](Self::reset).  Everything else is a
/// read-only query.
#[derive(Debug)]
pub struct SimulationState {
    seed:         Option<u64>,
    rng:          SimRng,
    park:         Option<Park>,
    parkgoers:    ParkgoerStore,
    current_tick: Tick,
}

impl SimulationState {
    /// An empty, unloaded state.  `seed` takes precedence over any seed in a
    /// configuration loaded later.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seed,
            rng:          SimRng::from_optional_seed(seed),
            park:         None,
            parkgoers:    ParkgoerStore::new(),
            current_tick: Tick::ZERO,
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    // ── Operations ────────────────────────────────────────────────────────

    /// Validate `config` and replace the current state with the park it
    /// describes.  On error the state is left untouched.
    pub fn load(&mut self, config: &ParkConfig) -> SimResult<()> {
        let park = ParkBuilder::from_config(config)?;
        self.load_park(park);
        Ok(())
    }

    /// Replace the current state with an already-built park.
    pub fn load_park(&mut self, park: Park) {
        let seed = self.seed.or(park.seed());
        *self = Self::new(self.seed);
        self.rng = SimRng::from_optional_seed(seed);
        info!(
            activities = park.registry().len(),
            rides = park.registry().rides().len(),
            duration = park.duration(),
            ?seed,
            "park_loaded"
        );
        self.park = Some(park);
    }

    /// Drop the park and every parkgoer, returning to a freshly constructed
    /// state.
    pub fn reset(&mut self) {
        *self = Self::new(self.seed);
        info!("simulation_reset");
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) -> SimResult<TickSummary> {
        let now = self.current_tick;
        let Self { rng, park, parkgoers, .. } = self;
        let park = park.as_mut().ok_or(SimError::NotLoaded)?;
        let mut summary = TickSummary { tick: now, ..TickSummary::default() };

        if now.0 < park.duration() {
            spawn_arrivals(park, parkgoers, rng, now, &mut summary)?;
        }
        iterate_parkgoers(park, parkgoers, rng, now, &mut summary)?;
        tick_activities(&mut park.registry, parkgoers, rng, now, &mut summary)?;

        for parkgoer in parkgoers.live_mut() {
            parkgoer.log(now);
        }
        let order: Vec<ActivityId> = park.registry.tick_order().collect();
        for id in order {
            if let Some(activity) = park.registry.get_mut(id) {
                activity.log(now);
            }
        }

        summary.live_people = parkgoers.live_people();
        summary.free_people = parkgoers.people_in(ParkgoerState::Free);
        summary.wait_people = parkgoers.people_in(ParkgoerState::Wait);
        summary.busy_people = parkgoers.people_in(ParkgoerState::Busy);
        trace!(
            tick = now.0,
            spawned = summary.spawned_people,
            exited = summary.exited_people,
            live = summary.live_people,
            "tick_done"
        );

        self.current_tick = now.next();
        Ok(summary)
    }

    /// Admit a party at the entrance outside the arrival model, at the
    /// current tick.
    pub fn spawn_party(&mut self, people: u32, privileges: Privileges) -> SimResult<ParkgoerId> {
        if people == 0 {
            return Err(SimError::EmptyParty);
        }
        let now = self.current_tick;
        let Self { rng, park, parkgoers, .. } = self;
        let park = park.as_ref().ok_or(SimError::NotLoaded)?;
        admit(park, parkgoers, rng, now, Party { people, privileges })
    }

    // ── Runners ───────────────────────────────────────────────────────────

    /// Run exactly `n` ticks from the current position, ignoring whether the
    /// park has emptied.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            observer.on_tick_start(self.current_tick);
            let summary = self.tick()?;
            observer.on_tick_end(&summary);
        }
        Ok(())
    }

    /// Run until [`is_finished`](Self::is_finished).
    ///
    /// Fails with [`SimError::Overtime`] if parkgoers remain `max_overtime`
    /// ticks after arrivals stop.  Returns the tick the run ended on.
    pub fn run_to_completion<O: SimObserver>(
        &mut self,
        max_overtime: u64,
        observer:     &mut O,
    ) -> SimResult<Tick> {
        let duration = self.duration().ok_or(SimError::NotLoaded)?;
        let deadline = duration.saturating_add(max_overtime);

        while !self.is_finished() {
            let now = self.current_tick;
            if now.0 >= deadline {
                return Err(SimError::Overtime {
                    duration,
                    overtime: max_overtime,
                    live:     self.parkgoers.live_count(),
                });
            }
            observer.on_tick_start(now);
            let summary = self.tick()?;
            observer.on_tick_end(&summary);
        }

        info!(
            tick = self.current_tick.0,
            spawned = self.parkgoers.spawned_people(),
            exited = self.parkgoers.exited_people(),
            "simulation_finished"
        );
        observer.on_sim_end(self);
        Ok(self.current_tick)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn is_loaded(&self) -> bool {
        self.park.is_some()
    }

    /// The tick the next call to [`tick`](Self::tick) will run.
    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    /// Arrival window of the loaded park.
    pub fn duration(&self) -> Option<u64> {
        self.park.as_ref().map(Park::duration)
    }

    pub fn park(&self) -> Option<&Park> {
        self.park.as_ref()
    }

    pub fn activities(&self) -> Option<&ActivityRegistry> {
        self.park.as_ref().map(Park::registry)
    }

    pub fn parkgoers(&self) -> &ParkgoerStore {
        &self.parkgoers
    }

    /// Where a live parkgoer should be drawn.
    ///
    /// Walking parkgoers are at their own position, waiting ones at their
    /// queue slot when the queue has display geometry, and riding ones are
    /// hidden (`None`).
    pub fn parkgoer_position(&self, id: ParkgoerId) -> SimResult<Option<Point>> {
        let parkgoer = self.parkgoers.get(id).ok_or(SimError::UnknownParkgoer(id))?;
        Ok(match parkgoer.state() {
            ParkgoerState::Free => Some(parkgoer.position()),
            ParkgoerState::Wait => parkgoer
                .target()
                .and_then(|t| self.activities()?.get(t))
                .and_then(|a| a.waiting_position(id)),
            ParkgoerState::Busy => None,
        })
    }

    pub fn state_counts(&self) -> StateCounts {
        StateCounts {
            free: self.parkgoers.people_in(ParkgoerState::Free),
            wait: self.parkgoers.people_in(ParkgoerState::Wait),
            busy: self.parkgoers.people_in(ParkgoerState::Busy),
        }
    }

    pub fn activity_load(&self, id: ActivityId) -> SimResult<ActivityLoad> {
        let registry = self.activities().ok_or(SimError::NotLoaded)?;
        let activity = registry.get(id).ok_or(SimError::UnknownActivity(id))?;
        Ok(ActivityLoad {
            queued:     activity.queued_people(),
            processing: activity.processing_people(),
        })
    }

    pub fn spawned_people(&self) -> u64 {
        self.parkgoers.spawned_people()
    }

    pub fn exited_people(&self) -> u64 {
        self.parkgoers.exited_people()
    }

    /// Arrivals are over and nobody is left in the park.
    pub fn is_finished(&self) -> bool {
        match self.duration() {
            Some(duration) => self.current_tick.0 >= duration && self.parkgoers.live_count() == 0,
            None           => false,
        }
    }
}

// ── Tick phases ───────────────────────────────────────────────────────────────

/// Queue length `id` would offer a party holding `privileges`.
fn prospective(
    registry: &ActivityRegistry,
) -> impl FnMut(ActivityId, &Privileges) -> SimResult<u32> + '_ {
    move |id: ActivityId, privileges: &Privileges| {
        let length = registry
            .prospective_length(id, privileges)
            .ok_or(SimError::UnknownActivity(id))??;
        Ok(length)
    }
}

/// Shuffle the rides and keep each with its popularity; redraw until at
/// least one is kept.
fn draw_rides(registry: &ActivityRegistry, rng: &mut SimRng) -> Vec<ActivityId> {
    let rides = registry.rides();
    if rides.is_empty() {
        return Vec::new();
    }
    loop {
        let mut picked = rides.to_vec();
        rng.shuffle(&mut picked);
        picked.retain(|&id| registry.get(id).is_some_and(|a| rng.gen_bool(a.popularity())));
        if !picked.is_empty() {
            return picked;
        }
    }
}

fn spawn_arrivals(
    park:      &Park,
    parkgoers: &mut ParkgoerStore,
    rng:       &mut SimRng,
    now:       Tick,
    summary:   &mut TickSummary,
) -> SimResult<()> {
    for party in park.arrivals().draw(now, rng)? {
        let people = party.people;
        admit(park, parkgoers, rng, now, party)?;
        summary.spawned_groups += 1;
        summary.spawned_people += u64::from(people);
    }
    Ok(())
}

/// Spawn `party` at the entrance with a freshly drawn itinerary and its
/// first target.
fn admit(
    park:      &Park,
    parkgoers: &mut ParkgoerStore,
    rng:       &mut SimRng,
    now:       Tick,
    party:     Party,
) -> SimResult<ParkgoerId> {
    let registry = park.registry();
    let itinerary = Itinerary::new(
        registry.before_stations().iter().copied(),
        draw_rides(registry, rng),
        registry.after_stations().iter().copied(),
    );
    let parkgoer = parkgoers.spawn(party.people, party.privileges, itinerary, park.entrance(), now);
    let target = parkgoer.retarget(prospective(registry))?;
    debug!(parkgoer = %parkgoer.id(), people = parkgoer.people(), ?target, "parkgoer_spawned");
    Ok(parkgoer.id())
}

fn iterate_parkgoers(
    park:      &mut Park,
    parkgoers: &mut ParkgoerStore,
    rng:       &mut SimRng,
    now:       Tick,
    summary:   &mut TickSummary,
) -> SimResult<()> {
    let movement = park.movement();
    for id in parkgoers.live_ids() {
        let Some(parkgoer) = parkgoers.get_mut(id) else {
            continue;
        };
        let Some(target) = parkgoer.target() else {
            if let Some(exited) = parkgoers.archive(id) {
                debug!(parkgoer = %id, people = exited.people(), "parkgoer_exited");
                summary.exited_people += u64::from(exited.people());
            }
            continue;
        };
        if parkgoer.state() != ParkgoerState::Free {
            continue;
        }

        let activity = park
            .registry
            .get_mut(target)
            .ok_or(SimError::UnknownActivity(target))?;
        if parkgoer.step_toward(activity.position(), &movement, rng) {
            activity.assign(parkgoer.group(), parkgoer.privileges(), now)?;
            parkgoer.enqueue();
        }
    }
    Ok(())
}

fn tick_activities(
    registry:  &mut ActivityRegistry,
    parkgoers: &mut ParkgoerStore,
    rng:       &mut SimRng,
    now:       Tick,
    summary:   &mut TickSummary,
) -> SimResult<()> {
    let order: Vec<ActivityId> = registry.tick_order().collect();
    for id in order {
        let activity = registry.get_mut(id).ok_or(SimError::UnknownActivity(id))?;
        let TickOutcome { seated, released } = activity.tick(now, rng)?;
        let position = activity.position();

        for group in seated {
            parkgoers
                .get_mut(group.id)
                .ok_or(SimError::UnknownParkgoer(group.id))?
                .seat();
            summary.seated_people += u64::from(group.people);
        }
        for group in released {
            let parkgoer = parkgoers
                .get_mut(group.id)
                .ok_or(SimError::UnknownParkgoer(group.id))?;
            parkgoer.complete(position, prospective(registry))?;
            summary.released_people += u64::from(group.people);
        }
    }
    Ok(())
}
