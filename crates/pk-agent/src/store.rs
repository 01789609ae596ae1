//! `ParkgoerStore`: the live registry and the exited archive.
//!
//! Live parkgoers are kept in a `BTreeMap` keyed by id, so iteration order
//! is spawn order.  The driver iterates over a snapshot from
//! [`ParkgoerStore::live_ids`], which lets it archive parkgoers mid-pass
//! without disturbing the remaining iteration.

use std::collections::BTreeMap;

use pk_core::{ParkgoerId, Point, Privileges, Tick};

use crate::{Itinerary, Parkgoer, ParkgoerState};

#[derive(Debug, Default)]
pub struct ParkgoerStore {
    live:           BTreeMap<ParkgoerId, Parkgoer>,
    exited:         Vec<Parkgoer>,
    next_id:        ParkgoerId,
    spawned_people: u64,
    exited_people:  u64,
}

impl ParkgoerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parkgoer with a fresh id and add it to the live registry.
    pub fn spawn(
        &mut self,
        people:     u32,
        privileges: Privileges,
        itinerary:  Itinerary,
        position:   Point,
        now:        Tick,
    ) -> &mut Parkgoer {
        let id = self.next_id;
        self.next_id = id.next();
        self.spawned_people += u64::from(people);
        self.live
            .entry(id)
            .or_insert_with(|| Parkgoer::new(id, people, privileges, itinerary, position, now))
    }

    pub fn get(&self, id: ParkgoerId) -> Option<&Parkgoer> {
        self.live.get(&id)
    }

    pub fn get_mut(&mut self, id: ParkgoerId) -> Option<&mut Parkgoer> {
        self.live.get_mut(&id)
    }

    /// Move a live parkgoer to the exited archive.
    pub fn archive(&mut self, id: ParkgoerId) -> Option<&Parkgoer> {
        let parkgoer = self.live.remove(&id)?;
        self.exited_people += u64::from(parkgoer.people());
        self.exited.push(parkgoer);
        self.exited.last()
    }

    /// Ids of every live parkgoer, in spawn order.
    pub fn live_ids(&self) -> Vec<ParkgoerId> {
        self.live.keys().copied().collect()
    }

    pub fn live(&self) -> impl Iterator<Item = &Parkgoer> {
        self.live.values()
    }

    pub fn live_mut(&mut self) -> impl Iterator<Item = &mut Parkgoer> {
        self.live.values_mut()
    }

    pub fn exited(&self) -> &[Parkgoer] {
        &self.exited
    }

    /// Live then exited.
    pub fn all(&self) -> impl Iterator<Item = &Parkgoer> {
        self.live.values().chain(self.exited.iter())
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn live_people(&self) -> u64 {
        self.live.values().map(|p| u64::from(p.people())).sum()
    }

    /// Live people currently in `state`.
    pub fn people_in(&self, state: ParkgoerState) -> u64 {
        self.live
            .values()
            .filter(|p| p.state() == state)
            .map(|p| u64::from(p.people()))
            .sum()
    }

    pub fn spawned_people(&self) -> u64 {
        self.spawned_people
    }

    pub fn exited_people(&self) -> u64 {
        self.exited_people
    }

    /// Drop every parkgoer and zero all counters.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
