//! `ActivityRegistry`: every activity in the park, partitioned into the
//! three disjoint groups parkgoers visit in order.

use std::str::FromStr;

use pk_core::{ActivityId, Privileges};

use crate::{Activity, ActivityResult, BuildError, BuildResult};

/// Which registry an activity belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Placement {
    /// Visited first, in registration order (e.g. ticket gates).
    Before,
    /// Visited in between, greedily by shortest expected queue.
    #[default]
    Ride,
    /// Visited last, in registration order (e.g. exits, shops).
    After,
}

/// Parses a station name; rides have no station name.
impl FromStr for Placement {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "before" => Ok(Placement::Before),
            "after"  => Ok(Placement::After),
            other    => Err(BuildError::UnknownStation(other.to_owned())),
        }
    }
}

#[derive(Debug, Default)]
pub struct ActivityRegistry {
    activities: Vec<Activity>,
    placements: Vec<Placement>,
    before:     Vec<ActivityId>,
    rides:      Vec<ActivityId>,
    after:      Vec<ActivityId>,
}

impl ActivityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `activity` and return its id.
    pub fn add(&mut self, activity: Activity, placement: Placement) -> BuildResult<ActivityId> {
        let id = ActivityId::try_from(self.activities.len())
            .map_err(|_| BuildError::TooManyActivities { max: u16::MAX as usize })?;
        self.activities.push(activity);
        self.placements.push(placement);
        match placement {
            Placement::Before => self.before.push(id),
            Placement::Ride   => self.rides.push(id),
            Placement::After  => self.after.push(id),
        }
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn get(&self, id: ActivityId) -> Option<&Activity> {
        self.activities.get(id.index())
    }

    pub fn get_mut(&mut self, id: ActivityId) -> Option<&mut Activity> {
        self.activities.get_mut(id.index())
    }

    pub fn placement(&self, id: ActivityId) -> Option<Placement> {
        self.placements.get(id.index()).copied()
    }

    pub fn label(&self, id: ActivityId) -> Option<&str> {
        self.get(id).map(Activity::label)
    }

    pub fn before_stations(&self) -> &[ActivityId] {
        &self.before
    }

    pub fn rides(&self) -> &[ActivityId] {
        &self.rides
    }

    pub fn after_stations(&self) -> &[ActivityId] {
        &self.after
    }

    /// Ids in the order activities tick and are logged: before-stations,
    /// rides, after-stations.
    pub fn tick_order(&self) -> impl Iterator<Item = ActivityId> + '_ {
        self.before
            .iter()
            .chain(&self.rides)
            .chain(&self.after)
            .copied()
    }

    /// `(id, activity)` pairs in tick order.
    pub fn iter(&self) -> impl Iterator<Item = (ActivityId, &Activity)> + '_ {
        self.tick_order().map(|id| (id, &self.activities[id.index()]))
    }

    /// Prospective queue length at `id` for a party with `privileges`;
    /// `None` if `id` is unknown.
    pub fn prospective_length(
        &self,
        id:         ActivityId,
        privileges: &Privileges,
    ) -> Option<ActivityResult<u32>> {
        self.get(id).map(|a| a.prospective_length(privileges))
    }
}
