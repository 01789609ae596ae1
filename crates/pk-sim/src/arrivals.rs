//! Arrival sampling: how many people enter on a tick, and in what parties.
//!
//! ```text
//! λ(t) = round(c0 + c1·t + c2·t² + …)
//! entrants ~ Poisson(λ)            (none when λ ≤ 0)
//! spawn parties until their summed people reach `entrants`
//! ```

use pk_core::{CoreResult, Privileges, SimRng, Tick};

/// One party-size outcome and its probability.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SizeWeight {
    pub size:        u32,
    pub probability: f64,
}

/// One privilege outcome and its probability; `None` grants nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct PrivilegeWeight {
    pub privilege:   Option<String>,
    pub probability: f64,
}

/// A party about to be spawned.
#[derive(Clone, Debug, PartialEq)]
pub struct Party {
    pub people:     u32,
    pub privileges: Privileges,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ArrivalModel {
    polynomial: Vec<f64>,
    sizes:      Vec<SizeWeight>,
    privileges: Vec<PrivilegeWeight>,
}

impl ArrivalModel {
    pub fn new(polynomial: Vec<f64>, sizes: Vec<SizeWeight>, privileges: Vec<PrivilegeWeight>) -> Self {
        Self { polynomial, sizes, privileges }
    }

    /// Expected entrants at `tick`, rounded to the nearest whole person.
    pub fn rate_at(&self, tick: Tick) -> f64 {
        let t = tick.0 as f64;
        let (sum, _) = self
            .polynomial
            .iter()
            .fold((0.0, 1.0), |(sum, power), c| (sum + c * power, power * t));
        sum.round()
    }

    /// Number of people entering at `tick`.
    pub fn entrants(&self, tick: Tick, rng: &mut SimRng) -> CoreResult<u64> {
        let lambda = self.rate_at(tick);
        if lambda <= 0.0 {
            return Ok(0);
        }
        rng.poisson(lambda)
    }

    /// Party size by cumulative probability, 1 if the weights run out.
    pub fn draw_size(&self, rng: &mut SimRng) -> u32 {
        rng.pick_cumulative(&self.sizes, |w| w.probability)
            .map_or(1, |w| w.size)
    }

    /// At most one privilege tag, by cumulative probability.
    pub fn draw_privileges(&self, rng: &mut SimRng) -> Privileges {
        rng.pick_cumulative(&self.privileges, |w| w.probability)
            .and_then(|w| w.privilege.clone())
            .into_iter()
            .collect()
    }

    /// Every party arriving at `tick`.
    pub fn draw(&self, tick: Tick, rng: &mut SimRng) -> CoreResult<Vec<Party>> {
        let entrants = self.entrants(tick, rng)?;
        let mut parties = Vec::new();
        let mut total = 0u64;
        while total < entrants {
            let people = self.draw_size(rng);
            let privileges = self.draw_privileges(rng);
            total += u64::from(people);
            parties.push(Party { people, privileges });
        }
        Ok(parties)
    }
}
