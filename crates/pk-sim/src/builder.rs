//! Building a [`Park`] from configuration or by hand.

use pk_activity::{
    Activity, ActivityBuilder, ActivityRegistry, AssignPolicy, CapacityKind, ConsumerKind,
    DurationSource, Placement, Process, Queue, QueueDisplay,
};
use pk_agent::Movement;
use pk_core::{Point, Privileges};

use crate::arrivals::{ArrivalModel, PrivilegeWeight, SizeWeight};
use crate::config::{
    ActivityConfig, DisplayConfig, DurationConfig, ParkConfig, ParkgoerConfig, PositionConfig,
    ProcessConfig,
};
use crate::{ConfigError, ConfigResult};

// ── Park ──────────────────────────────────────────────────────────────────────

/// Everything a loaded configuration provides: the activities and the
/// parameters that drive arrivals and movement.
#[derive(Debug)]
pub struct Park {
    pub(crate) registry: ActivityRegistry,
    arrivals:            ArrivalModel,
    movement:            Movement,
    entrance:            Point,
    duration:            u64,
    seed:                Option<u64>,
}

impl Park {
    pub fn registry(&self) -> &ActivityRegistry {
        &self.registry
    }

    pub fn arrivals(&self) -> &ArrivalModel {
        &self.arrivals
    }

    pub fn movement(&self) -> Movement {
        self.movement
    }

    pub fn entrance(&self) -> Point {
        self.entrance
    }

    /// Ticks during which parkgoers arrive.
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Seed requested by the configuration, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

// ── ParkBuilder ───────────────────────────────────────────────────────────────

/// Fluent builder for [`Park`].
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                      |
/// |------------------|------------------------------|
/// | `.activity(a,p)` | no activities                |
/// | `.arrivals(m)`   | rate 0 (nobody arrives)      |
/// | `.movement(m)`   | speed 0, range 0             |
/// | `.entrance(p)`   | `(0, 0)`                     |
/// | `.seed(s)`       | none                         |
pub struct ParkBuilder {
    activities: Vec<(Activity, Placement)>,
    arrivals:   ArrivalModel,
    movement:   Movement,
    entrance:   Point,
    duration:   u64,
    seed:       Option<u64>,
}

impl ParkBuilder {
    pub fn new(duration: u64) -> Self {
        Self {
            activities: Vec::new(),
            arrivals:   ArrivalModel::default(),
            movement:   Movement::default(),
            entrance:   Point::default(),
            duration,
            seed:       None,
        }
    }

    pub fn activity(mut self, activity: Activity, placement: Placement) -> Self {
        self.activities.push((activity, placement));
        self
    }

    pub fn arrivals(mut self, arrivals: ArrivalModel) -> Self {
        self.arrivals = arrivals;
        self
    }

    pub fn movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }

    pub fn entrance(mut self, entrance: Point) -> Self {
        self.entrance = entrance;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> ConfigResult<Park> {
        let mut registry = ActivityRegistry::new();
        for (activity, placement) in self.activities {
            registry.add(activity, placement)?;
        }
        Ok(Park {
            registry,
            arrivals: self.arrivals,
            movement: self.movement,
            entrance: self.entrance,
            duration: self.duration,
            seed:     self.seed,
        })
    }

    /// Validate `config` and build the park it describes.
    pub fn from_config(config: &ParkConfig) -> ConfigResult<Park> {
        let mut builder = ParkBuilder::new(config.simulation.duration)
            .arrivals(arrival_model(&config.parkgoers)?)
            .movement(movement(&config.parkgoers)?)
            .entrance(config.parkgoers.entrance.map(Point::from).unwrap_or_default());
        if let Some(seed) = config.simulation.seed {
            builder = builder.seed(seed);
        }
        for activity in &config.activities {
            let placement = placement(activity)?;
            builder = builder.activity(build_activity(activity)?, placement);
        }
        builder.build()
    }
}

// ── Config conversion ─────────────────────────────────────────────────────────

fn placement(config: &ActivityConfig) -> ConfigResult<Placement> {
    match config.station.as_deref() {
        None       => Ok(Placement::Ride),
        Some(name) => name.parse().map_err(|_| ConfigError::UnknownStation {
            activity: config.label.clone(),
            station:  name.to_owned(),
        }),
    }
}

fn build_activity(config: &ActivityConfig) -> ConfigResult<Activity> {
    let popularity = config.popularity.unwrap_or(1.0);
    if !(popularity > 0.0 && popularity <= 1.0) {
        return Err(ConfigError::Popularity {
            activity: config.label.clone(),
            value:    popularity,
        });
    }

    let mut builder = ActivityBuilder::new(config.label.clone(), config.position.to_park_point())
        .icon(config.icon.clone())
        .popularity(popularity)
        .assigner(AssignPolicy::from_name(config.assigner.as_deref())?)
        .consumer(ConsumerKind::from_name(config.consumer.as_deref())?)
        .relative_processes(config.relative_processes);

    for (index, process) in config.processes.iter().enumerate() {
        builder = builder.process(build_process(&config.label, index, process)?);
    }
    for queue in &config.queues {
        let privileges: Privileges = queue.privileges.iter().cloned().collect();
        builder = builder.queue(Queue::new(privileges, queue.display.map(queue_display)));
    }
    Ok(builder.build()?)
}

fn build_process(activity: &str, index: usize, config: &ProcessConfig) -> ConfigResult<Process> {
    if config.capacity == 0 {
        return Err(ConfigError::Capacity { activity: activity.to_owned(), index });
    }
    let kind = match config.kind.as_deref() {
        Some(name) => name.parse::<CapacityKind>()?,
        None       => CapacityKind::default(),
    };

    let (base, spread) = match config.duration {
        DurationConfig::Value(v)                         => (v, config.duration_range),
        DurationConfig::Object { duration, duration_range } => (duration, duration_range),
    };
    let invalid = |value: f64| ConfigError::Duration { activity: activity.to_owned(), index, value };
    if !(base.is_finite() && base >= 0.0) {
        return Err(invalid(base));
    }
    let duration = match spread {
        Some(s) if !(s.is_finite() && s >= 0.0) => return Err(invalid(s)),
        Some(s) if s > 0.0                      => DurationSource::Ranged { base, spread: s },
        _                                       => DurationSource::Fixed(base),
    };

    Ok(Process::new(config.capacity, kind, duration))
}

fn queue_display(config: DisplayConfig) -> QueueDisplay {
    match config.offset {
        PositionConfig::Cartesian { x, y } => QueueDisplay {
            offset:  Point::new(x, y),
            angle:   config.angle,
            spacing: config.spacing,
        },
        PositionConfig::Angular { angle } => {
            QueueDisplay::with_angular_offset(angle, config.angle, config.spacing)
        }
    }
}

fn check_probability(field: &'static str, value: f64) -> ConfigResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Probability { field, value })
    }
}

fn arrival_model(config: &ParkgoerConfig) -> ConfigResult<ArrivalModel> {
    if config.groupsize.is_empty() {
        return Err(ConfigError::EmptyDistribution("groupsize"));
    }
    if config.privileges.is_empty() {
        return Err(ConfigError::EmptyDistribution("privileges"));
    }

    let mut sizes = Vec::with_capacity(config.groupsize.len());
    for entry in &config.groupsize {
        if entry.size == 0 {
            return Err(ConfigError::GroupSize);
        }
        check_probability("groupsize", entry.probability)?;
        sizes.push(SizeWeight { size: entry.size, probability: entry.probability });
    }

    let mut privileges = Vec::with_capacity(config.privileges.len());
    for entry in &config.privileges {
        check_probability("privileges", entry.probability)?;
        privileges.push(PrivilegeWeight {
            privilege:   entry.privilege.clone(),
            probability: entry.probability,
        });
    }

    Ok(ArrivalModel::new(config.rate.polynomial.clone(), sizes, privileges))
}

fn movement(config: &ParkgoerConfig) -> ConfigResult<Movement> {
    for (field, value) in [("movespeed", config.movespeed), ("speedrange", config.speedrange)] {
        if !(value.is_finite() && value >= 0.0) {
            return Err(ConfigError::Speed { field, value });
        }
    }
    Ok(Movement::new(config.movespeed, config.speedrange))
}
