//! `ParkConfig`: the JSON configuration document.
//!
//! ```json
//! {
//!   "activities": [ { "label": "Coaster", "position": {"angle": 90},
//!                     "processes": [ {"capacity": 24, "type": "person", "duration": 4} ],
//!                     "queues": [ {"privileges": []}, {"privileges": ["priority"]} ] } ],
//!   "simulation": { "duration": 600, "seed": 7 },
//!   "parkgoers":  { "rate": {"polynomial": [3]},
//!                   "groupsize":  [ {"size": 2, "probability": 1.0} ],
//!                   "privileges": [ {"privilege": null, "probability": 1.0} ],
//!                   "movespeed": 0.01, "speedrange": 0.002 }
//! }
//! ```
//!
//! These types mirror the document one-to-one; validation and conversion
//! into simulation objects happens in [`crate::builder`].

use std::path::Path;

use pk_core::Point;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParkConfig {
    pub activities: Vec<ActivityConfig>,
    pub simulation: SimulationConfig,
    pub parkgoers:  ParkgoerConfig,
}

impl ParkConfig {
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

// ── Activities ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityConfig {
    pub label:              String,
    #[serde(default)]
    pub icon:               String,
    pub position:           PositionConfig,
    pub processes:          Vec<ProcessConfig>,
    pub queues:             Vec<QueueConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity:         Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer:           Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigner:           Option<String>,
    #[serde(default)]
    pub relative_processes: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station:            Option<String>,
}

/// A location given either directly or as a compass angle.
///
/// What the angle is measured around depends on the field: activity
/// positions sit on the park ring, queue offsets on a small circle around
/// their activity.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PositionConfig {
    Cartesian { x: f64, y: f64 },
    Angular { angle: f64 },
}

impl PositionConfig {
    /// Resolve as an activity position.
    pub fn to_park_point(self) -> Point {
        match self {
            PositionConfig::Cartesian { x, y } => Point::new(x, y),
            PositionConfig::Angular { angle }  => Point::on_ring(angle),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessConfig {
    pub capacity:       u32,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind:           Option<String>,
    pub duration:       DurationConfig,
    /// Spread for a numeric `duration`; same as the object form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_range: Option<f64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationConfig {
    Value(f64),
    Object {
        duration: f64,
        #[serde(rename = "durationRange", default, skip_serializing_if = "Option::is_none")]
        duration_range: Option<f64>,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueueConfig {
    #[serde(default)]
    pub privileges: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display:    Option<DisplayConfig>,
}

/// Drawing geometry for a queue line.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub offset:  PositionConfig,
    pub angle:   f64,
    pub spacing: f64,
}

// ── Simulation ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Ticks during which new parkgoers arrive.
    pub duration: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed:     Option<u64>,
}

// ── Parkgoers ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParkgoerConfig {
    pub rate:       RateConfig,
    pub groupsize:  Vec<GroupSizeConfig>,
    pub privileges: Vec<PrivilegeConfig>,
    pub movespeed:  f64,
    pub speedrange: f64,
    /// Where new parkgoers appear; the origin when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrance:   Option<PointConfig>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateConfig {
    /// Coefficients `c0, c1, …` of the arrival-rate polynomial in the tick.
    pub polynomial: Vec<f64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupSizeConfig {
    pub size:        u32,
    pub probability: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrivilegeConfig {
    /// `null` draws no privilege.
    pub privilege:   Option<String>,
    pub probability: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointConfig {
    pub x: f64,
    pub y: f64,
}

impl From<PointConfig> for Point {
    fn from(p: PointConfig) -> Point {
        Point::new(p.x, p.y)
    }
}
