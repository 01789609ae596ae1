//! `pk-core`: foundational types for the `parksim` queueing simulator.
//!
//! This crate is a dependency of every other `pk-*` crate.  It intentionally
//! has no `pk-*` dependencies and minimal external ones (`rand`,
//! `rand_distr` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ParkgoerId`, `ActivityId`                            |
//! | [`group`]       | `Group` (id + head-count handle), `Privileges`        |
//! | [`geo`]         | `Point`, straight-line movement                       |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `SimRng` (the single simulation-owned generator)      |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types (pk-output)  |

pub mod error;
pub mod geo;
pub mod group;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::Point;
pub use group::{Group, Privileges, SINGLE_PRIVILEGE};
pub use ids::{ActivityId, ParkgoerId};
pub use rng::SimRng;
pub use time::Tick;
