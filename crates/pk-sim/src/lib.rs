//! `pk-sim`: configuration, arrivals, and the tick driver for parksim.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pk_sim::{NoopObserver, ParkConfig, SimulationState};
//!
//! let config = ParkConfig::from_path("setup.json")?;
//! let mut sim = SimulationState::new(Some(42));
//! sim.load(&config)?;
//! sim.run_to_completion(10_000, &mut NoopObserver)?;
//! ```
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`config`]    | `ParkConfig` and the serde model of the JSON document |
//! | [`builder`]   | `Park`, `ParkBuilder` (validation + construction)     |
//! | [`arrivals`]  | `ArrivalModel` (rate polynomial, Poisson, parties)    |
//! | [`sim`]       | `SimulationState`, `TickSummary`, queries             |
//! | [`observer`]  | `SimObserver`, `NoopObserver`                         |
//! | [`error`]     | `SimError`, `ConfigError`                             |

pub mod arrivals;
pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;


pub use arrivals::{ArrivalModel, Party, PrivilegeWeight, SizeWeight};
pub use builder::{Park, ParkBuilder};
pub use config::ParkConfig;
pub use error::{ConfigError, ConfigResult, SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{ActivityLoad, SimulationState, StateCounts, TickSummary};
