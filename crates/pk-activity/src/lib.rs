//! `pk-activity`: processes, queues, and the activities that combine them.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`process`]   | `Process`, `CapacityKind`, `DurationSource`, `ProcessSample` |
//! | [`queue`]     | `Queue`, `QueueDisplay`, `QueueSample`                      |
//! | [`assign`]    | `AssignPolicy` (shortestQueue, privileged)                  |
//! | [`consume`]   | `ConsumePolicy` trait, `LongestQueue`, `TurnBased`, `Tiered` |
//! | [`activity`]  | `Activity`, `ActivityBuilder`, `TickOutcome`                |
//! | [`registry`]  | `ActivityRegistry`, `Placement`                             |
//! | [`error`]     | `ActivityError` (runtime), `BuildError` (load time)         |
//!
//! # Ownership
//!
//! Queues and processes hold [`pk_core::Group`] handles, never parkgoers.
//! Seat and release events flow back to the caller through
//! [`TickOutcome`], which keeps this crate independent of `pk-agent`.

pub mod activity;
pub mod assign;
pub mod consume;
pub mod error;
pub mod process;
pub mod queue;
pub mod registry;

#[cfg(test)]
mod tests;

pub use activity::{Activity, ActivityBuilder, ActivityStats, RelativeWindow, TickOutcome};
pub use assign::AssignPolicy;
pub use consume::{ConsumePolicy, Consumer, ConsumerKind, LongestQueue, Tiered, TurnBased, PRIORITY_PRIVILEGE};
pub use error::{ActivityError, ActivityResult, BuildError, BuildResult};
pub use process::{CapacityKind, DurationSource, Process, ProcessSample};
pub use queue::{Queue, QueueDisplay, QueueSample};
pub use registry::{ActivityRegistry, Placement};
