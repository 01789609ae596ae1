//! Simulation observer trait for progress reporting and data collection.

use pk_core::Tick;

use crate::{SimulationState, TickSummary};

/// Callbacks invoked by [`SimulationState::run_ticks`] and
/// [`SimulationState::run_to_completion`] around every tick.
///
/// All methods default to no-ops so implementors only override what they
/// care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Progress { every: u64 }
///
/// impl SimObserver for Progress {
///     fn on_tick_end(&mut self, summary: &TickSummary) {
///         if summary.tick.0 % self.every == 0 {
///             println!("{}: {} people in the park", summary.tick, summary.live_people);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before arrivals are sampled for `tick`.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the tick's logging phase.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called once when a run finishes, with read access to the final state.
    fn on_sim_end(&mut self, _state: &SimulationState) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
