//! Observer trait for progress reporting and data collection.

use cl_core::Policy;
use cl_gating::GateTransition;

use crate::SimulationState;

/// Callbacks invoked by [`Driver::run`][crate::Driver::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: evacuation ticker
///
/// ```rust,ignore
/// struct Ticker;
///
/// impl SimObserver for Ticker {
///     fn on_step(&mut self, state: &SimulationState) {
///         println!(
///             "{:>6.1}s  baseline {:>4}  adaptive {:>4}",
///             state.time,
///             state.baseline.metrics.agents_evacuated,
///             state.adaptive.metrics.agents_evacuated,
///         );
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once, right after both populations have been spawned.
    fn on_init(&mut self, _state: &SimulationState) {}

    /// Called for every exit state change, before `on_step` of the same tick.
    fn on_transition(&mut self, _time: f32, _policy: Policy, _transition: &GateTransition) {}

    /// Called after every step with the freshly computed state.
    fn on_step(&mut self, _state: &SimulationState) {}

    /// Called once after the last step.
    fn on_finish(&mut self, _state: &SimulationState) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
