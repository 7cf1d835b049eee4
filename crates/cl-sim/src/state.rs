//! The unit of caching between `Driver::step` calls.

use std::sync::Arc;

use cl_core::{CrowdConfig, Policy};
use cl_layout::Layout;

use crate::PolicyRun;

/// Both runs at one instant, over one shared layout.
///
/// The rendering layer reads `layout`, each run's `population.agents` and
/// `metrics`; nothing it receives is meant to be mutated.
pub struct SimulationState {
    pub time:        f32,
    pub layout:      Arc<Layout>,
    /// Identifier the caller asked for (may differ from `layout.venue` after
    /// a fallback).
    pub requested:   String,
    pub agent_count: usize,
    pub baseline:    PolicyRun,
    pub adaptive:    PolicyRun,
}

impl SimulationState {
    pub fn run(&self, policy: Policy) -> &PolicyRun {
        match policy {
            Policy::Baseline => &self.baseline,
            Policy::Adaptive => &self.adaptive,
        }
    }

    /// `true` once neither run has anyone left who can walk out.
    pub fn is_settled(&self) -> bool {
        self.baseline.is_settled() && self.adaptive.is_settled()
    }

    /// `true` if a step for `venue_id`/`agent_count` can continue this state.
    pub(crate) fn matches(&self, venue_id: &str, agent_count: usize) -> bool {
        self.agent_count == agent_count && self.requested.eq_ignore_ascii_case(venue_id)
    }

    /// Step both runs to `time`.
    pub(crate) fn advance(&mut self, time: f32, config: &CrowdConfig) {
        let dt = time - self.time;
        let layout = &*self.layout;

        #[cfg(feature = "parallel")]
        {
            let (baseline, adaptive) = (&mut self.baseline, &mut self.adaptive);
            rayon::join(
                || baseline.step(layout, config, time, dt),
                || adaptive.step(layout, config, time, dt),
            );
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.baseline.step(layout, config, time, dt);
            self.adaptive.step(layout, config, time, dt);
        }

        self.time = time;
    }
}
