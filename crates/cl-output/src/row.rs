//! Plain data row types written by output backends.

use cl_core::Policy;
use cl_gating::{ExitState, GateTransition};
use cl_metrics::SimulationMetrics;

/// One policy's metrics at one step.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsRow {
    pub time:                f32,
    pub policy:              Policy,
    pub agents_evacuated:    usize,
    pub injuries:            usize,
    pub deaths:              usize,
    pub avg_density:         f32,
    pub overcrowding_events: u32,
}

impl MetricsRow {
    pub fn new(policy: Policy, m: &SimulationMetrics) -> Self {
        Self {
            time: m.time,
            policy,
            agents_evacuated:    m.agents_evacuated,
            injuries:            m.injuries,
            deaths:              m.deaths,
            avg_density:         m.avg_density,
            overcrowding_events: m.overcrowding_events,
        }
    }
}

/// One exit state change.
#[derive(Debug, Clone, PartialEq)]
pub struct GateEventRow {
    pub time:     f32,
    pub policy:   Policy,
    /// Exit label from the layout (e.g. `"E2"`).
    pub exit:     String,
    pub from:     ExitState,
    pub to:       ExitState,
    pub crowding: u32,
}

impl GateEventRow {
    pub fn new(time: f32, policy: Policy, exit: impl Into<String>, t: &GateTransition) -> Self {
        Self {
            time,
            policy,
            exit: exit.into(),
            from: t.from,
            to: t.to,
            crowding: t.crowding,
        }
    }
}
