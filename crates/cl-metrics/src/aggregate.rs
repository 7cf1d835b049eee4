//! Per-tick metrics and whole-run summaries.

use cl_agent::Population;
use cl_core::{HazardParams, Policy};

use crate::DensityGrid;

// ── SimulationMetrics ─────────────────────────────────────────────────────────

/// The numeric readout for one population at one instant.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationMetrics {
    pub time:                f32,
    pub injuries:            usize,
    pub deaths:              usize,
    /// Mean agents per occupied density cell.
    pub avg_density:         f32,
    /// Cells at or above the overcrowding count this tick.
    pub overcrowding_events: u32,
    pub agents_evacuated:    usize,
}

impl SimulationMetrics {
    /// All-zero metrics stamped with `time`.
    pub fn zero(time: f32) -> Self {
        Self { time, ..Self::default() }
    }

    /// Measure `population` against an already-built occupancy grid.
    pub fn from_grid(population: &Population, grid: &DensityGrid, params: &HazardParams, time: f32) -> Self {
        Self {
            time,
            injuries:            population.injured_count(),
            deaths:              population.dead_count(),
            avg_density:         grid.avg_density(),
            overcrowding_events: grid.cells_at_least(params.overcrowd_cell_count),
            agents_evacuated:    population.evacuated_count(),
        }
    }

    /// Measure `population`, building the grid on the fly.
    pub fn measure(population: &Population, params: &HazardParams, time: f32) -> Self {
        let grid = DensityGrid::from_population(population, params.density_cell);
        Self::from_grid(population, &grid, params, time)
    }
}

// ── Summaries ─────────────────────────────────────────────────────────────────

/// One policy's run reduced to a handful of numbers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolicySummary {
    pub policy:             Policy,
    pub agents_evacuated:   usize,
    pub injuries:           usize,
    pub deaths:             usize,
    pub peak_density:       f32,
    pub total_overcrowding: u64,
    /// Evacuated share of the spawned agents at the last recorded tick.
    pub evacuation_ratio:   f32,
    /// First time every agent had left, if that happened.
    pub cleared_at:         Option<f32>,
    pub final_time:         f32,
}

impl PolicySummary {
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            agents_evacuated:   0,
            injuries:           0,
            deaths:             0,
            peak_density:       0.0,
            total_overcrowding: 0,
            evacuation_ratio:   0.0,
            cleared_at:         None,
            final_time:         0.0,
        }
    }

    pub fn record(&mut self, m: &SimulationMetrics, agent_count: usize) {
        self.agents_evacuated = m.agents_evacuated;
        self.injuries = m.injuries;
        self.deaths = m.deaths;
        self.peak_density = self.peak_density.max(m.avg_density);
        self.total_overcrowding += u64::from(m.overcrowding_events);
        self.final_time = m.time;
        self.evacuation_ratio = if agent_count == 0 {
            0.0
        } else {
            m.agents_evacuated as f32 / agent_count as f32
        };
        if self.cleared_at.is_none() && agent_count > 0 && m.agents_evacuated == agent_count {
            self.cleared_at = Some(m.time);
        }
    }
}

/// Side-by-side reduction of a baseline and an adaptive run.
///
/// Feed it every tick's metrics with [`record`](Self::record); deltas are
/// `adaptive − baseline`, so a positive evacuation delta and negative
/// casualty deltas favour the adaptive policy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonSummary {
    pub agent_count: usize,
    pub ticks:       u64,
    pub baseline:    PolicySummary,
    pub adaptive:    PolicySummary,
}

impl ComparisonSummary {
    pub fn new(agent_count: usize) -> Self {
        Self {
            agent_count,
            ticks:    0,
            baseline: PolicySummary::new(Policy::Baseline),
            adaptive: PolicySummary::new(Policy::Adaptive),
        }
    }

    pub fn record(&mut self, baseline: &SimulationMetrics, adaptive: &SimulationMetrics) {
        self.ticks += 1;
        self.baseline.record(baseline, self.agent_count);
        self.adaptive.record(adaptive, self.agent_count);
    }

    pub fn get(&self, policy: Policy) -> &PolicySummary {
        match policy {
            Policy::Baseline => &self.baseline,
            Policy::Adaptive => &self.adaptive,
        }
    }

    pub fn evacuated_delta(&self) -> i64 {
        self.adaptive.agents_evacuated as i64 - self.baseline.agents_evacuated as i64
    }

    pub fn injury_delta(&self) -> i64 {
        self.adaptive.injuries as i64 - self.baseline.injuries as i64
    }

    pub fn death_delta(&self) -> i64 {
        self.adaptive.deaths as i64 - self.baseline.deaths as i64
    }

    pub fn peak_density_delta(&self) -> f32 {
        self.adaptive.peak_density - self.baseline.peak_density
    }

    pub fn overcrowding_delta(&self) -> i64 {
        self.adaptive.total_overcrowding as i64 - self.baseline.total_overcrowding as i64
    }
}
