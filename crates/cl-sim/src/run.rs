//! One policy's population and everything it mutates.

use std::sync::Arc;

use tracing::info;

use cl_agent::{Population, PopulationBuilder};
use cl_core::{CrowdConfig, Policy, SimRng};
use cl_gating::{ExitBank, GateTransition};
use cl_layout::{Layout, LayoutResult};
use cl_metrics::{apply_hazards, DensityGrid, HazardReport, SimulationMetrics};
use cl_motion::{MotionEngine, StepSummary};
use cl_routing::Router;

/// A population stepping under one routing policy.
///
/// The baseline and adaptive runs are two values of this type; the only
/// thing that differs between them is the router, which fixes the policy
/// (walking speed, whether exits are gated, how targets are picked).
pub struct PolicyRun {
    pub population:   Population,
    pub exits:        ExitBank,
    pub metrics:      SimulationMetrics,
    /// Occupancy grid behind `metrics`, kept for density overlays.
    pub density:      DensityGrid,
    /// Exit state changes from the most recent step.
    pub transitions:  Vec<GateTransition>,
    /// Motion counters from the most recent step.
    pub last_motion:  StepSummary,
    /// Casualties added by the most recent step.
    pub last_hazards: HazardReport,
    engine:           MotionEngine<Arc<dyn Router>>,
    rng:              SimRng,
    settled:          bool,
}

impl PolicyRun {
    /// Spawn `agent_count` agents on `layout` and sense the fresh exits.
    ///
    /// `layout` must already be validated; the only error left is a layout
    /// with agents to place and nowhere to put them.
    pub fn spawn(
        router:      Arc<dyn Router>,
        layout:      &Layout,
        agent_count: usize,
        config:      &CrowdConfig,
        mut rng:     SimRng,
        time:        f32,
    ) -> LayoutResult<Self> {
        let population = PopulationBuilder::new(agent_count)
            .jitter_fraction(config.spawn.jitter_fraction)
            .build(layout, &mut rng)?;
        let mut exits = ExitBank::from_layout(layout);
        exits.sense(&population, config.gating.detection_radius);
        let density = DensityGrid::new(config.hazard.density_cell);

        Ok(Self {
            population,
            exits,
            metrics:       SimulationMetrics::zero(time),
            density,
            transitions:   Vec::new(),
            last_motion:   StepSummary::default(),
            last_hazards:  HazardReport::default(),
            engine:        MotionEngine::new(router, config.motion.clone()),
            rng,
            settled:       agent_count == 0,
        })
    }

    #[inline]
    pub fn policy(&self) -> Policy {
        self.engine.router.policy()
    }

    /// `true` once nobody is left who can still walk out.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.population.is_settled()
    }

    /// Advance to `time`, `dt` seconds after the previous step.
    ///
    /// With `dt <= 0` only the exits' crowding levels are refreshed.
    pub fn step(&mut self, layout: &Layout, config: &CrowdConfig, time: f32, dt: f32) {
        let policy = self.policy();
        self.transitions = self.exits.update(&self.population, dt, &config.gating, policy);
        if dt <= 0.0 {
            self.last_motion = StepSummary::default();
            self.last_hazards = HazardReport::default();
            return;
        }

        self.last_motion = self.engine.step(&mut self.population, layout, &self.exits, time, &mut self.rng);

        self.density = DensityGrid::from_population(&self.population, config.hazard.density_cell);
        self.last_hazards = apply_hazards(&mut self.population, &self.density, &config.hazard, &mut self.rng);
        self.metrics = SimulationMetrics::from_grid(&self.population, &self.density, &config.hazard, time);

        if !self.settled && self.population.is_settled() {
            self.settled = true;
            info!(
                policy = %policy,
                time,
                evacuated = self.metrics.agents_evacuated,
                deaths = self.metrics.deaths,
                "run settled"
            );
        }
    }
}
