//! High-level motion engine: one tick for one population.

use cl_agent::Population;
use cl_core::{MotionParams, SimRng, Vec2};
use cl_gating::ExitBank;
use cl_layout::Layout;
use cl_routing::{RouteQuery, Router};

use crate::repulsion::{self, Body};
use crate::{collision, Resolution};

/// What happened to the population during one [`MotionEngine::step`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepSummary {
    /// Agents that walked into an admitting exit this tick.
    pub evacuated: usize,
    /// Agents within the arrival threshold of their target, holding position.
    pub holding:   usize,
    /// Moves settled by sliding or jitter instead of the direct step.
    pub deflected: usize,
    /// Agents that started inside a wall and were pushed out.
    pub escaped:   usize,
    /// Agents that could not move at all.
    pub blocked:   usize,
    /// Agents with no target (venue without exits).
    pub unrouted:  usize,
}

/// Planned outcome for one agent, computed against the frozen population.
#[derive(Copy, Clone)]
enum Plan {
    Evacuate,
    Hold,
    Move(Vec2),
}

/// Wraps a [`Router`] and the motion parameters for one population.
///
/// # Type parameter
///
/// `R` is the routing strategy.  The driver uses `Arc<dyn Router>` so both
/// runs share one engine type; tests use the concrete routers directly.
pub struct MotionEngine<R: Router> {
    pub router: R,
    pub params: MotionParams,
}

impl<R: Router> MotionEngine<R> {
    pub fn new(router: R, params: MotionParams) -> Self {
        Self { router, params }
    }

    /// Walking speed for this engine's policy, in units per tick.
    pub fn speed(&self) -> f32 {
        self.router.policy().speed(&self.params)
    }

    /// Advance every mobile agent by one tick.
    ///
    /// Evacuated and dead agents never move.  An agent inside an admitting
    /// exit is marked evacuated and goes no further this tick.  Everyone else
    /// is routed, steered, collided against walls and finally pushed apart.
    pub fn step(
        &self,
        population: &mut Population,
        layout:     &Layout,
        exits:      &ExitBank,
        time:       f32,
        rng:        &mut SimRng,
    ) -> StepSummary {
        let mut summary = StepSummary::default();
        let plans = self.plan(population, layout, exits, time, rng, &mut summary);

        for (agent, plan) in population.agents.iter_mut().zip(&plans) {
            match plan {
                Some(Plan::Evacuate) => agent.mark_evacuated(),
                Some(Plan::Move(p)) => agent.pos = *p,
                Some(Plan::Hold) | None => {}
            }
        }

        self.repel(population, layout);
        summary
    }

    /// Phase 1: decide every agent's move without touching the population.
    fn plan(
        &self,
        population: &Population,
        layout:     &Layout,
        exits:      &ExitBank,
        time:       f32,
        rng:        &mut SimRng,
        summary:    &mut StepSummary,
    ) -> Vec<Option<Plan>> {
        let query = RouteQuery { layout, exits, agents: &population.agents, time };
        let speed = self.speed();

        population
            .agents
            .iter()
            .map(|agent| {
                if !agent.is_mobile() {
                    return None;
                }
                if exits.admitting_exit_at(agent.pos).is_some() {
                    summary.evacuated += 1;
                    return Some(Plan::Evacuate);
                }
                let Some(target) = self.router.target(agent, &query).and_then(|id| exits.get(id)) else {
                    summary.unrouted += 1;
                    return Some(Plan::Hold);
                };

                let offset = target.center() - agent.pos;
                let dist = offset.length();
                if dist < self.params.arrival_threshold {
                    summary.holding += 1;
                    return Some(Plan::Hold);
                }
                let proposed = agent.pos + offset * (speed / dist);

                let (pos, how) = collision::resolve(layout, agent.pos, proposed, &self.params, rng);
                match how {
                    Resolution::Clear => {}
                    Resolution::SlideVertical | Resolution::SlideHorizontal | Resolution::Jitter => {
                        summary.deflected += 1;
                    }
                    Resolution::Escaped => summary.escaped += 1,
                    Resolution::Blocked => summary.blocked += 1,
                }
                Some(Plan::Move(pos))
            })
            .collect()
    }

    /// Phase 2: buffered repulsion between present agents.
    ///
    /// A push that would land the agent in a wall is dropped.
    fn repel(&self, population: &mut Population, layout: &Layout) {
        let present: Vec<usize> = population
            .agents
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_present())
            .map(|(i, _)| i)
            .collect();
        let bodies: Vec<Body> = present
            .iter()
            .map(|&i| {
                let a = &population.agents[i];
                Body { pos: a.pos, mobile: a.is_mobile() }
            })
            .collect();

        let pushes = repulsion::displacements(&bodies, &self.params);
        let r = self.params.agent_radius;
        for (&i, push) in present.iter().zip(pushes) {
            if push == Vec2::ZERO {
                continue;
            }
            let agent = &mut population.agents[i];
            let pushed = agent.pos + push;
            if pushed.is_finite() && !layout.collides(pushed, r) {
                agent.pos = pushed;
            }
        }
    }
}
