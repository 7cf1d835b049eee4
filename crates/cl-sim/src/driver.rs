//! The `Driver`: owns one `SimulationState` and advances it on request.

use std::sync::Arc;

use tracing::{debug, info, trace};

use cl_core::{CrowdConfig, Policy, SimRng};
use cl_layout::VenueProvider;
use cl_metrics::ComparisonSummary;
use cl_routing::Router;

use crate::{DriverBuilder, PolicyRun, SimError, SimObserver, SimResult, SimulationState};

/// Slack when comparing accumulated step times against a run's duration.
const TIME_EPS: f32 = 1e-4;

/// The only stateful object in the core.
///
/// The caller owns the driver, so several venues or configurations can run
/// side by side.  Create via [`Driver::new`] or [`DriverBuilder`].
pub struct Driver {
    config:          CrowdConfig,
    provider:        Box<dyn VenueProvider>,
    baseline_router: Arc<dyn Router>,
    adaptive_router: Arc<dyn Router>,
    state:           Option<SimulationState>,
}

impl Driver {
    /// A driver over the built-in venues with the default routers.
    pub fn new(config: CrowdConfig) -> SimResult<Self> {
        DriverBuilder::new(config).build()
    }

    pub(crate) fn from_parts(
        config:          CrowdConfig,
        provider:        Box<dyn VenueProvider>,
        baseline_router: Arc<dyn Router>,
        adaptive_router: Arc<dyn Router>,
    ) -> Self {
        Self { config, provider, baseline_router, adaptive_router, state: None }
    }

    pub fn config(&self) -> &CrowdConfig {
        &self.config
    }

    /// The held state, if any step has succeeded since the last reset.
    pub fn state(&self) -> Option<&SimulationState> {
        self.state.as_ref()
    }

    /// Drop the held state; the next `step` reinitialises.
    pub fn reset(&mut self) {
        self.state = None;
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Bring the state to `time` for `venue_id` with `agent_count` agents.
    ///
    /// Reinitialises (spawns fresh populations at `time`, zeroed metrics)
    /// when no state is held, when `time == 0`, when `time` is earlier than
    /// the held state's time, or when the venue or agent count differs from
    /// the held state.  Otherwise advances by `time − state.time`; a repeat
    /// call with the same `time` only re-senses exit crowding.
    ///
    /// # Errors
    ///
    /// - [`SimError::InvalidTime`] if `time` is negative or not finite.
    /// - [`SimError::Layout`] if the resolved venue has no exits, no spawn
    ///   areas, or degenerate geometry.  The held state is dropped.
    pub fn step(&mut self, venue_id: &str, agent_count: usize, time: f32) -> SimResult<&SimulationState> {
        if !time.is_finite() || time < 0.0 {
            return Err(SimError::InvalidTime { what: "time", value: time });
        }

        let state = match self.state.take() {
            Some(mut s) if time != 0.0 && time >= s.time && s.matches(venue_id, agent_count) => {
                s.advance(time, &self.config);
                for policy in Policy::ALL {
                    let run = s.run(policy);
                    trace!(
                        time,
                        policy = %policy,
                        evacuated = run.metrics.agents_evacuated,
                        left = run.last_motion.evacuated,
                        holding = run.last_motion.holding,
                        deflected = run.last_motion.deflected,
                        escaped = run.last_motion.escaped,
                        blocked = run.last_motion.blocked,
                        unrouted = run.last_motion.unrouted,
                        injured = run.last_hazards.injured,
                        died = run.last_hazards.died,
                        transitions = run.transitions.len(),
                        "step"
                    );
                }
                s
            }
            _ => self.initialize(venue_id, agent_count, time)?,
        };
        Ok(self.state.insert(state))
    }

    fn initialize(&self, venue_id: &str, agent_count: usize, time: f32) -> SimResult<SimulationState> {
        let resolved = self.provider.resolve(venue_id);
        if resolved.fell_back {
            debug!(requested = venue_id, venue = %resolved.layout.venue, "unknown venue, using default");
        }
        let layout = resolved.layout;
        layout.validate()?;

        let mut root = SimRng::new(self.config.seed);
        let baseline_rng = root.child(0);
        let adaptive_rng = root.child(1);

        let baseline = PolicyRun::spawn(
            Arc::clone(&self.baseline_router),
            &layout,
            agent_count,
            &self.config,
            baseline_rng,
            time,
        )?;
        let adaptive = PolicyRun::spawn(
            Arc::clone(&self.adaptive_router),
            &layout,
            agent_count,
            &self.config,
            adaptive_rng,
            time,
        )?;

        info!(
            venue = %layout.venue,
            requested = venue_id,
            agents = agent_count,
            seed = self.config.seed,
            time,
            "simulation initialised"
        );

        Ok(SimulationState {
            time,
            layout: Arc::new(layout),
            requested: venue_id.to_owned(),
            agent_count,
            baseline,
            adaptive,
        })
    }

    // ── Batch run ─────────────────────────────────────────────────────────

    /// Initialise at time 0, then step every `dt` seconds until `duration`
    /// is reached or both runs are settled.
    ///
    /// Step times are computed as `k · dt` rather than accumulated, so long
    /// runs do not drift.  Returns the whole-run comparison.
    pub fn run<O: SimObserver>(
        &mut self,
        venue_id:    &str,
        agent_count: usize,
        dt:          f32,
        duration:    f32,
        observer:    &mut O,
    ) -> SimResult<ComparisonSummary> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SimError::InvalidTime { what: "dt", value: dt });
        }
        if !duration.is_finite() || duration < 0.0 {
            return Err(SimError::InvalidTime { what: "duration", value: duration });
        }

        let mut summary = ComparisonSummary::new(agent_count);
        observer.on_init(self.step(venue_id, agent_count, 0.0)?);

        let mut k: u64 = 1;
        loop {
            let time = k as f32 * dt;
            if time > duration + TIME_EPS {
                break;
            }
            let state = self.step(venue_id, agent_count, time)?;
            for policy in Policy::ALL {
                for t in &state.run(policy).transitions {
                    observer.on_transition(time, policy, t);
                }
            }
            observer.on_step(state);
            summary.record(&state.baseline.metrics, &state.adaptive.metrics);
            if state.is_settled() {
                break;
            }
            k += 1;
        }

        if let Some(state) = &self.state {
            observer.on_finish(state);
        }
        Ok(summary)
    }
}
