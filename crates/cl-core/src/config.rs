//! Simulation configuration.
//!
//! Every constant that drives the comparison lives here rather than as a
//! literal in the engine.  `Default` yields the reference values; the demo
//! binary can overlay a JSON file (with the `serde` feature) where missing
//! fields keep their defaults.

use crate::{CoreError, CoreResult};

// ── Exit gating ───────────────────────────────────────────────────────────────

/// Parameters of the per-exit open/close automaton.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GatingParams {
    /// Crowding level above which an open exit starts closing (T).
    pub threshold: u32,
    /// Seconds a closed exit stays shut before reopening (R).
    pub recovery_secs: f32,
    /// Radius around the exit centre within which agents count as crowding.
    pub detection_radius: f32,
    /// A reopening exit fully opens once crowding drops below
    /// `reopen_ratio * threshold`.
    pub reopen_ratio: f32,
    /// While still too crowded, a reopening exit re-arms its timer to
    /// `rearm_ratio * recovery_secs`.
    pub rearm_ratio: f32,
}

impl Default for GatingParams {
    fn default() -> Self {
        Self {
            threshold:        15,
            recovery_secs:    5.0,
            detection_radius: 100.0,
            reopen_ratio:     0.5,
            rearm_ratio:      0.3,
        }
    }
}

impl GatingParams {
    /// Crowding level strictly below which a reopening exit opens.
    #[inline]
    pub fn reopen_level(&self) -> f32 {
        self.reopen_ratio * self.threshold as f32
    }

    /// Timer value re-armed while a reopening exit is still crowded.
    #[inline]
    pub fn rearm_secs(&self) -> f32 {
        self.rearm_ratio * self.recovery_secs
    }
}

// ── Motion ────────────────────────────────────────────────────────────────────

/// Steering, collision, and separation parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MotionParams {
    /// Distance per tick under the baseline policy.
    pub baseline_speed: f32,
    /// Distance per tick under the adaptive policy (smoother flow).
    pub adaptive_speed: f32,
    /// Below this distance to the target centre an agent holds position.
    pub arrival_threshold: f32,
    /// Collision radius of a pedestrian.
    pub agent_radius: f32,
    /// Agents closer than this push each other apart.
    pub separation_radius: f32,
    /// Push per unit of overlap `(separation_radius - distance)`.
    pub repulsion_strength: f32,
    /// Half-width of the random nudge tried when both slides are blocked.
    pub escape_jitter: f32,
    /// Use a uniform neighbour grid instead of the all-pairs scan.
    pub neighbor_grid: bool,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            baseline_speed:     2.0,
            adaptive_speed:     2.5,
            arrival_threshold:  5.0,
            agent_radius:       3.0,
            separation_radius:  8.0,
            repulsion_strength: 0.3,
            escape_jitter:      2.0,
            neighbor_grid:      false,
        }
    }
}

// ── Spawning ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpawnParams {
    /// Fraction of each spawn rectangle's half-extent used for jitter around
    /// its centre.  `0.0` stacks every agent on the centre.
    pub jitter_fraction: f32,
}

impl Default for SpawnParams {
    fn default() -> Self {
        Self { jitter_fraction: 0.8 }
    }
}

// ── Hazards and density ───────────────────────────────────────────────────────

/// Occupancy-grid and crowd-hazard parameters.
///
/// These drive illustrative injury/death counters, not a validated hazard
/// model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HazardParams {
    /// Side length of one density-grid cell.
    pub density_cell: f32,
    /// A cell holding at least this many agents is overcrowded.
    pub overcrowd_cell_count: u32,
    /// Per-tick injury chance for an agent in an overcrowded cell.
    pub injury_probability: f64,
    /// A cell holding at least this many agents can be fatal to the injured.
    pub fatal_cell_count: u32,
    /// Per-tick death chance for an injured agent in a fatal cell.
    pub death_probability: f64,
}

impl Default for HazardParams {
    fn default() -> Self {
        Self {
            density_cell:         20.0,
            overcrowd_cell_count: 8,
            injury_probability:   0.002,
            fatal_cell_count:     14,
            death_probability:    0.001,
        }
    }
}

// ── CrowdConfig ───────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CrowdConfig {
    pub gating: GatingParams,
    pub motion: MotionParams,
    pub spawn:  SpawnParams,
    pub hazard: HazardParams,
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed:   u64,
}

impl Default for CrowdConfig {
    fn default() -> Self {
        Self {
            gating: GatingParams::default(),
            motion: MotionParams::default(),
            spawn:  SpawnParams::default(),
            hazard: HazardParams::default(),
            seed:   42,
        }
    }
}

impl CrowdConfig {
    /// Reject values that would make the engine divide by zero, never close
    /// an exit, or sample from an empty range.
    pub fn validate(&self) -> CoreResult<()> {
        let g = &self.gating;
        if g.threshold == 0 {
            return Err(cfg("gating.threshold must be at least 1"));
        }
        positive("gating.recovery_secs", g.recovery_secs)?;
        positive("gating.detection_radius", g.detection_radius)?;
        unit_interval("gating.reopen_ratio", g.reopen_ratio)?;
        unit_interval("gating.rearm_ratio", g.rearm_ratio)?;

        let m = &self.motion;
        positive("motion.baseline_speed", m.baseline_speed)?;
        positive("motion.adaptive_speed", m.adaptive_speed)?;
        positive("motion.arrival_threshold", m.arrival_threshold)?;
        positive("motion.agent_radius", m.agent_radius)?;
        positive("motion.separation_radius", m.separation_radius)?;
        non_negative("motion.repulsion_strength", m.repulsion_strength)?;
        non_negative("motion.escape_jitter", m.escape_jitter)?;

        unit_interval("spawn.jitter_fraction", self.spawn.jitter_fraction)?;

        let h = &self.hazard;
        positive("hazard.density_cell", h.density_cell)?;
        if !(0.0..=1.0).contains(&h.injury_probability) {
            return Err(cfg("hazard.injury_probability must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&h.death_probability) {
            return Err(cfg("hazard.death_probability must be in [0, 1]"));
        }
        Ok(())
    }
}

fn cfg(msg: &str) -> CoreError {
    CoreError::Config(msg.to_owned())
}

fn positive(name: &str, v: f32) -> CoreResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(CoreError::Config(format!("{name} must be positive, got {v}")))
    }
}

fn non_negative(name: &str, v: f32) -> CoreResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::Config(format!("{name} must be non-negative, got {v}")))
    }
}

fn unit_interval(name: &str, v: f32) -> CoreResult<()> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(CoreError::Config(format!("{name} must be in [0, 1], got {v}")))
    }
}
