//! A live exit: static geometry plus the automaton's state.

use cl_core::{ExitId, GatingParams, Rect, Vec2};
use cl_layout::ExitSpec;

use crate::ExitState;

/// One state change, reported so observers can log or export it.
#[derive(Clone, Debug, PartialEq)]
pub struct GateTransition {
    pub exit:     ExitId,
    pub from:     ExitState,
    pub to:       ExitState,
    /// Crowding level sensed on the tick the transition happened.
    pub crowding: u32,
}

/// An exit as seen by one population.
///
/// Each run owns its own `Exit`s (built from the shared layout's
/// [`ExitSpec`]s) so the adaptive run can close exits without touching the
/// baseline run.
#[derive(Clone, Debug, PartialEq)]
pub struct Exit {
    pub id:             ExitId,
    pub label:          String,
    pub rect:           Rect,
    pub state:          ExitState,
    /// Present agents within the detection radius, recomputed every tick.
    pub crowding_level: u32,
    /// Seconds left before a closed exit reopens.
    pub recovery_timer: f32,
}

impl Exit {
    pub fn from_spec(id: ExitId, spec: &ExitSpec) -> Self {
        Self {
            id,
            label:          spec.label.clone(),
            rect:           spec.rect,
            state:          ExitState::Open,
            crowding_level: 0,
            recovery_timer: 0.0,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    #[inline]
    pub fn admits(&self) -> bool {
        self.state.admits()
    }

    /// Advance the automaton by one tick of length `dt`.
    ///
    /// Returns the transition taken, if the state changed.  Timer updates
    /// that keep the state (counting down while closed, re-arming while
    /// reopening) are not reported.
    pub fn advance(&mut self, dt: f32, params: &GatingParams) -> Option<GateTransition> {
        let from = self.state;
        match self.state {
            ExitState::Open => {
                if self.crowding_level > params.threshold {
                    self.state = ExitState::Closing;
                    self.recovery_timer = params.recovery_secs;
                }
            }
            ExitState::Closing => {
                self.state = ExitState::Closed;
            }
            ExitState::Closed => {
                if self.recovery_timer - dt > 0.0 {
                    self.recovery_timer -= dt;
                } else {
                    self.state = ExitState::Reopening;
                }
            }
            ExitState::Reopening => {
                if (self.crowding_level as f32) < params.reopen_level() {
                    self.state = ExitState::Open;
                    self.recovery_timer = 0.0;
                } else {
                    self.recovery_timer = params.rearm_secs();
                }
            }
        }

        (self.state != from).then(|| GateTransition {
            exit: self.id,
            from,
            to: self.state,
            crowding: self.crowding_level,
        })
    }
}
