//! Wall collision: the ordered fallback chain.
//!
//! The agent is a circle of radius `r`; a position collides when it overlaps
//! any wall rectangle expanded by `r`.  There is no swept test, so a fast
//! agent could in principle tunnel through a thin wall, but with walls at
//! least 10 units thick and speeds of a few units per tick that never
//! happens in the built-in venues.

use cl_core::{MotionParams, SimRng, Vec2};
use cl_layout::Layout;

/// Distance kept between a depenetrated agent and the wall it left.
const ESCAPE_CLEARANCE: f32 = 0.5;

/// Passes of [`depenetrate`]; more than one is needed when leaving one wall
/// lands inside an adjacent one (e.g. at a corner).
const ESCAPE_PASSES: usize = 4;

/// How a proposed move was settled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The proposed position was free.
    Clear,
    /// Kept the old x, took the new y.
    SlideVertical,
    /// Kept the old y, took the new x.
    SlideHorizontal,
    /// Both slides failed; a random nudge found free space.
    Jitter,
    /// The agent started inside a wall and was pushed out.
    Escaped,
    /// Nothing worked; the agent stays put.
    Blocked,
}

impl Resolution {
    /// `true` if the agent ends the tick somewhere other than `old`.
    pub fn moved(self) -> bool {
        !matches!(self, Resolution::Blocked)
    }
}

/// Settle a move from `old` toward `proposed`.
///
/// Tries, in order: the proposed position, a vertical slide, a horizontal
/// slide, one jittered position around `old`.  A slide only counts if it
/// actually moves the agent, otherwise a head-on hit would "succeed" by
/// standing still and never reach the jitter step.  If every attempt
/// collides and `old` itself overlaps a wall, the agent is pushed out with
/// [`depenetrate`].
pub fn resolve(
    layout:   &Layout,
    old:      Vec2,
    proposed: Vec2,
    params:   &MotionParams,
    rng:      &mut SimRng,
) -> (Vec2, Resolution) {
    let r = params.agent_radius;
    let free = |p: Vec2| !layout.collides(p, r);

    if free(proposed) {
        return (proposed, Resolution::Clear);
    }

    let vertical = Vec2::new(old.x, proposed.y);
    if vertical != old && free(vertical) {
        return (vertical, Resolution::SlideVertical);
    }
    let horizontal = Vec2::new(proposed.x, old.y);
    if horizontal != old && free(horizontal) {
        return (horizontal, Resolution::SlideHorizontal);
    }

    let nudged = old + rng.jitter(params.escape_jitter);
    if nudged != old && free(nudged) {
        return (nudged, Resolution::Jitter);
    }

    if !free(old) {
        if let Some(out) = depenetrate(layout, old, r) {
            return (out, Resolution::Escaped);
        }
    }
    (old, Resolution::Blocked)
}

/// Push `p` out of every wall it overlaps, along the shortest axis each time.
///
/// Returns `None` if `p` is still colliding after a few passes (agent wedged
/// into a gap narrower than its diameter).
pub fn depenetrate(layout: &Layout, p: Vec2, r: f32) -> Option<Vec2> {
    let mut p = p;
    for _ in 0..ESCAPE_PASSES {
        let Some(hit) = layout.wall_hit(p, r) else {
            return Some(p);
        };
        p += layout.walls[hit].rect.escape_vector(p, r, ESCAPE_CLEARANCE);
    }
    (!layout.collides(p, r)).then_some(p)
}
