//! Short-range agent-agent repulsion.
//!
//! # Force law
//!
//! For every pair closer than `separation_radius` the mobile agent is pushed
//! directly away from its neighbour by
//!
//! ```text
//!   repulsion_strength · (separation_radius − distance)
//! ```
//!
//! and the pushes are summed.  Two agents on exactly the same spot have no
//! direction between them; the one listed first goes left and the other
//! right, which keeps the pass deterministic.
//!
//! # Scaling
//!
//! The all-pairs scan is O(n²) and fine for a few hundred agents.  With
//! `MotionParams::neighbor_grid` set, a uniform grid with cells one
//! separation radius wide (built on `FxHashMap`) limits each agent to the
//! 3×3 block around it.  Candidates are visited in index order in both modes,
//! so the grid changes the cost, never the result.

use rustc_hash::FxHashMap;

use cl_core::{MotionParams, Vec2};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Coincidence cut-off below which two agents count as stacked.
const STACKED_EPS: f32 = 1e-4;

/// One present agent as seen by the repulsion pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Body {
    pub pos:    Vec2,
    /// Immobile (dead) agents still push others but are never pushed.
    pub mobile: bool,
}

// ── Neighbour grid ────────────────────────────────────────────────────────────

/// Bucket of body indices per grid cell.
pub struct NeighborGrid {
    cell:  f32,
    cells: FxHashMap<(i32, i32), Vec<usize>>,
}

impl NeighborGrid {
    pub fn build(bodies: &[Body], cell: f32) -> Self {
        let mut cells: FxHashMap<(i32, i32), Vec<usize>> = FxHashMap::default();
        for (i, b) in bodies.iter().enumerate() {
            cells.entry(cell_of(b.pos, cell)).or_default().push(i);
        }
        Self { cell, cells }
    }

    /// Indices of every body in the 3×3 block of cells around `p`, ascending.
    pub fn candidates(&self, p: Vec2) -> Vec<usize> {
        let (cx, cy) = cell_of(p, self.cell);
        let mut out = Vec::new();
        for dx in -1..=1 {
            for dy in -1..=1 {
                if let Some(bucket) = self.cells.get(&(cx + dx, cy + dy)) {
                    out.extend_from_slice(bucket);
                }
            }
        }
        out.sort_unstable();
        out
    }

    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }
}

#[inline]
fn cell_of(p: Vec2, cell: f32) -> (i32, i32) {
    ((p.x / cell).floor() as i32, (p.y / cell).floor() as i32)
}

// ── Pass ──────────────────────────────────────────────────────────────────────

/// Displacement for every body (`Vec2::ZERO` for immobile ones).
pub fn displacements(bodies: &[Body], params: &MotionParams) -> Vec<Vec2> {
    if bodies.len() < 2 || params.repulsion_strength == 0.0 {
        return vec![Vec2::ZERO; bodies.len()];
    }

    let grid = params
        .neighbor_grid
        .then(|| NeighborGrid::build(bodies, params.separation_radius));

    let push = |i: usize| -> Vec2 {
        if !bodies[i].mobile {
            return Vec2::ZERO;
        }
        match &grid {
            Some(g) => push_on(bodies, i, g.candidates(bodies[i].pos), params),
            None => push_on(bodies, i, 0..bodies.len(), params),
        }
    };

    #[cfg(feature = "parallel")]
    let out = (0..bodies.len()).into_par_iter().map(push).collect();
    #[cfg(not(feature = "parallel"))]
    let out = (0..bodies.len()).map(push).collect();

    out
}

/// Summed push on body `i` from `neighbours` (which may include `i`).
pub fn push_on(
    bodies:     &[Body],
    i:          usize,
    neighbours: impl IntoIterator<Item = usize>,
    params:     &MotionParams,
) -> Vec2 {
    let sep = params.separation_radius;
    let me = bodies[i].pos;
    let mut total = Vec2::ZERO;

    for j in neighbours {
        if j == i {
            continue;
        }
        let d = me.distance(bodies[j].pos);
        if d >= sep {
            continue;
        }
        let dir = if d > STACKED_EPS {
            (me - bodies[j].pos) * (1.0 / d)
        } else if i < j {
            Vec2::new(-1.0, 0.0)
        } else {
            Vec2::new(1.0, 0.0)
        };
        total += dir * ((sep - d) * params.repulsion_strength);
    }
    total
}
