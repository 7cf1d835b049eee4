//! Spawning a population from a layout's spawn areas.
//!
//! # Usage
//!
//! ```rust
//! use cl_core::{Rect, SimRng};
//! use cl_agent::PopulationBuilder;
//! use cl_layout::LayoutBuilder;
//!
//! let layout = LayoutBuilder::new("HALL", 200.0, 100.0)
//!     .exit("E1", Rect::new(80.0, 80.0, 40.0, 20.0))
//!     .spawn("S1", Rect::new(20.0, 20.0, 40.0, 20.0))
//!     .spawn("S2", Rect::new(140.0, 20.0, 40.0, 20.0))
//!     .build();
//!
//! let mut rng = SimRng::new(42);
//! let pop = PopulationBuilder::new(10).build(&layout, &mut rng).unwrap();
//! assert_eq!(pop.len(), 10);
//! ```

use cl_core::{AgentId, SimRng, Vec2};
use cl_layout::{Layout, LayoutError, LayoutResult};

use crate::{Agent, Population};

/// Places `count` agents round-robin across the layout's spawn areas.
///
/// Agent `i` goes to spawn area `i % spawns.len()`, offset from the area's
/// centre by a uniform jitter of up to `jitter_fraction` of the half-extent
/// on each axis, so every agent starts inside its rectangle.
pub struct PopulationBuilder {
    count:           usize,
    jitter_fraction: f32,
}

impl PopulationBuilder {
    pub fn new(count: usize) -> Self {
        Self { count, jitter_fraction: 0.8 }
    }

    /// Override the jitter fraction (clamped to `[0, 1]`).
    pub fn jitter_fraction(mut self, f: f32) -> Self {
        self.jitter_fraction = f.clamp(0.0, 1.0);
        self
    }

    /// Spawn the population, drawing jitter from `rng`.
    ///
    /// Fails when more agents are requested than `AgentId` can address, or
    /// when agents are requested and the layout has nowhere to put them.
    pub fn build(self, layout: &Layout, rng: &mut SimRng) -> LayoutResult<Population> {
        if self.count > AgentId::CAPACITY {
            return Err(LayoutError::TooManyIds {
                venue: layout.venue.clone(),
                what:  "agents",
                count: self.count,
                max:   AgentId::CAPACITY,
            });
        }
        if self.count > 0 && layout.spawns.is_empty() {
            return Err(LayoutError::NoSpawnAreas { venue: layout.venue.clone() });
        }

        let agents = (0..self.count)
            .map_while(AgentId::from_index)
            .map(|id| {
                let area = &layout.spawns[id.index() % layout.spawns.len()].rect;
                let half_w = area.width * 0.5 * self.jitter_fraction;
                let half_h = area.height * 0.5 * self.jitter_fraction;
                let offset = Vec2::new(rng.symmetric(half_w), rng.symmetric(half_h));
                Agent::new(id, area.center() + offset)
            })
            .collect();

        Ok(Population { agents })
    }
}
