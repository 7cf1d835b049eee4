//! Crowd-crush hazards.
//!
//! Illustrative, not calibrated: agents in a packed cell may get hurt, and
//! hurt agents in a much worse crush may die.  The probabilities live in
//! `HazardParams`.

use cl_agent::Population;
use cl_core::{HazardParams, SimRng};

use crate::DensityGrid;

/// New casualties from one hazard pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HazardReport {
    pub injured: usize,
    pub died:    usize,
}

/// Roll injuries and deaths for every present, living agent.
///
/// `grid` must describe the population's current positions.  An uninjured
/// agent in a cell of at least `overcrowd_cell_count` is injured with
/// `injury_probability`; an agent already injured before this pass, in a
/// cell of at least `fatal_cell_count`, dies with `death_probability`.  The
/// RNG is only drawn from when an agent meets a cell condition, so sparse
/// crowds leave the stream untouched.
pub fn apply_hazards(
    population: &mut Population,
    grid:       &DensityGrid,
    params:     &HazardParams,
    rng:        &mut SimRng,
) -> HazardReport {
    let mut report = HazardReport::default();
    for agent in population.agents.iter_mut().filter(|a| a.is_mobile()) {
        let count = grid.count_at(agent.pos);
        if !agent.is_injured {
            if count >= params.overcrowd_cell_count && rng.chance(params.injury_probability) {
                agent.mark_injured();
                report.injured += 1;
            }
        } else if count >= params.fatal_cell_count && rng.chance(params.death_probability) {
            agent.mark_dead();
            report.died += 1;
        }
    }
    report
}
