//! The agents of one policy run.

use cl_core::{AgentId, Vec2};

use crate::Agent;

/// All pedestrians of one run, indexed by `AgentId`.
///
/// Build with [`PopulationBuilder`][crate::PopulationBuilder] or, for
/// hand-placed scenarios, [`Population::from_positions`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Population {
    pub agents: Vec<Agent>,
}

impl Population {
    pub fn empty() -> Self {
        Self::default()
    }

    /// One agent per position, with ids assigned in order.  Positions past
    /// `AgentId::CAPACITY` are ignored.
    pub fn from_positions(positions: impl IntoIterator<Item = Vec2>) -> Self {
        let agents = positions
            .into_iter()
            .enumerate()
            .map_while(|(i, p)| AgentId::from_index(i).map(|id| Agent::new(id, p)))
            .collect();
        Self { agents }
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.iter()
    }

    /// Agents still inside the venue.
    pub fn present(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.iter().filter(|a| a.is_present())
    }

    pub fn present_count(&self) -> usize {
        self.present().count()
    }

    pub fn evacuated_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_evacuated).count()
    }

    pub fn injured_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_injured).count()
    }

    pub fn dead_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_dead).count()
    }

    /// `true` once every agent has either left or can no longer move.
    pub fn is_settled(&self) -> bool {
        self.agents.iter().all(|a| !a.is_mobile())
    }

    /// Fraction of agents evacuated, `0.0` for an empty population.
    pub fn evacuation_ratio(&self) -> f32 {
        if self.agents.is_empty() {
            0.0
        } else {
            self.evacuated_count() as f32 / self.agents.len() as f32
        }
    }
}
