//! Sensing and advancing every exit of one population.

use tracing::debug;

use cl_agent::Population;
use cl_core::{ExitId, GatingParams, Policy, Vec2};
use cl_layout::Layout;

use crate::{Exit, GateTransition};

/// The exits of one run, in layout order (`ExitId` = index).
#[derive(Clone, Debug, PartialEq)]
pub struct ExitBank {
    pub exits: Vec<Exit>,
}

impl ExitBank {
    /// Fresh, fully open exits for every exit the layout declares.
    ///
    /// Ids are never reused: exits past `ExitId::CAPACITY` are left out, and
    /// `Layout::validate` rejects such layouts before a run starts.
    pub fn from_layout(layout: &Layout) -> Self {
        let exits = layout
            .exits
            .iter()
            .enumerate()
            .map_while(|(i, spec)| ExitId::from_index(i).map(|id| Exit::from_spec(id, spec)))
            .collect();
        Self { exits }
    }

    pub fn len(&self) -> usize {
        self.exits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exits.is_empty()
    }

    pub fn get(&self, id: ExitId) -> Option<&Exit> {
        self.exits.get(id.index())
    }

    pub fn get_mut(&mut self, id: ExitId) -> Option<&mut Exit> {
        self.exits.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exit> + '_ {
        self.exits.iter()
    }

    /// First admitting exit whose rectangle contains `p`.
    pub fn admitting_exit_at(&self, p: Vec2) -> Option<ExitId> {
        self.exits
            .iter()
            .find(|e| e.admits() && e.rect.contains(p))
            .map(|e| e.id)
    }

    /// Recount present agents within `radius` of every exit centre.
    pub fn sense(&mut self, population: &Population, radius: f32) {
        let r2 = radius * radius;
        for exit in &mut self.exits {
            let c = exit.center();
            exit.crowding_level = population
                .present()
                .filter(|a| a.pos.distance_sq(c) <= r2)
                .count() as u32;
        }
    }

    /// Run one automaton step on every exit.
    ///
    /// A no-op under policies that do not gate exits, which keeps the
    /// baseline run's exits pinned to `Open`.
    pub fn advance(&mut self, dt: f32, params: &GatingParams, policy: Policy) -> Vec<GateTransition> {
        if !policy.gates_exits() {
            return Vec::new();
        }
        let mut transitions = Vec::new();
        for exit in &mut self.exits {
            if let Some(t) = exit.advance(dt, params) {
                debug!(
                    exit = %exit.label,
                    from = %t.from,
                    to = %t.to,
                    crowding = t.crowding,
                    "exit transition"
                );
                transitions.push(t);
            }
        }
        transitions
    }

    /// Sense, then advance if any time has elapsed.
    ///
    /// With `dt <= 0` only the crowding levels change, so repeating a step at
    /// the same time cannot double-apply a transition.
    pub fn update(
        &mut self,
        population: &Population,
        dt:         f32,
        params:     &GatingParams,
        policy:     Policy,
    ) -> Vec<GateTransition> {
        self.sense(population, params.detection_radius);
        if dt > 0.0 {
            self.advance(dt, params, policy)
        } else {
            Vec::new()
        }
    }
}
