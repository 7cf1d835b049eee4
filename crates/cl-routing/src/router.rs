//! Routing trait and the two built-in strategies.

use std::sync::Arc;

use cl_agent::Agent;
use cl_core::{ExitId, Policy};
use cl_gating::{Exit, ExitBank};
use cl_layout::Layout;

// ── Query ─────────────────────────────────────────────────────────────────────

/// Everything a router may look at besides the agent being routed.
///
/// The built-in routers only read `exits`; the rest is there for custom
/// strategies (e.g. ones that weigh nearby agents or elapsed time).
#[derive(Clone, Copy)]
pub struct RouteQuery<'a> {
    pub layout: &'a Layout,
    pub exits:  &'a ExitBank,
    pub agents: &'a [Agent],
    pub time:   f32,
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable exit selection.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so the two populations can step on
/// separate Rayon workers.
pub trait Router: Send + Sync {
    /// The policy this router implements, used to pick the walking speed and
    /// whether exits are gated.
    fn policy(&self) -> Policy;

    /// Target exit for `agent`, or `None` if the venue has no exits.
    fn target(&self, agent: &Agent, query: &RouteQuery<'_>) -> Option<ExitId>;
}

impl<R: Router + ?Sized> Router for Box<R> {
    fn policy(&self) -> Policy {
        (**self).policy()
    }

    fn target(&self, agent: &Agent, query: &RouteQuery<'_>) -> Option<ExitId> {
        (**self).target(agent, query)
    }
}

impl<R: Router + ?Sized> Router for Arc<R> {
    fn policy(&self) -> Policy {
        (**self).policy()
    }

    fn target(&self, agent: &Agent, query: &RouteQuery<'_>) -> Option<ExitId> {
        (**self).target(agent, query)
    }
}

/// The built-in router for `policy`.
pub fn router_for(policy: Policy) -> Box<dyn Router> {
    match policy {
        Policy::Baseline => Box::new(NearestExit),
        Policy::Adaptive => Box::new(LeastCrowdedOpen),
    }
}

// ── NearestExit ───────────────────────────────────────────────────────────────

/// Euclidean-nearest exit by centre distance.
///
/// Exit state is ignored entirely: a closed exit is still a valid target.
pub struct NearestExit;

impl Router for NearestExit {
    fn policy(&self) -> Policy {
        Policy::Baseline
    }

    fn target(&self, agent: &Agent, query: &RouteQuery<'_>) -> Option<ExitId> {
        first_min_by(query.exits.iter(), |e| agent.pos.distance_sq(e.center()))
    }
}

// ── LeastCrowdedOpen ──────────────────────────────────────────────────────────

/// Lowest `crowding_level` among exits that admit agents.
///
/// If every exit is closing or closed, falls back to the least crowded exit
/// regardless of state so agents always have somewhere to go.  Ties go to the
/// first exit in layout order.
pub struct LeastCrowdedOpen;

impl Router for LeastCrowdedOpen {
    fn policy(&self) -> Policy {
        Policy::Adaptive
    }

    fn target(&self, _agent: &Agent, query: &RouteQuery<'_>) -> Option<ExitId> {
        let crowding = |e: &Exit| e.crowding_level;
        first_min_by(query.exits.iter().filter(|e| e.admits()), crowding)
            .or_else(|| first_min_by(query.exits.iter(), crowding))
    }
}

/// Id of the first exit with the smallest key (`f32` keys allowed).
fn first_min_by<'a, K, F>(exits: impl Iterator<Item = &'a Exit>, mut key: F) -> Option<ExitId>
where
    K: PartialOrd,
    F: FnMut(&Exit) -> K,
{
    let mut best: Option<(K, ExitId)> = None;
    for exit in exits {
        let k = key(exit);
        if best.as_ref().is_none_or(|(b, _)| k < *b) {
            best = Some((k, exit.id));
        }
    }
    best.map(|(_, id)| id)
}
