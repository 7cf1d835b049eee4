//! `cl-routing` — which exit each agent walks toward.
//!
//! # Pluggability
//!
//! The motion engine calls routing through the [`Router`] trait, one router
//! per population, chosen when the driver builds its runs.  Two strategies
//! ship with the crate:
//!
//! | Router               | Policy     | Picks                                          |
//! |----------------------|------------|------------------------------------------------|
//! | [`NearestExit`]      | baseline   | closest exit centre, state ignored             |
//! | [`LeastCrowdedOpen`] | adaptive   | lowest crowding among admitting exits          |
//!
//! Routers are queried fresh every tick, so a target can change as
//! congestion shifts.

pub mod router;

#[cfg(test)]
mod tests;

pub use router::{router_for, LeastCrowdedOpen, NearestExit, RouteQuery, Router};
