//! `cl-metrics` — what a population looks like after a tick.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`density`]   | `DensityGrid`: head count per square cell                 |
//! | [`hazard`]    | `apply_hazards`: stochastic injuries and deaths in crushes |
//! | [`aggregate`] | `SimulationMetrics`, `ComparisonSummary`                  |
//!
//! Density and overcrowding are derived from the occupancy grid alone, so
//! identical populations always report identical metrics.  The only random
//! draws in this crate are the hazard rolls, which take the caller's
//! `SimRng`.

pub mod aggregate;
pub mod density;
pub mod hazard;


pub use aggregate::{ComparisonSummary, PolicySummary, SimulationMetrics};
pub use density::DensityGrid;
pub use hazard::{apply_hazards, HazardReport};
