//! `cl-sim` — the lockstep driver for the baseline/adaptive comparison.
//!
//! # One step
//!
//! ```text
//! step(venue, agent_count, time):
//!   reinitialise?    no state yet, time == 0, time went backwards, or the
//!                    venue / agent count changed: resolve the venue, spawn
//!                    both populations, zero the metrics, return.
//!   Δt = time − state.time
//!   for each run (baseline, adaptive):
//!     ① Gating:  sense crowding; advance the automaton if Δt > 0
//!                (adaptive only).
//!     ② Motion:  evacuate, route, steer, collide, repel   (Δt > 0 only)
//!     ③ Hazards: density-driven injuries and deaths       (Δt > 0 only)
//!     ④ Metrics: occupancy grid and counters              (Δt > 0 only)
//! ```
//!
//! Both runs read the same `Arc<Layout>` and never touch each other's state.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Steps the two runs with `rayon::join`; repulsion per agent on Rayon. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cl_core::CrowdConfig;
//! use cl_sim::{Driver, NoopObserver};
//!
//! let mut driver = Driver::new(CrowdConfig::default())?;
//! let state = driver.step("DFW", 200, 0.0)?;
//! let summary = driver.run("DFW", 200, 0.1, 30.0, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod driver;
pub mod error;
pub mod observer;
pub mod run;
pub mod state;


pub use builder::DriverBuilder;
pub use driver::Driver;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use run::PolicyRun;
pub use state::SimulationState;
