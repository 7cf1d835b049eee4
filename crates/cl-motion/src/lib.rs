//! `cl-motion` — moves every present agent one tick.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`collision`] | `resolve` (slide / jitter / stay fallback), `depenetrate`   |
//! | [`repulsion`] | pairwise and grid-accelerated short-range repulsion         |
//! | [`engine`]    | `MotionEngine<R>`, `StepSummary`                            |
//!
//! # Tick phases
//!
//! 1. **Plan** (sequential, reads a frozen population): evacuate agents that
//!    stand in an admitting exit, otherwise route, steer and resolve walls.
//!    Escape jitter draws from the run's `SimRng`, so this phase stays
//!    single-threaded.
//! 2. **Repel** (buffered): every mobile agent is pushed away from present
//!    neighbours using the *planned* positions, then all pushes are written
//!    back at once.  Agent order never affects the outcome, which is what
//!    lets the `parallel` feature split this phase across Rayon workers.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Repulsion pass runs per agent on Rayon.                   |

pub mod collision;
pub mod engine;
pub mod repulsion;


pub use collision::{depenetrate, resolve, Resolution};
pub use engine::{MotionEngine, StepSummary};
pub use repulsion::{Body, NeighborGrid};
