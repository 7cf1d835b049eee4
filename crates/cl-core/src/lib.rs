//! `cl-core` — foundational types for the CrowdLeaf evacuation simulator.
//!
//! This crate is a dependency of every other `cl-*` crate.  It has no `cl-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `ExitId`                                   |
//! | [`geom`]        | `Vec2`, `Rect`, expanded-radius overlap test          |
//! | [`policy`]      | `Policy` (baseline / adaptive)                        |
//! | [`config`]      | `CrowdConfig` and its parameter groups                |
//! | [`rng`]         | `SimRng` (seeded, injectable)                         |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geom;
pub mod ids;
pub mod policy;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CrowdConfig, GatingParams, HazardParams, MotionParams, SpawnParams};
pub use error::{CoreError, CoreResult};
pub use geom::{Rect, Vec2};
pub use ids::{AgentId, ExitId};
pub use policy::Policy;
pub use rng::SimRng;
