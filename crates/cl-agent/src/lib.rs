//! `cl-agent` — pedestrian storage for one policy run.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`agent`]       | `Agent` record and its monotone status flags              |
//! | [`population`]  | `Population` (one run's agents), counting helpers         |
//! | [`builder`]     | `PopulationBuilder` (round-robin spawning with jitter)    |
//!
//! Agents are never removed: evacuated pedestrians stay in the collection so
//! ids remain stable indices, and every consumer filters on the flags.

pub mod agent;
pub mod builder;
pub mod population;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use builder::PopulationBuilder;
pub use population::Population;
