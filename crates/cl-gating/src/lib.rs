//! `cl-gating` — the adaptive core: exits that close under load.
//!
//! # Automaton
//!
//! Each exit is sensed and advanced once per tick (only under the adaptive
//! policy; the baseline run senses for display but stays `Open`):
//!
//! ```text
//!            crowding > T                 (one tick)
//!   Open ────────────────▶ Closing ─────────────────▶ Closed
//!    ▲     timer = R                                    │
//!    │                                                  │ timer − Δt ≤ 0
//!    │  crowding < 0.5·T                                ▼
//!    └──────────────────────────────────────────── Reopening ◀─┐
//!       timer = 0                        crowding ≥ 0.5·T      │
//!                                        timer = 0.3·R  ───────┘
//! ```
//!
//! Sensing is memoryless (a head count within the detection radius); all of
//! the hysteresis lives in the gap between the closing threshold `T` and the
//! reopening threshold `0.5·T`.
//!
//! # Crate layout
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`state`]      | `ExitState`                                            |
//! | [`exit`]       | `Exit` (geometry + control state), `GateTransition`    |
//! | [`controller`] | `ExitBank`: sense + advance every exit of one run      |

pub mod controller;
pub mod exit;
pub mod state;

#[cfg(test)]
mod tests;

pub use controller::ExitBank;
pub use exit::{Exit, GateTransition};
pub use state::ExitState;
