//! `cl-layout` — immutable venue geometry.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`layout`]  | `Layout` (walls + R-tree, gates, exits, spawns), `LayoutBuilder` |
//! | [`venues`]  | `VenueProvider` trait, `VenueCatalog`, built-in terminals   |
//! | [`error`]   | `LayoutError`, `LayoutResult<T>`                            |
//!
//! A `Layout` is built once, validated, and then shared read-only (behind an
//! `Arc`) by both the baseline and adaptive populations so geometry can never
//! confound the comparison.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on the rectangle types.    |

pub mod error;
pub mod layout;
pub mod venues;

#[cfg(test)]
mod tests;

pub use error::{LayoutError, LayoutResult};
pub use layout::{ExitSpec, Gate, Layout, LayoutBuilder, SpawnArea, Wall};
pub use venues::{DEFAULT_VENUE, ResolvedVenue, VenueCatalog, VenueProvider};
