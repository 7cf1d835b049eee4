//! A single pedestrian.

use cl_core::{AgentId, Vec2};

/// One pedestrian in venue coordinates.
///
/// `is_evacuated` and `is_injured` only ever go from `false` to `true`; the
/// `mark_*` methods are the only writers outside of construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id:           AgentId,
    pub pos:          Vec2,
    pub is_evacuated: bool,
    pub is_injured:   bool,
    pub is_dead:      bool,
}

impl Agent {
    pub fn new(id: AgentId, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            is_evacuated: false,
            is_injured:   false,
            is_dead:      false,
        }
    }

    /// Still inside the venue: counts toward crowding and density.
    #[inline]
    pub fn is_present(&self) -> bool {
        !self.is_evacuated
    }

    /// Present and able to walk.
    #[inline]
    pub fn is_mobile(&self) -> bool {
        !self.is_evacuated && !self.is_dead
    }

    #[inline]
    pub fn mark_evacuated(&mut self) {
        self.is_evacuated = true;
    }

    #[inline]
    pub fn mark_injured(&mut self) {
        self.is_injured = true;
    }

    #[inline]
    pub fn mark_dead(&mut self) {
        self.is_dead = true;
    }
}
