//! The two evacuation policies being compared.

use std::fmt;

use crate::MotionParams;

/// Which control policy a population runs under.
///
/// Kept as a plain `Copy` enum so it can sit in config structs and output
/// rows.  The routing strategy itself lives behind `cl_routing::Router`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Policy {
    /// Always walk to the nearest exit; exits never close.
    Baseline,
    /// CrowdLeaf: exits close under load and agents pick the least crowded
    /// admitting exit.
    Adaptive,
}

impl Policy {
    pub const ALL: [Policy; 2] = [Policy::Baseline, Policy::Adaptive];

    /// Whether exits run the open/close automaton under this policy.
    #[inline]
    pub fn gates_exits(self) -> bool {
        matches!(self, Policy::Adaptive)
    }

    /// Nominal walking speed in venue units per tick.
    #[inline]
    pub fn speed(self, motion: &MotionParams) -> f32 {
        match self {
            Policy::Baseline => motion.baseline_speed,
            Policy::Adaptive => motion.adaptive_speed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Policy::Baseline => "baseline",
            Policy::Adaptive => "adaptive",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
