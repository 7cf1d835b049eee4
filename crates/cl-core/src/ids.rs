//! Strongly typed, zero-cost identifier wrappers.
//!
//! The inner integer is `pub` so IDs can index straight into the agent and
//! exit `Vec`s, but callers should prefer `.index()` for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// How many valid ids exist (every value below `INVALID`).
            pub const CAPACITY: usize = <$inner>::MAX as usize;

            /// Id for `Vec` position `i`, or `None` if `i` is past
            /// [`CAPACITY`](Self::CAPACITY).
            #[inline]
            pub fn from_index(i: usize) -> Option<$name> {
                $name::try_from(i).ok().filter(|id| *id != Self::INVALID)
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a pedestrian within one population.
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of an exit within a layout.  Venues declare a handful of exits,
    /// so `u16` is plenty.
    pub struct ExitId(u16);
}
