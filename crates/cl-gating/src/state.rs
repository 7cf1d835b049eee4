//! Exit control states.

use std::fmt;

/// Control state of one exit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExitState {
    #[default]
    Open,
    /// Just triggered.  Lasts exactly one tick.
    Closing,
    Closed,
    /// Recovery elapsed; admits agents again but has not fully relaxed.
    Reopening,
}

impl ExitState {
    /// Whether evacuating agents may pass through.
    #[inline]
    pub fn admits(self) -> bool {
        matches!(self, ExitState::Open | ExitState::Reopening)
    }

    pub fn label(self) -> &'static str {
        match self {
            ExitState::Open => "open",
            ExitState::Closing => "closing",
            ExitState::Closed => "closed",
            ExitState::Reopening => "reopening",
        }
    }
}

impl fmt::Display for ExitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
