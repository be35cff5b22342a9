//! Advance Outcomes
//!
//! What a single poll of the reel did.

use serde::Serialize;

use crate::core::clock::Millis;

/// Result of one `poll`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AdvanceOutcome {
    /// Reel not started.
    Idle,
    /// Started, still inside the current symbol interval.
    Pending {
        /// Time since the last step
        elapsed: Millis,
    },
    /// The first slot moved back.
    Stepped {
        /// Symbols moved this poll
        steps: u64,
        /// New first slot
        index: usize,
    },
}

impl AdvanceOutcome {
    /// True once the reel is started, stepped or not.
    #[inline]
    pub fn is_moving(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Symbols moved this poll.
    #[inline]
    pub fn steps(&self) -> u64 {
        match self {
            Self::Stepped { steps, .. } => *steps,
            _ => 0,
        }
    }
}
