//! Reel State Snapshot
//!
//! Everything a started reel knows, held as one immutable value. A state
//! transition builds a new snapshot; fields never change in place, so a
//! reader can never observe a half-applied start or step.

use std::sync::Arc;

use serde::Serialize;

use crate::core::clock::Millis;
use crate::core::scroll::{step_back, wrap_index};
use crate::reel::config::ValidStart;

/// Snapshot of a running reel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReelState {
    index: usize,
    symbols: Arc<[char]>,
    speed_millis: u64,
    last_advance: Millis,
}

impl ReelState {
    /// State for a freshly started reel.
    pub fn started(start: ValidStart, now: Millis) -> Self {
        Self {
            index: start.index,
            symbols: start.symbols.into(),
            speed_millis: start.speed_millis,
            last_advance: now,
        }
    }

    /// State after moving back `steps` symbols, last advanced `at`.
    ///
    /// Shares the reelset with `self`.
    #[must_use]
    pub fn stepped(&self, steps: u64, at: Millis) -> Self {
        Self {
            index: step_back(self.index, steps, self.symbols.len()),
            symbols: Arc::clone(&self.symbols),
            speed_millis: self.speed_millis,
            last_advance: at,
        }
    }

    /// Index of the first visible slot.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The reelset.
    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Milliseconds per symbol.
    #[inline]
    pub fn speed_millis(&self) -> u64 {
        self.speed_millis
    }

    /// Clock reading at the last start or step.
    #[inline]
    pub fn last_advance(&self) -> Millis {
        self.last_advance
    }

    /// Time since the last step. Zero if the clock went backwards.
    #[inline]
    pub fn elapsed(&self, now: Millis) -> Millis {
        now.saturating_sub(self.last_advance)
    }

    /// Symbol `relative` slots after the first visible one.
    #[inline]
    pub fn symbol_at(&self, relative: usize) -> char {
        self.symbols[wrap_index(self.index, relative, self.symbols.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc(index: usize) -> ReelState {
        ReelState::started(
            ValidStart { index, symbols: vec!['A', 'B', 'C'], speed_millis: 100 },
            1_000,
        )
    }

    #[test]
    fn test_symbol_at_wraps() {
        let state = abc(1);
        assert_eq!(state.symbol_at(0), 'B');
        assert_eq!(state.symbol_at(1), 'C');
        assert_eq!(state.symbol_at(2), 'A');
        assert_eq!(state.symbol_at(300), 'B');
    }

    #[test]
    fn test_stepped_leaves_original() {
        let state = abc(0);
        let next = state.stepped(1, 1_100);

        assert_eq!(state.index(), 0);
        assert_eq!(state.last_advance(), 1_000);
        assert_eq!(next.index(), 2);
        assert_eq!(next.last_advance(), 1_100);
        assert_eq!(next.symbols(), state.symbols());
        assert_eq!(next.speed_millis(), 100);
    }

    #[test]
    fn test_elapsed_saturates() {
        let state = abc(0);
        assert_eq!(state.elapsed(1_250), 250);
        assert_eq!(state.elapsed(900), 0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let json = serde_json::to_value(abc(2)).unwrap();
        assert_eq!(json["index"], 2);
        assert_eq!(json["symbols"], serde_json::json!(["A", "B", "C"]));
        assert_eq!(json["last_advance"], 1_000);
    }
}
