//! Reel Positioner
//!
//! Turns wall time into reel motion. The renderer polls three things each
//! frame:
//!
//! ```text
//!   advance()               move the first slot back once a symbol interval passes
//!   first_symbol_offset()   pixel offset of slot 0 inside the current interval
//!   symbol_at(k)            symbol shown k slots below the first
//! ```
//!
//! Before the first successful start every query returns a blank default
//! and stays quiet. After that, an idle or degenerate reel is logged as an
//! anomaly but still answers with defaults, so the render loop never has to
//! handle errors.

use tracing::{debug, warn};

use crate::core::clock::{Clock, MonotonicClock};
use crate::core::scroll::{first_symbol_offset, steps_elapsed, DEFAULT_SYMBOL_SIZE};
use crate::error::{ReelError, ReelResult};
use crate::reel::config::{validate_start, AdvancePolicy, ReelConfig};
use crate::reel::events::AdvanceOutcome;
use crate::reel::state::ReelState;

/// Symbol reported for slots of a reel that has not started.
pub const BLANK_SYMBOL: char = ' ';

/// The calls a reel renderer makes.
pub trait SymbolPositioner {
    /// Start (or restart) at `position` on `reelset`, moving one symbol
    /// every `speed` milliseconds.
    fn start(&mut self, position: i64, reelset: &[char], speed: i64) -> ReelResult<()>;

    /// Per-frame update. False until started.
    fn update(&mut self) -> bool;

    /// Pixel offset of the first symbol.
    fn first_symbol_position(&self) -> i64;

    /// Symbol `index` slots below the first.
    fn symbol(&self, index: usize) -> char;
}

/// Position tracker for one reel.
#[derive(Debug)]
pub struct ReelPositioner<C: Clock = MonotonicClock> {
    clock: C,
    symbol_size: u32,
    policy: AdvancePolicy,
    state: Option<ReelState>,
    ever_started: bool,
}

impl ReelPositioner<MonotonicClock> {
    /// Idle positioner on a monotonic clock.
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl Default for ReelPositioner<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ReelPositioner<C> {
    /// Idle positioner reading time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            symbol_size: DEFAULT_SYMBOL_SIZE,
            policy: AdvancePolicy::default(),
            state: None,
            ever_started: false,
        }
    }

    /// Set the symbol height used for offsets.
    #[must_use]
    pub fn with_symbol_size(mut self, symbol_size: u32) -> Self {
        self.symbol_size = symbol_size;
        self
    }

    /// Set the late-poll policy.
    #[must_use]
    pub fn with_policy(mut self, policy: AdvancePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Positioner started from `config`.
    pub fn from_config(config: &ReelConfig, clock: C) -> ReelResult<Self> {
        let mut positioner = Self::with_clock(clock);
        positioner.start_with(config)?;
        Ok(positioner)
    }

    /// Start the reel.
    ///
    /// `start_index` is reduced modulo the reelset length. On error nothing
    /// changes, including a reel that is already running.
    pub fn initialize(
        &mut self,
        start_index: i64,
        symbols: impl Into<Vec<char>>,
        speed_millis: i64,
    ) -> ReelResult<()> {
        let start = validate_start(start_index, symbols.into(), speed_millis).map_err(|issue| {
            warn!(%issue, "rejected reel start");
            ReelError::from(issue)
        })?;

        let now = self.clock.now_millis();
        debug!(
            index = start.index,
            symbols = start.symbols.len(),
            speed_millis = start.speed_millis,
            "reel started"
        );
        self.state = Some(ReelState::started(start, now));
        self.ever_started = true;
        Ok(())
    }

    /// Start the reel from a config, adopting its symbol size and policy.
    pub fn start_with(&mut self, config: &ReelConfig) -> ReelResult<()> {
        self.initialize(config.start_index, config.symbol_chars(), config.speed_millis)?;
        self.symbol_size = config.symbol_size;
        self.policy = config.policy;
        Ok(())
    }

    /// Per-frame update reporting what happened.
    pub fn poll(&mut self) -> AdvanceOutcome {
        let Some(state) = self.state.as_ref() else {
            self.report_anomaly("advance on an idle reel");
            return AdvanceOutcome::Idle;
        };

        let now = self.clock.now_millis();
        let elapsed = state.elapsed(now);

        let (steps, at) = match steps_elapsed(elapsed, state.speed_millis()) {
            Some(0) => {
                #[cfg(feature = "debug-tracing")]
                tracing::trace!(elapsed, "reel pending");
                return AdvanceOutcome::Pending { elapsed };
            }
            Some(intervals) if self.policy == AdvancePolicy::CatchUp => {
                // Keep the partial interval so the offset stays continuous
                let consumed = intervals.saturating_mul(state.speed_millis());
                (intervals, state.last_advance().saturating_add(consumed))
            }
            // Single step, or zero speed where every poll is a full interval
            _ => (1, now),
        };

        let next = state.stepped(steps, at);
        let index = next.index();
        debug!(steps, index, elapsed, "reel stepped");
        self.state = Some(next);

        AdvanceOutcome::Stepped { steps, index }
    }

    /// Per-frame update. False until the reel has started.
    pub fn advance(&mut self) -> bool {
        self.poll().is_moving()
    }

    /// Pixel offset of the first visible symbol.
    ///
    /// Zero when the reel is idle or its speed is zero.
    pub fn first_symbol_offset(&self) -> i64 {
        let Some(state) = self.state.as_ref() else {
            self.report_anomaly("offset requested on an idle reel");
            return 0;
        };

        let elapsed = state.elapsed(self.clock.now_millis());
        match first_symbol_offset(elapsed, state.speed_millis(), self.symbol_size) {
            Some(offset) => offset,
            None => {
                self.report_anomaly("offset requested with zero speed");
                0
            }
        }
    }

    /// Symbol `relative_index` slots below the first. Blank until started.
    pub fn symbol_at(&self, relative_index: usize) -> char {
        match self.state.as_ref() {
            Some(state) => state.symbol_at(relative_index),
            None => {
                self.report_anomaly("symbol requested on an idle reel");
                BLANK_SYMBOL
            }
        }
    }

    /// Symbols for slots `0..count`.
    pub fn visible_symbols(&self, count: usize) -> Vec<char> {
        (0..count).map(|slot| self.symbol_at(slot)).collect()
    }

    /// Current snapshot, if started.
    pub fn state(&self) -> Option<&ReelState> {
        self.state.as_ref()
    }

    /// Whether a start has ever succeeded.
    pub fn has_started(&self) -> bool {
        self.ever_started
    }

    /// First visible slot.
    pub fn index(&self) -> Option<usize> {
        self.state.as_ref().map(ReelState::index)
    }

    /// The reelset.
    pub fn symbols(&self) -> Option<&[char]> {
        self.state.as_ref().map(ReelState::symbols)
    }

    /// Milliseconds per symbol.
    pub fn speed_millis(&self) -> Option<u64> {
        self.state.as_ref().map(ReelState::speed_millis)
    }

    /// Clock reading at the last start or step.
    pub fn last_advance_millis(&self) -> Option<u64> {
        self.state.as_ref().map(ReelState::last_advance)
    }

    /// Symbol height used for offsets.
    pub fn symbol_size(&self) -> u32 {
        self.symbol_size
    }

    /// Late-poll policy.
    pub fn policy(&self) -> AdvancePolicy {
        self.policy
    }

    /// The clock this reel reads.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn report_anomaly(&self, what: &'static str) {
        if self.ever_started {
            warn!(anomaly = what, "reel anomaly detected");
        }
    }
}

impl<C: Clock> SymbolPositioner for ReelPositioner<C> {
    fn start(&mut self, position: i64, reelset: &[char], speed: i64) -> ReelResult<()> {
        self.initialize(position, reelset, speed)
    }

    fn update(&mut self) -> bool {
        self.advance()
    }

    fn first_symbol_position(&self) -> i64 {
        self.first_symbol_offset()
    }

    fn symbol(&self, index: usize) -> char {
        self.symbol_at(index)
    }
}
