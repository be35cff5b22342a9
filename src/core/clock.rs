//! Millisecond Clocks
//!
//! Time sources for reel positioning. The positioner only ever asks for
//! "milliseconds now" and subtracts two readings, so any source with a
//! stable origin works.
//!
//! - `MonotonicClock`: `Instant`-based, immune to wall-clock jumps
//! - `WallClock`: Unix epoch milliseconds via chrono
//! - `ManualClock`: caller-driven time for tests and replays

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Milliseconds since a clock-specific origin.
pub type Millis = u64;

/// A source of millisecond timestamps.
pub trait Clock {
    /// Current time in milliseconds.
    fn now_millis(&self) -> Millis;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now_millis(&self) -> Millis {
        (**self).now_millis()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    #[inline]
    fn now_millis(&self) -> Millis {
        (**self).now_millis()
    }
}

/// Whole milliseconds in `duration`, saturating at `Millis::MAX`.
#[inline]
pub fn duration_millis(duration: Duration) -> Millis {
    Millis::try_from(duration.as_millis()).unwrap_or(Millis::MAX)
}

// =============================================================================
// MONOTONIC
// =============================================================================

/// Monotonic clock measuring from its own creation.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Start a clock at zero.
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now_millis(&self) -> Millis {
        duration_millis(self.origin.elapsed())
    }
}

// =============================================================================
// WALL
// =============================================================================

/// Wall clock reporting Unix epoch milliseconds.
///
/// Can step backwards under NTP adjustment; the positioner saturates
/// negative elapsed time to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl Clock for WallClock {
    #[inline]
    fn now_millis(&self) -> Millis {
        Millis::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

// =============================================================================
// MANUAL
// =============================================================================

/// Manually driven clock.
///
/// Clones share the same time, so a test can hand one clone to a
/// positioner and keep another to move time forward.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock reading `start` milliseconds.
    pub fn new(start: Millis) -> Self {
        Self { now: Arc::new(AtomicU64::new(start)) }
    }

    /// Move time forward by `millis`.
    pub fn advance(&self, millis: Millis) {
        self.now.fetch_add(millis, Ordering::Relaxed);
    }

    /// Jump to an absolute time (may go backwards).
    pub fn set(&self, millis: Millis) {
        self.now.store(millis, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now_millis(&self) -> Millis {
        self.now.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new(1_000);
        let handle = clock.clone();

        handle.advance(250);
        assert_eq!(clock.now_millis(), 1_250);

        handle.set(10);
        assert_eq!(clock.now_millis(), 10);
    }

    #[test]
    fn test_monotonic_clock_never_decreases() {
        let clock = MonotonicClock::new();
        let mut last = clock.now_millis();
        for _ in 0..1000 {
            let now = clock.now_millis();
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn test_wall_clock_is_epoch_based() {
        // 2020-01-01T00:00:00Z
        assert!(WallClock.now_millis() > 1_577_836_800_000);
    }

    #[test]
    fn test_duration_millis_saturates() {
        assert_eq!(duration_millis(Duration::from_millis(1_500)), 1_500);
        assert_eq!(duration_millis(Duration::from_micros(999)), 0);
        assert_eq!(duration_millis(Duration::MAX), Millis::MAX);
    }

    #[test]
    fn test_boxed_clock() {
        let clock = ManualClock::new(7);
        let boxed: Box<dyn Clock> = Box::new(clock.clone());

        // Goes through the `Box<C>` impl, not auto-deref
        fn read<C: Clock>(c: &C) -> Millis {
            c.now_millis()
        }
        clock.advance(3);
        assert_eq!(read(&boxed), 10);
    }

    #[test]
    fn test_clock_through_reference() {
        let clock = ManualClock::new(42);
        let by_ref: &dyn Clock = &clock;
        assert_eq!(by_ref.now_millis(), 42);
    }
}
