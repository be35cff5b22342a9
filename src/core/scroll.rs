//! Scroll Arithmetic
//!
//! Integer-only conversions between elapsed time, discrete symbol steps and
//! pixel offsets. All functions are pure so the positioner stays a thin
//! state machine around them.
//!
//! ```text
//!   elapsed ──► steps  = elapsed / speed          (whole symbols passed)
//!           └─► offset = elapsed * size / speed - size
//!
//!   offset = -size  ┌───┐  first symbol sits fully above the window
//!                   │ X │
//!   offset → 0      └───┘  first symbol slides down into slot 0
//! ```

use super::clock::Millis;

/// Symbol height in pixels used when the renderer does not supply one.
pub const DEFAULT_SYMBOL_SIZE: u32 = 100;

/// Slot `offset` positions after `index` on a circular sequence of `len`.
///
/// `len` must be non-zero.
#[inline]
pub fn wrap_index(index: usize, offset: usize, len: usize) -> usize {
    (index % len + offset % len) % len
}

/// Move `index` back by `steps` on a circular sequence of `len`.
///
/// `len` must be non-zero.
#[inline]
pub fn step_back(index: usize, steps: u64, len: usize) -> usize {
    let back = (steps % len as u64) as usize;
    (index % len + len - back) % len
}

/// Whole symbol intervals contained in `elapsed`.
///
/// Returns `None` for a zero speed, where every poll is a full interval.
#[inline]
pub fn steps_elapsed(elapsed: Millis, speed_millis: u64) -> Option<u64> {
    if speed_millis == 0 {
        return None;
    }
    Some(elapsed / speed_millis)
}

/// Pixel offset of the first visible symbol.
///
/// `floor(elapsed / speed * size) - size`, computed without floats.
/// Lies in `[-size, 0)` while `elapsed < speed`; reaches zero and beyond when the
/// caller polls slower than the speed. Returns `None` for a zero speed.
pub fn first_symbol_offset(elapsed: Millis, speed_millis: u64, symbol_size: u32) -> Option<i64> {
    if speed_millis == 0 {
        return None;
    }
    let scrolled = u128::from(elapsed) * u128::from(symbol_size) / u128::from(speed_millis);
    let scrolled = i64::try_from(scrolled).unwrap_or(i64::MAX);
    Some(scrolled.saturating_sub(i64::from(symbol_size)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(1, 0, 3), 1);
        assert_eq!(wrap_index(1, 2, 3), 0);
        assert_eq!(wrap_index(2, 7, 3), 0);
        assert_eq!(wrap_index(usize::MAX, usize::MAX, 7), (usize::MAX % 7 * 2) % 7);
    }

    #[test]
    fn test_step_back_wraps() {
        assert_eq!(step_back(0, 1, 3), 2);
        assert_eq!(step_back(2, 1, 3), 1);
        assert_eq!(step_back(1, 4, 3), 0);
        assert_eq!(step_back(0, u64::MAX, 1), 0);
    }

    #[test]
    fn test_steps_elapsed() {
        assert_eq!(steps_elapsed(99, 100), Some(0));
        assert_eq!(steps_elapsed(100, 100), Some(1));
        assert_eq!(steps_elapsed(1050, 100), Some(10));
        assert_eq!(steps_elapsed(5, 0), None);
    }

    #[test]
    fn test_offset_at_interval_start() {
        assert_eq!(first_symbol_offset(0, 100, 100), Some(-100));
    }

    #[test]
    fn test_offset_midway() {
        assert_eq!(first_symbol_offset(50, 100, 100), Some(-50));
        // floor(33 / 200 * 90) = floor(14.85) = 14
        assert_eq!(first_symbol_offset(33, 200, 90), Some(14 - 90));
    }

    #[test]
    fn test_offset_range_under_normal_polling() {
        for elapsed in 0..250 {
            let offset = first_symbol_offset(elapsed, 250, 64).unwrap();
            assert!(offset < 0 && offset >= -64, "elapsed {elapsed} gave {offset}");
        }
    }

    #[test]
    fn test_offset_overshoot_on_slow_polling() {
        assert_eq!(first_symbol_offset(300, 100, 100), Some(200));
    }

    #[test]
    fn test_offset_zero_speed() {
        assert_eq!(first_symbol_offset(10, 0, 100), None);
    }

    #[test]
    fn test_offset_saturates() {
        assert_eq!(first_symbol_offset(u64::MAX, 1, u32::MAX), Some(i64::MAX - i64::from(u32::MAX)));
    }
}
