//! Core primitives.
//!
//! Time sources and the scroll arithmetic shared by every reel.

pub mod clock;
pub mod scroll;

// Re-export core types
pub use clock::{duration_millis, Clock, ManualClock, Millis, MonotonicClock, WallClock};
pub use scroll::{first_symbol_offset, step_back, steps_elapsed, wrap_index, DEFAULT_SYMBOL_SIZE};
