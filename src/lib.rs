//! # Reel Positioner
//!
//! Scroll position and visible symbols of a slot-machine reel over time.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     REEL POSITIONER                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/            - Time and arithmetic primitives           │
//! │  ├── clock.rs     - Monotonic, wall and manual clocks        │
//! │  └── scroll.rs    - Index wrapping and pixel offsets         │
//! │                                                              │
//! │  reel/            - Reel motion                              │
//! │  ├── config.rs    - Start parameters and validation          │
//! │  ├── state.rs     - Immutable reel snapshot                  │
//! │  ├── positioner.rs- Per-frame state machine                  │
//! │  └── events.rs    - Poll outcomes                            │
//! │                                                              │
//! │  error.rs         - Error types                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```
//! use reel_positioner::{ManualClock, ReelPositioner};
//!
//! let clock = ManualClock::new(0);
//! let mut reel = ReelPositioner::with_clock(clock.clone());
//! reel.initialize(1, ['A', 'B', 'C'], 100).unwrap();
//!
//! assert_eq!(reel.symbol_at(0), 'B');
//! clock.advance(100);
//! assert!(reel.advance());
//! assert_eq!(reel.symbol_at(0), 'A');
//! ```
//!
//! The renderer polls `advance`, `first_symbol_offset` and `symbol_at` on
//! its own timer. With the default `AdvancePolicy::SingleStep` a late poll
//! moves the reel one symbol at most; `AdvancePolicy::CatchUp` makes the
//! position independent of the polling rate.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod reel;

// Re-export commonly used types
pub use crate::core::clock::{Clock, ManualClock, Millis, MonotonicClock, WallClock};
pub use crate::core::scroll::DEFAULT_SYMBOL_SIZE;
pub use error::{ConfigIssue, ReelError, ReelResult};
pub use reel::{AdvanceOutcome, AdvancePolicy, ReelConfig, ReelPositioner, ReelState, SymbolPositioner};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Slots a renderer shows: one partial above, three below.
pub const VISIBLE_SLOTS: usize = 4;
