//! Reel Module
//!
//! One reel's motion over time.
//!
//! ## Module Structure
//!
//! - `config`: start parameters, validation, JSON loading
//! - `state`: immutable snapshot of a running reel
//! - `positioner`: the per-frame state machine
//! - `events`: what a poll did

pub mod config;
pub mod events;
pub mod positioner;
pub mod state;

// Re-export key types
pub use config::{validate_start, AdvancePolicy, ReelConfig, ValidStart};
pub use events::AdvanceOutcome;
pub use positioner::{ReelPositioner, SymbolPositioner, BLANK_SYMBOL};
pub use state::ReelState;
