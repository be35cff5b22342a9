//! Reel Configuration
//!
//! Start parameters for a reel, validation, and JSON loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::scroll::DEFAULT_SYMBOL_SIZE;
use crate::error::{ConfigIssue, ReelResult};

/// What `advance` does when more than one symbol interval has elapsed
/// since the last step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvancePolicy {
    /// One step per poll, however late the poll is. Slow pollers see the
    /// reel lag behind real time.
    #[default]
    SingleStep,
    /// Step once per elapsed interval and keep the remainder, so the reel
    /// tracks real time at any polling rate.
    CatchUp,
}

/// Start parameters after validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidStart {
    /// Start index already reduced modulo the reelset length.
    pub index: usize,
    /// Non-empty reelset.
    pub symbols: Vec<char>,
    /// Milliseconds per symbol.
    pub speed_millis: u64,
}

/// Validate raw start parameters.
///
/// Checks run in a fixed order: reelset, then speed, then start index.
/// The first failure wins.
pub fn validate_start(
    start_index: i64,
    symbols: Vec<char>,
    speed_millis: i64,
) -> Result<ValidStart, ConfigIssue> {
    if symbols.is_empty() {
        return Err(ConfigIssue::EmptyReelset);
    }
    let speed = u64::try_from(speed_millis).map_err(|_| ConfigIssue::NegativeSpeed(speed_millis))?;
    let start = u64::try_from(start_index).map_err(|_| ConfigIssue::NegativeStartIndex(start_index))?;

    let index = (start % symbols.len() as u64) as usize;
    Ok(ValidStart { index, symbols, speed_millis: speed })
}

/// Configuration for one reel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReelConfig {
    /// Index of the symbol shown first.
    pub start_index: i64,
    /// Reelset, one character per symbol.
    pub symbols: String,
    /// Milliseconds a symbol takes to scroll past.
    pub speed_millis: i64,
    /// Symbol height in pixels.
    pub symbol_size: u32,
    /// Late-poll behaviour.
    pub policy: AdvancePolicy,
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            start_index: 0,
            symbols: "AGHHBX".to_string(),
            speed_millis: 200,
            symbol_size: DEFAULT_SYMBOL_SIZE,
            policy: AdvancePolicy::SingleStep,
        }
    }
}

impl ReelConfig {
    /// Config for the given start parameters, other fields default.
    pub fn new(start_index: i64, symbols: impl Into<String>, speed_millis: i64) -> Self {
        Self {
            start_index,
            symbols: symbols.into(),
            speed_millis,
            ..Self::default()
        }
    }

    /// Reelset as characters.
    pub fn symbol_chars(&self) -> Vec<char> {
        self.symbols.chars().collect()
    }

    /// Check the start parameters.
    pub fn validate(&self) -> Result<ValidStart, ConfigIssue> {
        validate_start(self.start_index, self.symbol_chars(), self.speed_millis)
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> ReelResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> ReelResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
