//! Reel errors.

use thiserror::Error;

/// A reel configuration that cannot be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigIssue {
    /// The reelset has no symbols.
    #[error("reelset empty")]
    EmptyReelset,
    /// Speed below zero milliseconds per symbol.
    #[error("negative speed: {0}")]
    NegativeSpeed(i64),
    /// Start index below zero.
    #[error("negative start index: {0}")]
    NegativeStartIndex(i64),
}

/// Reel errors.
#[derive(Debug, Error)]
pub enum ReelError {
    /// Rejected start parameters. The reel is left as it was.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigIssue),

    /// Config file could not be read.
    #[error("failed to read config: {0}")]
    ConfigRead(#[from] std::io::Error),

    /// Config JSON could not be parsed.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl ReelError {
    /// The validation failure, if this is one.
    pub fn config_issue(&self) -> Option<ConfigIssue> {
        match self {
            Self::InvalidConfiguration(issue) => Some(*issue),
            _ => None,
        }
    }
}

/// Result alias for reel operations.
pub type ReelResult<T> = Result<T, ReelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ReelError::from(ConfigIssue::EmptyReelset);
        assert_eq!(err.to_string(), "invalid configuration: reelset empty");

        let err = ReelError::from(ConfigIssue::NegativeSpeed(-50));
        assert_eq!(err.to_string(), "invalid configuration: negative speed: -50");

        let err = ReelError::from(ConfigIssue::NegativeStartIndex(-1));
        assert_eq!(err.to_string(), "invalid configuration: negative start index: -1");
    }

    #[test]
    fn test_config_issue_accessor() {
        let err = ReelError::from(ConfigIssue::NegativeSpeed(-3));
        assert_eq!(err.config_issue(), Some(ConfigIssue::NegativeSpeed(-3)));

        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        assert_eq!(ReelError::from(parse).config_issue(), None);
    }
}
