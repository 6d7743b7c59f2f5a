//! Error types for constructing quiz values and loading configuration.
//!
//! Gameplay itself never fails: bad keystrokes and late submissions are
//! absorbed by the session. These errors only surface when a host builds
//! values from untrusted input (mode numbers, config files).

use thiserror::Error;

/// Errors raised while building letters, positions, modes or config.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The character is not an ASCII letter.
    #[error("not a letter of the alphabet: {0:?}")]
    InvalidLetter(char),

    /// The number lies outside 1..=26.
    #[error("alphabet position out of range: {0}")]
    InvalidPosition(u8),

    /// Mode numbers are 1 through 4.
    #[error("unknown game mode: {0}")]
    UnknownMode(u8),

    /// A config value failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The config file is not valid JSON for `QuizConfig`.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}
