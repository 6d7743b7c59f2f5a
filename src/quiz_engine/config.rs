//! Tunable constants of the quiz, loadable from JSON.
//!
//! Every field has a default matching the classic game, and missing fields in
//! a config file fall back to those defaults:
//!
//! ```json
//! { "choices": { "count": 4 }, "feedback": { "correct_ms": 300 } }
//! ```

use std::path::Path;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{alphabet::ALPHABET_LEN, error::QuizError};

/// Shape of the multiple-choice option set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoiceSettings {
    /// Options per question, correct answer included.
    pub count: usize,
    /// Neighbourhood (in positions) that plausible distractors are drawn from.
    pub radius: u8,
    /// Neighbourhood draws before falling back to uniform fill.
    pub neighbour_attempts: u32,
}

impl Default for ChoiceSettings {
    fn default() -> Self {
        ChoiceSettings { count: 5, radius: 2, neighbour_attempts: 20 }
    }
}

/// Delay between answer feedback and the resulting state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackDelays {
    pub correct_ms: u64,
    pub incorrect_ms: u64,
}

impl Default for FeedbackDelays {
    fn default() -> Self {
        FeedbackDelays { correct_ms: 800, incorrect_ms: 1200 }
    }
}

impl FeedbackDelays {
    /// No delay: transitions apply inside `submit_answer`.
    pub fn immediate() -> Self {
        FeedbackDelays { correct_ms: 0, incorrect_ms: 0 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub choices: ChoiceSettings,
    pub feedback: FeedbackDelays,
    /// Period of the elapsed-time display tick.
    pub tick_interval_ms: u64,
    /// Fixed seed for reproducible question sequences; entropy when `None`.
    pub rng_seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig {
            choices: ChoiceSettings::default(),
            feedback: FeedbackDelays::default(),
            tick_interval_ms: 1000,
            rng_seed: None,
        }
    }
}

impl QuizConfig {
    pub fn from_json_str(json: &str) -> Result<Self, QuizError> {
        let config: QuizConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, QuizError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), QuizError> {
        let max = ALPHABET_LEN as usize;
        if !(2..=max).contains(&self.choices.count) {
            return Err(QuizError::InvalidConfig(format!(
                "choices.count must be between 2 and {max}, got {}",
                self.choices.count
            )));
        }
        if self.choices.radius == 0 || self.choices.radius >= ALPHABET_LEN {
            return Err(QuizError::InvalidConfig(format!(
                "choices.radius must be between 1 and {}, got {}",
                ALPHABET_LEN - 1,
                self.choices.radius
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(QuizError::InvalidConfig("tick_interval_ms must be positive".into()));
        }
        Ok(())
    }
}
