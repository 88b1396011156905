//! Core types shared across the drill engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TempoError;

/// Best possible error score.
pub const GOOD: u8 = 0;

/// Worst possible error score.
pub const BAD: u8 = 255;

/// Grade for one completed drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Correct on the very first presentation.
    Good,
    /// Needed at least one timeout hint before answering.
    Bad,
}

impl Outcome {
    /// Sentinel score fed to the error estimator.
    pub fn score(self) -> u8 {
        match self {
            Self::Good => GOOD,
            Self::Bad => BAD,
        }
    }
}

/// One element of a Morse character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Short tone, one code unit.
    Dit,
    /// Long tone, three code units.
    Dah,
}

/// Code speed presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tempo {
    Slow,
    Medium,
    Fast,
}

impl Tempo {
    pub fn words_per_minute(self) -> u64 {
        match self {
            Self::Slow => 10,
            Self::Medium => 15,
            Self::Fast => 20,
        }
    }

    /// Duration of one code unit in milliseconds.
    pub fn unit_ms(self) -> u64 {
        1395 / self.words_per_minute()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Medium => "medium",
            Self::Fast => "fast",
        }
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Self::Fast
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} wpm)", self.as_str(), self.words_per_minute())
    }
}

impl FromStr for Tempo {
    type Err = TempoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "slow" | "s" => Ok(Self::Slow),
            "medium" | "m" => Ok(Self::Medium),
            "fast" | "f" => Ok(Self::Fast),
            _ => Err(TempoError {
                input: s.to_string(),
            }),
        }
    }
}
