//! Difficulty tiers and the search plan each one runs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseDifficultyError;

/// Search depth of the medium tier, in plies.
pub const MEDIUM_DEPTH: u8 = 2;
/// Search depth of the high tier, in plies.
pub const HIGH_DEPTH: u8 = 3;

/// Strength setting chosen by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Low,
    #[default]
    Medium,
    High,
}

/// What a move request actually does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPlan {
    /// Uniformly random legal move, no search.
    Random,
    /// Alpha-beta search to a fixed depth in plies.
    SearchToDepth(u8),
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Low, Difficulty::Medium, Difficulty::High];

    pub fn plan(self) -> SearchPlan {
        match self {
            Difficulty::Low => SearchPlan::Random,
            Difficulty::Medium => SearchPlan::SearchToDepth(MEDIUM_DEPTH),
            Difficulty::High => SearchPlan::SearchToDepth(HIGH_DEPTH),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Low => "low",
            Difficulty::Medium => "medium",
            Difficulty::High => "high",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Case-insensitive: UCI GUIs send option values as typed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod policy_tests;
