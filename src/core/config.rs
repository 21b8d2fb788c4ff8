//! Game configuration.
//!
//! One session is one game: which side the human plays, whether the engine
//! opens with a random cell, and the seed for that pick.

use serde::{Deserialize, Serialize};

use super::mark::Mark;

/// Configuration for a single game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side played by the human. X moves first.
    pub human: Mark,

    /// When the engine moves on an empty board, pick uniformly among the
    /// nine cells instead of searching.
    pub random_opening: bool,

    /// Seed for the opening pick (`None` = draw a seed from the OS).
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human: Mark::X,
            random_opening: true,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Side played by the engine.
    #[must_use]
    pub fn engine(&self) -> Mark {
        self.human.opponent()
    }

    /// Set the human's side.
    pub fn with_human(mut self, mark: Mark) -> Self {
        self.human = mark;
        self
    }

    /// Enable or disable the random opening.
    pub fn with_random_opening(mut self, enabled: bool) -> Self {
        self.random_opening = enabled;
        self
    }

    /// Fix the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
