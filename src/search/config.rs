//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Minimax configuration.
///
/// There is no depth limit and no evaluation function: every line is
/// searched to a terminal position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Alpha-beta pruning (default: on).
    /// Turning it off gives plain exhaustive minimax with the same result.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { pruning: true }
    }
}

impl SearchConfig {
    /// Plain minimax, no pruning.
    #[must_use]
    pub fn exhaustive() -> Self {
        Self { pruning: false }
    }

    /// Create a new config with pruning on or off.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }
}
