//! Search statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected during one top-level search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, root included.
    pub nodes: u64,

    /// Positions that were won or full.
    pub terminals: u64,

    /// Times the remaining siblings were skipped by alpha-beta.
    pub cutoffs: u64,

    /// Deepest ply reached below the root.
    pub max_depth: u8,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} nodes, {} terminal, {} cutoffs, depth {}, {} us",
            self.nodes, self.terminals, self.cutoffs, self.max_depth, self.time_us
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.cutoffs, 0);
    }

    #[test]
    fn test_nodes_per_second() {
        let mut stats = SearchStats::new();
        assert_eq!(stats.nodes_per_second(), 0.0);

        stats.nodes = 1000;
        stats.time_us = 1_000_000;
        assert_eq!(stats.nodes_per_second(), 1000.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.nodes = 100;
        stats.terminals = 50;

        stats.reset();

        assert_eq!(stats, SearchStats::default());
    }
}
