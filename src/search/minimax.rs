//! Minimax search with alpha-beta pruning.
//!
//! O is the maximizer (an O win scores +1), X the minimizer (-1). Draws
//! score 0. Every line is searched to a terminal position.
//!
//! Moves are tried in ascending cell order and a move only replaces the
//! current best when it is strictly better, so the first best move wins
//! ties. With a full window at the root, pruning changes neither the score
//! nor the chosen move.
//!
//! Each ply works on its own copy of the board; the caller's board is never
//! modified.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, Mark, Move};

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Initial alpha: worse than any reachable score.
pub const ALPHA_INIT: i32 = i32::MIN;

/// Initial beta: better than any reachable score.
pub const BETA_INIT: i32 = i32::MAX;

/// Value of a position and the move that achieves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Game-theoretic value: +1 O wins, -1 X wins, 0 draw.
    pub score: i32,

    /// Best move for the side to move; `None` on a terminal board.
    pub best_move: Option<Move>,
}

impl SearchResult {
    fn terminal(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Minimax search context.
///
/// Owns the configuration and the statistics of the last search.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl Minimax {
    /// Create a new search context.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Search `board` for the side given by `maximizing`.
    ///
    /// `maximizing` is true when choosing for O. `alpha` and `beta` are the
    /// scores the maximizer and minimizer can already guarantee; pass
    /// [`ALPHA_INIT`] and [`BETA_INIT`] for a full search.
    pub fn search(&mut self, board: &Board, maximizing: bool, alpha: i32, beta: i32) -> SearchResult {
        let start = Instant::now();
        self.stats.reset();

        let result = self.search_node(board, maximizing, alpha, beta, 0);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            score = result.score,
            best_move = ?result.best_move,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            time_us = self.stats.time_us,
            "search finished"
        );

        result
    }

    /// Full-window search for `mark`.
    pub fn best_move(&mut self, board: &Board, mark: Mark) -> SearchResult {
        self.search(board, mark.is_maximizer(), ALPHA_INIT, BETA_INIT)
    }

    fn search_node(
        &mut self,
        board: &Board,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        depth: u8,
    ) -> SearchResult {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        // The winner can only come from the move that produced this board.
        if let Some(winner) = board.winner() {
            self.stats.terminals += 1;
            return SearchResult::terminal(winner.win_score());
        }
        if board.is_full() {
            self.stats.terminals += 1;
            return SearchResult::terminal(0);
        }

        let mark = Mark::for_side(maximizing);
        let mut best = SearchResult {
            score: if maximizing { ALPHA_INIT } else { BETA_INIT },
            best_move: None,
        };

        for mv in board.available_moves() {
            let mut child = *board;
            child.apply_move(mv, mark);
            let score = self
                .search_node(&child, !maximizing, alpha, beta, depth + 1)
                .score;

            if maximizing {
                if score > best.score {
                    best = SearchResult {
                        score,
                        best_move: Some(mv),
                    };
                }
                alpha = alpha.max(score);
            } else {
                if score < best.score {
                    best = SearchResult {
                        score,
                        best_move: Some(mv),
                    };
                }
                beta = beta.min(score);
            }

            if self.config.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }

    /// Statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// One-shot search with pruning and a fresh context.
pub fn search(board: &Board, maximizing: bool, alpha: i32, beta: i32) -> SearchResult {
    Minimax::default().search(board, maximizing, alpha, beta)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::parse(s).unwrap()
    }

    #[test]
    fn test_terminal_boards_have_no_move() {
        let won = board("XXX/OO./...");
        let result = search(&won, true, ALPHA_INIT, BETA_INIT);
        assert_eq!(result, SearchResult { score: -1, best_move: None });

        let o_won = board("OOO/XX./X..");
        assert_eq!(search(&o_won, false, ALPHA_INIT, BETA_INIT).score, 1);

        let drawn = board("OXO/XXO/XOX");
        let result = search(&drawn, true, ALPHA_INIT, BETA_INIT);
        assert_eq!(result, SearchResult { score: 0, best_move: None });
    }

    #[test]
    fn test_empty_board_is_draw() {
        let empty = Board::new();
        let x = search(&empty, false, ALPHA_INIT, BETA_INIT);
        let o = search(&empty, true, ALPHA_INIT, BETA_INIT);
        assert_eq!(x.score, 0);
        assert_eq!(o.score, 0);
        // Every opening draws; the first cell is kept.
        assert_eq!(x.best_move, Some(Move::new(0)));
    }

    #[test]
    fn test_minimizer_takes_the_win() {
        let b = board("OXO/XX./XO.");
        let result = search(&b, false, ALPHA_INIT, BETA_INIT);
        assert_eq!(result.score, -1);
        assert_eq!(result.best_move, Some(Move::new(5)));
    }

    #[test]
    fn test_maximizer_blocks() {
        // X threatens 0-1-2; O must take 2.
        let b = board("XX./.O./...");
        let result = search(&b, true, ALPHA_INIT, BETA_INIT);
        assert_eq!(result.best_move, Some(Move::new(2)));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_board_left_untouched() {
        let b = board("X../.O./...");
        let before = b;
        search(&b, false, ALPHA_INIT, BETA_INIT);
        assert_eq!(b, before);
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let empty = Board::new();

        let mut pruned = Minimax::new(SearchConfig::default());
        let mut full = Minimax::new(SearchConfig::exhaustive());

        let a = pruned.search(&empty, false, ALPHA_INIT, BETA_INIT);
        let b = full.search(&empty, false, ALPHA_INIT, BETA_INIT);

        assert_eq!(a, b);
        assert!(pruned.stats().nodes < full.stats().nodes);
        assert!(pruned.stats().cutoffs > 0);
        assert_eq!(full.stats().cutoffs, 0);
        assert_eq!(full.stats().max_depth, 9);
    }

    #[test]
    fn test_best_move_uses_mark_side() {
        let b = board("OO./XX./O..");
        let mut engine = Minimax::default();
        assert_eq!(engine.best_move(&b, Mark::O).best_move, Some(Move::new(2)));
        assert_eq!(engine.best_move(&b, Mark::X).best_move, Some(Move::new(5)));
    }

    #[test]
    fn test_stats_reset_between_searches() {
        let mut engine = Minimax::default();
        engine.search(&Board::new(), false, ALPHA_INIT, BETA_INIT);
        let first = engine.stats().nodes;
        engine.search(&board("XXX/OO./..."), true, ALPHA_INIT, BETA_INIT);
        assert!(first > 1);
        assert_eq!(engine.stats().nodes, 1);
        assert_eq!(engine.stats().terminals, 1);
    }
}
