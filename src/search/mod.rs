//! Game-tree search.
//!
//! ## Overview
//!
//! Exhaustive minimax with alpha-beta pruning. The board is small enough
//! that every line is searched to the end, so there is no depth limit and
//! no evaluation heuristic.
//!
//! ## Usage
//!
//! ```rust
//! use rust_tictactoe::core::{Board, Mark};
//! use rust_tictactoe::search::{Minimax, SearchConfig};
//!
//! let board = Board::parse("OXO/XX./XO.").unwrap();
//! let mut engine = Minimax::new(SearchConfig::default());
//!
//! let result = engine.best_move(&board, Mark::X);
//! assert_eq!(result.score, -1);
//! assert_eq!(result.best_move.map(|m| m.index()), Some(5));
//! println!("searched {}", engine.stats());
//! ```

pub mod config;
pub mod minimax;
pub mod stats;

pub use config::SearchConfig;
pub use minimax::{search, Minimax, SearchResult, ALPHA_INIT, BETA_INIT};
pub use stats::SearchStats;
