//! # rust-tictactoe
//!
//! Tic-Tac-Toe against a perfect opponent.
//!
//! ## Design Principles
//!
//! 1. **Exhaustive Search**: The board is small enough that minimax always
//!    reaches terminal positions. No depth limit, no heuristic.
//!
//! 2. **Deterministic**: Moves are tried in ascending cell order and the
//!    first best move wins ties. The only randomness is an optional opening
//!    pick from a seeded RNG.
//!
//! 3. **Copy, Don't Undo**: The board is a small `Copy` value. The search
//!    copies it per ply, so a search never changes the caller's board.
//!
//! ## Modules
//!
//! - `core`: Marks, moves, board, results, RNG, configuration
//! - `search`: Minimax with alpha-beta pruning
//! - `play`: Rendering, input, players and the game loop
//! - `error`: Crate error type

pub mod core;
pub mod error;
pub mod play;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Board, Cell, GameConfig, GameResult, GameRng, Mark, Move};

pub use crate::error::{Error, Result};

pub use crate::search::{Minimax, SearchConfig, SearchResult, SearchStats, ALPHA_INIT, BETA_INIT};

pub use crate::play::{EnginePlayer, GameSession, HumanPlayer, Player};
