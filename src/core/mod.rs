//! Core game types: marks, moves, the board, results, RNG, configuration.
//!
//! Nothing in this module performs I/O. The board is the only mutable
//! state; everything else is a small `Copy` value.

pub mod board;
pub mod config;
pub mod mark;
pub mod moves;
pub mod result;
pub mod rng;

pub use board::{Board, MoveList};
pub use config::GameConfig;
pub use mark::{Cell, Mark};
pub use moves::{Move, CELL_COUNT, SIDE};
pub use result::GameResult;
pub use rng::GameRng;
