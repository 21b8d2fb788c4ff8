//! Console glue around the core: rendering, input, players, the game loop.
//!
//! Everything here reads or drives the board through its public API.
//! I/O is passed in as `BufRead`/`Write` so the loop can be tested.

pub mod input;
pub mod player;
pub mod render;
pub mod session;

pub use input::{parse_move, prompt_move};
pub use player::{EnginePlayer, HumanPlayer, Player};
pub use render::{render_board, render_index_board, render_with_hints};
pub use session::{GameSession, MoveRecord};
