//! Players: who picks the next move.
//!
//! The game loop only sees the [`Player`] trait. Two implementations:
//! - [`EnginePlayer`]: minimax, with an optional random opening
//! - [`HumanPlayer`]: reads a cell number from a line-based reader

use std::io::{BufRead, Write};

use tracing::trace;

use crate::core::{Board, GameConfig, GameRng, Mark, Move, CELL_COUNT};
use crate::error::{Error, Result};
use crate::search::{Minimax, SearchConfig, SearchResult};

use super::input::prompt_move;

/// Chooses moves for one side.
pub trait Player {
    /// Pick a legal move for `mark` on a board that is not finished.
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<Move>;
}

/// Engine-backed player.
#[derive(Clone, Debug)]
pub struct EnginePlayer {
    engine: Minimax,
    rng: GameRng,
    random_opening: bool,
    last_search: Option<SearchResult>,
}

impl EnginePlayer {
    /// Create an engine player. The random opening is off.
    pub fn new(config: SearchConfig, rng: GameRng) -> Self {
        Self {
            engine: Minimax::new(config),
            rng,
            random_opening: false,
            last_search: None,
        }
    }

    /// Create an engine player from the session configuration.
    pub fn from_config(game: &GameConfig, search: SearchConfig) -> Self {
        Self::new(search, GameRng::from_seed_option(game.seed)).with_random_opening(game.random_opening)
    }

    /// Pick uniformly among all cells when moving on an empty board.
    pub fn with_random_opening(mut self, enabled: bool) -> Self {
        self.random_opening = enabled;
        self
    }

    /// Seed of the opening RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Result of the most recent search (`None` after a random opening).
    #[must_use]
    pub fn last_search(&self) -> Option<SearchResult> {
        self.last_search
    }

    /// The underlying search context.
    #[must_use]
    pub fn engine(&self) -> &Minimax {
        &self.engine
    }
}

impl Player for EnginePlayer {
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<Move> {
        if board.is_terminal() {
            return Err(Error::GameOver);
        }

        if self.random_opening && board.empty_count() == CELL_COUNT {
            let moves = board.available_moves();
            if let Some(&mv) = self.rng.choose(&moves) {
                trace!(%mark, cell = mv.index(), seed = self.rng.seed(), "random opening");
                self.last_search = None;
                return Ok(mv);
            }
        }

        let result = self.engine.best_move(board, mark);
        self.last_search = Some(result);
        result.best_move.ok_or(Error::GameOver)
    }
}

/// Human player reading cell numbers from `reader`, prompting on `writer`.
pub struct HumanPlayer<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn choose_move(&mut self, board: &Board, _mark: Mark) -> Result<Move> {
        if board.is_terminal() {
            return Err(Error::GameOver);
        }
        prompt_move(&mut self.reader, &mut self.writer, board)
    }
}
