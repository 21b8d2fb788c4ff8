//! Game session: one game from the empty board to a result.
//!
//! The session tracks whose turn it is explicitly. Turn order never depends
//! on the board's win state.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Board, GameResult, Mark, Move};
use crate::error::{Error, Result};

use super::player::Player;

/// A move as recorded in the session history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub mark: Mark,
    pub mv: Move,
}

/// One game in progress.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    to_move: Mark,
    history: Vec<MoveRecord>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Empty board, X to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_position(Board::new(), Mark::X)
    }

    /// Continue from an existing position.
    #[must_use]
    pub fn from_position(board: Board, to_move: Mark) -> Self {
        Self {
            board,
            to_move,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move next.
    #[must_use]
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Moves played in this session, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        self.board.result()
    }

    /// Play `mv` for the side to move.
    pub fn play(&mut self, mv: Move) -> Result<GameResult> {
        if self.result().is_terminal() {
            return Err(Error::GameOver);
        }
        if !self.board.apply_move(mv, self.to_move) {
            return Err(Error::CellOccupied { index: mv.index() });
        }

        debug!(mark = %self.to_move, cell = mv.index(), "move applied");
        self.history.push(MoveRecord {
            mark: self.to_move,
            mv,
        });
        self.to_move = self.to_move.opponent();

        Ok(self.result())
    }

    /// Ask `player` for a move for the side to move and play it.
    pub fn step<P: Player + ?Sized>(&mut self, player: &mut P) -> Result<(Move, GameResult)> {
        if self.result().is_terminal() {
            return Err(Error::GameOver);
        }
        let mv = player.choose_move(&self.board, self.to_move)?;
        let result = self.play(mv)?;
        Ok((mv, result))
    }

    /// Play the game to the end.
    ///
    /// `observer` is called after every move with the session and the move
    /// just played.
    pub fn run<X, O, F>(&mut self, x: &mut X, o: &mut O, mut observer: F) -> Result<GameResult>
    where
        X: Player + ?Sized,
        O: Player + ?Sized,
        F: FnMut(&GameSession, Move) -> Result<()>,
    {
        info!(to_move = %self.to_move, "game started");

        while !self.result().is_terminal() {
            let (mv, _) = match self.to_move {
                Mark::X => self.step(x)?,
                Mark::O => self.step(o)?,
            };
            observer(&*self, mv)?;
        }

        let result = self.result();
        info!(%result, moves = self.history.len(), "game over");
        Ok(result)
    }
}
