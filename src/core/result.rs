//! Game outcome derived from a board.

use serde::{Deserialize, Serialize};

use super::mark::Mark;

/// Outcome of a position.
///
/// Always derived from a [`Board`](super::Board); never stored on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Moves remain and nobody has a line.
    Ongoing,
    XWins,
    OWins,
    /// Board full, no line.
    Draw,
}

impl GameResult {
    /// Result for a game won by `mark`.
    #[must_use]
    pub const fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::X => GameResult::XWins,
            Mark::O => GameResult::OWins,
        }
    }

    /// Whether the game is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameResult::Ongoing)
    }

    /// The winning side, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Mark> {
        match self {
            GameResult::XWins => Some(Mark::X),
            GameResult::OWins => Some(Mark::O),
            GameResult::Ongoing | GameResult::Draw => None,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(self, mark: Mark) -> bool {
        self.winner() == Some(mark)
    }

    /// Minimax score of a terminal result (O = +1, X = -1, draw = 0).
    ///
    /// Returns `None` while the game is ongoing.
    #[must_use]
    pub const fn score(self) -> Option<i32> {
        match self {
            GameResult::Ongoing => None,
            GameResult::Draw => Some(0),
            GameResult::XWins => Some(Mark::X.win_score()),
            GameResult::OWins => Some(Mark::O.win_score()),
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Ongoing => write!(f, "in progress"),
            GameResult::XWins => write!(f, "X wins"),
            GameResult::OWins => write!(f, "O wins"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}
