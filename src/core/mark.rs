//! Marks and cells.
//!
//! ## Mark
//!
//! The two sides, `X` and `O`. X moves first in a standard game.
//! O is the maximizer: an O win scores +1, an X win scores -1.
//!
//! ## Cell
//!
//! One square of the board: empty or holding a mark.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Both marks in turn order.
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Whether this side is the one minimax maximizes.
    ///
    /// ```
    /// use rust_tictactoe::core::Mark;
    ///
    /// assert!(Mark::O.is_maximizer());
    /// assert!(!Mark::X.is_maximizer());
    /// ```
    #[must_use]
    pub const fn is_maximizer(self) -> bool {
        matches!(self, Mark::O)
    }

    /// Terminal score of a game won by this side.
    #[must_use]
    pub const fn win_score(self) -> i32 {
        match self {
            Mark::O => 1,
            Mark::X => -1,
        }
    }

    /// The mark playing for the given side of the search.
    #[must_use]
    pub const fn for_side(maximizing: bool) -> Self {
        if maximizing {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Character used in rendering and position strings.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Mark {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Mark::X),
            "o" => Ok(Mark::O),
            _ => Err(Error::InvalidInput {
                input: s.to_string(),
            }),
        }
    }
}

/// A single square of the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Mark),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The mark in this cell, if any.
    #[must_use]
    pub const fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Character used in rendering; a space for empty cells.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(mark) => mark.symbol(),
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Occupied(mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::X.opponent().opponent(), Mark::X);
    }

    #[test]
    fn test_sign_convention() {
        assert_eq!(Mark::O.win_score(), 1);
        assert_eq!(Mark::X.win_score(), -1);
        assert_eq!(Mark::for_side(true), Mark::O);
        assert_eq!(Mark::for_side(false), Mark::X);
        for mark in Mark::ALL {
            assert_eq!(Mark::for_side(mark.is_maximizer()), mark);
        }
    }

    #[test]
    fn test_parse_mark() {
        assert_eq!("x".parse::<Mark>().unwrap(), Mark::X);
        assert_eq!(" O ".parse::<Mark>().unwrap(), Mark::O);
        assert!("z".parse::<Mark>().is_err());
    }

    #[test]
    fn test_cell() {
        assert!(Cell::default().is_empty());
        assert_eq!(Cell::from(Mark::X).mark(), Some(Mark::X));
        assert_eq!(Cell::Empty.mark(), None);
        assert_eq!(Cell::Empty.symbol(), ' ');
        assert_eq!(Cell::Occupied(Mark::O).symbol(), 'O');
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Cell::Occupied(Mark::X)).unwrap();
        let cell: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, Cell::Occupied(Mark::X));
    }
}
