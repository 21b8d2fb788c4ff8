//! Move representation: a cell index in 0..9.
//!
//! Cells are numbered row-major:
//!
//! ```text
//! | 0 | 1 | 2 |
//! | 3 | 4 | 5 |
//! | 6 | 7 | 8 |
//! ```
//!
//! A `Move` can only hold an in-range index, so the board never has to
//! bounds-check. Use [`Move::try_new`] at the input boundary.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Side length of the board.
pub const SIDE: usize = 3;

/// A cell index in `0..9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Move(u8);

impl Move {
    /// Create a move from an index known to be in range.
    ///
    /// Out-of-range indices are a precondition violation and panic in
    /// debug builds.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        debug_assert!((index as usize) < CELL_COUNT, "move index out of range");
        Self(index)
    }

    /// Create a move from an untrusted index.
    ///
    /// ```
    /// use rust_tictactoe::core::Move;
    ///
    /// assert_eq!(Move::try_new(4).unwrap().index(), 4);
    /// assert!(Move::try_new(9).is_err());
    /// ```
    pub fn try_new(index: usize) -> Result<Self> {
        if index < CELL_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(Error::MoveOutOfRange { index })
        }
    }

    /// Create a move from row and column (both 0-based).
    pub fn from_row_col(row: usize, col: usize) -> Result<Self> {
        if row >= SIDE || col >= SIDE {
            return Err(Error::MoveOutOfRange {
                index: row * SIDE + col,
            });
        }
        Self::try_new(row * SIDE + col)
    }

    /// Raw cell index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.index() / SIDE
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.index() % SIDE
    }

    /// On the main diagonal (0, 4, 8).
    #[must_use]
    pub const fn on_main_diagonal(self) -> bool {
        self.row() == self.col()
    }

    /// On the anti-diagonal (2, 4, 6).
    #[must_use]
    pub const fn on_anti_diagonal(self) -> bool {
        self.row() + self.col() == SIDE - 1
    }

    /// Iterate over all nine cells in ascending order.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..CELL_COUNT as u8).map(Move)
    }
}

impl TryFrom<u8> for Move {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::try_new(value as usize)
    }
}

impl From<Move> for u8 {
    fn from(mv: Move) -> Self {
        mv.0
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_col() {
        let mv = Move::new(5);
        assert_eq!(mv.row(), 1);
        assert_eq!(mv.col(), 2);
        assert_eq!(Move::from_row_col(2, 1).unwrap(), Move::new(7));
        assert!(Move::from_row_col(3, 0).is_err());
    }

    #[test]
    fn test_try_new_bounds() {
        assert!(Move::try_new(0).is_ok());
        assert!(Move::try_new(8).is_ok());
        assert!(matches!(
            Move::try_new(9),
            Err(Error::MoveOutOfRange { index: 9 })
        ));
    }

    #[test]
    fn test_diagonals() {
        let main: Vec<_> = Move::all().filter(|m| m.on_main_diagonal()).map(Move::index).collect();
        let anti: Vec<_> = Move::all().filter(|m| m.on_anti_diagonal()).map(Move::index).collect();
        assert_eq!(main, vec![0, 4, 8]);
        assert_eq!(anti, vec![2, 4, 6]);
    }

    #[test]
    fn test_diagonal_cells_are_even() {
        for mv in Move::all() {
            let on_diagonal = mv.on_main_diagonal() || mv.on_anti_diagonal();
            assert_eq!(on_diagonal, mv.index() % 2 == 0);
        }
    }

    #[test]
    fn test_all_ascending() {
        let all: Vec<_> = Move::all().map(Move::index).collect();
        assert_eq!(all, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let json = serde_json::to_string(&Move::new(3)).unwrap();
        assert_eq!(json, "3");
        assert_eq!(serde_json::from_str::<Move>("3").unwrap(), Move::new(3));
        assert!(serde_json::from_str::<Move>("11").is_err());
    }
}
