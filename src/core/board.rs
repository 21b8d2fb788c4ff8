//! The 3x3 board.
//!
//! ## Layout
//!
//! Nine cells, row-major, `index = row * 3 + col`.
//!
//! ## Win detection
//!
//! The board caches the winner set by the move that completed a line.
//! Only the just-played cell can have completed a new line, so
//! [`Board::check_winner`] looks at that cell's row, column and, for the
//! even cells, its diagonals. No full-board scan on the hot path.
//!
//! ## Terminal boards
//!
//! Once [`Board::result`] is not `Ongoing`, the board accepts no more moves.
//! Applying one panics in debug builds and is rejected in release builds.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::mark::{Cell, Mark};
use super::moves::{Move, CELL_COUNT, SIDE};
use super::result::GameResult;
use crate::error::{Error, Result};

const MAIN_DIAGONAL: [usize; 3] = [0, 4, 8];
const ANTI_DIAGONAL: [usize; 3] = [2, 4, 6];

/// Every line on the board, used when a position is built from scratch.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    MAIN_DIAGONAL,
    ANTI_DIAGONAL,
];

/// Legal moves, at most nine, kept inline.
pub type MoveList = SmallVec<[Move; CELL_COUNT]>;

/// Tic-Tac-Toe board.
///
/// Small and `Copy`: the search clones it per ply instead of undoing moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
    /// Side whose last move completed a line.
    winner: Option<Mark>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from a literal position.
    ///
    /// The winner is found by scanning every line. Positions where both
    /// sides have a line are unreachable; the first line found decides.
    #[must_use]
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        let winner = LINES.iter().find_map(|line| {
            let mark = cells[line[0]].mark()?;
            line.iter()
                .all(|&i| cells[i] == Cell::Occupied(mark))
                .then_some(mark)
        });
        Self { cells, winner }
    }

    /// Parse a nine-cell position string.
    ///
    /// `X`/`x` and `O`/`o` are marks; `.`, `_` and `-` are empty.
    /// `/` may separate rows and is ignored.
    ///
    /// ```
    /// use rust_tictactoe::core::{Board, GameResult};
    ///
    /// let board = Board::parse("XXX/OO./...").unwrap();
    /// assert_eq!(board.result(), GameResult::XWins);
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut count = 0;

        for (position, character) in input.trim().chars().filter(|&c| c != '/').enumerate() {
            let cell = match character {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '.' | '_' | '-' => Cell::Empty,
                _ => {
                    return Err(Error::InvalidCellCharacter {
                        character,
                        position,
                    })
                }
            };
            if position < CELL_COUNT {
                cells[position] = cell;
            }
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: count,
            });
        }

        Ok(Self::from_cells(cells))
    }

    // === Cells ===

    /// Contents of one cell.
    #[must_use]
    pub fn cell(&self, mv: Move) -> Cell {
        self.cells[mv.index()]
    }

    /// All nine cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Iterate over the three rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(SIDE)
    }

    /// Empty cells in ascending order.
    ///
    /// The order is the search's tie-break order.
    #[must_use]
    pub fn available_moves(&self) -> MoveList {
        Move::all().filter(|&mv| self.cell(mv).is_empty()).collect()
    }

    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        !self.is_terminal() && self.cell(mv).is_empty()
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Moves made so far.
    #[must_use]
    pub fn move_count(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }

    #[must_use]
    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(|c| c.is_empty())
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.has_empty()
    }

    /// Side to move, inferred from piece counts (X moves first).
    ///
    /// Only meaningful for positions reached by alternating play.
    #[must_use]
    pub fn inferred_to_move(&self) -> Mark {
        let x = self.count(Mark::X);
        let o = self.count(Mark::O);
        if x <= o {
            Mark::X
        } else {
            Mark::O
        }
    }

    fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Occupied(mark)).count()
    }

    // === Moves ===

    /// Place `mark` on `mv`.
    ///
    /// Returns `false` without touching the board when the cell is taken.
    /// Records the winner when the move completes a line.
    pub fn apply_move(&mut self, mv: Move, mark: Mark) -> bool {
        debug_assert!(!self.is_terminal(), "move {mv} applied to a finished board");

        if self.is_terminal() || !self.cell(mv).is_empty() {
            return false;
        }

        self.cells[mv.index()] = Cell::Occupied(mark);
        if self.check_winner(mv, mark) {
            self.winner = Some(mark);
        }
        true
    }

    /// Clear a cell set by a matching [`apply_move`](Self::apply_move).
    ///
    /// No legality check: undoing anything other than the latest applied
    /// move leaves the cached winner inconsistent.
    pub fn undo_move(&mut self, mv: Move) {
        self.cells[mv.index()] = Cell::Empty;
        self.winner = None;
    }

    /// Copy of this board with `mark` placed on `mv`.
    ///
    /// Returns `None` for an illegal move.
    #[must_use]
    pub fn with_move(&self, mv: Move, mark: Mark) -> Option<Self> {
        if !self.is_legal(mv) {
            return None;
        }
        let mut next = *self;
        next.apply_move(mv, mark);
        Some(next)
    }

    // === Outcome ===

    /// Whether `mark` on `last_move` completes a line through that cell.
    pub fn check_winner(&self, last_move: Move, mark: Mark) -> bool {
        let target = Cell::Occupied(mark);
        let complete = |line: [usize; 3]| line.iter().all(|&i| self.cells[i] == target);

        let row = last_move.row() * SIDE;
        if complete([row, row + 1, row + 2]) {
            return true;
        }

        let col = last_move.col();
        if complete([col, col + SIDE, col + 2 * SIDE]) {
            return true;
        }

        // Odd cells are never on a diagonal.
        if last_move.index() % 2 == 0 {
            if last_move.on_main_diagonal() && complete(MAIN_DIAGONAL) {
                return true;
            }
            if last_move.on_anti_diagonal() && complete(ANTI_DIAGONAL) {
                return true;
            }
        }

        false
    }

    /// Side that completed a line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        match self.winner {
            Some(mark) => GameResult::won_by(mark),
            None if self.is_full() => GameResult::Draw,
            None => GameResult::Ongoing,
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some() || self.is_full()
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "|")?;
            for cell in row {
                write!(f, " {} |", cell.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::parse(s).unwrap()
    }

    #[test]
    fn test_new_board() {
        let b = Board::new();
        assert_eq!(b.empty_count(), 9);
        assert_eq!(b.move_count(), 0);
        assert_eq!(b.result(), GameResult::Ongoing);
        assert_eq!(b.available_moves().len(), 9);
    }

    #[test]
    fn test_apply_and_reject() {
        let mut b = Board::new();
        assert!(b.apply_move(Move::new(4), Mark::X));
        assert_eq!(b.cell(Move::new(4)), Cell::Occupied(Mark::X));

        let before = b;
        assert!(!b.apply_move(Move::new(4), Mark::O));
        assert_eq!(b, before);
    }

    #[test]
    fn test_available_moves_ascending() {
        let b = board("X.O/.X./O..");
        let moves: Vec<_> = b.available_moves().iter().map(|m| m.index()).collect();
        assert_eq!(moves, vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_undo_clears_winner() {
        let mut b = board("XX./OO./...");
        let before = b;
        assert!(b.apply_move(Move::new(2), Mark::X));
        assert_eq!(b.result(), GameResult::XWins);
        b.undo_move(Move::new(2));
        assert_eq!(b, before);
        assert_eq!(b.result(), GameResult::Ongoing);
    }

    #[test]
    fn test_check_winner_only_through_last_move() {
        let b = board("XXX/OO./...");
        assert!(b.check_winner(Move::new(2), Mark::X));
        // Cell 4 is not on the completed row.
        assert!(!b.check_winner(Move::new(4), Mark::X));
        assert!(!b.check_winner(Move::new(2), Mark::O));
    }

    #[test]
    fn test_corner_does_not_check_other_diagonal() {
        // Anti-diagonal is complete but cell 0 is not on it.
        let b = board("O.X/.X./X..");
        assert!(!b.check_winner(Move::new(0), Mark::X));
        assert!(b.check_winner(Move::new(6), Mark::X));
    }

    #[test]
    fn test_from_cells_finds_winner() {
        assert_eq!(board("O../O../OXX").winner(), Some(Mark::O));
        assert_eq!(board("XO./OX./..X").winner(), Some(Mark::X));
        assert_eq!(board("XO./.../...").winner(), None);
    }

    #[test]
    fn test_with_move_copies() {
        let b = Board::new();
        let next = b.with_move(Move::new(0), Mark::X).unwrap();
        assert!(b.cell(Move::new(0)).is_empty());
        assert_eq!(next.cell(Move::new(0)), Cell::Occupied(Mark::X));
        assert!(next.with_move(Move::new(0), Mark::O).is_none());
    }

    #[test]
    fn test_with_move_rejects_finished_board() {
        let b = board("XXX/OO./...");
        assert!(b.with_move(Move::new(8), Mark::O).is_none());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "finished board")]
    fn test_apply_on_finished_board_panics_in_debug() {
        let mut b = board("XXX/OO./...");
        b.apply_move(Move::new(8), Mark::O);
    }

    #[test]
    fn test_inferred_to_move() {
        assert_eq!(Board::new().inferred_to_move(), Mark::X);
        assert_eq!(board("X../.../...").inferred_to_move(), Mark::O);
        assert_eq!(board("X../.O./...").inferred_to_move(), Mark::X);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Board::parse("XO"),
            Err(Error::InvalidBoardLength { expected: 9, got: 2 })
        ));
        assert!(matches!(
            Board::parse("XOZ......"),
            Err(Error::InvalidCellCharacter { character: 'Z', position: 2 })
        ));
        assert!(matches!(
            Board::parse(".........."),
            Err(Error::InvalidBoardLength { got: 10, .. })
        ));
    }

    #[test]
    fn test_display() {
        let b = board("XO./.X./..O");
        assert_eq!(b.to_string(), "| X | O |   |\n|   | X |   |\n|   |   | O |");
    }

    #[test]
    fn test_serialization() {
        let b = board("XO./.X./..O");
        let json = serde_json::to_string(&b).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(b, restored);
    }
}
