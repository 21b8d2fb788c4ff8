//! Text rendering of the board.

use crate::core::{Board, Move, SIDE};

/// The board as a 3x3 grid of marks.
#[must_use]
pub fn render_board(board: &Board) -> String {
    board.to_string()
}

/// The cell numbering, shown before the first prompt.
///
/// ```
/// use rust_tictactoe::play::render_index_board;
///
/// assert_eq!(render_index_board().lines().next(), Some("| 0 | 1 | 2 |"));
/// ```
#[must_use]
pub fn render_index_board() -> String {
    render_grid(|mv| char::from(b'0' + mv.index() as u8))
}

/// The board with each empty cell showing its number.
#[must_use]
pub fn render_with_hints(board: &Board) -> String {
    render_grid(|mv| {
        let cell = board.cell(mv);
        if cell.is_empty() {
            char::from(b'0' + mv.index() as u8)
        } else {
            cell.symbol()
        }
    })
}

fn render_grid(symbol: impl Fn(Move) -> char) -> String {
    let cells: Vec<char> = Move::all().map(symbol).collect();
    cells
        .chunks(SIDE)
        .map(|row| {
            let inner: Vec<String> = row.iter().map(char::to_string).collect();
            format!("| {} |", inner.join(" | "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
