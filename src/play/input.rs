//! Reading a human move.
//!
//! Validation happens here, before the board is touched: the index must be
//! a number in 0..9 and the cell must be empty. Bad lines are reported and
//! the prompt repeats.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::core::{Board, Move};
use crate::error::{Error, Result};

/// Parse one line of input as a legal move on `board`.
pub fn parse_move(line: &str, board: &Board) -> Result<Move> {
    let input = line.trim();
    let index: usize = input.parse().map_err(|_| Error::InvalidInput {
        input: input.to_string(),
    })?;

    let mv = Move::try_new(index)?;
    if !board.cell(mv).is_empty() {
        return Err(Error::CellOccupied { index });
    }
    Ok(mv)
}

/// Prompt until a legal move is entered.
///
/// Returns [`Error::InputClosed`] if the reader hits end of input.
pub fn prompt_move<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, board: &Board) -> Result<Move> {
    let mut line = String::new();

    loop {
        write!(writer, "Your move (0-8): ")?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }

        match parse_move(&line, board) {
            Ok(mv) => return Ok(mv),
            Err(err) => {
                debug!(error = %err, "rejected input");
                writeln!(writer, "{err}, try again.")?;
            }
        }
    }
}
