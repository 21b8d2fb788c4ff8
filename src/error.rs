//! Error types for the crate.
//!
//! Illegal moves at the board level are signalled with a `bool`, not an
//! error. These variants cover the boundary: parsing human input, parsing
//! position strings, and driving a game session.

use thiserror::Error;

/// Main error type.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position {index} is out of bounds (must be 0-8)")]
    MoveOutOfRange { index: usize },

    #[error("invalid move: position {index} is already occupied")]
    CellOccupied { index: usize },

    #[error("game already over")]
    GameOver,

    #[error("could not read a cell number from '{input}'")]
    InvalidInput { input: String },

    #[error("board string has wrong length: expected {expected} cells, got {got}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at position {position}")]
    InvalidCellCharacter { character: char, position: usize },

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::MoveOutOfRange { index: 12 };
        assert_eq!(err.to_string(), "position 12 is out of bounds (must be 0-8)");

        let err = Error::CellOccupied { index: 4 };
        assert_eq!(err.to_string(), "invalid move: position 4 is already occupied");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
