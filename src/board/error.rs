//! Error types for square and move notation.
//!
//! Position import has no error type: malformed record fields are dropped
//! and the affected state keeps its default.

use std::fmt;

/// Failure to read a move in coordinate notation (`e2e4`, `a7a8q`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Not 4 or 5 characters long
    InvalidLength { len: usize },
    /// One of the two square names is not on the board
    InvalidSquare { notation: String },
    /// Fifth character is not q, r, b or n
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "coordinate move needs 4 or 5 characters, got {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "bad square in move '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "promotion must be q, r, b or n, got '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Failure to build a square from coordinates or a name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank index past 7
    RankOutOfBounds { rank: usize },
    /// File index past 7
    FileOutOfBounds { file: usize },
    /// Not a file letter a-h followed by a rank digit 1-8
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "rank index {rank} is off the board")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "file index {file} is off the board")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "'{notation}' is not a square name")
            }
        }
    }
}

impl std::error::Error for SquareError {}
