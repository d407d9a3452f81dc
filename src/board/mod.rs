//! Chess position model, move generation, evaluation and search.
//!
//! Uses bitboards for the position and ray casting for pins and attacks.
//! Moves are pseudo-legal: the mover's king is never checked for safety.
//!
//! # Example
//! ```
//! use chess_analyzer::board::{find_best_move, Position};
//!
//! let position = Position::new();
//! let moves = position.generate_moves();
//! assert_eq!(moves.len(), 20);
//!
//! let result = find_best_move(&position, 2);
//! assert!(result.best_move.is_some());
//! ```

pub mod attacks;
mod error;
pub mod eval;
mod fen;
mod movegen;
mod perft;
pub mod pst;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{MoveParseError, SquareError};
pub use eval::{
    evaluate, mobility, mobility_area, mobility_area_set, mobility_bonus, EvalTerm, Evaluator,
    MaterialPsqt, Mobility,
};
pub use fen::START_FEN;
pub use pst::Phase;
pub use state::{color_mirror, Position};
pub use types::{Bitboard, BitboardIter, Color, Move, MoveList, Piece, Square};

pub use search::{
    find_best_move, find_best_move_with_config, search, SearchConfig, SearchResult, Searcher,
    DEFAULT_DEPTH, INF,
};
