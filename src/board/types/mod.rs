//! Core chess types.
//!
//! This module contains the fundamental types used throughout the analyzer:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - board square as an index 0-63
//! - `Bitboard` - 64-bit square set
//! - `Move` and `MoveList` - move representation
//! - castling-right bits

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use moves::{Move, MoveList};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use castling::{
    castle_bit, swap_castling_colors, ALL_CASTLING_RIGHTS, CASTLE_BLACK_K, CASTLE_BLACK_Q,
    CASTLE_WHITE_K, CASTLE_WHITE_Q,
};
pub(crate) use piece::PROMOTION_PIECES;
