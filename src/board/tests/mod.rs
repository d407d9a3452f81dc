//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `position.rs` - Placement, record import/export, move application
//! - `movegen.rs` - Pseudo-legal move generation per piece type
//! - `attacks.rs` - Pin detection and attack counters
//! - `eval.rs` - Material, piece-square and mobility scoring
//! - `search.rs` - Negamax / alpha-beta behaviour and perft
//! - `proptest.rs` - Property-based tests

mod attacks;
mod eval;

use super::types::Bitboard;
use super::{Color, Piece, Position, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

/// Check the derived occupancy sets against the twelve piece sets.
pub(super) fn occupancy_consistent(position: &Position) -> bool {
    let mut seen = Bitboard::EMPTY;
    for color in Color::BOTH {
        let mut union = Bitboard::EMPTY;
        for piece in Piece::ALL {
            let bb = position.pieces(color, piece);
            if !(bb & seen).is_empty() {
                return false;
            }
            seen = seen | bb;
            union = union | bb;
        }
        if union != position.occupied_by(color) {
            return false;
        }
    }
    let white = position.occupied_by(Color::White);
    let black = position.occupied_by(Color::Black);
    (white & black).is_empty() && (white | black) == position.all_occupied()
}
