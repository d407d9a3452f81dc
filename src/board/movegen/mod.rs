//! Pseudo-legal move generation.
//!
//! Moves obey piece movement rules only: nothing checks whether the mover's
//! king is left attacked, and castling trusts the rights flags. Moves come
//! out grouped by piece type (pawns, knights, bishops, rooks, queens, king,
//! then castling), each group in ascending source-square order.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::types::{Color, MoveList, Piece, Square};
use super::Position;

use sliders::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};

impl Position {
    /// Every pseudo-legal move for the side to move.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.side_to_move();

        for from in self.pieces(color, Piece::Pawn).iter() {
            self.generate_pawn_moves(from, color, &mut moves);
        }
        for from in self.pieces(color, Piece::Knight).iter() {
            self.generate_knight_moves(from, color, &mut moves);
        }
        for from in self.pieces(color, Piece::Bishop).iter() {
            self.generate_slider_moves(from, color, &BISHOP_DIRECTIONS, &mut moves);
        }
        for from in self.pieces(color, Piece::Rook).iter() {
            self.generate_slider_moves(from, color, &ROOK_DIRECTIONS, &mut moves);
        }
        for from in self.pieces(color, Piece::Queen).iter() {
            self.generate_slider_moves(from, color, &QUEEN_DIRECTIONS, &mut moves);
        }
        for from in self.pieces(color, Piece::King).iter() {
            self.generate_king_moves(from, color, &mut moves);
        }
        self.generate_castling_moves(color, &mut moves);

        moves
    }

    #[inline]
    pub(crate) fn is_enemy_of(&self, sq: Square, color: Color) -> bool {
        self.occupied_by(color.opponent()).contains(sq)
    }
}
