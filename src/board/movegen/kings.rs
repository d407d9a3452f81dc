use super::super::types::{Color, Move, MoveList, Piece, Square};
use super::super::Position;
use super::QUEEN_DIRECTIONS;

impl Position {
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let own = self.occupied_by(color);
        for (d_rank, d_file) in QUEEN_DIRECTIONS {
            if let Some(to) = from.offset(d_rank, d_file) {
                if !own.contains(to) {
                    moves.push(Move::new(from, to));
                }
            }
        }
    }

    /// King-side then queen-side castling for `color`. Emitted when the
    /// right is held, the king stands on its home square and the squares
    /// between king and rook are empty. Check and attacked transit squares
    /// are not considered.
    pub(crate) fn generate_castling_moves(&self, color: Color, moves: &mut MoveList) {
        let (king_home, kingside_to, queenside_to) = match color {
            Color::White => (Square::E1, Square::G1, Square::C1),
            Color::Black => (Square::E8, Square::G8, Square::C8),
        };
        if self.piece_at(king_home) != Some((color, Piece::King)) {
            return;
        }
        let back_rank = king_home.rank();
        let empty = |files: &[usize]| {
            files
                .iter()
                .filter_map(|&file| Square::new(back_rank, file))
                .all(|sq| !self.is_occupied(sq))
        };

        if self.has_castling_right(color, true) && empty(&[5, 6]) {
            moves.push(Move::new(king_home, kingside_to));
        }
        if self.has_castling_right(color, false) && empty(&[1, 2, 3]) {
            moves.push(Move::new(king_home, queenside_to));
        }
    }
}
