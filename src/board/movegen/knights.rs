use super::super::types::{Color, Move, MoveList, Square};
use super::super::Position;

// +17, +15, +10, +6, -17, -15, -10, -6 as (rank, file) steps
const KNIGHT_STEPS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (1, 2),
    (1, -2),
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
];

impl Position {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let own = self.occupied_by(color);
        for (d_rank, d_file) in KNIGHT_STEPS {
            if let Some(to) = from.offset(d_rank, d_file) {
                if !own.contains(to) {
                    moves.push(Move::new(from, to));
                }
            }
        }
    }
}
