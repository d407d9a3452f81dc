use super::super::types::{Color, Move, MoveList, Square};
use super::super::Position;

// -9, -7, +7, +9
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
// -8, -1, +1, +8
pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];
// -9, -8, -7, -1, +1, +7, +8, +9
pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Position {
    /// Walk each direction until the edge or the first occupied square.
    /// A friendly blocker ends the ray; an enemy one is captured first.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        let own = self.occupied_by(color);
        for &(d_rank, d_file) in directions {
            let mut current = from;
            while let Some(to) = current.offset(d_rank, d_file) {
                if own.contains(to) {
                    break;
                }
                moves.push(Move::new(from, to));
                if self.is_occupied(to) {
                    break;
                }
                current = to;
            }
        }
    }
}
