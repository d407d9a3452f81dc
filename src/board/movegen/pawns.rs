use super::super::types::{Color, Move, MoveList, Square, PROMOTION_PIECES};
use super::super::Position;

impl Position {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        if let Some(push) = from.offset(dir, 0) {
            if !self.is_occupied(push) {
                if push.rank() == promotion_rank {
                    push_promotions(from, push, moves);
                } else {
                    moves.push(Move::new(from, push));
                    if from.rank() == color.pawn_start_rank() {
                        if let Some(double) = from.offset(2 * dir, 0) {
                            if !self.is_occupied(double) {
                                moves.push(Move::new(from, double));
                            }
                        }
                    }
                }
            }
        }

        for d_file in [-1, 1] {
            let Some(target) = from.offset(dir, d_file) else {
                continue;
            };
            if self.is_enemy_of(target, color) {
                if target.rank() == promotion_rank {
                    push_promotions(from, target, moves);
                } else {
                    moves.push(Move::new(from, target));
                }
            }
        }

        // En passant is recognised from the recorded target alone.
        if let Some(ep) = self.en_passant_target {
            let adjacent = [-1, 1]
                .into_iter()
                .any(|d_file| from.offset(dir, d_file) == Some(ep));
            if adjacent && !self.is_occupied(ep) {
                moves.push(Move::new(from, ep));
            }
        }
    }
}

fn push_promotions(from: Square, to: Square, moves: &mut MoveList) {
    for piece in PROMOTION_PIECES {
        moves.push(Move::with_promotion(from, to, piece));
    }
}
