//! Mobility analysis.
//!
//! Everything here is measured for the side *not* to move, matching the
//! attack counters: that side's mobility area, and how many squares of it a
//! piece of that side reaches. [`mobility`] and [`mobility_bonus`] set the
//! side to move themselves, so callers can pass any piece's square.

use crate::board::attacks::{
    bishop_xray_attack, blockers_for_king, knight_attack, queen_attack, rook_xray_attack,
};
use crate::board::pst::{mobility_curve, Phase};
use crate::board::state::color_mirror;
use crate::board::types::{Bitboard, Color, Piece, Square};
use crate::board::Position;

/// Whether `sq` counts toward the mobility of the side not to move.
///
/// Excluded: squares holding a king or queen, squares attacked by a pawn of
/// the side to move, squares holding one of the measured side's own pawns
/// that is still on its first three ranks or is blocked, and squares whose
/// piece blocks a pin on its king.
#[must_use]
pub fn mobility_area(position: &Position, sq: Square) -> bool {
    if !sq.is_valid() {
        return false;
    }
    let side = position.side_to_move().opponent();
    let dir = side.pawn_direction();

    let occupant = position.piece_at(sq);
    if matches!(occupant, Some((_, Piece::King | Piece::Queen))) {
        return false;
    }

    let enemy_pawn = Some((side.opponent(), Piece::Pawn));
    let guarded = [-1, 1]
        .into_iter()
        .filter_map(|d_file| sq.offset(dir, d_file))
        .any(|from| position.piece_at(from) == enemy_pawn);
    if guarded {
        return false;
    }

    if occupant == Some((side, Piece::Pawn)) {
        let blocked = sq.offset(dir, 0).is_some_and(|ahead| position.is_occupied(ahead));
        if relative_rank(side, sq) < 3 || blocked {
            return false;
        }
    }

    !blockers_for_king(&color_mirror(position), sq.flip_vertical())
}

/// The mobility area of the side not to move as a square set.
#[must_use]
pub fn mobility_area_set(position: &Position) -> Bitboard {
    let mut area = Bitboard::EMPTY;
    for idx in 0..64u8 {
        if mobility_area(position, Square(idx)) {
            area.set(Square(idx));
        }
    }
    area
}

/// Number of mobility-area squares the knight, bishop, rook or queen on `sq`
/// attacks; 0 for any other occupant.
#[must_use]
pub fn mobility(position: &Position, sq: Square) -> u32 {
    if !sq.is_valid() {
        return 0;
    }
    let Some((color, piece)) = position.piece_at(sq) else {
        return 0;
    };
    if mobility_curve(Phase::Middlegame, piece).is_none() {
        return 0;
    }
    let view = position.with_side_to_move(color.opponent());
    let area = mobility_area_set(&view);
    count_reached(&view, sq, piece, area)
}

/// Table bonus for the mobility of the piece on `sq`, clamped to the end of
/// its curve; 0 for pawns, kings and empty squares.
#[must_use]
pub fn mobility_bonus(position: &Position, sq: Square, phase: Phase) -> i32 {
    if !sq.is_valid() {
        return 0;
    }
    let Some((_, piece)) = position.piece_at(sq) else {
        return 0;
    };
    let Some(curve) = mobility_curve(phase, piece) else {
        return 0;
    };
    bonus_for(curve, mobility(position, sq))
}

/// Sum of mobility bonuses of `color`'s pieces.
pub(crate) fn side_mobility_bonus(position: &Position, color: Color, phase: Phase) -> i32 {
    let view = position.with_side_to_move(color.opponent());
    let area = mobility_area_set(&view);
    let mut total = 0;
    for piece in [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen] {
        let Some(curve) = mobility_curve(phase, piece) else {
            continue;
        };
        for sq in position.pieces(color, piece).iter() {
            total += bonus_for(curve, count_reached(&view, sq, piece, area));
        }
    }
    total
}

fn count_reached(view: &Position, sq: Square, piece: Piece, area: Bitboard) -> u32 {
    let through = Some(sq);
    let reached = area.iter().filter(|&target| match piece {
        Piece::Knight => knight_attack(view, target, through) > 0,
        Piece::Bishop => bishop_xray_attack(view, target, through) > 0,
        Piece::Rook => rook_xray_attack(view, target, through) > 0,
        Piece::Queen => queen_attack(view, target, through) > 0,
        Piece::Pawn | Piece::King => false,
    });
    reached.count() as u32
}

fn bonus_for(curve: &[i32], count: u32) -> i32 {
    let idx = (count as usize).min(curve.len() - 1);
    curve[idx]
}

/// Rank counted from `color`'s own back rank (0-7).
#[inline]
fn relative_rank(color: Color, sq: Square) -> usize {
    match color {
        Color::White => sq.rank(),
        Color::Black => 7 - sq.rank(),
    }
}
