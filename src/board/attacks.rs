//! Ray-cast attack and pin analysis.
//!
//! Attack counters count pieces of the side *not* to move in the position
//! they are given. An attacker pinned to its own king is not counted. All
//! functions are read-only and return 0 for off-board squares.

use super::state::color_mirror;
use super::types::{Color, Piece, Square};
use super::Position;

/// Pin along a rank (the pinning piece is east or west of the king).
pub const PIN_HORIZONTAL: i32 = 1;
/// Pin along the a1-h8 diagonal direction.
pub const PIN_DIAGONAL: i32 = 2;
/// Pin along a file.
pub const PIN_VERTICAL: i32 = 3;
/// Pin along the a8-h1 diagonal direction.
pub const PIN_ANTI_DIAGONAL: i32 = 4;

// (rank delta, file delta, pin code)
const PIN_RAYS: [(isize, isize, i32); 8] = [
    (0, 1, PIN_HORIZONTAL),
    (0, -1, PIN_HORIZONTAL),
    (1, 0, PIN_VERTICAL),
    (-1, 0, PIN_VERTICAL),
    (1, 1, PIN_DIAGONAL),
    (1, -1, PIN_ANTI_DIAGONAL),
    (-1, -1, PIN_DIAGONAL),
    (-1, 1, PIN_ANTI_DIAGONAL),
];

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const DIAGONALS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
const STRAIGHTS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// First occupied square walking from `from` (exclusive) by the given step.
fn first_piece_along(
    position: &Position,
    from: Square,
    d_rank: isize,
    d_file: isize,
) -> Option<(Square, Color, Piece)> {
    let mut current = from;
    while let Some(next) = current.offset(d_rank, d_file) {
        if let Some((color, piece)) = position.piece_at(next) {
            return Some((next, color, piece));
        }
        current = next;
    }
    None
}

fn slides_along(piece: Piece, code: i32) -> bool {
    match code {
        PIN_HORIZONTAL | PIN_VERTICAL => matches!(piece, Piece::Rook | Piece::Queen),
        _ => matches!(piece, Piece::Bishop | Piece::Queen),
    }
}

/// Pin code of the piece on `sq`, signed by its owner (+ White, - Black),
/// or 0 when the square is empty, off-board, or the piece is not pinned.
///
/// A piece is pinned when the first piece in one direction is its own king
/// and the first piece in the opposite direction is an enemy slider that
/// moves along that line.
#[must_use]
pub fn pinned_direction(position: &Position, sq: Square) -> i32 {
    if !sq.is_valid() {
        return 0;
    }
    let Some((color, _)) = position.piece_at(sq) else {
        return 0;
    };

    for (d_rank, d_file, code) in PIN_RAYS {
        let Some((_, king_color, Piece::King)) = first_piece_along(position, sq, d_rank, d_file)
        else {
            continue;
        };
        if king_color != color {
            continue;
        }
        if let Some((_, other, piece)) = first_piece_along(position, sq, -d_rank, -d_file) {
            if other != color && slides_along(piece, code) {
                return code * color.sign();
            }
        }
    }
    0
}

#[inline]
#[must_use]
pub fn is_pinned(position: &Position, sq: Square) -> bool {
    pinned_direction(position, sq) != 0
}

#[inline]
fn attacker(position: &Position) -> Color {
    position.side_to_move().opponent()
}

/// Knights of the side not to move attacking `sq`. With `through`, only the
/// knight standing on that square is considered.
#[must_use]
pub fn knight_attack(position: &Position, sq: Square, through: Option<Square>) -> u32 {
    if !sq.is_valid() {
        return 0;
    }
    let side = attacker(position);
    let mut count = 0;
    for (d_rank, d_file) in KNIGHT_OFFSETS {
        let Some(from) = sq.offset(d_rank, d_file) else {
            continue;
        };
        if through.is_some_and(|s2| s2 != from) {
            continue;
        }
        if position.piece_at(from) == Some((side, Piece::Knight)) && !is_pinned(position, from) {
            count += 1;
        }
    }
    count
}

/// Count sliders of type `slider` along `rays`, looking through queens of
/// the attacking side.
fn xray_attack(
    position: &Position,
    sq: Square,
    through: Option<Square>,
    slider: Piece,
    rays: &[(isize, isize)],
) -> u32 {
    if !sq.is_valid() {
        return 0;
    }
    let side = attacker(position);
    let mut count = 0;
    for &(d_rank, d_file) in rays {
        let mut current = sq;
        while let Some((found, color, piece)) = first_piece_along(position, current, d_rank, d_file)
        {
            if color == side
                && piece == slider
                && through.map_or(true, |s2| s2 == found)
                && !is_pinned(position, found)
            {
                count += 1;
            }
            if color == side && piece == Piece::Queen {
                current = found;
                continue;
            }
            break;
        }
    }
    count
}

/// Bishops of the side not to move attacking `sq`, x-raying through that
/// side's queens. With `through`, only the bishop on that square counts.
#[must_use]
pub fn bishop_xray_attack(position: &Position, sq: Square, through: Option<Square>) -> u32 {
    xray_attack(position, sq, through, Piece::Bishop, &DIAGONALS)
}

/// Rooks of the side not to move attacking `sq`, x-raying through that
/// side's queens. With `through`, only the rook on that square counts.
#[must_use]
pub fn rook_xray_attack(position: &Position, sq: Square, through: Option<Square>) -> u32 {
    xray_attack(position, sq, through, Piece::Rook, &STRAIGHTS)
}

/// Queens of the side not to move with a clear line to `sq`.
#[must_use]
pub fn queen_attack(position: &Position, sq: Square, through: Option<Square>) -> u32 {
    if !sq.is_valid() {
        return 0;
    }
    let side = attacker(position);
    let mut count = 0;
    for (d_rank, d_file) in DIAGONALS.into_iter().chain(STRAIGHTS) {
        if let Some((found, color, Piece::Queen)) = first_piece_along(position, sq, d_rank, d_file)
        {
            if color == side
                && through.map_or(true, |s2| s2 == found)
                && !is_pinned(position, found)
            {
                count += 1;
            }
        }
    }
    count
}

/// Whether the piece on `sq` blocks a pin on its king, judged on the
/// color-mirrored board.
#[must_use]
pub fn blockers_for_king(position: &Position, sq: Square) -> bool {
    if !sq.is_valid() {
        return false;
    }
    pinned_direction(&color_mirror(position), sq.flip_vertical()) != 0
}
