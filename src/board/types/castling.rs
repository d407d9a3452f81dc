//! Castling-right bits.

use super::piece::Color;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

#[inline]
pub(crate) const fn castle_bit(color: Color, kingside: bool) -> u8 {
    match (color, kingside) {
        (Color::White, true) => CASTLE_WHITE_K,
        (Color::White, false) => CASTLE_WHITE_Q,
        (Color::Black, true) => CASTLE_BLACK_K,
        (Color::Black, false) => CASTLE_BLACK_Q,
    }
}

/// Exchange the white and black halves of a rights mask.
#[inline]
pub(crate) const fn swap_castling_colors(rights: u8) -> u8 {
    ((rights & 0b0011) << 2) | ((rights & 0b1100) >> 2)
}
