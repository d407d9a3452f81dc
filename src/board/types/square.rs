//! Square type and coordinate helpers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A board square as an index 0-63 (a1=0, b1=1, ..., h8=63).
///
/// The inner index is public so callers can build arbitrary values; the
/// analyzer functions treat anything outside 0-63 as off-board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const C1: Square = Square(2);
    pub const E1: Square = Square(4);
    pub const G1: Square = Square(6);
    pub const C8: Square = Square(58);
    pub const E8: Square = Square(60);
    pub const G8: Square = Square(62);

    /// Create a square from rank and file, `None` when off the board.
    #[inline]
    #[must_use]
    pub const fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Create a square from signed coordinates, `None` when off the board.
    #[inline]
    #[must_use]
    pub const fn from_coords(rank: isize, file: isize) -> Option<Self> {
        if rank >= 0 && rank < 8 && file >= 0 && file < 8 {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < 64
    }

    /// Rank 0-7, where 0 is rank 1.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        (self.0 / 8) as usize
    }

    /// File 0-7, where 0 is file a.
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        (self.0 % 8) as usize
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Step by a rank/file delta, `None` when the step leaves the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, d_rank: isize, d_file: isize) -> Option<Self> {
        Square::from_coords(self.rank() as isize + d_rank, self.file() as isize + d_file)
    }

    /// Mirror across the horizontal midline (a1 <-> a8).
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square(self.0 ^ 56)
    }

    /// Rotate through the board centre (a1 <-> h8), i.e. `63 - index`.
    #[inline]
    #[must_use]
    pub const fn rotate(self) -> Self {
        Square(63 - self.0)
    }

    /// Single-bit mask for this square; empty when off the board.
    #[inline]
    #[must_use]
    pub(crate) const fn bit(self) -> u64 {
        if self.is_valid() {
            1u64 << self.0
        } else {
            0
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() as u8 + b'a') as char, self.rank() + 1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square((rank * 8 + file) as u8))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b'a'..=b'h' => (bytes[0] - b'a') as usize,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => (bytes[1] - b'1') as usize,
            _ => return Err(invalid()),
        };
        Ok(Square((rank * 8 + file) as u8))
    }
}
