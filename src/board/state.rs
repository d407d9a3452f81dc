use super::types::{
    castle_bit, swap_castling_colors, Bitboard, Color, Move, Piece, Square, ALL_CASTLING_RIGHTS,
};

/// Bit-packed position: one bitboard per color and piece type, derived
/// occupancy, and the game-state fields of a position record.
///
/// Positions are plain values. Search derives a fresh copy per ply with
/// [`Position::apply_move`] instead of undoing moves in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
    pub(crate) white_to_move: bool,
    pub(crate) castling_rights: u8, // bitmask
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Position {
    /// Standard starting position with all castling rights and fresh counters.
    pub fn new() -> Self {
        let mut position = Position::empty();
        position.initialize();
        position
    }

    /// An empty board, White to move, no castling rights.
    pub fn empty() -> Self {
        Position {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            white_to_move: true,
            castling_rights: 0,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Reset to the standard starting layout and reset every counter.
    pub fn initialize(&mut self) {
        *self = Position::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            self.place(Square(file as u8), Some((Color::White, *piece)));
            self.place(Square(8 + file as u8), Some((Color::White, Piece::Pawn)));
            self.place(Square(48 + file as u8), Some((Color::Black, Piece::Pawn)));
            self.place(Square(56 + file as u8), Some((Color::Black, *piece)));
        }
        self.castling_rights = ALL_CASTLING_RIGHTS;
    }

    /// The piece on `sq`, found by scanning the twelve piece sets.
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        if !self.all_occupied.contains(sq) {
            return None;
        }
        for color in Color::BOTH {
            for piece in Piece::ALL {
                if self.pieces[color.index()][piece.index()].contains(sq) {
                    return Some((color, piece));
                }
            }
        }
        None
    }

    /// Clear `sq` from every set, then put `piece` there. `None` only clears.
    pub fn place(&mut self, sq: Square, piece: Option<(Color, Piece)>) {
        if !sq.is_valid() {
            return;
        }
        for sets in &mut self.pieces {
            for bb in sets.iter_mut() {
                bb.clear(sq);
            }
        }
        self.occupied[0].clear(sq);
        self.occupied[1].clear(sq);
        self.all_occupied.clear(sq);

        if let Some((color, piece)) = piece {
            self.pieces[color.index()][piece.index()].set(sq);
            self.occupied[color.index()].set(sq);
            self.all_occupied.set(sq);
        }
    }

    /// Successor position after `mv`: the moving piece (or its promotion)
    /// replaces whatever stood on the destination, the source is emptied
    /// and the side to move flips.
    ///
    /// Castling moves only the king and en passant leaves the passed pawn on
    /// the board. The en-passant target is cleared and the full-move number
    /// advances after Black's move.
    #[must_use]
    pub fn apply_move(&self, mv: Move) -> Position {
        let mut next = self.clone();
        let moving = self.piece_at(mv.from);
        let placed = match (mv.promotion, moving) {
            (Some(promo), Some((color, _))) => Some((color, promo)),
            (_, moving) => moving,
        };
        next.place(mv.to, placed);
        next.place(mv.from, None);
        next.en_passant_target = None;
        if !next.white_to_move {
            next.fullmove_number = next.fullmove_number.saturating_add(1);
        }
        next.white_to_move = !next.white_to_move;
        next
    }

    /// Same position with the given side to move.
    #[must_use]
    pub fn with_side_to_move(&self, color: Color) -> Position {
        let mut view = self.clone();
        view.white_to_move = color == Color::White;
        view
    }

    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    pub fn all_occupied(&self) -> Bitboard {
        self.all_occupied
    }

    pub fn has_castling_right(&self, color: Color, kingside: bool) -> bool {
        self.castling_rights & castle_bit(color, kingside) != 0
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub(crate) fn is_occupied(&self, sq: Square) -> bool {
        self.all_occupied.contains(sq)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

/// The same position seen from the other side: colors swapped and every
/// square mirrored across the horizontal midline. Castling rights swap
/// colors, the en-passant square is mirrored and the side to move flips.
#[must_use]
pub fn color_mirror(position: &Position) -> Position {
    let mut mirrored = Position::empty();
    for color in Color::BOTH {
        let flipped = color.opponent().index();
        for piece in Piece::ALL {
            mirrored.pieces[flipped][piece.index()] =
                position.pieces[color.index()][piece.index()].flip_vertical();
        }
        mirrored.occupied[flipped] = position.occupied[color.index()].flip_vertical();
    }
    mirrored.all_occupied = position.all_occupied.flip_vertical();
    mirrored.white_to_move = !position.white_to_move;
    mirrored.castling_rights = swap_castling_colors(position.castling_rights);
    mirrored.en_passant_target = position.en_passant_target.map(Square::flip_vertical);
    mirrored.halfmove_clock = position.halfmove_clock;
    mirrored.fullmove_number = position.fullmove_number;
    mirrored
}
