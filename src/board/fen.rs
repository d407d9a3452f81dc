//! Position record (FEN) import and export.
//!
//! Import is deliberately lenient: every malformed token is dropped and the
//! field keeps its reset value. Nothing here returns an error.

use log::debug;

use super::types::{
    Color, Piece, Square, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q,
};
use super::Position;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Build a position from a six-field record, degrading silently on bad input.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        let mut position = Position::empty();
        position.import_fen(fen);
        position
    }

    /// Reset all state, then read the record field by field.
    pub fn import_fen(&mut self, fen: &str) {
        *self = Position::empty();

        let mut fields = fen.split_whitespace();
        let placement = fields.next().unwrap_or("");
        let active = fields.next().unwrap_or("w");
        let castling = fields.next().unwrap_or("-");
        let en_passant = fields.next().unwrap_or("-");
        let halfmove = fields.next();
        let fullmove = fields.next();

        self.import_placement(placement);

        self.white_to_move = match active {
            "w" => true,
            "b" => false,
            other => {
                debug!("ignoring side to move '{other}'");
                true
            }
        };

        for c in castling.chars() {
            match c {
                'K' => self.castling_rights |= CASTLE_WHITE_K,
                'Q' => self.castling_rights |= CASTLE_WHITE_Q,
                'k' => self.castling_rights |= CASTLE_BLACK_K,
                'q' => self.castling_rights |= CASTLE_BLACK_Q,
                '-' => {}
                other => debug!("ignoring castling character '{other}'"),
            }
        }

        self.en_passant_target = if en_passant == "-" {
            None
        } else {
            en_passant.parse::<Square>().ok().or_else(|| {
                debug!("ignoring en passant square '{en_passant}'");
                None
            })
        };

        if let Some(field) = halfmove {
            self.halfmove_clock = field.parse().unwrap_or_else(|_| {
                debug!("ignoring halfmove clock '{field}'");
                0
            });
        }
        if let Some(field) = fullmove {
            self.fullmove_number = field.parse().unwrap_or_else(|_| {
                debug!("ignoring fullmove number '{field}'");
                1
            });
        }
    }

    /// Walk the placement field from a8. A '/' drops to the start of the
    /// next rank down; pieces landing off the board are dropped.
    fn import_placement(&mut self, placement: &str) {
        let mut square: isize = 56;
        for c in placement.chars() {
            if c == '/' {
                square -= 16;
                continue;
            }
            if let Some(skip) = c.to_digit(10) {
                square += skip as isize;
                continue;
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            match Piece::from_char(c) {
                Some(piece) if (0..64).contains(&square) => {
                    self.place(Square(square as u8), Some((color, piece)));
                }
                Some(_) => debug!("dropping '{c}' placed off the board"),
                None => debug!("ignoring piece character '{c}'"),
            }
            square += 1;
        }
    }

    /// Render the position as a six-field record.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(Square((rank * 8 + file) as u8)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move { "w" } else { "b" };
        let mut castling = String::new();
        for (bit, c) in [
            (CASTLE_WHITE_K, 'K'),
            (CASTLE_WHITE_Q, 'Q'),
            (CASTLE_BLACK_K, 'k'),
            (CASTLE_BLACK_Q, 'q'),
        ] {
            if self.castling_rights & bit != 0 {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

impl std::str::FromStr for Position {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Position::from_fen(s))
    }
}
