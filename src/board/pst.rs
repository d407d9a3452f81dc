//! Evaluation tables: material, piece-square and mobility bonuses.
//!
//! The source tables are stored the compact way they are usually published
//! (four files per rank for mirrored pieces, full ranks for pawns) and
//! expanded once into per-square lookups on first use.

use once_cell::sync::Lazy;

use super::types::Piece;

/// Game phase a table belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Middlegame,
    Endgame,
}

impl Phase {
    #[inline]
    const fn index(self) -> usize {
        match self {
            Phase::Middlegame => 0,
            Phase::Endgame => 1,
        }
    }
}

// Pawn, knight, bishop, rook, queen
const MATERIAL: [[i32; 5]; 2] = [
    [124, 781, 825, 1276, 2538],
    [206, 854, 915, 1380, 2682],
];

// Knight, bishop, rook, queen, king; [rank][min(file, 7 - file)]
#[rustfmt::skip]
const MIRRORED_PSQT: [[[[i32; 4]; 8]; 5]; 2] = [
    [
        [[-175, -92, -74, -73], [-77, -41, -27, -15], [-61, -17, 6, 12], [-35, 8, 40, 49],
         [-34, 13, 44, 51], [-9, 22, 58, 53], [-67, -27, 4, 37], [-201, -83, -56, -26]],
        [[-53, -5, -8, -23], [-15, 8, 19, 4], [-7, 21, -5, 17], [-5, 11, 25, 39],
         [-12, 29, 22, 31], [-16, 6, 1, 11], [-17, -14, 5, 0], [-48, 1, -14, -23]],
        [[-31, -20, -14, -5], [-21, -13, -8, 6], [-25, -11, -1, 3], [-13, -5, -4, -6],
         [-27, -15, -4, 3], [-22, -2, 6, 12], [-2, 12, 16, 18], [-17, -19, -1, 9]],
        [[3, -5, -5, 4], [-3, 5, 8, 12], [-3, 6, 13, 7], [4, 5, 9, 8],
         [0, 14, 12, 5], [-4, 10, 6, 8], [-5, 6, 10, 8], [-2, -2, 1, -2]],
        [[271, 327, 271, 198], [278, 303, 234, 179], [195, 258, 169, 120], [164, 190, 138, 98],
         [154, 179, 105, 70], [123, 145, 81, 31], [88, 120, 65, 33], [59, 89, 45, -1]],
    ],
    [
        [[-96, -65, -49, -21], [-67, -54, -18, 8], [-40, -27, -8, 29], [-35, -2, 13, 28],
         [-45, -16, 9, 39], [-51, -44, -16, 17], [-69, -50, -51, 12], [-100, -88, -56, -17]],
        [[-57, -30, -37, -12], [-37, -13, -17, 1], [-16, -1, -2, 10], [-20, -6, 0, 17],
         [-17, -1, -14, 15], [-30, 6, 4, 6], [-31, -20, -1, 1], [-46, -42, -37, -24]],
        [[-9, -13, -10, -9], [-12, -9, -1, -2], [6, -8, -2, -6], [-6, 1, -9, 7],
         [-5, 8, 7, -6], [6, 1, -7, 10], [4, 5, 20, -5], [18, 0, 19, 13]],
        [[-69, -57, -47, -26], [-55, -31, -22, -4], [-39, -18, -9, 3], [-23, -3, 13, 24],
         [-29, -6, 9, 21], [-38, -18, -12, 1], [-50, -27, -24, -8], [-75, -52, -43, -36]],
        [[1, 45, 85, 76], [53, 100, 133, 135], [88, 130, 169, 175], [103, 156, 172, 172],
         [96, 166, 199, 199], [92, 172, 184, 191], [47, 121, 116, 131], [11, 59, 73, 78]],
    ],
];

// [rank][file]
#[rustfmt::skip]
const PAWN_PSQT: [[[i32; 8]; 8]; 2] = [
    [
        [0, 0, 0, 0, 0, 0, 0, 0],
        [3, 3, 10, 19, 16, 19, 7, -5],
        [-9, -15, 11, 15, 32, 22, 5, -22],
        [-4, -23, 6, 20, 40, 17, 4, -8],
        [13, 0, -13, 1, 11, -2, -13, 5],
        [5, -12, -7, 22, -8, -5, -15, -8],
        [-7, 7, -3, -13, 5, -16, 10, -8],
        [0, 0, 0, 0, 0, 0, 0, 0],
    ],
    [
        [0, 0, 0, 0, 0, 0, 0, 0],
        [-10, -6, 10, 0, 14, 7, -5, -19],
        [-10, -10, -10, 4, 4, 3, -6, -4],
        [6, -2, -8, -4, -13, -12, -10, -9],
        [10, 5, 4, -5, -5, -5, 14, 9],
        [28, 20, 21, 28, 30, 7, 6, 13],
        [0, -11, 12, 21, 25, 19, 4, 7],
        [0, 0, 0, 0, 0, 0, 0, 0],
    ],
];

// Indexed by the number of mobility-area squares a piece reaches.
const KNIGHT_MOB_MG: [i32; 9] = [-62, -53, -12, -4, 3, 13, 22, 28, 33];
const KNIGHT_MOB_EG: [i32; 9] = [-81, -56, -31, -16, 5, 11, 17, 20, 25];
const BISHOP_MOB_MG: [i32; 14] = [-48, -20, 16, 26, 38, 51, 55, 63, 63, 68, 81, 81, 91, 98];
const BISHOP_MOB_EG: [i32; 14] = [-59, -23, -3, 13, 24, 42, 54, 57, 65, 73, 78, 86, 88, 97];
const ROOK_MOB_MG: [i32; 15] = [-60, -20, 2, 3, 3, 11, 22, 31, 40, 40, 41, 48, 57, 57, 62];
const ROOK_MOB_EG: [i32; 15] = [
    -78, -17, 23, 39, 70, 99, 103, 121, 134, 139, 158, 164, 168, 169, 172,
];
#[rustfmt::skip]
const QUEEN_MOB_MG: [i32; 28] = [
    -30, -12, -8, -9, 20, 23, 23, 35, 38, 53, 64, 65, 65, 66, 67, 67, 72, 72, 77, 79, 93, 108,
    108, 108, 110, 114, 114, 116,
];
#[rustfmt::skip]
const QUEEN_MOB_EG: [i32; 28] = [
    -48, -30, -7, 19, 40, 55, 59, 75, 78, 96, 96, 100, 121, 127, 131, 133, 136, 141, 147, 150,
    151, 168, 168, 171, 182, 182, 192, 219,
];

/// Per-square positional values, `[phase][piece][square]`, from White's side.
static PSQT: Lazy<[[[i32; 64]; 6]; 2]> = Lazy::new(|| {
    let mut table = [[[0; 64]; 6]; 2];
    for (phase, per_piece) in table.iter_mut().enumerate() {
        for sq in 0..64 {
            let rank = sq / 8;
            let file = sq % 8;
            per_piece[Piece::Pawn.index()][sq] = PAWN_PSQT[phase][rank][file];
            let mirrored = [
                Piece::Knight,
                Piece::Bishop,
                Piece::Rook,
                Piece::Queen,
                Piece::King,
            ];
            for (slot, piece) in mirrored.into_iter().enumerate() {
                per_piece[piece.index()][sq] = MIRRORED_PSQT[phase][slot][rank][file.min(7 - file)];
            }
        }
    }
    table
});

/// Material value of `piece`; kings carry none.
#[inline]
#[must_use]
pub fn material(phase: Phase, piece: Piece) -> i32 {
    match piece {
        Piece::King => 0,
        _ => MATERIAL[phase.index()][piece.index()],
    }
}

/// Positional value of `piece` on `sq`, read from White's side of the board.
#[inline]
#[must_use]
pub fn psqt(phase: Phase, piece: Piece, sq: usize) -> i32 {
    PSQT[phase.index()][piece.index()][sq]
}

/// Bonus curve for a piece's mobility count; `None` for pawns and kings.
#[must_use]
pub fn mobility_curve(phase: Phase, piece: Piece) -> Option<&'static [i32]> {
    let curve: &'static [i32] = match (piece, phase) {
        (Piece::Knight, Phase::Middlegame) => &KNIGHT_MOB_MG,
        (Piece::Knight, Phase::Endgame) => &KNIGHT_MOB_EG,
        (Piece::Bishop, Phase::Middlegame) => &BISHOP_MOB_MG,
        (Piece::Bishop, Phase::Endgame) => &BISHOP_MOB_EG,
        (Piece::Rook, Phase::Middlegame) => &ROOK_MOB_MG,
        (Piece::Rook, Phase::Endgame) => &ROOK_MOB_EG,
        (Piece::Queen, Phase::Middlegame) => &QUEEN_MOB_MG,
        (Piece::Queen, Phase::Endgame) => &QUEEN_MOB_EG,
        (Piece::Pawn | Piece::King, _) => return None,
    };
    Some(curve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirrored_tables_are_file_symmetric() {
        for piece in [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen, Piece::King] {
            for rank in 0..8 {
                for file in 0..4 {
                    let left = rank * 8 + file;
                    let right = rank * 8 + (7 - file);
                    assert_eq!(
                        psqt(Phase::Middlegame, piece, left),
                        psqt(Phase::Middlegame, piece, right),
                        "{piece:?} rank {rank} file {file}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_table_lookups() {
        assert_eq!(material(Phase::Middlegame, Piece::Queen), 2538);
        assert_eq!(material(Phase::Endgame, Piece::Pawn), 206);
        assert_eq!(material(Phase::Middlegame, Piece::King), 0);
        // Knight on a1 and pawn on e4
        assert_eq!(psqt(Phase::Middlegame, Piece::Knight, 0), -175);
        assert_eq!(psqt(Phase::Middlegame, Piece::Pawn, 28), 40);
    }

    #[test]
    fn test_mobility_curve_lengths() {
        let lens: Vec<usize> = [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen]
            .into_iter()
            .map(|p| mobility_curve(Phase::Middlegame, p).map_or(0, <[i32]>::len))
            .collect();
        assert_eq!(lens, vec![9, 14, 15, 28]);
        assert!(mobility_curve(Phase::Endgame, Piece::Pawn).is_none());
    }
}
