use super::sq;
use crate::board::eval::{mobility, mobility_area, mobility_area_set, mobility_bonus};
use crate::board::{
    evaluate, Color, EvalTerm, Evaluator, MaterialPsqt, Mobility, Phase, Position, Square,
};

#[test]
fn test_start_position_is_balanced() {
    let position = Position::new();
    assert_eq!(evaluate(&position), 0);
    assert_eq!(evaluate(&position.with_side_to_move(Color::Black)), 0);
}

#[test]
fn test_score_is_from_side_to_move() {
    let position = Position::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    let white = evaluate(&position);
    assert!(white > 2000, "white up a queen, got {white}");
    assert_eq!(evaluate(&position.with_side_to_move(Color::Black)), -white);
}

#[test]
fn test_single_piece_values() {
    let knight = Position::from_fen("8/8/8/8/4N3/8/8/K6k w - - 0 1");
    assert_eq!(evaluate(&knight), 781 + 49);

    // The black knight on e5 reads the white table at d4.
    let black_knight = Position::from_fen("8/8/8/4n3/8/8/8/K6k w - - 0 1");
    assert_eq!(evaluate(&black_knight), -(781 + 49));

    let pawn = Position::from_fen("8/8/8/8/4P3/8/8/K6k w - - 0 1");
    assert_eq!(evaluate(&pawn), 124 + 40);
}

#[test]
fn test_kings_contribute_nothing() {
    let position = Position::from_fen("k7/8/8/8/8/8/8/3K4 w - - 0 1");
    assert_eq!(evaluate(&position), 0);
}

#[test]
fn test_evaluator_composition() {
    let position = Position::from_fen("r3k3/8/8/8/3N4/8/8/4K3 w - - 0 1");
    assert_eq!(Evaluator::baseline().evaluate(&position), evaluate(&position));
    assert_eq!(Evaluator::default().evaluate(&position), evaluate(&position));
    assert_eq!(Evaluator::new().evaluate(&position), 0);

    let names: Vec<_> = Evaluator::with_mobility().term_names().collect();
    assert_eq!(names, vec!["material+psqt", "mobility"]);

    let endgame = Evaluator::new().with_term(MaterialPsqt {
        phase: Phase::Endgame,
    });
    assert_ne!(endgame.evaluate(&position), evaluate(&position));
}

#[test]
fn test_knight_mobility_in_open_board() {
    let position = Position::from_fen("7k/8/8/8/3N4/8/8/K7 w - - 0 1");
    assert_eq!(mobility(&position, sq("d4")), 8);
    assert_eq!(mobility_bonus(&position, sq("d4"), Phase::Middlegame), 33);
    assert_eq!(mobility_bonus(&position, sq("d4"), Phase::Endgame), 25);
    // Same answer whoever is to move.
    let black = position.with_side_to_move(Color::Black);
    assert_eq!(mobility(&black, sq("d4")), 8);
}

#[test]
fn test_pawn_guarded_squares_leave_the_area() {
    let position = Position::from_fen("7k/3p4/8/8/3N4/8/8/K7 w - - 0 1");
    assert_eq!(mobility(&position, sq("d4")), 6);
    assert_eq!(mobility_bonus(&position, sq("d4"), Phase::Middlegame), 22);
}

#[test]
fn test_rook_mobility() {
    let position = Position::from_fen("7k/8/8/8/8/8/8/R3K3 w - - 0 1");
    assert_eq!(mobility(&position, sq("a1")), 10);
    assert_eq!(mobility_bonus(&position, sq("a1"), Phase::Middlegame), 41);
}

#[test]
fn test_mobility_of_other_squares_is_zero() {
    let position = Position::new();
    assert_eq!(mobility(&position, sq("e2")), 0);
    assert_eq!(mobility(&position, sq("e1")), 0);
    assert_eq!(mobility(&position, sq("e4")), 0);
    assert_eq!(mobility(&position, Square(64)), 0);
    assert_eq!(mobility_bonus(&position, sq("e4"), Phase::Middlegame), 0);
    assert_eq!(mobility_bonus(&position, sq("e2"), Phase::Middlegame), 0);
    assert_eq!(mobility_bonus(&position, Square(70), Phase::Endgame), 0);
    assert!(!mobility_area(&position, Square(64)));
}

#[test]
fn test_start_position_knights() {
    let position = Position::new();
    // b1 reaches a3 and c3; d2 holds a pawn.
    assert_eq!(mobility(&position, sq("b1")), 2);
    assert_eq!(mobility_bonus(&position, sq("b1"), Phase::Middlegame), -12);
    // The bishop is boxed in by its own pawns.
    assert_eq!(mobility(&position, sq("c1")), 0);
}

#[test]
fn test_mobility_area_for_white() {
    // Black to move, so White's area is measured.
    let position = Position::new().with_side_to_move(Color::Black);
    assert!(!mobility_area(&position, sq("e2")));
    assert!(!mobility_area(&position, sq("d1")));
    assert!(!mobility_area(&position, sq("e1")));
    assert!(!mobility_area(&position, sq("d8")));
    assert!(mobility_area(&position, sq("e4")));
    assert!(mobility_area(&position, sq("a3")));
    // Squares on the black pawns' capture diagonals are out.
    assert!(!mobility_area(&position, sq("d6")));
    assert!(mobility_area(&position, sq("b1")));
}

#[test]
fn test_mobility_area_for_black() {
    let position = Position::new();
    assert!(!mobility_area(&position, sq("e7")));
    assert!(!mobility_area(&position, sq("f3")));
    assert!(mobility_area(&position, sq("e6")));
    assert!(mobility_area(&position, sq("g8")));

    let area = mobility_area_set(&position);
    // White's first two ranks minus king and queen (14), ranks 4 to 6 (24)
    // and Black's back rank minus king and queen (6). Rank 3 is covered by
    // white pawns and rank 7 holds Black's unmoved pawns.
    assert_eq!(area.popcount(), 44);
    assert!(!area.contains(sq("c3")));
}

#[test]
fn test_advanced_pawn_in_area_unless_blocked() {
    let free = Position::from_fen("4k3/8/8/3P4/8/8/8/4K3 b - - 0 1");
    assert!(mobility_area(&free, sq("d5")));

    let blocked = Position::from_fen("4k3/8/3n4/3P4/8/8/8/4K3 b - - 0 1");
    assert!(!mobility_area(&blocked, sq("d5")));
}

#[test]
fn test_pinned_piece_square_leaves_area() {
    let position = Position::from_fen("4r3/8/8/8/8/8/4B3/4K3 b - - 0 1");
    assert!(!mobility_area(&position, sq("e2")));
    assert!(mobility_area(&position, sq("d2")));
}

#[test]
fn test_mobility_term_sign() {
    let position = Position::from_fen("7k/8/8/8/3N4/8/8/K7 w - - 0 1");
    let term = Mobility {
        phase: Phase::Middlegame,
    };
    assert_eq!(term.score(&position), 33);
    assert_eq!(term.score(&position.with_side_to_move(Color::Black)), -33);
    assert_eq!(
        Evaluator::with_mobility().evaluate(&position),
        evaluate(&position) + 33
    );
}

#[test]
fn test_mobility_term_balanced_at_start() {
    let term = Mobility {
        phase: Phase::Middlegame,
    };
    assert_eq!(term.score(&Position::new()), 0);
}
