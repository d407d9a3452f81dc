use super::sq;
use crate::board::attacks::{
    bishop_xray_attack, blockers_for_king, is_pinned, knight_attack, pinned_direction,
    queen_attack, rook_xray_attack, PIN_ANTI_DIAGONAL, PIN_DIAGONAL, PIN_HORIZONTAL, PIN_VERTICAL,
};
use crate::board::{color_mirror, Move, Position, Square};

#[test]
fn test_vertical_pin_on_own_king() {
    let position = Position::from_fen("4r3/8/8/8/8/8/4B3/4K3 w - - 0 1");
    assert_eq!(pinned_direction(&position, sq("e2")), PIN_VERTICAL);
    assert!(is_pinned(&position, sq("e2")));
    assert!(!is_pinned(&position, sq("e1")));
    assert!(!is_pinned(&position, sq("e8")));
}

#[test]
fn test_pin_survives_unrelated_move() {
    let position = Position::from_fen("4r3/8/8/8/8/8/4B3/1N2K3 w - - 0 1");
    let after = position.apply_move(Move::new(sq("b1"), sq("c3")));
    assert_eq!(pinned_direction(&after, sq("e2")), PIN_VERTICAL);
}

#[test]
fn test_second_blocker_breaks_pin() {
    let position = Position::from_fen("4r3/8/8/8/4P3/8/4B3/4K3 w - - 0 1");
    assert_eq!(pinned_direction(&position, sq("e2")), 0);
    assert_eq!(pinned_direction(&position, sq("e4")), 0);
}

#[test]
fn test_pinner_must_move_along_the_line() {
    let bishop = Position::from_fen("8/8/8/8/8/2b5/3N4/4K3 w - - 0 1");
    assert_eq!(pinned_direction(&bishop, sq("d2")), PIN_ANTI_DIAGONAL);

    let rook = Position::from_fen("8/8/8/8/8/2r5/3N4/4K3 w - - 0 1");
    assert_eq!(pinned_direction(&rook, sq("d2")), 0);

    let rank = Position::from_fen("8/8/8/8/8/8/8/1q1NK3 w - - 0 1");
    assert_eq!(pinned_direction(&rank, sq("d1")), PIN_HORIZONTAL);

    let diagonal = Position::from_fen("8/8/8/8/7b/8/5N2/4K3 w - - 0 1");
    assert_eq!(pinned_direction(&diagonal, sq("f2")), PIN_DIAGONAL);
}

#[test]
fn test_black_pin_is_negative() {
    let position = Position::from_fen("4k3/4n3/8/8/8/8/8/4R2K b - - 0 1");
    assert_eq!(pinned_direction(&position, sq("e7")), -PIN_VERTICAL);
    // The code does not depend on who is to move.
    let white = position.with_side_to_move(crate::board::Color::White);
    assert_eq!(pinned_direction(&white, sq("e7")), -PIN_VERTICAL);
}

#[test]
fn test_pin_of_mirrored_position() {
    let position = Position::from_fen("4r3/8/8/8/8/8/4B3/4K3 w - - 0 1");
    let mirrored = color_mirror(&position);
    assert_eq!(pinned_direction(&mirrored, sq("e7")), -PIN_VERTICAL);
    assert!(blockers_for_king(&position, sq("e2")));
    assert!(!blockers_for_king(&position, sq("e1")));
}

#[test]
fn test_empty_and_off_board_squares() {
    let position = Position::new();
    assert_eq!(pinned_direction(&position, sq("e4")), 0);
    assert_eq!(pinned_direction(&position, Square(64)), 0);
    assert_eq!(knight_attack(&position, Square(99), None), 0);
    assert_eq!(bishop_xray_attack(&position, Square(64), None), 0);
    assert_eq!(rook_xray_attack(&position, Square(200), None), 0);
    assert_eq!(queen_attack(&position, Square(64), None), 0);
    assert!(!blockers_for_king(&position, Square(64)));
}

#[test]
fn test_knight_attack_counts_side_not_to_move() {
    let position = Position::from_fen("8/8/8/8/8/3n1n2/8/4K2k w - - 0 1");
    assert_eq!(knight_attack(&position, sq("e1"), None), 2);
    assert_eq!(knight_attack(&position, sq("e1"), Some(sq("d3"))), 1);
    assert_eq!(knight_attack(&position, sq("e1"), Some(sq("a1"))), 0);

    let black = position.with_side_to_move(crate::board::Color::Black);
    assert_eq!(knight_attack(&black, sq("e1"), None), 0);
}

#[test]
fn test_pinned_knight_does_not_attack() {
    let pinned = Position::from_fen("4k3/4n3/8/8/8/8/8/4R2K w - - 0 1");
    assert_eq!(knight_attack(&pinned, sq("d5"), None), 0);

    let free = Position::from_fen("4k3/4n3/8/8/8/8/8/R6K w - - 0 1");
    assert_eq!(knight_attack(&free, sq("d5"), None), 1);
}

#[test]
fn test_bishop_xray_through_own_queen() {
    let position = Position::from_fen("b6k/8/8/3q4/8/8/8/K7 w - - 0 1");
    assert_eq!(bishop_xray_attack(&position, sq("f3"), None), 1);
    assert_eq!(bishop_xray_attack(&position, sq("f3"), Some(sq("a8"))), 1);
    assert_eq!(bishop_xray_attack(&position, sq("f3"), Some(sq("d5"))), 0);
    assert_eq!(queen_attack(&position, sq("f3"), None), 1);

    let blocked = Position::from_fen("b6k/8/8/3N4/8/8/8/K7 w - - 0 1");
    assert_eq!(bishop_xray_attack(&blocked, sq("f3"), None), 0);
}

#[test]
fn test_rook_xray_through_own_queen() {
    let position = Position::from_fen("k7/8/8/8/r2q3P/8/8/7K w - - 0 1");
    assert_eq!(rook_xray_attack(&position, sq("g4"), None), 1);
    assert_eq!(rook_xray_attack(&position, sq("g4"), Some(sq("d4"))), 0);
    assert_eq!(queen_attack(&position, sq("g4"), None), 1);
    // The white pawn ends the ray from the other side.
    assert_eq!(rook_xray_attack(&position, sq("c4"), None), 1);
}

#[test]
fn test_queen_attack_needs_clear_line() {
    let position = Position::from_fen("k7/8/8/8/3q4/8/5P2/K7 w - - 0 1");
    assert_eq!(queen_attack(&position, sq("f2"), None), 1);
    assert_eq!(queen_attack(&position, sq("g1"), None), 0);
}
