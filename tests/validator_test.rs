//! Tests for raw input validation.

use tictactoe_cli::{Board, Mark, Position, RejectReason, Verdict, validate};

#[test]
fn test_accepts_every_digit_on_empty_board() {
    let board = Board::new();
    for number in 1..=9u8 {
        let input = number.to_string();
        assert_eq!(
            validate(Some(&input), &board),
            Verdict::Valid(Position::from_number(number).unwrap()),
            "input {input:?} should be a valid move"
        );
    }
}

#[test]
fn test_rejects_unrecognized_input() {
    let board = Board::new();
    for input in ["e", "0", "10", "", "5x", " 5", "q2", "ten"] {
        assert_eq!(
            validate(Some(input), &board),
            Verdict::Invalid(RejectReason::NotACell),
            "input {input:?} should be rejected"
        );
    }
}

#[test]
fn test_rejects_absent_input() {
    let board = Board::new();
    assert_eq!(
        validate(None, &board),
        Verdict::Invalid(RejectReason::NotACell)
    );
}

#[test]
fn test_rejects_occupied_cell() {
    let mut board = Board::new();
    board.place(Position::TopLeft, Mark::X).unwrap();
    assert_eq!(
        validate(Some("1"), &board),
        Verdict::Invalid(RejectReason::CellTaken)
    );
    assert_eq!(
        validate(Some("2"), &board),
        Verdict::Valid(Position::TopCenter)
    );
}

#[test]
fn test_quit_matches_q_case_insensitively() {
    let board = Board::new();
    assert_eq!(validate(Some("q"), &board), Verdict::Quit);
    assert_eq!(validate(Some("Q"), &board), Verdict::Quit);
    // Only the bare letter quits.
    assert_eq!(
        validate(Some(" q"), &board),
        Verdict::Invalid(RejectReason::NotACell)
    );
    assert_eq!(
        validate(Some("qq"), &board),
        Verdict::Invalid(RejectReason::NotACell)
    );
}
