//! Tests for board state and the fixed text rendering.

use tictactoe_cli::{Board, Cell, CellOccupied, Mark, Position};

#[test]
fn test_new_board_is_all_empty() {
    let board = Board::new();
    assert!(board.cells().iter().all(|c| *c == Cell::Empty));
}

#[test]
fn test_place_records_mark() {
    let mut board = Board::new();
    board.place(Position::Center, Mark::X).unwrap();
    assert_eq!(board.get(Position::Center), Cell::Occupied(Mark::X));
    assert!(!board.is_empty(Position::Center));
    assert!(board.is_empty(Position::TopLeft));
}

#[test]
fn test_place_refuses_occupied_cell() {
    let mut board = Board::new();
    board.place(Position::Center, Mark::X).unwrap();
    assert_eq!(
        board.place(Position::Center, Mark::O),
        Err(CellOccupied(Position::Center))
    );
    // The original mark survives.
    assert_eq!(board.get(Position::Center), Cell::Occupied(Mark::X));
}

#[test]
fn test_empty_board_renders_cell_numbers() {
    assert_eq!(Board::new().render(), "1 2 3 \n4 5 6 \n7 8 9 \n");
}

#[test]
fn test_render_matches_fixed_layout() {
    let mut board = Board::new();
    board.place(Position::TopLeft, Mark::X).unwrap();
    board.place(Position::TopCenter, Mark::O).unwrap();
    board.place(Position::Center, Mark::O).unwrap();
    board.place(Position::BottomLeft, Mark::X).unwrap();
    assert_eq!(board.render(), "X O 3 \n4 O 6 \nX 8 9 \n");
}

#[test]
fn test_render_has_nine_tokens_and_three_rows() {
    let mut board = Board::new();
    board.place(Position::TopLeft, Mark::X).unwrap();
    board.place(Position::TopCenter, Mark::O).unwrap();
    board.place(Position::Center, Mark::O).unwrap();
    board.place(Position::BottomLeft, Mark::X).unwrap();

    let rendered = board.render();
    assert_eq!(rendered.matches('\n').count(), 3);
    assert_eq!(rendered.matches(' ').count(), 9);
    assert_eq!(rendered.split_whitespace().count(), 9);
}

#[test]
fn test_render_is_idempotent() {
    let mut board = Board::new();
    board.place(Position::Center, Mark::O).unwrap();
    assert_eq!(board.render(), board.render());
}
