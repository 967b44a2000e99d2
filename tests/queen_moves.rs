use piece_moves::chess::board::BoardState;
use piece_moves::chess::error::MoveError;
use piece_moves::chess::moves::{Piece, PieceState};
use piece_moves::chess::piece::{Occupant, PieceKind, Team};
use piece_moves::core::position::Position;

const WHITE_QUEEN: Occupant = Occupant::new(PieceKind::Queen, Team::White);
const BLACK_QUEEN: Occupant = Occupant::new(PieceKind::Queen, Team::Black);

/// One square per queen direction from C4.
const LINE_TARGETS: [&str; 8] = ["A2", "A4", "A6", "C6", "E6", "E4", "E2", "C2"];

/// (target, first square on the way) pairs from C4.
const BLOCKED_LINES: [(&str, &str); 8] = [
    ("A2", "B3"),
    ("A4", "B4"),
    ("A6", "B5"),
    ("C6", "C5"),
    ("E6", "D5"),
    ("E4", "D4"),
    ("E2", "D3"),
    ("C2", "C3"),
];

const OFF_LINE_TARGETS: [&str; 5] = ["A1", "A3", "A5", "B2", "E5"];

fn sq(label: &str) -> Position {
    label.parse().unwrap()
}

fn white_queen() -> Piece {
    Piece::queen(Team::White, sq("C4"))
}

fn board_with(label: &str, occupant: Occupant) -> BoardState {
    BoardState::new().with(sq(label), occupant)
}

#[test]
fn moves_along_empty_lines() {
    let board = BoardState::new();
    for target in LINE_TARGETS {
        let next = white_queen().move_to(sq(target), &board).unwrap();
        assert_eq!(next.state(), PieceState::Queen);
        assert_eq!(next.position(), sq(target));
        assert_eq!(next.team(), Team::White);
    }
}

#[test]
fn cannot_land_on_an_ally() {
    for target in LINE_TARGETS {
        let board = board_with(target, WHITE_QUEEN);
        let err = white_queen().move_to(sq(target), &board).unwrap_err();
        assert_eq!(err, MoveError::OccupiedByAlly { at: sq(target) });
        assert!(err.to_string().contains("cannot move onto an allied piece"));
    }
}

#[test]
fn ally_on_the_path_obstructs() {
    for (target, path) in BLOCKED_LINES {
        let board = board_with(path, WHITE_QUEEN);
        let err = white_queen().move_to(sq(target), &board).unwrap_err();
        assert_eq!(
            err,
            MoveError::ObstructedPath {
                from: sq("C4"),
                to: sq(target),
                at: sq(path),
            }
        );
        assert!(err.to_string().contains("obstacle on the move path"));
    }
}

#[test]
fn enemy_on_the_path_obstructs() {
    for (target, path) in BLOCKED_LINES {
        let board = board_with(path, BLACK_QUEEN);
        let err = white_queen().move_to(sq(target), &board).unwrap_err();
        assert!(matches!(err, MoveError::ObstructedPath { .. }), "{target}: {err}");
    }
}

#[test]
fn captures_an_enemy_on_the_target() {
    for target in LINE_TARGETS {
        let board = board_with(target, BLACK_QUEEN);
        let next = white_queen().move_to(sq(target), &board).unwrap();
        assert_eq!(next.kind(), PieceKind::Queen);
        assert_eq!(next.position(), sq(target));
    }
}

#[test]
fn off_line_targets_are_invalid_directions() {
    let board = BoardState::new();
    for target in OFF_LINE_TARGETS {
        let err = white_queen().move_to(sq(target), &board).unwrap_err();
        assert!(matches!(err, MoveError::InvalidDirection { .. }), "{target}: {err}");
        assert!(err.to_string().contains("invalid move direction"));
    }
}

#[test]
fn direction_is_checked_before_the_enemy_on_the_target() {
    for target in OFF_LINE_TARGETS {
        let board = board_with(target, BLACK_QUEEN);
        let err = white_queen().move_to(sq(target), &board).unwrap_err();
        assert!(matches!(err, MoveError::InvalidDirection { .. }), "{target}: {err}");
    }
}

#[test]
fn diagonal_through_d5() {
    let queen = white_queen();

    let board = board_with("D5", WHITE_QUEEN);
    assert!(matches!(
        queen.move_to(sq("E6"), &board),
        Err(MoveError::ObstructedPath { .. })
    ));

    let board = board_with("D5", BLACK_QUEEN);
    assert!(matches!(
        queen.move_to(sq("E6"), &board),
        Err(MoveError::ObstructedPath { .. })
    ));

    let board = board_with("E6", BLACK_QUEEN);
    assert_eq!(
        queen.move_to(sq("E6"), &board),
        Ok(Piece::queen(Team::White, sq("E6")))
    );
}
