use thiserror::Error;

use crate::chess::piece::PieceKind;
use crate::core::position::Position;

/// Why a move was rejected. Checks run shape first, then path, then the target square, so
/// this is the first precondition the move violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("invalid move direction: {kind} cannot move from {from} to {to}")]
    InvalidDirection {
        kind: PieceKind,
        from: Position,
        to: Position,
    },
    #[error("obstacle on the move path from {from} to {to} at {at}")]
    ObstructedPath {
        from: Position,
        to: Position,
        at: Position,
    },
    #[error("cannot move onto an allied piece at {at}")]
    OccupiedByAlly { at: Position },
}
