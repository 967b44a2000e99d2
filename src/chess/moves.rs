//! Pieces and the single-move legality check.
//!
//! [`Piece::move_to`] is a pure function of the piece, the target square and an occupancy
//! snapshot. On success it returns the successor piece; the caller swaps it into its own
//! board. The only state change besides the square is the pawn's loss of its double step.

use std::fmt;

use tracing::{debug, trace};

use crate::chess::board::OccupancyLike;
use crate::chess::error::MoveError;
use crate::chess::piece::{Occupant, PieceKind, Team};
use crate::chess::policy::{MovePolicy, Shape};
use crate::core::position::Position;

/// Per-kind movement state. Pawns are split by whether the double step is still available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceState {
    NotMovedPawn,
    MovedPawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceState {
    /// The state a freshly placed piece of `kind` starts in.
    pub fn unmoved(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => PieceState::NotMovedPawn,
            PieceKind::Rook => PieceState::Rook,
            PieceKind::Knight => PieceState::Knight,
            PieceKind::Bishop => PieceState::Bishop,
            PieceKind::Queen => PieceState::Queen,
            PieceKind::King => PieceState::King,
        }
    }

    pub fn kind(self) -> PieceKind {
        use PieceState::*;
        match self {
            NotMovedPawn | MovedPawn => PieceKind::Pawn,
            Rook => PieceKind::Rook,
            Knight => PieceKind::Knight,
            Bishop => PieceKind::Bishop,
            Queen => PieceKind::Queen,
            King => PieceKind::King,
        }
    }

    pub fn policy(self, team: Team) -> MovePolicy {
        use PieceState::*;
        match self {
            NotMovedPawn => MovePolicy::Pawn {
                team,
                double_step: true,
            },
            MovedPawn => MovePolicy::Pawn {
                team,
                double_step: false,
            },
            Rook => MovePolicy::Rook,
            Knight => MovePolicy::Knight,
            Bishop => MovePolicy::Bishop,
            Queen => MovePolicy::Queen,
            King => MovePolicy::King,
        }
    }

    /// State after any successful move.
    #[inline]
    fn after_move(self) -> Self {
        match self {
            PieceState::NotMovedPawn => PieceState::MovedPawn,
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    team: Team,
    position: Position,
    state: PieceState,
}

impl Piece {
    pub const fn new(state: PieceState, team: Team, position: Position) -> Self {
        Self {
            team,
            position,
            state,
        }
    }

    /// An unmoved pawn, which still has its double step.
    pub const fn pawn(team: Team, position: Position) -> Self {
        Self::new(PieceState::NotMovedPawn, team, position)
    }

    pub const fn moved_pawn(team: Team, position: Position) -> Self {
        Self::new(PieceState::MovedPawn, team, position)
    }

    /// A pawn for board setup: unmoved iff it stands on its team's home rank.
    pub fn pawn_at(team: Team, position: Position) -> Self {
        if position.rank() == team.pawn_home_rank() {
            Self::pawn(team, position)
        } else {
            Self::moved_pawn(team, position)
        }
    }

    pub const fn rook(team: Team, position: Position) -> Self {
        Self::new(PieceState::Rook, team, position)
    }

    pub const fn knight(team: Team, position: Position) -> Self {
        Self::new(PieceState::Knight, team, position)
    }

    pub const fn bishop(team: Team, position: Position) -> Self {
        Self::new(PieceState::Bishop, team, position)
    }

    pub const fn queen(team: Team, position: Position) -> Self {
        Self::new(PieceState::Queen, team, position)
    }

    pub const fn king(team: Team, position: Position) -> Self {
        Self::new(PieceState::King, team, position)
    }

    #[inline]
    pub fn team(&self) -> Team {
        self.team
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn state(&self) -> PieceState {
        self.state
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.state.kind()
    }

    #[inline]
    pub fn policy(&self) -> MovePolicy {
        self.state.policy(self.team)
    }

    /// The descriptor a board snapshot holds for this piece.
    #[inline]
    pub fn occupant(&self) -> Occupant {
        Occupant::new(self.kind(), self.team)
    }

    /// Move to `target` on `board`, returning the piece as it stands afterwards.
    ///
    /// The checks run in a fixed order and the first failure is reported:
    /// 1. the displacement must be a shape this piece can make ([`MoveError::InvalidDirection`]),
    ///    even if an enemy sits on `target`;
    /// 2. every square strictly between must be empty ([`MoveError::ObstructedPath`]);
    /// 3. the target must suit the shape. Allies block with [`MoveError::OccupiedByAlly`],
    ///    except for pawns, which report any blocked advance or ally as an obstruction and
    ///    may only move diagonally onto an enemy.
    pub fn move_to<B>(&self, target: Position, board: &B) -> Result<Piece, MoveError>
    where
        B: OccupancyLike + ?Sized,
    {
        let result = self.check_move(target, board);
        match &result {
            Ok(next) => debug!(
                piece = %self,
                to = %target,
                capture = board.is_occupied(target),
                next = ?next.state,
                "move accepted"
            ),
            Err(err) => trace!(piece = %self, to = %target, %err, "move rejected"),
        }
        result
    }

    fn check_move<B>(&self, target: Position, board: &B) -> Result<Piece, MoveError>
    where
        B: OccupancyLike + ?Sized,
    {
        let from = self.position;
        let shape = self
            .policy()
            .shape(from, target)
            .ok_or(MoveError::InvalidDirection {
                kind: self.kind(),
                from,
                to: target,
            })?;

        if let Some(at) = shape.path(from).into_iter().find(|&sq| board.is_occupied(sq)) {
            return Err(MoveError::ObstructedPath {
                from,
                to: target,
                at,
            });
        }

        self.check_target(shape, target, board.occupant(target))?;

        Ok(Piece {
            team: self.team,
            position: target,
            state: self.state.after_move(),
        })
    }

    fn check_target(
        &self,
        shape: Shape,
        target: Position,
        occupant: Option<Occupant>,
    ) -> Result<(), MoveError> {
        let from = self.position;
        let obstructed = MoveError::ObstructedPath {
            from,
            to: target,
            at: target,
        };

        match occupant {
            None if shape.may_land_empty() => Ok(()),
            // No en passant: a diagonal pawn move needs something to take.
            None => Err(MoveError::InvalidDirection {
                kind: self.kind(),
                from,
                to: target,
            }),
            // Straight pawn advances never capture.
            Some(_) if !shape.may_capture() => Err(obstructed),
            Some(o) if o.team == self.team.other() => Ok(()),
            Some(_) if shape.is_pawn_shape() => Err(obstructed),
            Some(_) => Err(MoveError::OccupiedByAlly { at: target }),
        }
    }

    /// Every square this piece may move to on `board`, in board order.
    pub fn legal_targets<B>(&self, board: &B) -> Vec<Position>
    where
        B: OccupancyLike + ?Sized,
    {
        Position::all()
            .filter(|&to| self.check_move(to, board).is_ok())
            .collect()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at {}", self.team, self.kind(), self.position)
    }
}
