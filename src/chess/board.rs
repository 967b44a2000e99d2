use rustc_hash::FxHashMap;

use crate::chess::moves::Piece;
use crate::chess::piece::Occupant;
use crate::core::position::Position;

/// Read access to board occupancy for one move query.
///
/// Implementations must answer consistently for the duration of a
/// [`Piece::move_to`] call.
pub trait OccupancyLike {
    fn occupant(&self, pos: Position) -> Option<Occupant>;

    #[inline]
    fn is_occupied(&self, pos: Position) -> bool {
        self.occupant(pos).is_some()
    }
}

/// An immutable occupancy snapshot. Squares without an entry are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    squares: FxHashMap<Position, Occupant>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_occupants(occupants: impl IntoIterator<Item = (Position, Occupant)>) -> Self {
        occupants.into_iter().collect()
    }

    /// Snapshot of where `pieces` stand. A later piece on the same square wins.
    pub fn from_pieces(pieces: &[Piece]) -> Self {
        pieces.iter().map(|p| (p.position(), p.occupant())).collect()
    }

    pub fn with(mut self, pos: Position, occupant: Occupant) -> Self {
        self.squares.insert(pos, occupant);
        self
    }

    #[inline]
    pub fn occupant(&self, pos: Position) -> Option<Occupant> {
        self.squares.get(&pos).copied()
    }

    #[inline]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.squares.contains_key(&pos)
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Occupied squares in board order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Occupant)> + '_ {
        let mut entries: Vec<(Position, Occupant)> =
            self.squares.iter().map(|(&p, &o)| (p, o)).collect();
        entries.sort_unstable_by_key(|&(p, _)| p);
        entries.into_iter()
    }
}

impl FromIterator<(Position, Occupant)> for BoardState {
    fn from_iter<I: IntoIterator<Item = (Position, Occupant)>>(iter: I) -> Self {
        Self {
            squares: iter.into_iter().collect(),
        }
    }
}

impl OccupancyLike for BoardState {
    #[inline]
    fn occupant(&self, pos: Position) -> Option<Occupant> {
        BoardState::occupant(self, pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::piece::{PieceKind, Team};

    fn sq(label: &str) -> Position {
        label.parse().unwrap()
    }

    #[test]
    fn missing_entries_are_empty() {
        let board = BoardState::new().with(sq("D5"), Occupant::new(PieceKind::Rook, Team::Black));
        assert_eq!(board.len(), 1);
        assert!(board.is_occupied(sq("D5")));
        assert!(!board.is_occupied(sq("D4")));
        assert_eq!(board.occupant(sq("D4")), None);
    }

    #[test]
    fn snapshot_from_occupant_pairs() {
        assert!(BoardState::new().is_empty());
        assert!(BoardState::from_occupants(std::iter::empty()).is_empty());

        let black_rook = Occupant::new(PieceKind::Rook, Team::Black);
        let white_king = Occupant::new(PieceKind::King, Team::White);
        let pairs = [(sq("H8"), black_rook), (sq("E1"), white_king)];
        let board = BoardState::from_occupants(pairs);
        assert!(!board.is_empty());
        assert_eq!(board.len(), 2);
        assert_eq!(board.occupant(sq("H8")), Some(black_rook));
        assert_eq!(board.occupant(sq("E1")), Some(white_king));
        let built = BoardState::new()
            .with(sq("E1"), white_king)
            .with(sq("H8"), black_rook);
        assert_eq!(board, built);
    }

    #[test]
    fn snapshot_from_pieces_and_ordered_iteration() {
        let pieces = [
            Piece::queen(Team::White, sq("C4")),
            Piece::pawn(Team::Black, sq("B7")),
        ];
        let board = BoardState::from_pieces(&pieces);
        let squares: Vec<String> = board.iter().map(|(p, _)| p.to_string()).collect();
        assert_eq!(squares, vec!["B7", "C4"]);
        assert_eq!(
            board.occupant(sq("B7")),
            Some(Occupant::new(PieceKind::Pawn, Team::Black))
        );
    }
}
