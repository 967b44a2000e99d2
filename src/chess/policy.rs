//! Movement geometry per piece kind, independent of occupancy.
//!
//! A [`MovePolicy`] recognizes a displacement as a [`Shape`]; the shape then knows which
//! intermediate squares have to be empty and whether it may land on an empty or an enemy
//! square.

use crate::chess::piece::Team;
use crate::core::coord::Coord;
use crate::core::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovePolicy {
    Rook,
    Bishop,
    Queen,
    Knight,
    King,
    /// `double_step` is the unmoved pawn's two-square advance.
    Pawn { team: Team, double_step: bool },
}

/// A recognized displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Rook/bishop/queen line move of `distance` unit steps along `dir`.
    Slide { dir: Coord, distance: i32 },
    /// Knight jump; nothing in between is checked.
    Leap,
    /// King step to an adjacent square.
    Step,
    /// Straight pawn advance; never captures.
    Advance { dir: Coord, distance: i32 },
    /// Forward-diagonal pawn move; only legal as a capture.
    DiagonalCapture,
}

impl MovePolicy {
    /// Classify `from -> to`, or `None` if this piece can't move that way.
    pub fn shape(self, from: Position, to: Position) -> Option<Shape> {
        let d = from.delta_to(to);
        match self {
            MovePolicy::Rook => slide(d, d.is_orthogonal()),
            MovePolicy::Bishop => slide(d, d.is_diagonal()),
            MovePolicy::Queen => slide(d, d.is_orthogonal() || d.is_diagonal()),
            MovePolicy::Knight => {
                let ax = d.x.abs();
                let ay = d.y.abs();
                ((ax == 2 && ay == 1) || (ax == 1 && ay == 2)).then_some(Shape::Leap)
            }
            MovePolicy::King => (d.chebyshev_norm() == 1).then_some(Shape::Step),
            MovePolicy::Pawn { team, double_step } => pawn_shape(d, team.forward(), double_step),
        }
    }
}

#[inline]
fn slide(d: Coord, on_line: bool) -> Option<Shape> {
    on_line.then(|| Shape::Slide {
        dir: d.unit_step(),
        distance: d.chebyshev_norm(),
    })
}

fn pawn_shape(d: Coord, forward: i32, double_step: bool) -> Option<Shape> {
    let dir = Coord::new(0, forward);
    if d == dir {
        return Some(Shape::Advance { dir, distance: 1 });
    }
    if double_step && d == dir * 2 {
        return Some(Shape::Advance { dir, distance: 2 });
    }
    if d.x.abs() == 1 && d.y == forward {
        return Some(Shape::DiagonalCapture);
    }
    None
}

impl Shape {
    /// Squares strictly between `from` and the destination, nearest first.
    pub fn path(self, from: Position) -> Vec<Position> {
        match self {
            Shape::Slide { dir, distance } | Shape::Advance { dir, distance } => (1..distance)
                .filter_map(|k| from.offset(dir * k))
                .collect(),
            Shape::Leap | Shape::Step | Shape::DiagonalCapture => Vec::new(),
        }
    }

    #[inline]
    pub fn may_land_empty(self) -> bool {
        !matches!(self, Shape::DiagonalCapture)
    }

    #[inline]
    pub fn may_capture(self) -> bool {
        !matches!(self, Shape::Advance { .. })
    }

    /// Pawn shapes report any blocked destination as an obstruction.
    #[inline]
    pub fn is_pawn_shape(self) -> bool {
        matches!(self, Shape::Advance { .. } | Shape::DiagonalCapture)
    }
}
