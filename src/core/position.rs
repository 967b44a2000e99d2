use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::core::coord::Coord;

pub const FILES: u8 = 8;
pub const RANKS: u8 = 8;

/// A square on the 8x8 board, always within bounds.
///
/// `file` 1..=8 maps to `A..=H`, `rank` 1..=8 is the printed rank. Ordering is by file,
/// then rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    file: u8,
    rank: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("invalid square label {label:?}: expected a file A-H followed by a rank 1-8")]
    InvalidLabel { label: String },
    #[error("square (file={file}, rank={rank}) is off the board")]
    OutOfBounds { file: i32, rank: i32 },
}

impl Position {
    pub fn new(file: i32, rank: i32) -> Result<Self, PositionError> {
        if !in_bounds(file, rank) {
            return Err(PositionError::OutOfBounds { file, rank });
        }
        Ok(Self {
            file: file as u8,
            rank: rank as u8,
        })
    }

    pub fn from_label(label: &str) -> Result<Self, PositionError> {
        let invalid = || PositionError::InvalidLabel {
            label: label.to_string(),
        };

        let mut chars = label.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        if !f.is_ascii_alphabetic() {
            return Err(invalid());
        }
        let Some(rank) = r.to_digit(10) else {
            return Err(invalid());
        };
        let file = (f.to_ascii_uppercase() as u8 - b'A') as i32 + 1;

        Position::new(file, rank as i32)
    }

    #[inline]
    pub fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub fn coord(self) -> Coord {
        Coord::new(self.file as i32, self.rank as i32)
    }

    /// Displacement from `self` to `target`.
    #[inline]
    pub fn delta_to(self, target: Position) -> Coord {
        target.coord() - self.coord()
    }

    /// The square `delta` away, or `None` if that leaves the board.
    pub fn offset(self, delta: Coord) -> Option<Position> {
        let c = self.coord() + delta;
        Position::new(c.x, c.y).ok()
    }

    /// Chebyshev (king-move) distance.
    #[inline]
    pub fn distance(self, other: Position) -> i32 {
        self.delta_to(other).chebyshev_norm()
    }

    /// Every square, A1, A2, .., H8.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=FILES).flat_map(|file| (1..=RANKS).map(move |rank| Position { file, rank }))
    }
}

#[inline]
fn in_bounds(file: i32, rank: i32) -> bool {
    (1..=FILES as i32).contains(&file) && (1..=RANKS as i32).contains(&rank)
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_label(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.file - 1) as char, self.rank)
    }
}
