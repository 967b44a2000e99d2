use std::ops::{Add, Mul, Sub};

/// A displacement on the board: `x` counts files, `y` counts ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn chebyshev_norm(self) -> i32 {
        self.x.abs().max(self.y.abs())
    }

    /// Component-wise signum, i.e. the unit step pointing the same way.
    #[inline]
    pub fn unit_step(self) -> Coord {
        Coord::new(self.x.signum(), self.y.signum())
    }

    #[inline]
    pub fn is_orthogonal(self) -> bool {
        (self.x == 0) != (self.y == 0)
    }

    #[inline]
    pub fn is_diagonal(self) -> bool {
        self.x != 0 && self.x.abs() == self.y.abs()
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Self::Output {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i32) -> Coord {
        Coord {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
