//! Chess movement rules on the standard 8x8 board.

pub mod board;
pub mod error;
pub mod moves;
pub mod piece;
pub mod policy;
