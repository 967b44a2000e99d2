//! Low-level board primitives.
//!
//! - [`coord`]: integer displacements between squares.
//! - [`position`]: a bounds-checked square parsed from algebraic labels ("E4").

pub mod coord;
pub mod position;
