//! Single-move legality for chess pieces.
//!
//! Given a [`Piece`](chess::moves::Piece), a target square and an occupancy snapshot
//! ([`BoardState`](chess::board::BoardState)), decide whether the move is legal and produce the
//! piece's successor. Check, castling, en passant and promotion are left to the caller.

pub mod chess;
pub mod core;
