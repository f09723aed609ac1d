//! Exact solver for the queen-against-pawns endgame on an 8×8 board.
//!
//! Black has a lone queen, White only pawns. White wins by promoting, Black by capturing
//! every pawn; a white side with no pawn move is a draw. Every position is solved by
//! memoized minimax over a per-side, per-pawn-count store.

pub mod board;
pub mod config;
pub mod core;
pub mod error;
pub mod notation;
pub mod pieces;
pub mod position;
pub mod rules;
pub mod search;
pub mod solve;

pub use board::Board;
pub use core::square::Square;
pub use error::QpError;
pub use pieces::{Pawns, Side, Status};
pub use position::{Position, PositionCode};
pub use solve::evaluate::Engine;
