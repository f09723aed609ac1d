//! Board primitives.
//!
//! - [`square`]: a validated `(file, rank)` pair with a dense `0..64` index.
//! - [`direction`]: the 8 compass directions used for queen slides and pawn geometry.

pub mod direction;
pub mod square;
