use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::square::Square;
use crate::pieces::{Pawns, Side};
use crate::rules::{movegen, retro};

/// Canonical encoding of a placement: queen square plus, per file, the pawn rank or `-1`.
///
/// Side to move is not part of the code; the store keeps one bucket per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionCode {
    pub queen_file: u8,
    pub queen_rank: u8,
    pub pawn_ranks: [i8; 8],
}

/// A queen-vs-pawns position with the side to move.
///
/// Positions are values: move generation always builds new ones, and each owns its own
/// `Pawns` snapshot. The board is shared.
#[derive(Clone)]
pub struct Position {
    side: Side,
    pawns: Pawns,
    queen: Square,
    board: Arc<Board>,
}

impl Position {
    pub fn new(board: &Arc<Board>, side: Side, pawns: Pawns, queen: Square) -> Self {
        Self {
            side,
            pawns,
            queen,
            board: Arc::clone(board),
        }
    }

    pub fn white_to_move(board: &Arc<Board>, pawns: Pawns, queen: Square) -> Self {
        Self::new(board, Side::White, pawns, queen)
    }

    pub fn black_to_move(board: &Arc<Board>, pawns: Pawns, queen: Square) -> Self {
        Self::new(board, Side::Black, pawns, queen)
    }

    /// Same board, new placement, given side to move.
    pub(crate) fn successor(&self, side: Side, pawns: Pawns, queen: Square) -> Self {
        Self::new(&self.board, side, pawns, queen)
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn pawns(&self) -> &Pawns {
        &self.pawns
    }

    #[inline]
    pub fn queen(&self) -> Square {
        self.queen
    }

    #[inline]
    pub fn board(&self) -> &Arc<Board> {
        &self.board
    }

    /// Legality of the placement for the side to move:
    /// - the queen never shares a square with a pawn
    /// - White to move: no promoted pawn, queen not attacked
    /// - Black to move: at least one pawn, at most one promoted
    pub fn is_valid(&self) -> bool {
        if self.pawns.occupies(self.queen) {
            return false;
        }
        match self.side {
            Side::White => self.pawns.promoted_count() == 0 && !self.pawns.attacks(self.queen),
            Side::Black => self.pawns.count() >= 1 && self.pawns.promoted_count() <= 1,
        }
    }

    /// Terminal loss for the side to move, detected without search.
    pub fn is_lost_by_definition(&self) -> bool {
        match self.side {
            Side::White => self.pawns.count() == 0,
            Side::Black => self.pawns.promoted_count() > 0,
        }
    }

    pub fn code(&self) -> PositionCode {
        PositionCode {
            queen_file: self.queen.file(),
            queen_rank: self.queen.rank(),
            pawn_ranks: self.pawns.encoded_ranks(),
        }
    }

    /// Positions reachable in one move. Lazy; call again to regenerate.
    pub fn generate_next_positions(&self) -> Box<dyn Iterator<Item = Position> + '_> {
        match self.side {
            Side::White => Box::new(movegen::pawn_advances(self)),
            Side::Black => Box::new(movegen::queen_slides(self)),
        }
    }

    /// Positions from which this one is reachable in one move.
    pub fn generate_prev_positions(&self) -> Box<dyn Iterator<Item = Position> + '_> {
        match self.side {
            Side::White => Box::new(retro::unslid_queen(self)),
            Side::Black => retro::unadvanced_pawns(self),
        }
    }

    /// Reflection across the d/e file boundary.
    pub fn mirrored(&self) -> Self {
        self.successor(self.side, self.pawns.mirrored(), self.queen.mirrored())
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.side == other.side && self.pawns == other.pawns && self.queen == other.queen
    }
}

impl Eq for Position {}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("side", &self.side)
            .field("pawns", &self.pawns)
            .field("queen", &self.queen)
            .finish()
    }
}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.side.hash(state);
        self.pawns.hash(state);
        self.queen.hash(state);
    }
}
