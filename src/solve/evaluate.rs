//! Memoized minimax over the forward move generator.
//!
//! Every full round (pawn advance, queen slide) strictly raises the sum of pawn ranks of the
//! pawns that remain on their files, and ranks are capped at 8, so the recursion has finite
//! depth and cannot revisit a position on its own path. The store only saves work across
//! branches and calls.

use std::sync::Arc;

use crate::board::Board;
use crate::core::square::Square;
use crate::pieces::{Pawns, Side, Status};
use crate::position::Position;
use crate::solve::store::Store;

/// Owns the board and the transposition store; all evaluation goes through here.
#[derive(Debug, Clone)]
pub struct Engine {
    board: Arc<Board>,
    store: Store,
    counts: EvalCounts,
}

/// Work done by an engine since construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalCounts {
    /// Positions looked up and found in the store.
    pub hits: u64,
    /// Positions solved (one store entry each).
    pub solved: u64,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_board(Board::shared())
    }

    pub fn with_board(board: Arc<Board>) -> Self {
        Self {
            board,
            store: Store::new(),
            counts: EvalCounts::default(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Arc<Board> {
        &self.board
    }

    #[inline]
    pub fn store(&self) -> &Store {
        &self.store
    }

    #[inline]
    pub fn counts(&self) -> EvalCounts {
        self.counts
    }

    /// Solve `pos` for the side to move.
    ///
    /// Panics if `pos` is not valid; filter with [`Position::is_valid`] first.
    pub fn evaluate(&mut self, pos: &Position) -> Status {
        assert!(pos.is_valid(), "evaluate called on an invalid position: {pos}");
        self.solve(pos)
    }

    /// Both verdicts for a static arrangement: White to move (`None` when that placement is
    /// not legal with White to move, e.g. the queen is attacked) and Black to move.
    ///
    /// The black-to-move placement must be valid: at least one pawn and no pawn on the
    /// queen's square.
    pub fn evaluate_pair(&mut self, pawns: &Pawns, queen: Square) -> (Option<Status>, Status) {
        let black = Position::black_to_move(&self.board, *pawns, queen);
        let black_status = self.evaluate(&black);

        let white = Position::white_to_move(&self.board, *pawns, queen);
        let white_status = white.is_valid().then(|| self.evaluate(&white));

        (white_status, black_status)
    }

    fn solve(&mut self, pos: &Position) -> Status {
        if let Some(status) = self.store.get(pos) {
            self.counts.hits += 1;
            return status;
        }

        let status = if pos.is_lost_by_definition() {
            Status::Lose
        } else {
            self.search_children(pos)
        };

        self.store.save(pos, status);
        self.counts.solved += 1;
        status
    }

    fn search_children(&mut self, pos: &Position) -> Status {
        let mut best = Status::Lose;
        let mut stalemate = true;

        for next in pos.generate_next_positions() {
            stalemate = false;
            debug_assert!(next.is_valid(), "move generator produced {next} from {pos}");
            match self.solve(&next) {
                Status::Lose => return Status::Win,
                Status::Draw => best = Status::Draw,
                Status::Win => {}
            }
        }

        if stalemate {
            // The queen always has a move in a valid black-to-move position.
            assert!(
                pos.side() == Side::White,
                "black to move without a legal move: {pos}"
            );
            return Status::Draw;
        }

        best
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
