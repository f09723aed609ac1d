//! Bulk evaluation of every placement with a given number of pawns.
//!
//! Sweeps run in increasing pawn count, so every bucket a deeper search falls into through a
//! capture has already been filled.

use log::{debug, info};
use serde::Serialize;

use crate::config::SweepConfig;
use crate::core::square::Square;
use crate::error::QpError;
use crate::pieces::{Pawns, Side, Status};
use crate::position::{Position, PositionCode};
use crate::solve::evaluate::Engine;
use crate::solve::store::StoreStats;

/// White-to-move positions with no pawns: one per queen square.
pub const WHITE_NO_PAWN_POSITIONS: usize = 64;

/// White-to-move positions with one pawn: the pawn on ranks 2..7, the queen on any square
/// that is neither the pawn's nor guarded by it (one guarded square for a rook pawn, two
/// otherwise).
pub const WHITE_ONE_PAWN_POSITIONS: usize = 2 * 6 * 62 + 6 * 6 * 61;

/// Black-to-move positions with one pawn: the pawn on ranks 2..8, the queen anywhere else.
pub const BLACK_ONE_PAWN_POSITIONS: usize = 8 * 7 * 63;

/// Call `f` with every set of `count` pawns on distinct files, ranks 2..=8.
pub fn for_each_pawn_set(count: usize, mut f: impl FnMut(Pawns)) {
    assert!(count <= 8, "at most 8 pawns fit on distinct files, got {count}");

    fn rec(next_file: u8, remaining: usize, cur: Pawns, f: &mut dyn FnMut(Pawns)) {
        if remaining == 0 {
            f(cur);
            return;
        }
        // Leave enough files for the pawns still to place.
        let last_file = 9 - remaining as u8;
        for file in next_file..=last_file {
            for rank in 2..=8u8 {
                let mut pawns = cur;
                pawns.set(Square::new(file, rank));
                rec(file + 1, remaining - 1, pawns, f);
            }
        }
    }

    rec(1, count, Pawns::new(), &mut f);
}

/// Positions evaluated by one pawn-count sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PawnCountSweep {
    pub pawns: usize,
    pub white_positions: usize,
    pub black_positions: usize,
}

/// Evaluate every valid position, either side to move, with exactly `count` pawns.
pub fn sweep_pawn_count(engine: &mut Engine, count: usize) -> PawnCountSweep {
    let board = engine.board().clone();
    let mut out = PawnCountSweep {
        pawns: count,
        white_positions: 0,
        black_positions: 0,
    };

    for_each_pawn_set(count, |pawns| {
        for &queen in board.squares() {
            for side in Side::BOTH {
                let pos = Position::new(&board, side, pawns, queen);
                if !pos.is_valid() {
                    continue;
                }
                engine.evaluate(&pos);
                match side {
                    Side::White => out.white_positions += 1,
                    Side::Black => out.black_positions += 1,
                }
            }
        }
    });

    debug!(
        "swept {count} pawn(s): {} white-to-move, {} black-to-move positions",
        out.white_positions, out.black_positions
    );
    out
}

/// Result of [`sweep`].
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub config: SweepConfig,
    pub sweeps: Vec<PawnCountSweep>,
    pub stats: StoreStats,
    /// Black-to-move draws per swept pawn count, when requested.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub black_draws: Vec<PositionCode>,
}

/// Sweep pawn counts `0..=cfg.max_pawns` in increasing order.
pub fn sweep(engine: &mut Engine, cfg: &SweepConfig) -> Result<SweepReport, QpError> {
    cfg.validate()?;

    let mut sweeps = Vec::with_capacity(cfg.max_pawns + 1);
    for count in 0..=cfg.max_pawns {
        let s = sweep_pawn_count(engine, count);
        info!(
            "{count} pawn(s) done: {} positions in store",
            engine.store().len()
        );
        sweeps.push(s);
    }

    if cfg.verify_counts {
        verify_known_counts(engine, cfg.max_pawns)?;
    }

    let mut black_draws = Vec::new();
    if cfg.report_draws {
        for count in 0..=cfg.max_pawns {
            black_draws.extend(engine.store().codes_with(Side::Black, count, Status::Draw));
        }
        black_draws.sort_by_key(|c| (c.pawn_ranks, c.queen_file, c.queen_rank));
    }

    Ok(SweepReport {
        config: cfg.clone(),
        sweeps,
        stats: engine.store().stats(),
        black_draws,
    })
}

fn verify_known_counts(engine: &Engine, max_pawns: usize) -> Result<(), QpError> {
    let store = engine.store();
    let mut checks = vec![(
        "white to move, 0 pawns",
        WHITE_NO_PAWN_POSITIONS,
        store.bucket_len(Side::White, 0),
    )];
    if max_pawns >= 1 {
        checks.push((
            "white to move, 1 pawn",
            WHITE_ONE_PAWN_POSITIONS,
            store.bucket_len(Side::White, 1),
        ));
        checks.push((
            "black to move, 1 pawn",
            BLACK_ONE_PAWN_POSITIONS,
            store.bucket_len(Side::Black, 1),
        ));
    }

    for (what, expected, observed) in checks {
        if expected != observed {
            return Err(QpError::CountMismatch {
                what: what.to_string(),
                expected,
                observed,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pawn_set_counts_match_binomials() {
        // C(8, n) * 7^n
        let expected = [1usize, 56, 28 * 49, 56 * 343];
        for (n, &want) in expected.iter().enumerate() {
            let mut seen = 0usize;
            for_each_pawn_set(n, |pawns| {
                assert_eq!(pawns.count(), n);
                seen += 1;
            });
            assert_eq!(seen, want, "pawn sets of size {n}");
        }
    }

    #[test]
    fn pawn_sets_use_distinct_files() {
        for_each_pawn_set(2, |pawns| {
            let files: Vec<u8> = pawns.iter().map(|sq| sq.file()).collect();
            assert_eq!(files.len(), 2);
            assert!(files[0] < files[1]);
        });
    }
}
