//! Retrograde draw layers.
//!
//! Layer 0 holds the draws by definition: a lone pawn below rank 8 with the queen standing
//! right in front of it, White to move. Layer `n + 1` holds every valid predecessor of a
//! layer-`n` position that is itself a draw. Sides alternate between layers.

use log::info;
use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::core::direction::Direction;
use crate::pieces::{Pawns, Status};
use crate::position::Position;
use crate::solve::evaluate::Engine;

use std::sync::Arc;

/// The 48 white-to-move stalemates with a single pawn.
pub fn draw_seeds(board: &Arc<Board>) -> Vec<Position> {
    board
        .pawn_squares()
        .filter(|sq| sq.rank() < 8)
        .filter_map(|pawn| {
            let queen = board.neighbor(pawn, Direction::N)?;
            Some(Position::white_to_move(
                board,
                Pawns::from_squares([pawn]),
                queen,
            ))
        })
        .collect()
}

/// Grow draw layers backwards from [`draw_seeds`].
///
/// Stops after an empty layer or once `max_layers` layers exist (seeds included).
pub fn draw_layers(engine: &mut Engine, max_layers: usize) -> Vec<Vec<Position>> {
    let mut layers: Vec<Vec<Position>> = Vec::new();
    if max_layers == 0 {
        return layers;
    }

    let board = engine.board().clone();
    let seeds: Vec<Position> = draw_seeds(&board)
        .into_iter()
        .filter(|p| engine.evaluate(p) == Status::Draw)
        .collect();
    info!("draw by definition: {} positions", seeds.len());
    layers.push(seeds);

    while layers.len() < max_layers {
        let Some(last) = layers.last() else {
            break;
        };
        if last.is_empty() {
            break;
        }

        let mut seen: FxHashSet<Position> = FxHashSet::default();
        let mut next: Vec<Position> = Vec::new();
        for p in last {
            for q in p.generate_prev_positions() {
                if !q.is_valid() || seen.contains(&q) {
                    continue;
                }
                if engine.evaluate(&q) == Status::Draw {
                    seen.insert(q.clone());
                    next.push(q);
                }
            }
        }

        info!("draw in {}: {} positions", layers.len(), next.len());
        layers.push(next);
    }

    layers
}
