//! Backward move generation.
//!
//! The evaluator never calls these; they drive retrograde analyses that grow a set of
//! positions backwards from known results (see [`crate::search::draws`]).

use std::iter;

use crate::core::direction::Direction;
use crate::core::square::Square;
use crate::pieces::Side;
use crate::position::Position;

/// Ranks on which a pawn captured by the queen's last move may have stood.
///
/// Rank 1 never holds a pawn, and a pawn on rank 8 would have ended the game before
/// Black's move.
pub const CAPTURED_PAWN_RANKS: std::ops::RangeInclusive<u8> = 2..=7;

/// Predecessors of a white-to-move position: undo the queen's last slide.
///
/// The queen came from any square on a clear line. When its file holds no pawn and its
/// rank could hold one, the slide may also have been a capture, so each origin is yielded a
/// second time with a pawn back on the queen's square.
pub fn unslid_queen(pos: &Position) -> impl Iterator<Item = Position> + '_ {
    debug_assert_eq!(pos.side(), Side::White);
    let pawns = *pos.pawns();
    let to = pos.queen();
    let may_have_captured =
        pawns.pawn_on_file(to.file()).is_none() && CAPTURED_PAWN_RANKS.contains(&to.rank());

    Direction::ALL.into_iter().flat_map(move |dir| {
        pos.board()
            .ray(to, dir)
            .take_while(move |&sq| !pawns.occupies(sq))
            .flat_map(move |from| {
                let quiet = pos.successor(Side::Black, pawns, from);
                let capture = may_have_captured.then(|| {
                    let mut before = pawns;
                    before.set(to);
                    pos.successor(Side::Black, before, from)
                });
                iter::once(quiet).chain(capture)
            })
    })
}

/// Predecessors of a black-to-move position: undo White's last pawn move.
///
/// A promoted pawn must have moved last, so it is the only candidate. Otherwise any pawn
/// above rank 2 may step back onto an empty square, and a pawn on rank 4 may also undo a
/// double step.
pub fn unadvanced_pawns(pos: &Position) -> Box<dyn Iterator<Item = Position> + '_> {
    debug_assert_eq!(pos.side(), Side::Black);

    if let Some(promoted) = pos.pawns().promoted_pawn() {
        return Box::new(iter::once(retreat(pos, promoted, 7)));
    }

    let queen = pos.queen();
    Box::new(
        pos.pawns()
            .iter()
            .filter(move |pawn| pawn.rank() > 2 && behind(*pawn, 1) != queen)
            .flat_map(move |pawn| {
                let single = retreat(pos, pawn, pawn.rank() - 1);
                let double = (pawn.rank() == 4 && behind(pawn, 2) != queen)
                    .then(|| retreat(pos, pawn, 2));
                iter::once(single).chain(double)
            }),
    )
}

#[inline]
fn behind(pawn: Square, steps: u8) -> Square {
    Square::new(pawn.file(), pawn.rank() - steps)
}

fn retreat(pos: &Position, pawn: Square, rank: u8) -> Position {
    let mut pawns = *pos.pawns();
    pawns.set(Square::new(pawn.file(), rank));
    pos.successor(Side::White, pawns, pos.queen())
}
