use crate::core::direction::Direction;
use crate::core::square::Square;
use crate::pieces::Side;
use crate::position::Position;

/// White's moves: every unblocked pawn advances one rank, and from rank 2 also two ranks
/// when neither square ahead holds the queen.
///
/// A pawn reaching rank 8 is not special here; the resulting black-to-move position is
/// lost by definition.
pub fn pawn_advances(pos: &Position) -> impl Iterator<Item = Position> + '_ {
    debug_assert_eq!(pos.side(), Side::White);
    let queen = pos.queen();

    pos.pawns().iter().flat_map(move |pawn| {
        let single = ahead(pawn, 1)
            .filter(|&to| to != queen)
            .map(|to| advance(pos, pawn, to));
        let double = if single.is_some() && pawn.rank() == 2 {
            ahead(pawn, 2)
                .filter(|&to| to != queen)
                .map(|to| advance(pos, pawn, to))
        } else {
            None
        };
        single.into_iter().chain(double)
    })
}

/// Black's moves: the queen slides in each direction until it hits a pawn or the edge.
///
/// Squares guarded by a pawn are skipped but do not stop the slide; a pawn square ends the
/// slide and is a capture when unguarded.
pub fn queen_slides(pos: &Position) -> impl Iterator<Item = Position> + '_ {
    debug_assert_eq!(pos.side(), Side::Black);
    let pawns = *pos.pawns();
    let from = pos.queen();

    Direction::ALL.into_iter().flat_map(move |dir| {
        let mut stopped = false;
        pos.board()
            .ray(from, dir)
            .take_while(move |&sq| {
                if stopped {
                    return false;
                }
                stopped = pawns.occupies(sq);
                true
            })
            .filter(move |&sq| !pawns.attacks(sq))
            .map(move |to| {
                let mut after = pawns;
                after.remove_if_occupied_at(to);
                pos.successor(Side::White, after, to)
            })
    })
}

#[inline]
fn ahead(pawn: Square, steps: u8) -> Option<Square> {
    Square::checked(pawn.file() as i32, (pawn.rank() + steps) as i32)
}

fn advance(pos: &Position, pawn: Square, to: Square) -> Position {
    debug_assert!(pawn.rank() < 8, "promoted pawn {pawn:?} cannot advance");
    let mut pawns = *pos.pawns();
    pawns.set(to);
    pos.successor(Side::Black, pawns, pos.queen())
}
