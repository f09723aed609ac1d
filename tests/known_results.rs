use queen_pawns::notation::parse_position;
use queen_pawns::{Board, Engine, Pawns, Position, Side, Square, Status};

fn pos(text: &str, side: Side, board: &std::sync::Arc<Board>) -> Position {
    parse_position(text, side, board).expect("test position must parse")
}

#[test]
fn white_without_pawns_loses_everywhere() {
    let mut engine = Engine::new();
    let board = engine.board().clone();
    for &queen in board.squares() {
        let p = Position::white_to_move(&board, Pawns::new(), queen);
        assert_eq!(engine.evaluate(&p), Status::Lose, "{p}");
    }
    assert_eq!(engine.store().len(), 64);
}

#[test]
fn seventh_rank_pawn_promotes_unless_blocked() {
    let mut engine = Engine::new();
    let board = engine.board().clone();
    for file in 1..=8u8 {
        let pawn = Square::new(file, 7);
        let pawns = Pawns::from_squares([pawn]);
        for &queen in board.squares() {
            let p = Position::white_to_move(&board, pawns, queen);
            if !p.is_valid() {
                continue;
            }
            let want = if queen == Square::new(file, 8) {
                Status::Draw
            } else {
                Status::Win
            };
            assert_eq!(engine.evaluate(&p), want, "{p}");
        }
    }
}

#[test]
fn queen_in_front_of_sixth_rank_pawn_wins() {
    let mut engine = Engine::new();
    let board = engine.board().clone();
    let p = pos("b6 Qb8", Side::Black, &board);
    assert_eq!(engine.evaluate(&p), Status::Win);
}

#[test]
fn capture_beats_connected_sixth_rank_pawns() {
    let mut engine = Engine::new();
    let board = engine.board().clone();
    let p = pos("Qd1 d6 e6", Side::Black, &board);
    assert_eq!(engine.evaluate(&p), Status::Win);

    let capture = pos("e6 Qd6", Side::White, &board);
    assert!(p.generate_next_positions().any(|n| n == capture));
    assert_eq!(engine.evaluate(&capture), Status::Lose);

    // Any quiet queen move lets e7 through with d6 guarding it.
    for n in p.generate_next_positions() {
        if n.pawns().count() == 2 {
            assert_eq!(engine.evaluate(&n), Status::Win, "{n}");
        }
    }
}

#[test]
fn two_pawns_on_the_seventh_rank_beat_the_queen() {
    let mut engine = Engine::new();
    let board = engine.board().clone();
    for a in 1..=8u8 {
        for b in (a + 1)..=8u8 {
            let pawns = Pawns::from_squares([Square::new(a, 7), Square::new(b, 7)]);
            for &queen in board.squares() {
                let p = Position::black_to_move(&board, pawns, queen);
                if !p.is_valid() {
                    continue;
                }
                assert_eq!(engine.evaluate(&p), Status::Lose, "{p}");
            }
        }
    }
}

#[test]
fn defended_seventh_rank_pawn_beats_the_queen() {
    let mut engine = Engine::new();
    let board = engine.board().clone();
    for file in 1..=8u8 {
        for defender in [file as i32 - 1, file as i32 + 1] {
            let Some(defender) = Square::checked(defender, 6) else {
                continue;
            };
            let pawns = Pawns::from_squares([Square::new(file, 7), defender]);
            for &queen in board.squares() {
                let p = Position::black_to_move(&board, pawns, queen);
                if !p.is_valid() {
                    continue;
                }
                assert_eq!(engine.evaluate(&p), Status::Lose, "{p}");
            }
        }
    }
}

#[test]
fn grid_cells_agree_with_single_evaluations() {
    let mut engine = Engine::new();
    let board = engine.board().clone();
    let pawns = Pawns::from_squares([Square::new(2, 7)]);

    let (white, black) = engine.evaluate_pair(&pawns, Square::new(2, 8));
    assert_eq!(white, Some(Status::Draw));
    // Black to move simply takes the pawn.
    assert_eq!(black, Status::Win);

    // c8 is guarded by b7.
    let (white, _) = engine.evaluate_pair(&pawns, Square::new(3, 8));
    assert_eq!(white, None);

    let p = Position::white_to_move(&board, pawns, Square::new(8, 1));
    assert_eq!(
        engine.evaluate_pair(&pawns, Square::new(8, 1)).0,
        Some(engine.evaluate(&p))
    );
}

/// Full eight-pawn start: every pawn on rank 2, queen on d8, Black to move.
///
/// Ignored by default: the search visits a large share of the eight-pawn space.
///
/// Run with:
/// `cargo test --release -- --ignored queen_wins_the_starting_position`
#[test]
#[ignore]
fn queen_wins_the_starting_position() {
    let mut engine = Engine::new();
    let board = engine.board().clone();
    let p = pos("Qd8 a2 b2 c2 d2 e2 f2 g2 h2", Side::Black, &board);
    assert_eq!(engine.evaluate(&p), Status::Win);
}
