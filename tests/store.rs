use std::panic::{self, AssertUnwindSafe};

use queen_pawns::solve::store::Store;
use queen_pawns::{Board, Pawns, Position, Side, Square, Status};

#[test]
fn buckets_split_by_side_and_pawn_count() {
    let board = Board::shared();
    let pawns = Pawns::from_squares([Square::new(1, 3)]);
    let w = Position::white_to_move(&board, pawns, Square::new(5, 5));
    let b = Position::black_to_move(&board, pawns, Square::new(5, 5));

    let mut store = Store::new();
    store.save(&w, Status::Win);
    store.save(&b, Status::Lose);

    assert_eq!(store.get(&w), Some(Status::Win));
    assert_eq!(store.get(&b), Some(Status::Lose));
    assert_eq!(store.bucket_len(Side::White, 1), 1);
    assert_eq!(store.bucket_len(Side::Black, 1), 1);
    assert_eq!(store.bucket_len(Side::White, 0), 0);
    assert_eq!(store.len(), 2);

    let stats = store.stats();
    assert_eq!(stats.buckets.len(), 2);
    assert_eq!(stats.bucket(Side::White, 1).map(|b| b.win), Some(1));
    assert_eq!(stats.bucket(Side::Black, 1).map(|b| b.lose), Some(1));
}

#[test]
#[should_panic(expected = "already in store")]
fn duplicate_save_panics() {
    let board = Board::shared();
    let pos = Position::white_to_move(&board, Pawns::new(), Square::new(1, 1));
    let mut store = Store::new();
    store.save(&pos, Status::Lose);
    store.save(&pos, Status::Lose);
}

#[test]
fn codes_with_filters_by_verdict() {
    let board = Board::shared();
    let mut store = Store::new();
    for (file, status) in [(1, Status::Lose), (2, Status::Lose), (3, Status::Draw)] {
        let pos = Position::white_to_move(&board, Pawns::new(), Square::new(file, 1));
        store.save(&pos, status);
    }
    assert_eq!(store.codes_with(Side::White, 0, Status::Lose).count(), 2);
    assert_eq!(store.codes_with(Side::White, 0, Status::Draw).count(), 1);
    assert_eq!(store.codes_with(Side::White, 0, Status::Win).count(), 0);
}

#[test]
fn rejected_duplicate_keeps_the_first_verdict() {
    let board = Board::shared();
    let pawns = Pawns::from_squares([Square::new(4, 6)]);
    let pos = Position::black_to_move(&board, pawns, Square::new(4, 1));
    let mut store = Store::new();
    store.save(&pos, Status::Win);

    let second = panic::catch_unwind(AssertUnwindSafe(|| store.save(&pos, Status::Lose)));
    assert!(second.is_err());
    assert_eq!(store.get(&pos), Some(Status::Win));
    assert_eq!(store.len(), 1);
}
