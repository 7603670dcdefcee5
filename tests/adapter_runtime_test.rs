use std::time::Duration;

use match_gems::adapter::{spawn_driver, AdapterError};
use match_gems::core::{Board, ClickOutcome, GameSession, SessionOptions};
use match_gems::types::{BoardAction, Cell, GemColor, Position};

const R: Cell = Cell::Gem(GemColor::Red);
const B: Cell = Cell::Gem(GemColor::Blue);

fn empty_session(rows: usize, cols: usize) -> GameSession {
    GameSession::new(SessionOptions {
        rows,
        cols,
        seed: 5,
        ..SessionOptions::default()
    })
    .unwrap()
}

#[tokio::test]
async fn interval_ticks_fill_the_board() {
    let (handle, join) = spawn_driver(empty_session(3, 3), Some(Duration::from_millis(5)), 8);
    let mut rx = handle.subscribe();

    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            rx.changed().await.unwrap();
            if rx.borrow().empty_cells().is_empty() {
                break;
            }
        }
    })
    .await
    .expect("board never filled");

    handle.shutdown().await.unwrap();
    let session = join.await.unwrap();
    assert!(session.board().is_full());
    assert!(session.ticks() >= 3);
}

#[tokio::test]
async fn click_pair_swaps_through_the_driver() {
    let board = Board::from_rows(&[[R, B, R, R, R]]).unwrap();
    let (handle, join) = spawn_driver(GameSession::with_board(board, 1), None, 4);

    let first = handle
        .action(BoardAction::Select, Position::new(0, 0))
        .await
        .unwrap();
    assert_eq!(first, Some(ClickOutcome::Selected(Position::new(0, 0))));
    assert_eq!(handle.snapshot().selected, Some(Position::new(0, 0)));

    let second = handle.click(Position::new(0, 1)).await.unwrap();
    assert!(matches!(second, ClickOutcome::Swapped { legal: true, .. }));

    let snap = handle.snapshot();
    assert_eq!(snap.cells, vec![B.code(), 0, 0, 0, 0]);
    assert_eq!(snap.selected, None);
    assert_eq!(snap.swaps, 1);

    handle.shutdown().await.unwrap();
    join.await.unwrap();
}

#[tokio::test]
async fn reset_is_published() {
    let mut session = empty_session(2, 2);
    session.settle(10);
    let (handle, join) = spawn_driver(session, None, 4);
    assert!(handle.snapshot().empty_cells().is_empty());

    let mut rx = handle.subscribe();
    handle.reset().await.unwrap();
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow().empty_cells().len(), 4);

    handle.shutdown().await.unwrap();
    join.await.unwrap();
}

#[tokio::test]
async fn dropping_every_handle_stops_the_driver() {
    let (handle, join) = spawn_driver(empty_session(2, 2), None, 4);
    handle.tick().await.unwrap();
    drop(handle);

    let session = join.await.unwrap();
    assert_eq!(session.ticks(), 1);
}

#[tokio::test]
async fn invalid_swap_is_an_error_not_a_crash() {
    let (handle, join) = spawn_driver(empty_session(2, 2), None, 4);
    let err = handle
        .swap(Position::new(0, 0), Position::new(5, 5))
        .await
        .unwrap_err();
    assert!(matches!(err, AdapterError::Board(_)));

    // The driver keeps serving after a rejected command.
    assert_eq!(handle.tick().await.unwrap().filled, 2);
    handle.shutdown().await.unwrap();
    join.await.unwrap();
}

#[tokio::test]
async fn actions_after_the_driver_stops_report_stopped() {
    let (handle, join) = spawn_driver(empty_session(2, 2), None, 4);
    handle.shutdown().await.unwrap();
    join.await.unwrap();

    let err = handle
        .action(BoardAction::Select, Position::new(0, 0))
        .await
        .unwrap_err();
    assert!(matches!(err, AdapterError::Stopped));
    assert!(matches!(
        handle.click(Position::new(1, 1)).await,
        Err(AdapterError::Stopped)
    ));
}
