//! Board driver runtime.
//!
//! One tokio task owns the [`GameSession`]. Clicks, swaps and resets arrive over an
//! mpsc channel and the drop tick fires from an interval in the same `select!` loop,
//! so a swap and a gravity step can never interleave. Every change is published as a
//! fresh [`BoardSnapshot`] on a watch channel for the renderer.

use std::time::Duration;

use log::{debug, info, warn};
use tokio::runtime::Runtime;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::config::AdapterConfig;
use crate::core::{BoardError, BoardSnapshot, ClickOutcome, GameSession, TickReport};
use crate::error::AdapterError;
use crate::types::{BoardAction, Position};

type Reply<T> = oneshot::Sender<Result<T, BoardError>>;

/// Command delivered to the driver task.
#[derive(Debug)]
pub enum BoardCommand {
    Click {
        pos: Position,
        reply: Reply<ClickOutcome>,
    },
    Swap {
        a: Position,
        b: Position,
        reply: Reply<bool>,
    },
    Action {
        action: BoardAction,
        cursor: Position,
        reply: Reply<Option<ClickOutcome>>,
    },
    /// Run one drop tick now (manual-tick mode or tests).
    Tick { reply: oneshot::Sender<TickReport> },
    Reset,
    Shutdown,
}

/// The task side: owns the session.
pub struct BoardDriver {
    session: GameSession,
    cmd_rx: mpsc::Receiver<BoardCommand>,
    snap_tx: watch::Sender<BoardSnapshot>,
    drop_period: Option<Duration>,
}

impl BoardDriver {
    /// Run until shutdown or until every handle is dropped. Returns the final session.
    pub async fn run(mut self) -> GameSession {
        let mut ticker = self.drop_period.map(|period| {
            let mut i = interval(period);
            i.set_missed_tick_behavior(MissedTickBehavior::Delay);
            i
        });

        info!(
            "board driver started ({}x{}, drop period {:?})",
            self.session.board().rows(),
            self.session.board().cols(),
            self.drop_period
        );

        loop {
            tokio::select! {
                cmd = self.cmd_rx.recv() => {
                    match cmd {
                        Some(cmd) => {
                            if !self.handle(cmd) {
                                break;
                            }
                        }
                        None => break,
                    }
                }
                _ = next_tick(ticker.as_mut()) => {
                    self.tick();
                }
            }
        }

        info!("board driver stopped after {} ticks", self.session.ticks());
        self.session
    }

    /// Returns false when the driver should stop.
    fn handle(&mut self, cmd: BoardCommand) -> bool {
        match cmd {
            BoardCommand::Click { pos, reply } => {
                let result = self.session.click(pos);
                if let Ok(outcome) = &result {
                    debug!("click {} -> {:?}", pos, outcome);
                    self.publish();
                }
                respond(reply, result);
            }
            BoardCommand::Swap { a, b, reply } => {
                let result = self.session.try_swap(a, b);
                if matches!(result, Ok(true)) {
                    self.publish();
                }
                respond(reply, result);
            }
            BoardCommand::Action {
                action,
                cursor,
                reply,
            } => {
                let result = self.session.apply_action(action, cursor);
                if result.is_ok() {
                    self.publish();
                }
                respond(reply, result);
            }
            BoardCommand::Tick { reply } => {
                let report = self.tick();
                let _ = reply.send(report);
            }
            BoardCommand::Reset => {
                self.session.reset();
                self.publish();
            }
            BoardCommand::Shutdown => return false,
        }
        true
    }

    fn tick(&mut self) -> TickReport {
        let report = self.session.drop_tick();
        if !report.is_idle() {
            self.publish();
        }
        report
    }

    fn publish(&self) {
        let session = &self.session;
        self.snap_tx.send_modify(|snap| session.snapshot_into(snap));
    }
}

async fn next_tick(ticker: Option<&mut tokio::time::Interval>) {
    match ticker {
        Some(t) => {
            t.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

fn respond<T>(reply: Reply<T>, result: Result<T, BoardError>) {
    if let Err(e) = &result {
        warn!("board command rejected: {}", e);
    }
    // The caller may have stopped waiting; the board has already been updated either way.
    let _ = reply.send(result);
}

/// Async handle to a running driver. Cheap to clone.
#[derive(Clone)]
pub struct DriverHandle {
    cmd_tx: mpsc::Sender<BoardCommand>,
    snap_rx: watch::Receiver<BoardSnapshot>,
}

impl DriverHandle {
    pub async fn click(&self, pos: Position) -> Result<ClickOutcome, AdapterError> {
        let (reply, rx) = oneshot::channel();
        self.send(BoardCommand::Click { pos, reply }).await?;
        Ok(rx.await.map_err(|_| AdapterError::Stopped)??)
    }

    pub async fn swap(&self, a: Position, b: Position) -> Result<bool, AdapterError> {
        let (reply, rx) = oneshot::channel();
        self.send(BoardCommand::Swap { a, b, reply }).await?;
        Ok(rx.await.map_err(|_| AdapterError::Stopped)??)
    }

    pub async fn action(
        &self,
        action: BoardAction,
        cursor: Position,
    ) -> Result<Option<ClickOutcome>, AdapterError> {
        let (reply, rx) = oneshot::channel();
        self.send(BoardCommand::Action {
            action,
            cursor,
            reply,
        })
        .await?;
        Ok(rx.await.map_err(|_| AdapterError::Stopped)??)
    }

    pub async fn tick(&self) -> Result<TickReport, AdapterError> {
        let (reply, rx) = oneshot::channel();
        self.send(BoardCommand::Tick { reply }).await?;
        rx.await.map_err(|_| AdapterError::Stopped)
    }

    pub async fn reset(&self) -> Result<(), AdapterError> {
        self.send(BoardCommand::Reset).await
    }

    pub async fn shutdown(&self) -> Result<(), AdapterError> {
        self.send(BoardCommand::Shutdown).await
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> BoardSnapshot {
        self.snap_rx.borrow().clone()
    }

    /// Receiver for change notifications.
    pub fn subscribe(&self) -> watch::Receiver<BoardSnapshot> {
        self.snap_rx.clone()
    }

    async fn send(&self, cmd: BoardCommand) -> Result<(), AdapterError> {
        self.cmd_tx
            .send(cmd)
            .await
            .map_err(|_| AdapterError::Stopped)
    }
}

/// Build a driver around `session`.
///
/// `drop_period: None` disables the interval; ticks then only happen through
/// [`DriverHandle::tick`].
pub fn driver(
    session: GameSession,
    drop_period: Option<Duration>,
    max_pending: usize,
) -> (BoardDriver, DriverHandle) {
    let (cmd_tx, cmd_rx) = mpsc::channel(max_pending.max(1));
    let (snap_tx, snap_rx) = watch::channel(session.snapshot());
    (
        BoardDriver {
            session,
            cmd_rx,
            snap_tx,
            drop_period,
        },
        DriverHandle { cmd_tx, snap_rx },
    )
}

/// Spawn a driver on the current tokio runtime.
pub fn spawn_driver(
    session: GameSession,
    drop_period: Option<Duration>,
    max_pending: usize,
) -> (DriverHandle, JoinHandle<GameSession>) {
    let (driver, handle) = driver(session, drop_period, max_pending);
    (handle, tokio::spawn(driver.run()))
}

/// Running adapter instance for a synchronous front end.
///
/// Owns its own tokio runtime; calls block only for the few microseconds the
/// driver needs to apply a command.
pub struct Adapter {
    rt: Runtime,
    handle: DriverHandle,
    join: Option<JoinHandle<GameSession>>,
}

impl Adapter {
    pub fn start(config: &AdapterConfig) -> Result<Self, AdapterError> {
        let session = GameSession::new(config.session_options())?;
        let rt = Runtime::new()?;
        let (handle, join) = {
            let _guard = rt.enter();
            spawn_driver(
                session,
                Some(config.drop_period()),
                config.max_pending_commands,
            )
        };
        Ok(Self {
            rt,
            handle,
            join: Some(join),
        })
    }

    pub fn click(&self, pos: Position) -> Result<ClickOutcome, AdapterError> {
        self.rt.block_on(self.handle.click(pos))
    }

    pub fn apply_action(
        &self,
        action: BoardAction,
        cursor: Position,
    ) -> Result<Option<ClickOutcome>, AdapterError> {
        self.rt.block_on(self.handle.action(action, cursor))
    }

    pub fn reset(&self) -> Result<(), AdapterError> {
        self.rt.block_on(self.handle.reset())
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.handle.snapshot()
    }

    pub fn handle(&self) -> &DriverHandle {
        &self.handle
    }

    /// Stop the driver and return its final session.
    pub fn shutdown(mut self) -> Result<GameSession, AdapterError> {
        let join = self.join.take().ok_or(AdapterError::Stopped)?;
        // Shutdown fails only if the driver is already gone; the join below still reports it.
        let _ = self.rt.block_on(self.handle.shutdown());
        self.rt.block_on(join).map_err(|_| AdapterError::Stopped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, SessionOptions};
    use crate::types::{Cell, GemColor};

    const R: Cell = Cell::Gem(GemColor::Red);
    const B: Cell = Cell::Gem(GemColor::Blue);

    fn small_session() -> GameSession {
        GameSession::new(SessionOptions {
            rows: 3,
            cols: 3,
            seed: 9,
            ..SessionOptions::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn manual_ticks_fill_the_board() {
        let (handle, join) = spawn_driver(small_session(), None, 4);
        for _ in 0..3 {
            handle.tick().await.unwrap();
        }
        let snap = handle.snapshot();
        assert_eq!(snap.ticks, 3);
        assert!(snap.empty_cells().is_empty());

        handle.shutdown().await.unwrap();
        let session = join.await.unwrap();
        assert!(session.board().is_full());
    }

    #[tokio::test]
    async fn swap_is_serialized_with_ticks() {
        let board = Board::from_rows(&[[R, B, R, R]]).unwrap();
        let (handle, join) = spawn_driver(GameSession::with_board(board, 1), None, 4);

        assert!(handle
            .swap(Position::new(0, 0), Position::new(0, 1))
            .await
            .unwrap());
        let snap = handle.snapshot();
        assert_eq!(snap.cells, vec![B.code(), 0, 0, 0]);
        assert_eq!(snap.swaps, 1);

        handle.shutdown().await.unwrap();
        join.await.unwrap();
    }

    #[tokio::test]
    async fn invalid_click_reports_board_error() {
        let (handle, _join) = spawn_driver(small_session(), None, 4);
        let err = handle.click(Position::new(3, 0)).await.unwrap_err();
        assert!(matches!(
            err,
            AdapterError::Board(BoardError::InvalidPosition { row: 3, .. })
        ));
    }

    #[tokio::test]
    async fn handle_fails_after_shutdown() {
        let (handle, join) = spawn_driver(small_session(), None, 4);
        handle.shutdown().await.unwrap();
        join.await.unwrap();
        assert!(matches!(handle.tick().await, Err(AdapterError::Stopped)));
    }

    #[test]
    fn sync_adapter_round_trip() {
        let config = AdapterConfig {
            rows: 4,
            cols: 4,
            seed: Some(3),
            prefill: true,
            ..AdapterConfig::default()
        };
        let adapter = Adapter::start(&config).unwrap();
        assert!(adapter.snapshot().empty_cells().is_empty());

        let outcome = adapter.click(Position::new(1, 1)).unwrap();
        assert_eq!(outcome, ClickOutcome::Selected(Position::new(1, 1)));
        adapter
            .apply_action(BoardAction::Cancel, Position::new(0, 0))
            .unwrap();
        assert_eq!(adapter.snapshot().selected, None);

        let session = adapter.shutdown().unwrap();
        assert_eq!(session.board().rows(), 4);
    }
}
