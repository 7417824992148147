use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::error::Error;
use crate::grid::{Cell, GRID_SIZE};
use crate::simulation::Simulation;

/// Interval between generations while the game is running.
pub const TICK_INTERVAL: Duration = Duration::from_millis(300);

/// Whether the game is advancing generations on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
}

/// Handle to the ticker thread of a running game.
///
/// The sender doubles as the cancellation token: the thread sleeps on the
/// channel between ticks, so a shutdown message wakes it immediately.
struct Ticker {
    shutdown: Sender<()>,
    thread: JoinHandle<()>,
}

impl Ticker {
    /// Signal the thread and wait for it to exit. After this returns no
    /// further tick can fire.
    fn stop_and_join(self) {
        // A send failure means the thread is already gone; join either way.
        let _ = self.shutdown.send(());
        let _ = self.thread.join();
    }
}

/// The simulation context: an edge-bounded Life board plus its
/// Stopped/Running lifecycle.
///
/// All mutation is funneled through the one mutex, so ticker advances and
/// edits from the embedding layer are serialized. The run state is derived
/// from ticker presence, which keeps the "ticker exists iff running"
/// invariant structural.
pub struct Game {
    sim: Arc<Mutex<Simulation>>,
    interval: Duration,
    ticker: Option<Ticker>,
}

impl Game {
    /// A stopped game with an all-dead default-size board.
    pub fn new() -> Self {
        Self::with_interval(TICK_INTERVAL)
    }

    /// A stopped game ticking at a custom interval once started.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            sim: Arc::new(Mutex::new(Simulation::new(GRID_SIZE))),
            interval,
            ticker: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        if self.ticker.is_some() {
            RunState::Running
        } else {
            RunState::Stopped
        }
    }

    /// Whether direct cell edits are currently accepted.
    pub fn can_edit(&self) -> bool {
        self.state() == RunState::Stopped
    }

    /// Begin advancing one generation per tick interval. No-op if already
    /// running.
    pub fn start(&mut self) {
        if self.ticker.is_some() {
            return;
        }

        let sim = Arc::clone(&self.sim);
        let interval = self.interval;
        let (shutdown, ticks) = mpsc::channel();

        let thread = thread::spawn(move || loop {
            match ticks.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => sim.lock().unwrap().step(),
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        self.ticker = Some(Ticker { shutdown, thread });
        log::info!("Simulation started");
    }

    /// Stop advancing generations. No-op if already stopped. The ticker
    /// thread is joined before returning, so no tick lands afterwards.
    pub fn stop(&mut self) {
        let Some(ticker) = self.ticker.take() else {
            return;
        };
        ticker.stop_and_join();
        log::info!("Simulation stopped");
    }

    /// Cancel any ticker, kill every cell, and zero the generation counter.
    /// Always leaves the game stopped.
    pub fn reset(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop_and_join();
        }
        self.sim.lock().unwrap().reset();
        log::info!("Simulation reset");
    }

    /// Flip one cell in response to an edit from the embedding layer.
    ///
    /// Returns `Ok(true)` if the edit was applied, `Ok(false)` if it was
    /// rejected because the game is running. The index is validated in
    /// either state.
    pub fn toggle_cell(&mut self, index: usize) -> Result<bool, Error> {
        let mut sim = self.sim.lock().unwrap();
        if self.ticker.is_some() {
            sim.grid().get(index)?;
            log::debug!("Edit ignored while running: cell {index}");
            return Ok(false);
        }
        sim.toggle(index)?;
        Ok(true)
    }

    /// Place a pattern around a center cell. Returns `false` (board
    /// untouched) while running.
    pub fn place_pattern(&mut self, pattern: &[(i32, i32)], center: Option<(usize, usize)>) -> bool {
        if self.ticker.is_some() {
            log::debug!("Edit ignored while running: pattern placement");
            return false;
        }
        self.sim.lock().unwrap().place_pattern(pattern, center);
        true
    }

    /// Random fill at the given density. Returns `false` (board untouched)
    /// while running.
    pub fn randomize(&mut self, density: f64) -> bool {
        if self.ticker.is_some() {
            log::debug!("Edit ignored while running: randomize");
            return false;
        }
        self.sim.lock().unwrap().randomize(density);
        true
    }

    /// Advance a single generation manually. Rejected while running, where
    /// stepping belongs to the ticker; returns whether a step was taken.
    pub fn step_once(&mut self) -> bool {
        if self.ticker.is_some() {
            return false;
        }
        self.sim.lock().unwrap().step();
        true
    }

    /// Generation counter for display.
    pub fn generation(&self) -> u64 {
        self.sim.lock().unwrap().generation()
    }

    /// Live-cell count for display.
    pub fn population(&self) -> u64 {
        self.sim.lock().unwrap().population()
    }

    /// Centered window of cells for display.
    pub fn visible_cells(&self, dimension: usize) -> Result<Vec<Cell>, Error> {
        self.sim.lock().unwrap().visible_cells(dimension)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Game {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop_and_join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::pattern_blinker;

    /// Interval short enough that a running game visibly advances within a
    /// few tens of milliseconds.
    const FAST: Duration = Duration::from_millis(10);

    fn sleep_ticks(n: u32) {
        thread::sleep(FAST * n);
    }

    #[test]
    fn new_game_is_stopped_and_empty() {
        let game = Game::new();
        assert_eq!(game.state(), RunState::Stopped);
        assert!(game.can_edit());
        assert_eq!(game.generation(), 0);
        assert_eq!(game.population(), 0);
        assert_eq!(game.visible_cells(50).unwrap().len(), 2500);
    }

    #[test]
    fn toggle_applies_while_stopped() {
        let mut game = Game::new();
        assert!(game.toggle_cell(1820).unwrap());
        assert_eq!(game.population(), 1);
        assert_eq!(game.generation(), 0);
        // The toggled cell is the first cell of the default display window.
        assert!(game.visible_cells(50).unwrap()[0].alive);
    }

    #[test]
    fn toggle_rejected_while_running() {
        let mut game = Game::with_interval(FAST);
        game.start();
        // The board is empty, so ticking cannot change the population; any
        // change would have to come from the toggle itself.
        assert!(!game.toggle_cell(1820).unwrap());
        assert!(!game.can_edit());
        assert_eq!(game.population(), 0);
        game.stop();
        assert!(game.toggle_cell(1820).unwrap());
        assert_eq!(game.population(), 1);
    }

    #[test]
    fn toggle_out_of_range_surfaces_error() {
        let mut game = Game::new();
        let err = game.toggle_cell(GRID_SIZE * GRID_SIZE).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfRange {
                index: GRID_SIZE * GRID_SIZE,
                len: GRID_SIZE * GRID_SIZE,
            }
        );
    }

    #[test]
    fn ticker_advances_generations() {
        let mut game = Game::with_interval(FAST);
        game.place_pattern(&pattern_blinker(), None);
        game.start();
        assert_eq!(game.state(), RunState::Running);
        sleep_ticks(8);
        game.stop();
        assert!(game.generation() > 0);
        // The blinker is self-sustaining regardless of how many ticks ran.
        assert_eq!(game.population(), 3);
    }

    #[test]
    fn stop_halts_the_counter() {
        let mut game = Game::with_interval(FAST);
        game.start();
        sleep_ticks(5);
        game.stop();
        let frozen = game.generation();
        sleep_ticks(5);
        assert_eq!(game.generation(), frozen);
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut game = Game::with_interval(FAST);
        game.stop();
        assert_eq!(game.state(), RunState::Stopped);

        game.start();
        game.start();
        assert_eq!(game.state(), RunState::Running);

        game.stop();
        game.stop();
        assert_eq!(game.state(), RunState::Stopped);
    }

    #[test]
    fn reset_mid_run_restores_initial_state() {
        let mut game = Game::with_interval(FAST);
        game.randomize(0.3);
        game.start();
        sleep_ticks(4);
        game.reset();
        assert_eq!(game.state(), RunState::Stopped);
        assert_eq!(game.generation(), 0);
        assert_eq!(game.population(), 0);
    }

    #[test]
    fn reset_while_stopped_clears_the_board() {
        let mut game = Game::new();
        game.toggle_cell(0).unwrap();
        game.step_once();
        game.reset();
        assert_eq!(game.generation(), 0);
        assert_eq!(game.population(), 0);
    }

    #[test]
    fn manual_step_only_while_stopped() {
        let mut game = Game::with_interval(FAST);
        assert!(game.step_once());
        assert_eq!(game.generation(), 1);

        game.start();
        assert!(!game.step_once());
        game.stop();
    }

    #[test]
    fn lifecycle_alone_never_advances_the_counter() {
        let mut game = Game::new();
        game.start();
        game.stop();
        game.toggle_cell(42).unwrap();
        // start+stop without a full tick interval elapsing, plus a toggle:
        // none of these are generation steps.
        assert_eq!(game.generation(), 0);
    }

    #[test]
    fn edits_rejected_while_running_leave_board_unchanged() {
        let mut game = Game::with_interval(FAST);
        game.start();
        assert!(!game.place_pattern(&pattern_blinker(), None));
        assert!(!game.randomize(1.0));
        assert_eq!(game.population(), 0);
        game.stop();
    }
}
