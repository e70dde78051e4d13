//! Game state and the transition log
//!
//! Everything the presentation layer observes lives here: the board, the
//! level-complete flag, in-flight flash sequences and the event log.

use serde::{Deserialize, Serialize};

use super::arrow::FootprintShape;
use super::board::Board;
use crate::consts::{DEFAULT_COLS, DEFAULT_ROWS};
use crate::error::LevelError;
use crate::level::Level;

/// Something that happened, in order. Drained by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    LevelLoaded { number: Option<u32>, arrows: usize },
    /// Path clear; `distance` in cells
    ExitStarted { id: u32, distance: i32 },
    BounceStarted { id: u32, blocker: u32, steps: i32 },
    BounceReturned { id: u32 },
    FlashStarted { target: u32 },
    FlashFinished { target: u32 },
    ArrowRemoved { id: u32 },
    LevelComplete,
}

/// What a move request did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// No arrow with that id is on the board
    NotFound,
    /// The arrow is already moving
    Ignored,
    Exiting { distance: i32 },
    Bouncing { blocker: u32, steps: i32 },
}

/// Colour flash on a bumped arrow. Runs to completion on its own; nothing
/// cancels it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashTask {
    pub target: u32,
    /// Intervals elapsed so far
    pub phase: u32,
    /// Intervals in the whole sequence (two per repeat)
    pub total: u32,
    pub timer: f32,
}

impl FlashTask {
    pub fn new(target: u32, repeats: u32) -> Self {
        Self {
            target,
            phase: 0,
            total: repeats * 2,
            timer: 0.0,
        }
    }

    /// Hit on even phases, default on odd ones
    pub fn is_hit_phase(&self) -> bool {
        self.phase % 2 == 0
    }

    pub fn is_done(&self) -> bool {
        self.phase >= self.total
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    /// Pristine copy of what was loaded, for resets
    pub level: Level,
    /// Built-in level number, if the level came from the built-in set
    pub level_number: Option<u32>,
    pub level_complete: bool,
    pub flashes: Vec<FlashTask>,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Empty default-sized board; load a level before playing
    pub fn new(shape: FootprintShape) -> Self {
        Self {
            board: Board::new(DEFAULT_ROWS, DEFAULT_COLS, shape),
            level: Level::new(DEFAULT_ROWS, DEFAULT_COLS, Vec::new()),
            level_number: None,
            level_complete: false,
            flashes: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Replace the board with fresh arrows built from `level`
    pub fn load_level(&mut self, level: Level) -> Result<(), LevelError> {
        level.validate()?;
        let shape = self.board.shape;
        self.board = Board::new(level.rows, level.cols, shape);
        self.board.reset(&level.arrows);
        self.level = level;
        self.level_number = None;
        self.level_complete = false;
        self.flashes.clear();

        log::info!(
            "Loaded {}x{} level with {} arrows",
            self.board.rows,
            self.board.cols,
            self.board.len()
        );
        self.push_event(GameEvent::LevelLoaded {
            number: None,
            arrows: self.board.len(),
        });
        Ok(())
    }

    /// Load a built-in level. Returns `Ok(false)` when no such level exists.
    pub fn load_builtin(&mut self, number: u32) -> Result<bool, LevelError> {
        let Some(level) = Level::builtin(number) else {
            log::warn!("No built-in level {}", number);
            return Ok(false);
        };
        self.load_level(level)?;
        self.level_number = Some(number);
        if let Some(GameEvent::LevelLoaded { number: n, .. }) = self.events.last_mut() {
            *n = Some(number);
        }
        Ok(true)
    }

    /// Reload the current level from its pristine configs
    pub fn reset_level(&mut self) -> Result<(), LevelError> {
        match self.level_number {
            Some(number) => self.load_builtin(number).map(|_| ()),
            None => self.load_level(self.level.clone()),
        }
    }

    /// Advance to the next built-in level. Returns `Ok(false)` past the last.
    pub fn next_level(&mut self) -> Result<bool, LevelError> {
        let next = self.level_number.map_or(1, |n| n + 1);
        self.load_builtin(next)
    }

    /// Remove an arrow and flag completion when the board empties.
    ///
    /// Completion is signalled once per emptying.
    pub fn remove_arrow(&mut self, id: u32) -> bool {
        if !self.board.remove(id) {
            return false;
        }
        self.push_event(GameEvent::ArrowRemoved { id });
        if self.board.is_empty() && !self.level_complete {
            self.level_complete = true;
            log::info!("Level complete");
            self.push_event(GameEvent::LevelComplete);
        }
        true
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        log::debug!("{:?}", event);
        self.events.push(event);
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all events logged since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Nothing left to clear: the last arrow exited, or the level had none
    pub fn is_solved(&self) -> bool {
        self.level_complete || self.board.is_empty()
    }

    /// True while any arrow is animating or any flash is running
    pub fn is_animating(&self) -> bool {
        !self.flashes.is_empty() || self.board.arrows().iter().any(|a| a.is_moving())
    }
}
