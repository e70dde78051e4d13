//! Load-time validation errors
//!
//! Only level data can be rejected. Move requests never fail; see
//! [`crate::sim::MoveOutcome`].

use thiserror::Error;

use crate::sim::Cell;

/// Errors raised when a level config is rejected at load time.
#[derive(Debug, Error, PartialEq)]
pub enum LevelError {
    #[error("board must have at least one row and one column (got {rows}x{cols})")]
    EmptyBoard { rows: i32, cols: i32 },
    #[error("arrow id {0} appears more than once")]
    DuplicateId(u32),
    #[error("arrow {id} tail {tail} lies outside the {rows}x{cols} board")]
    TailOutOfBounds {
        id: u32,
        tail: Cell,
        rows: i32,
        cols: i32,
    },
    #[error("arrow {id} corner {corner} lies outside the {rows}x{cols} board")]
    CornerOutOfBounds {
        id: u32,
        corner: Cell,
        rows: i32,
        cols: i32,
    },
    #[error("arrow {id} corner {corner} is not axis-aligned with tail {tail}")]
    DiagonalCorner { id: u32, tail: Cell, corner: Cell },
    #[error("level data could not be parsed: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for LevelError {
    fn from(err: serde_json::Error) -> Self {
        LevelError::Parse(err.to_string())
    }
}
