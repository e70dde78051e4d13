//! Level data
//!
//! A level is immutable input: board size plus the initial arrow configs.
//! Arrows are rebuilt from it on every load so no motion or colour state
//! survives a reset.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_COLS, DEFAULT_ROWS};
use crate::error::LevelError;
use crate::sim::{ArrowConfig, Cell, Direction};

/// Number of levels shipped with the game
pub const BUILTIN_LEVELS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    #[serde(default = "default_rows")]
    pub rows: i32,
    #[serde(default = "default_cols")]
    pub cols: i32,
    pub arrows: Vec<ArrowConfig>,
}

fn default_rows() -> i32 {
    DEFAULT_ROWS
}

fn default_cols() -> i32 {
    DEFAULT_COLS
}

impl Level {
    pub fn new(rows: i32, cols: i32, arrows: Vec<ArrowConfig>) -> Self {
        Self { rows, cols, arrows }
    }

    /// Parse and validate a level from JSON
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let level: Level = serde_json::from_str(json)?;
        level.validate()?;
        Ok(level)
    }

    /// Reject data the resolver cannot walk
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.rows <= 0 || self.cols <= 0 {
            return Err(LevelError::EmptyBoard {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let in_bounds =
            |c: Cell| (0..self.rows).contains(&c.row) && (0..self.cols).contains(&c.col);
        let mut ids = HashSet::new();
        let mut tails = HashSet::new();

        for arrow in &self.arrows {
            if !ids.insert(arrow.id) {
                return Err(LevelError::DuplicateId(arrow.id));
            }

            let tail = Cell::new(arrow.row, arrow.col);
            if !in_bounds(tail) {
                return Err(LevelError::TailOutOfBounds {
                    id: arrow.id,
                    tail,
                    rows: self.rows,
                    cols: self.cols,
                });
            }

            if let Some(corner) = arrow.corner {
                if !in_bounds(corner) {
                    return Err(LevelError::CornerOutOfBounds {
                        id: arrow.id,
                        corner,
                        rows: self.rows,
                        cols: self.cols,
                    });
                }
                if corner.row != tail.row && corner.col != tail.col {
                    return Err(LevelError::DiagonalCorner {
                        id: arrow.id,
                        tail,
                        corner,
                    });
                }
            }

            if !tails.insert(tail) {
                log::warn!("arrow {} shares tail {} with another arrow", arrow.id, tail);
            }
        }

        Ok(())
    }

    /// Built-in level by number (1-based)
    pub fn builtin(number: u32) -> Option<Level> {
        use Direction::*;
        let s = ArrowConfig::straight;
        let b = ArrowConfig::bent;

        let level = match number {
            1 => Level::new(
                10,
                10,
                vec![s(1, 3, 3, Up), s(2, 3, 4, Right), s(3, 5, 4, Down), s(4, 5, 2, Left)],
            ),
            2 => Level::new(
                20,
                20,
                vec![
                    // Cluster in the middle
                    s(1, 10, 10, Up),
                    s(2, 4, 5, Right),
                    s(3, 14, 8, Down),
                    s(4, 13, 5, Left),
                    // Perimeter blockers
                    s(5, 2, 8, Right),
                    s(6, 6, 14, Up),
                    s(7, 17, 8, Left),
                    s(8, 13, 2, Down),
                    // Outliers
                    s(9, 1, 1, Down),
                    s(10, 17, 17, Up),
                ],
            ),
            3 => Level::new(
                20,
                20,
                vec![
                    b(1, 2, 4, Cell::new(4, 4), Right),
                    s(2, 7, 4, Right),
                    b(3, 12, 4, Cell::new(10, 4), Right),
                    s(4, 13, 4, Right),
                    b(5, 18, 4, Cell::new(16, 4), Right),
                    s(6, 2, 8, Down),
                    s(7, 5, 8, Down),
                    s(8, 8, 8, Down),
                    s(9, 12, 8, Down),
                    s(10, 16, 8, Down),
                ],
            ),
            _ => return None,
        };
        Some(level)
    }
}
