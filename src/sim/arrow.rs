//! Arrow entities and their footprints

use std::fmt;

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use crate::consts::BODY_CELLS;

/// A grid cell, 0-indexed. Negative or oversized values are off-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell `steps` cells away along `dir`
    #[inline]
    pub fn offset(self, dir: Direction, steps: i32) -> Cell {
        let (d_row, d_col) = dir.delta();
        Cell::new(self.row + d_row * steps, self.col + d_col * steps)
    }

    #[inline]
    pub fn step(self, dir: Direction) -> Cell {
        self.offset(dir, 1)
    }

    pub fn manhattan(self, other: Cell) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Which cells count as occupied for collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FootprintShape {
    /// Tail cell only (straight arrows, single-cell occupancy)
    TailOnly,
    /// Tail, corner and the two body cells past the bend
    #[default]
    Body,
}

/// Static description of an arrow as authored in a level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrowConfig {
    pub id: u32,
    pub row: i32,
    pub col: i32,
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner: Option<Cell>,
}

impl ArrowConfig {
    pub fn straight(id: u32, row: i32, col: i32, direction: Direction) -> Self {
        Self {
            id,
            row,
            col,
            direction,
            corner: None,
        }
    }

    pub fn bent(id: u32, row: i32, col: i32, corner: Cell, direction: Direction) -> Self {
        Self {
            id,
            row,
            col,
            direction,
            corner: Some(corner),
        }
    }
}

/// Colour marker the presentation layer maps to a real colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ArrowColor {
    #[default]
    Default,
    /// Sliding off the board
    Exiting,
    /// Tapped while its path was blocked; stays until the level is reloaded
    Blocked,
    /// Flash marker on the arrow that was bumped into
    Hit,
}

/// Per-arrow move state. Times are seconds, offsets presentation units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Motion {
    #[default]
    Idle,
    /// Sliding from 0 to `target`; the arrow is removed when this ends
    Exiting { elapsed: f32, target: f32 },
    /// Advancing from 0 toward the blocker
    BounceOut { elapsed: f32, target: f32 },
    /// Returning from `from` to 0
    BounceBack { elapsed: f32, from: f32 },
}

/// An arrow on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arrow {
    pub id: u32,
    pub row: i32,
    pub col: i32,
    pub direction: Direction,
    pub corner: Option<Cell>,
    pub color: ArrowColor,
    /// Distance travelled along the path (presentation units)
    pub offset: f32,
    pub motion: Motion,
}

impl Arrow {
    /// Fresh arrow with motion and colour state zeroed
    pub fn from_config(config: &ArrowConfig) -> Self {
        Self {
            id: config.id,
            row: config.row,
            col: config.col,
            direction: config.direction,
            corner: config.corner,
            color: ArrowColor::Default,
            offset: 0.0,
            motion: Motion::Idle,
        }
    }

    #[inline]
    pub fn tail(&self) -> Cell {
        Cell::new(self.row, self.col)
    }

    /// True while an exit or bounce is in flight
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.motion != Motion::Idle
    }

    /// Cells from tail to corner (0 for straight arrows)
    pub fn corner_steps(&self) -> i32 {
        self.corner.map_or(0, |c| c.manhattan(self.tail()))
    }

    /// Direction of the first leg: toward the corner, or `direction` if straight
    pub fn start_direction(&self) -> Direction {
        self.corner
            .and_then(|c| Direction::from_delta(c.row - self.row, c.col - self.col))
            .unwrap_or(self.direction)
    }

    /// Where the body starts: the corner, or the tail when straight
    #[inline]
    pub fn bend(&self) -> Cell {
        self.corner.unwrap_or(self.tail())
    }

    /// Cell holding the arrow head at rest
    pub fn head(&self) -> Cell {
        self.bend().offset(self.direction, BODY_CELLS)
    }

    /// Whether this arrow's footprint covers `cell`
    pub fn occupies(&self, cell: Cell, shape: FootprintShape) -> bool {
        if self.tail() == cell {
            return true;
        }
        if shape == FootprintShape::TailOnly {
            return false;
        }
        if self.corner == Some(cell) {
            return true;
        }
        let bend = self.bend();
        (1..=BODY_CELLS).any(|k| bend.offset(self.direction, k) == cell)
    }

    /// All footprint cells, tail first. May include off-board cells.
    pub fn footprint(&self, shape: FootprintShape) -> Vec<Cell> {
        let mut cells = vec![self.tail()];
        if shape == FootprintShape::TailOnly {
            return cells;
        }
        if let Some(corner) = self.corner {
            if corner != self.tail() {
                cells.push(corner);
            }
        }
        let bend = self.bend();
        cells.extend((1..=BODY_CELLS).map(|k| bend.offset(self.direction, k)));
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_footprint() {
        let arrow = Arrow::from_config(&ArrowConfig::straight(1, 5, 2, Direction::Left));
        assert_eq!(
            arrow.footprint(FootprintShape::Body),
            vec![Cell::new(5, 2), Cell::new(5, 1), Cell::new(5, 0)]
        );
        assert_eq!(arrow.footprint(FootprintShape::TailOnly), vec![Cell::new(5, 2)]);
        assert_eq!(arrow.head(), Cell::new(5, 0));
    }

    #[test]
    fn test_bent_footprint_skips_first_leg() {
        let arrow = Arrow::from_config(&ArrowConfig::bent(
            1,
            2,
            4,
            Cell::new(4, 4),
            Direction::Right,
        ));
        let cells = arrow.footprint(FootprintShape::Body);
        assert_eq!(
            cells,
            vec![Cell::new(2, 4), Cell::new(4, 4), Cell::new(4, 5), Cell::new(4, 6)]
        );
        // The cell between tail and corner is not part of the footprint
        assert!(!arrow.occupies(Cell::new(3, 4), FootprintShape::Body));
        for cell in cells {
            assert!(arrow.occupies(cell, FootprintShape::Body));
        }
    }

    #[test]
    fn test_corner_steps_and_start_direction() {
        let bent = Arrow::from_config(&ArrowConfig::bent(
            3,
            12,
            4,
            Cell::new(10, 4),
            Direction::Right,
        ));
        assert_eq!(bent.corner_steps(), 2);
        assert_eq!(bent.start_direction(), Direction::Up);

        let straight = Arrow::from_config(&ArrowConfig::straight(4, 13, 4, Direction::Right));
        assert_eq!(straight.corner_steps(), 0);
        assert_eq!(straight.start_direction(), Direction::Right);
    }

    #[test]
    fn test_fresh_arrow_is_idle() {
        let arrow = Arrow::from_config(&ArrowConfig::straight(9, 0, 0, Direction::Down));
        assert!(!arrow.is_moving());
        assert_eq!(arrow.color, ArrowColor::Default);
        assert_eq!(arrow.offset, 0.0);
    }

    #[test]
    fn test_config_json() {
        let json = r#"{"id":1,"row":2,"col":4,"direction":"RIGHT","corner":{"row":4,"col":4}}"#;
        let config: ArrowConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config,
            ArrowConfig::bent(1, 2, 4, Cell::new(4, 4), Direction::Right)
        );

        let straight: ArrowConfig =
            serde_json::from_str(r#"{"id":2,"row":7,"col":4,"direction":"DOWN"}"#).unwrap();
        assert_eq!(straight.corner, None);
    }
}
