//! Board model: the arrow set and grid bounds
//!
//! Pure queries plus add/remove. Nothing here fails or blocks.

use serde::{Deserialize, Serialize};

use super::arrow::{Arrow, ArrowConfig, Cell, FootprintShape};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub rows: i32,
    pub cols: i32,
    /// Collision shape used by `footprint_occupied`; follows
    /// `Settings::footprint` on every move request
    pub shape: FootprintShape,
    arrows: Vec<Arrow>,
}

impl Board {
    pub fn new(rows: i32, cols: i32, shape: FootprintShape) -> Self {
        Self {
            rows,
            cols,
            shape,
            arrows: Vec::new(),
        }
    }

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        (0..self.rows).contains(&cell.row) && (0..self.cols).contains(&cell.col)
    }

    /// True iff some arrow's tail sits on `(row, col)`. Off-board cells are
    /// never occupied.
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        let cell = Cell::new(row, col);
        self.in_bounds(cell) && self.arrows.iter().any(|a| a.tail() == cell)
    }

    /// First stationary arrow other than `exclude_id` whose footprint covers
    /// `(row, col)`. Moving arrows are transparent.
    pub fn footprint_occupied(&self, row: i32, col: i32, exclude_id: u32) -> Option<&Arrow> {
        let cell = Cell::new(row, col);
        self.arrows
            .iter()
            .filter(|a| a.id != exclude_id && !a.is_moving())
            .find(|a| a.occupies(cell, self.shape))
    }

    /// First arrow drawn over `cell` (tail, corner or body), for tap handling
    pub fn arrow_at(&self, cell: Cell) -> Option<&Arrow> {
        self.arrows
            .iter()
            .find(|a| a.occupies(cell, FootprintShape::Body))
    }

    /// Remove by id. No-op when absent; returns whether anything was removed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.arrows.len();
        self.arrows.retain(|a| a.id != id);
        self.arrows.len() != before
    }

    /// Replace the whole arrow set with fresh instances
    pub fn reset(&mut self, configs: &[ArrowConfig]) {
        self.arrows = configs.iter().map(Arrow::from_config).collect();
    }

    pub fn get(&self, id: u32) -> Option<&Arrow> {
        self.arrows.iter().find(|a| a.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Arrow> {
        self.arrows.iter_mut().find(|a| a.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }

    pub(crate) fn arrows_mut(&mut self) -> &mut [Arrow] {
        &mut self.arrows
    }

    pub fn len(&self) -> usize {
        self.arrows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrows.is_empty()
    }
}
