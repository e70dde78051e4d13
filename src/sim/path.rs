//! Path geometry for drawing
//!
//! An arrow is drawn as a stem that follows its path (tail to corner, then
//! along `direction`) and a head at the far end. Animation just slides both
//! ends forward by the arrow's offset. Positions are cell centres in
//! presentation units, y growing downward.

use glam::Vec2;

use super::arrow::{Arrow, Cell};
use crate::consts::BODY_CELLS;

/// A point on an arrow's path and the heading there
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub pos: Vec2,
    /// Degrees, clockwise from +x
    pub angle: f32,
}

/// What the renderer needs for one arrow this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowGeometry {
    pub tail: PathPoint,
    /// Set while the visible stem still bends through the corner
    pub corner: Option<Vec2>,
    pub head: PathPoint,
}

/// Centre of `cell`
#[inline]
pub fn cell_center(cell: Cell, cell_size: f32) -> Vec2 {
    Vec2::new(
        cell.col as f32 * cell_size + cell_size / 2.0,
        cell.row as f32 * cell_size + cell_size / 2.0,
    )
}

/// Cell under a point (e.g. a tap)
#[inline]
pub fn cell_at(point: Vec2, cell_size: f32) -> Cell {
    Cell::new(
        (point.y / cell_size).floor() as i32,
        (point.x / cell_size).floor() as i32,
    )
}

/// Point `dist` units along the path from the tail centre
pub fn point_on_path(arrow: &Arrow, dist: f32, cell_size: f32) -> PathPoint {
    let start = cell_center(arrow.tail(), cell_size);
    let leg = arrow.corner_steps() as f32 * cell_size;

    match arrow.corner {
        Some(corner) if dist > leg => {
            let corner = cell_center(corner, cell_size);
            PathPoint {
                pos: corner + arrow.direction.unit_vec() * (dist - leg),
                angle: arrow.direction.angle_degrees(),
            }
        }
        _ => {
            let dir = arrow.start_direction();
            PathPoint {
                pos: start + dir.unit_vec() * dist,
                angle: dir.angle_degrees(),
            }
        }
    }
}

/// Resting length from tail to head tip, in units
pub fn static_length(arrow: &Arrow, cell_size: f32) -> f32 {
    (arrow.corner_steps() + BODY_CELLS) as f32 * cell_size
}

/// Tail, optional bend and head for the arrow's current offset
pub fn arrow_geometry(arrow: &Arrow, cell_size: f32) -> ArrowGeometry {
    let tail_dist = arrow.offset;
    let head_dist = arrow.offset + static_length(arrow, cell_size);
    let leg = arrow.corner_steps() as f32 * cell_size;

    let corner = arrow
        .corner
        .filter(|_| tail_dist < leg && head_dist > leg)
        .map(|c| cell_center(c, cell_size));

    ArrowGeometry {
        tail: point_on_path(arrow, tail_dist, cell_size),
        corner,
        head: point_on_path(arrow, head_dist, cell_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::arrow::ArrowConfig;
    use crate::sim::direction::Direction;

    const CS: f32 = 10.0;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_cell_round_trip() {
        let cell = Cell::new(3, 7);
        assert_eq!(cell_at(cell_center(cell, CS), CS), cell);
        assert_eq!(cell_at(Vec2::new(-1.0, 5.0), CS), Cell::new(0, -1));
    }

    #[test]
    fn test_straight_geometry_at_rest() {
        let arrow = Arrow::from_config(&ArrowConfig::straight(1, 3, 3, Direction::Up));
        let geo = arrow_geometry(&arrow, CS);
        assert!(approx(geo.tail.pos, Vec2::new(35.0, 35.0)));
        assert!(approx(geo.head.pos, Vec2::new(35.0, 15.0)));
        assert_eq!(geo.head.angle, -90.0);
        assert!(geo.corner.is_none());
    }

    #[test]
    fn test_bent_path_turns_at_corner() {
        let mut arrow = Arrow::from_config(&ArrowConfig::bent(
            1,
            2,
            4,
            Cell::new(4, 4),
            Direction::Right,
        ));
        let first_leg = point_on_path(&arrow, 10.0, CS);
        assert!(approx(first_leg.pos, Vec2::new(45.0, 35.0)));
        assert_eq!(first_leg.angle, 90.0);

        let geo = arrow_geometry(&arrow, CS);
        assert!(approx(geo.head.pos, Vec2::new(65.0, 45.0)));
        assert_eq!(geo.head.angle, 0.0);
        assert!(geo.corner.is_some());

        // Once the tail is past the bend, the stem is straight
        arrow.offset = 25.0;
        let geo = arrow_geometry(&arrow, CS);
        assert!(geo.corner.is_none());
        assert!(approx(geo.tail.pos, Vec2::new(50.0, 45.0)));
    }
}
