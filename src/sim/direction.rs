//! Cardinal directions on the grid
//!
//! Rows grow downward and columns grow to the right, matching screen space.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One of the four directions an arrow can travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit step as `(d_row, d_col)`
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Unit vector in screen space (x = column axis, y = row axis)
    #[inline]
    pub fn unit_vec(self) -> Vec2 {
        let (d_row, d_col) = self.delta();
        Vec2::new(d_col as f32, d_row as f32)
    }

    /// Heading in degrees, clockwise from +x in screen space
    pub fn angle_degrees(self) -> f32 {
        match self {
            Direction::Up => -90.0,
            Direction::Down => 90.0,
            Direction::Left => 180.0,
            Direction::Right => 0.0,
        }
    }

    /// Direction of an axis-aligned offset. Only the sign matters.
    ///
    /// Returns `None` for a zero or diagonal offset.
    pub fn from_delta(d_row: i32, d_col: i32) -> Option<Direction> {
        match (d_row.signum(), d_col.signum()) {
            (-1, 0) => Some(Direction::Up),
            (1, 0) => Some(Direction::Down),
            (0, -1) => Some(Direction::Left),
            (0, 1) => Some(Direction::Right),
            _ => None,
        }
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_matches_unit_vec() {
        for dir in Direction::ALL {
            let (d_row, d_col) = dir.delta();
            let v = dir.unit_vec();
            assert_eq!(v.x, d_col as f32);
            assert_eq!(v.y, d_row as f32);
            assert!((v.length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_from_delta() {
        assert_eq!(Direction::from_delta(-3, 0), Some(Direction::Up));
        assert_eq!(Direction::from_delta(2, 0), Some(Direction::Down));
        assert_eq!(Direction::from_delta(0, -1), Some(Direction::Left));
        assert_eq!(Direction::from_delta(0, 7), Some(Direction::Right));
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(1, 1), None);
    }

    #[test]
    fn test_angle_matches_heading() {
        for dir in Direction::ALL {
            let rad = dir.angle_degrees().to_radians();
            let v = Vec2::new(rad.cos(), rad.sin());
            assert!((v - dir.unit_vec()).length() < 1e-5, "{dir:?}");
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Direction::Left).unwrap();
        assert_eq!(json, "\"LEFT\"");
        let dir: Direction = serde_json::from_str("\"UP\"").unwrap();
        assert_eq!(dir, Direction::Up);
    }
}
