//! Move resolution
//!
//! Walks an arrow's path cell by cell (through its corner, if any, then along
//! its direction) and reports whether it can leave the board. The first
//! footprint hit in walk order wins; nothing past it matters.

use serde::{Deserialize, Serialize};

use super::arrow::Arrow;
use super::board::Board;
use super::direction::Direction;

/// Outcome of trying to move one arrow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Arrow is already moving (or its data is unusable); ignore the request
    NoOp,
    /// Path is open to the edge. `distance` is in cells: corner steps plus the
    /// board dimension along the exit axis.
    Clear { distance: i32 },
    /// `blocker` is hit after walking `steps` cells
    Blocked { blocker: u32, steps: i32 },
}

/// Resolve a move for `arrow` against the stationary arrows on `board`
pub fn resolve(arrow: &Arrow, board: &Board) -> Resolution {
    if arrow.is_moving() {
        return Resolution::NoOp;
    }

    let mut cursor = arrow.tail();
    let mut steps = 0;

    // Corner phase
    if let Some(corner) = arrow.corner {
        let d_row = corner.row - arrow.row;
        let d_col = corner.col - arrow.col;
        if d_row != 0 && d_col != 0 {
            log::warn!(
                "arrow {} has a diagonal corner {} from tail {}",
                arrow.id,
                corner,
                cursor
            );
            return Resolution::NoOp;
        }
        if let Some(leg) = Direction::from_delta(d_row, d_col) {
            while cursor != corner {
                cursor = cursor.step(leg);
                steps += 1;
                if let Some(blocker) = board.footprint_occupied(cursor.row, cursor.col, arrow.id) {
                    return Resolution::Blocked {
                        blocker: blocker.id,
                        steps,
                    };
                }
            }
        }
    }
    let corner_steps = steps;

    // Exit phase; bounded by rows + cols since the board is finite
    loop {
        cursor = cursor.step(arrow.direction);
        steps += 1;

        if !board.in_bounds(cursor) {
            let span = if arrow.direction.is_vertical() {
                board.rows
            } else {
                board.cols
            };
            return Resolution::Clear {
                distance: corner_steps + span,
            };
        }

        if let Some(blocker) = board.footprint_occupied(cursor.row, cursor.col, arrow.id) {
            return Resolution::Blocked {
                blocker: blocker.id,
                steps,
            };
        }
    }
}

/// How far a blocked arrow slides before turning back, in presentation units.
///
/// Never negative: an arrow already touching its blocker stays put.
pub fn bounce_stop_distance(steps: i32, cell_size: f32, visual_length: f32) -> f32 {
    (steps as f32 * cell_size - visual_length).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::arrow::{ArrowConfig, Cell, FootprintShape, Motion};

    fn board(rows: i32, cols: i32, configs: &[ArrowConfig]) -> Board {
        let mut board = Board::new(rows, cols, FootprintShape::Body);
        board.reset(configs);
        board
    }

    fn resolve_id(board: &Board, id: u32) -> Resolution {
        resolve(board.get(id).unwrap(), board)
    }

    #[test]
    fn test_straight_clear() {
        let b = board(10, 10, &[ArrowConfig::straight(1, 3, 3, Direction::Up)]);
        assert_eq!(resolve_id(&b, 1), Resolution::Clear { distance: 10 });
    }

    #[test]
    fn test_blocked_by_body() {
        let b = board(
            10,
            10,
            &[
                ArrowConfig::straight(1, 5, 4, Direction::Left),
                ArrowConfig::straight(2, 5, 2, Direction::Left),
            ],
        );
        assert_eq!(
            resolve_id(&b, 1),
            Resolution::Blocked {
                blocker: 2,
                steps: 2
            }
        );
        // B itself runs off the left edge
        assert_eq!(resolve_id(&b, 2), Resolution::Clear { distance: 10 });
    }

    #[test]
    fn test_hits_body_before_tail() {
        // Arrow 2's body extends toward arrow 1, so contact comes one cell early
        let b = board(
            10,
            10,
            &[
                ArrowConfig::straight(1, 5, 7, Direction::Left),
                ArrowConfig::straight(2, 5, 3, Direction::Right),
            ],
        );
        assert_eq!(
            resolve_id(&b, 1),
            Resolution::Blocked {
                blocker: 2,
                steps: 2
            }
        );
    }

    #[test]
    fn test_bent_clear_distance() {
        let b = board(
            20,
            20,
            &[ArrowConfig::bent(1, 2, 4, Cell::new(4, 4), Direction::Right)],
        );
        assert_eq!(resolve_id(&b, 1), Resolution::Clear { distance: 22 });
    }

    #[test]
    fn test_blocked_in_corner_phase() {
        let b = board(
            20,
            20,
            &[
                ArrowConfig::bent(1, 2, 4, Cell::new(5, 4), Direction::Right),
                ArrowConfig::straight(2, 3, 4, Direction::Left),
            ],
        );
        assert_eq!(
            resolve_id(&b, 1),
            Resolution::Blocked {
                blocker: 2,
                steps: 1
            }
        );
    }

    #[test]
    fn test_nearest_blocker_wins() {
        let b = board(
            10,
            10,
            &[
                ArrowConfig::straight(1, 9, 0, Direction::Up),
                ArrowConfig::straight(2, 2, 0, Direction::Right),
                ArrowConfig::straight(3, 6, 0, Direction::Right),
            ],
        );
        assert_eq!(
            resolve_id(&b, 1),
            Resolution::Blocked {
                blocker: 3,
                steps: 3
            }
        );
    }

    #[test]
    fn test_moving_arrows_are_transparent() {
        let mut b = board(
            10,
            10,
            &[
                ArrowConfig::straight(1, 5, 4, Direction::Left),
                ArrowConfig::straight(2, 5, 2, Direction::Left),
            ],
        );
        b.get_mut(2).unwrap().motion = Motion::Exiting {
            elapsed: 0.1,
            target: 640.0,
        };
        assert_eq!(resolve_id(&b, 1), Resolution::Clear { distance: 10 });
        // And a moving arrow itself resolves to nothing
        assert_eq!(resolve_id(&b, 2), Resolution::NoOp);
    }

    #[test]
    fn test_tail_only_shape_ignores_body() {
        let mut b = Board::new(10, 10, FootprintShape::TailOnly);
        b.reset(&[
            ArrowConfig::straight(1, 5, 7, Direction::Left),
            ArrowConfig::straight(2, 5, 3, Direction::Right),
        ]);
        assert_eq!(
            resolve_id(&b, 1),
            Resolution::Blocked {
                blocker: 2,
                steps: 4
            }
        );
    }

    #[test]
    fn test_diagonal_corner_is_noop() {
        let b = board(
            10,
            10,
            &[ArrowConfig::bent(1, 2, 2, Cell::new(4, 4), Direction::Right)],
        );
        assert_eq!(resolve_id(&b, 1), Resolution::NoOp);
    }

    #[test]
    fn test_bounce_stop_distance() {
        assert_eq!(bounce_stop_distance(3, 50.0, 50.0), 100.0);
        assert_eq!(bounce_stop_distance(1, 50.0, 50.0), 0.0);
        assert_eq!(bounce_stop_distance(1, 50.0, 80.0), 0.0);
    }
}
