//! Deterministic simulation module
//!
//! All puzzle logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (level order)
//! - No rendering or platform dependencies

pub mod arrow;
pub mod board;
pub mod direction;
pub mod path;
pub mod resolve;
pub mod state;
pub mod tick;

pub use arrow::{Arrow, ArrowColor, ArrowConfig, Cell, FootprintShape, Motion};
pub use board::Board;
pub use direction::Direction;
pub use path::{ArrowGeometry, PathPoint, arrow_geometry, cell_at, cell_center, point_on_path};
pub use resolve::{Resolution, bounce_stop_distance, resolve};
pub use state::{FlashTask, GameEvent, GameState, MoveOutcome};
pub use tick::{request_move, tick};
