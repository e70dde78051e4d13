//! Arrows Runaway - a sliding-arrow grid puzzle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (board, move resolution, animation state)
//! - `level`: Level data, validation and the built-in levels
//! - `settings`: Data-driven timings and geometry
//! - `error`: Load-time validation errors

pub mod error;
pub mod level;
pub mod settings;
pub mod sim;

pub use error::LevelError;
pub use level::Level;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz is plenty for tweened offsets)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default board size when a level does not say otherwise
    pub const DEFAULT_ROWS: i32 = 10;
    pub const DEFAULT_COLS: i32 = 10;

    /// Cell size in presentation units (pixels)
    pub const CELL_SIZE: f32 = 64.0;

    /// Exit slide duration (seconds)
    pub const EXIT_DURATION: f32 = 1.2;
    /// Bounce-out and bounce-back duration, each (seconds)
    pub const BOUNCE_DURATION: f32 = 0.25;
    /// Time between blocker colour toggles (seconds)
    pub const FLASH_INTERVAL: f32 = 0.15;
    /// Hit/default cycles per flash
    pub const FLASH_REPEATS: u32 = 2;

    /// Visual length subtracted from the bounce distance (cells)
    pub const ARROW_VISUAL_LENGTH: f32 = 1.0;
    /// Body cells an arrow occupies past its bend (or tail)
    pub const BODY_CELLS: i32 = 2;
}

/// Fast-out / slow-in easing on `t` in [0, 1]
#[inline]
pub fn ease_fast_out_slow_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
