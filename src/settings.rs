//! Timings and geometry
//!
//! Loaded from a JSON file when one is given; anything unreadable falls back
//! to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::FootprintShape;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Cell size in presentation units
    pub cell_size: f32,

    // === Animation ===
    /// Exit slide duration (seconds)
    pub exit_duration: f32,
    /// Bounce-out duration; bounce-back takes the same time (seconds)
    pub bounce_duration: f32,
    /// Delay between blocker colour toggles (seconds)
    pub flash_interval: f32,
    /// Number of hit/default cycles
    pub flash_repeats: u32,

    // === Collision ===
    /// Arrow length subtracted from the bounce distance (cells)
    pub visual_length: f32,
    /// Collision footprint
    pub footprint: FootprintShape,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            exit_duration: EXIT_DURATION,
            bounce_duration: BOUNCE_DURATION,
            flash_interval: FLASH_INTERVAL,
            flash_repeats: FLASH_REPEATS,
            visual_length: ARROW_VISUAL_LENGTH,
            footprint: FootprintShape::Body,
        }
    }
}

impl Settings {
    /// Settings for the straight-arrow variant (tail-only collision)
    pub fn simple() -> Self {
        Self {
            footprint: FootprintShape::TailOnly,
            ..Self::default()
        }
    }

    /// Arrow visual length in presentation units
    pub fn visual_length_units(&self) -> f32 {
        self.visual_length * self.cell_size
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Bad settings file {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Cannot read {}: {}; using defaults", path.display(), err);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
