//! User preferences file and the derived window layout.
//!
//! Preferences live in a small JSON file next to the binary. Every field has
//! a default; a missing file, unparseable JSON, or an out-of-range value
//! falls back to the defaults with a logged warning, and the sanitized config
//! is written back on shutdown so the file heals itself.
//!
//! The layout is derived once at startup: the window is `aspect_ratio`
//! squares wide, with the rightmost square reserved for the wind indicator
//! and the rest holding the four text rows.

use std::fs;
use std::io;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::geometry::Vec2;
use crate::indicator::ArrowMode;

/// Preferences file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "track_conditions.json";

// =============================================================================
// Preferences
// =============================================================================

/// User-tunable window and display preferences.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Window height in pixels; everything else scales from this.
    pub app_height: u32,
    /// Window width as a multiple of the height.
    pub aspect_ratio: f32,
    /// Inner padding as a fraction of the height.
    pub padding: f32,
    /// Integer pixel scale of the simulator output window.
    pub window_scale: u32,
    /// Whether the arrow points where the wind blows from or toward.
    pub arrow_mode: ArrowMode,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            app_height: 120,
            aspect_ratio: 3.0,
            padding: 0.05,
            window_scale: 2,
            arrow_mode: ArrowMode::BlowsFrom,
        }
    }
}

impl HudConfig {
    /// Clamp out-of-range values back to their defaults.
    ///
    /// Returns true when anything had to be fixed up.
    fn sanitize(&mut self) -> bool {
        let defaults = Self::default();
        let mut fixed = false;

        if !(60..=480).contains(&self.app_height) {
            warn!("config: app_height {} out of range, using {}", self.app_height, defaults.app_height);
            self.app_height = defaults.app_height;
            fixed = true;
        }
        if !(1.5..=6.0).contains(&self.aspect_ratio) {
            warn!("config: aspect_ratio {} out of range, using {}", self.aspect_ratio, defaults.aspect_ratio);
            self.aspect_ratio = defaults.aspect_ratio;
            fixed = true;
        }
        if !(0.0..=0.2).contains(&self.padding) {
            warn!("config: padding {} out of range, using {}", self.padding, defaults.padding);
            self.padding = defaults.padding;
            fixed = true;
        }
        if !(1..=8).contains(&self.window_scale) {
            warn!("config: window_scale {} out of range, using {}", self.window_scale, defaults.window_scale);
            self.window_scale = defaults.window_scale;
            fixed = true;
        }

        fixed
    }

    /// Read preferences from `path`.
    ///
    /// Returns the config plus a dirty flag: true when the file was missing
    /// or invalid and the sanitized config should be saved on shutdown.
    pub fn load(path: &Path) -> (Self, bool) {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<Self>(&contents) {
                Ok(mut cfg) => {
                    let fixed = cfg.sanitize();
                    (cfg, fixed)
                }
                Err(e) => {
                    warn!("config: {} is not valid JSON ({e}), using defaults", path.display());
                    (Self::default(), true)
                }
            },
            Err(e) => {
                info!("config: could not read {} ({e}), using defaults", path.display());
                (Self::default(), true)
            }
        }
    }

    /// Write preferences back to `path` as pretty JSON.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}

// =============================================================================
// Derived Layout
// =============================================================================

/// Pixel geometry derived from the preferences, computed once at startup.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Layout {
    /// Window size in pixels.
    pub width: u32,
    pub height: u32,

    /// Inner padding in pixels.
    pub padding_px: i32,

    /// Height of each of the four text rows.
    pub row_height: i32,

    /// Left edge of the row titles.
    pub label_x: i32,

    /// Right edge of the value strings (right-aligned).
    pub value_right_x: i32,

    /// Center of rotation of the arrow, middle of the rightmost square.
    pub pivot: Vec2,

    /// Arrow radius: tip-to-pivot distance in pixels.
    pub radius: f32,
}

impl Layout {
    pub fn new(cfg: &HudConfig) -> Self {
        let height = cfg.app_height;
        let width = (height as f32 * cfg.aspect_ratio).round() as u32;
        let padding_px = (cfg.padding * height as f32).round() as i32;

        Self {
            width,
            height,
            padding_px,
            row_height: (height as i32 - 2 * padding_px) / 4,
            label_x: padding_px,
            value_right_x: width as i32 - height as i32 - padding_px,
            pivot: Vec2::new(width as f32 - height as f32 / 2.0, height as f32 / 2.0),
            radius: height as f32 * (0.5 - 1.5 * cfg.padding),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
