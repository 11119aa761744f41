//! Color types and palette for the HUD.
//!
//! The indicator model works in floating-point RGBA (0..1 per channel), the
//! format the color gradient math is defined in. Colors are converted to
//! `Rgb565` only at the drawing boundary; since the display has no alpha
//! blending, the alpha channel is composited over the black background during
//! conversion.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// RGBA color with floating-point channels on a 0..1 scale.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to Rgb565 for drawing, compositing alpha over black.
    pub fn to_rgb565(self) -> Rgb565 {
        let r = (self.r * self.a * 31.0).round().clamp(0.0, 31.0) as u8;
        let g = (self.g * self.a * 63.0).round().clamp(0.0, 63.0) as u8;
        let b = (self.b * self.a * 31.0).round().clamp(0.0, 31.0) as u8;
        Rgb565::new(r, g, b)
    }
}

// =============================================================================
// Indicator Palette
// =============================================================================

/// Greyed-out indicator color for calm wind or replay sessions.
pub const GREY: Rgba = Rgba::new(0.6, 0.6, 0.6, 0.6);

// =============================================================================
// Display Colors
// =============================================================================

/// Pure black (0, 0, 0). Window background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Text labels and values.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Unit Tests
// =============================================================================
