//! Wind indicator model: the orientation-to-color-to-polygon transform.
//!
//! The indicator turns a telemetry sample into three things:
//! - a signed **relative angle** (wind direction minus car heading),
//! - a **fill color** along a green→yellow→red gradient, and
//! - the four vertices of an arrow polygon rotated to that angle around a
//!   fixed screen-space pivot.
//!
//! # Color mapping
//!
//! The relative angle spans (−2π, 2π). It is folded into a 0..1 "color shift"
//! scalar measuring how far the wind deviates from dead ahead:
//!
//! ```text
//! shift = 1 − |(|θ| / π) − 1|       {−2π, 0, 2π} → 0,  {−π, π} → 1
//! ```
//!
//! Below 0.5 the color runs green→yellow (headwind to sidewind), above 0.5
//! yellow→red (sidewind to tailwind). Wind below 0.1 km/h is treated as calm
//! and renders a grey, unrotated arrow; replay sessions render the same.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::colors::{GREY, Rgba};
use crate::geometry::{Quad, Vec2};
use crate::telemetry::{Sample, Status};

/// Wind speeds below this (km/h) are treated as calm.
pub const CALM_WIND_SPEED: f32 = 0.1;

// =============================================================================
// Canonical Arrow Shape
// =============================================================================
//
// Dart built around the origin with the tip pointing "north" (negative y):
// tip, right base corner, base center notch, left base corner. Scaled by
// radius / ARROW_UNIT so the tip sits exactly on the indicator circle.

const ARROW_TIP: Vec2 = Vec2::new(0.0, -21.0);
const ARROW_BASE_RIGHT: Vec2 = Vec2::new(15.5, 21.0);
const ARROW_BASE_CENTER: Vec2 = Vec2::new(0.0, 12.0);
const ARROW_BASE_LEFT: Vec2 = Vec2::new(-15.5, 21.0);

/// Half-extent of the canonical arrow; the shape is normalized by this.
const ARROW_UNIT: f32 = 21.0;

const ARROW_SHAPE: Quad = Quad::new([ARROW_TIP, ARROW_BASE_RIGHT, ARROW_BASE_CENTER, ARROW_BASE_LEFT]);

// =============================================================================
// Color Mapping
// =============================================================================

/// Fold the relative angle into the 0..1 color gradient position.
///
/// 0 means the wind is dead ahead (headwind), 1 dead astern (tailwind).
/// Continuous and symmetric: `shift(θ) = shift(−θ) = shift(θ + 2π)`.
pub fn color_shift(angle: f32) -> f32 {
    1.0 - ((angle.abs() / PI) - 1.0).abs()
}

/// Map a color shift to the headwind→sidewind→tailwind gradient.
///
/// shift 0.0 → pure green, 0.5 → yellow, 1.0 → pure red.
pub fn shift_color(shift: f32) -> Rgba {
    if shift < 0.5 {
        Rgba::new(2.0 * shift, 1.0, 0.0, 1.0)
    } else {
        Rgba::new(1.0, 1.0 - 2.0 * (shift - 0.5), 0.0, 1.0)
    }
}

// =============================================================================
// Display Mode
// =============================================================================

/// Whether the arrow points where the wind blows from or toward.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArrowMode {
    /// Tip points into the wind (the direction it blows from).
    #[default]
    BlowsFrom,
    /// Tip points downwind; the drawn arrow is flipped by π.
    BlowsTo,
}

impl ArrowMode {
    /// Switch to the other display mode.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::BlowsFrom => Self::BlowsTo,
            Self::BlowsTo => Self::BlowsFrom,
        }
    }

    /// Extra rotation applied when drawing.
    #[inline]
    const fn flip(self) -> f32 {
        match self {
            Self::BlowsFrom => 0.0,
            Self::BlowsTo => PI,
        }
    }
}

// =============================================================================
// Indicator Model
// =============================================================================

/// Rotated, colored arrow driven by the telemetry sample.
///
/// Holds the base (unrotated) polygon placed at the pivot, and recomputes the
/// rendered polygon on every update. `update` runs on the fast tick.
pub struct WindIndicator {
    mode: ArrowMode,
    pivot: Vec2,
    base: Quad,
    rendered: Quad,

    /// Relative wind angle in radians, range (−2π, 2π). Zero when calm.
    pub angle: f32,

    /// Current fill color. Grey when calm or in replay.
    pub color: Rgba,
}

impl WindIndicator {
    /// Build the indicator with its arrow scaled to `radius` px around `pivot`.
    pub fn new(pivot: Vec2, radius: f32, mode: ArrowMode) -> Self {
        let base = ARROW_SHAPE.scaled(radius / ARROW_UNIT).translated(pivot);
        Self {
            mode,
            pivot,
            base,
            rendered: base.rotated_about(pivot, mode.flip()),
            angle: 0.0,
            color: GREY,
        }
    }

    /// Recompute angle, color, and the rendered polygon from a fresh sample.
    pub fn update(&mut self, sample: &Sample, status: Status) {
        if sample.wind_speed < CALM_WIND_SPEED || status == Status::Replay {
            self.angle = 0.0;
            self.color = GREY;
        } else {
            self.angle = sample.wind_dir - sample.car_heading;
            self.color = shift_color(color_shift(self.angle));
        }

        self.rendered = self.base.rotated_about(self.pivot, self.angle + self.mode.flip());
    }

    /// Polygon to draw this frame.
    #[inline]
    pub const fn quad(&self) -> &Quad {
        &self.rendered
    }

    /// Toggle the display mode and re-rotate the polygon in place.
    pub fn toggle_mode(&mut self) -> ArrowMode {
        self.mode = self.mode.toggle();
        self.rendered = self.base.rotated_about(self.pivot, self.angle + self.mode.flip());
        self.mode
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
