//! The HUD context: all mutable widget state in one explicit object.
//!
//! Everything the widget tracks between frames lives here and is threaded
//! through `advance`/`draw` from the main loop; there is no process-wide
//! mutable state. `advance` polls the telemetry source on the fast tick and
//! reformats the readouts on the slow tick; `draw` is pure rendering.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::config::{HudConfig, Layout};
use crate::indicator::{ArrowMode, WindIndicator};
use crate::telemetry::{Sample, Status, TelemetrySource};
use crate::timing::TickTimers;
use crate::widgets::{LabelValues, draw_arrow, draw_labels};

/// Current telemetry, timer phases, and render state for the HUD window.
pub struct HudContext {
    layout: Layout,
    timers: TickTimers,
    status: Status,
    sample: Sample,
    indicator: WindIndicator,
    labels: LabelValues,
}

impl HudContext {
    pub fn new(cfg: &HudConfig) -> Self {
        let layout = Layout::new(cfg);
        Self {
            layout,
            timers: TickTimers::new(),
            status: Status::default(),
            sample: Sample::default(),
            indicator: WindIndicator::new(layout.pivot, layout.radius, cfg.arrow_mode),
            labels: LabelValues::new(),
        }
    }

    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Advance the timers by the frame delta and run the ticks that fired.
    pub fn advance<S: TelemetrySource>(&mut self, dt: f32, source: &S) {
        let ticks = self.timers.advance(dt);

        if ticks.fast {
            self.status = source.status();
            self.sample = source.sample();
            self.indicator.update(&self.sample, self.status);
        }

        if ticks.slow {
            self.labels.refresh(&self.sample, self.status);
        }
    }

    /// Draw the whole widget. Runs every frame on a cleared display.
    pub fn draw<D>(&self, display: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        draw_labels(display, &self.layout, &self.labels);
        draw_arrow(display, self.indicator.quad(), self.indicator.color);
    }

    /// Flip the arrow display mode, returning the new mode for persisting.
    pub fn toggle_arrow_mode(&mut self) -> ArrowMode {
        self.indicator.toggle_mode()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
