//! Text rows: GRIP / WIND / ROAD / AIR with right-aligned values.
//!
//! Value strings are rebuilt on the slow tick and cached in `heapless`
//! buffers, so drawing a frame never formats or allocates. Replay sessions
//! show a dash for every value, matching the host's own condition displays.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::config::Layout;
use crate::styles::{LEFT_ALIGNED, RIGHT_ALIGNED, TEXT_STYLE_WHITE};
use crate::telemetry::{Sample, Status};

/// Row titles, top to bottom.
const ROW_TITLES: [&str; 4] = ["GRIP:", "WIND:", "ROAD:", "AIR:"];

/// Shown for every value while the session is a replay.
const REPLAY_VALUE: &str = "-";

/// Cached value strings for the four rows.
#[derive(Debug, Default)]
pub struct LabelValues {
    rows: [String<16>; 4],
}

impl LabelValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reformat all four values from the current sample. Runs on the slow tick.
    pub fn refresh(&mut self, sample: &Sample, status: Status) {
        for row in &mut self.rows {
            row.clear();
        }

        if status == Status::Replay {
            for row in &mut self.rows {
                row.push_str(REPLAY_VALUE).ok();
            }
        } else {
            write!(self.rows[0], "{:.1} %", sample.track_grip).ok();
            write!(self.rows[1], "{:.0} km/h", sample.wind_speed).ok();
            write!(self.rows[2], "{:.0} C", sample.road_temp).ok();
            write!(self.rows[3], "{:.0} C", sample.air_temp).ok();
        }
    }

    #[cfg(test)]
    fn row(&self, n: usize) -> &str {
        &self.rows[n]
    }
}

/// Draw the four title/value rows into the label area.
pub fn draw_labels<D>(display: &mut D, layout: &Layout, values: &LabelValues)
where
    D: DrawTarget<Color = Rgb565>,
{
    for (n, title) in ROW_TITLES.iter().enumerate() {
        let y = layout.padding_px + layout.row_height * n as i32;

        Text::with_text_style(title, Point::new(layout.label_x, y), TEXT_STYLE_WHITE, LEFT_ALIGNED)
            .draw(display)
            .ok();

        Text::with_text_style(
            &values.rows[n],
            Point::new(layout.value_right_x, y),
            TEXT_STYLE_WHITE,
            RIGHT_ALIGNED,
        )
        .draw(display)
        .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Sample {
        Sample {
            wind_speed: 23.6,
            air_temp: 21.4,
            road_temp: 28.7,
            track_grip: 97.25,
            ..Sample::default()
        }
    }

    #[test]
    fn test_refresh_live_formats() {
        let mut values = LabelValues::new();
        values.refresh(&sample(), Status::Live);

        assert_eq!(values.row(0), "97.2 %", "Grip shows one decimal");
        assert_eq!(values.row(1), "24 km/h", "Wind speed is rounded whole");
        assert_eq!(values.row(2), "29 C", "Road temp is rounded whole");
        assert_eq!(values.row(3), "21 C", "Air temp is rounded whole");
    }

    #[test]
    fn test_refresh_replay_dashes() {
        let mut values = LabelValues::new();
        values.refresh(&sample(), Status::Replay);

        for n in 0..4 {
            assert_eq!(values.row(n), "-", "Replay should dash out row {n}");
        }
    }

    #[test]
    fn test_refresh_replay_then_live_recovers() {
        let mut values = LabelValues::new();
        values.refresh(&sample(), Status::Replay);
        values.refresh(&sample(), Status::Live);
        assert_eq!(values.row(1), "24 km/h", "Leaving replay should restore values");
    }

    #[test]
    fn test_values_fit_buffers() {
        let mut values = LabelValues::new();
        let extreme = Sample {
            wind_speed: 999.9,
            air_temp: -40.0,
            road_temp: 140.0,
            track_grip: 100.0,
            ..Sample::default()
        };
        values.refresh(&extreme, Status::Live);
        assert_eq!(values.row(0), "100.0 %");
        assert_eq!(values.row(1), "1000 km/h", "Largest plausible value still fits");
        assert_eq!(values.row(3), "-40 C");
    }
}
