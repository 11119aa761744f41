//! Telemetry session data: status, per-tick samples, and the source trait.
//!
//! The host simulator exposes wind, temperature, and grip readings through a
//! shared-memory API that is out of scope here; [`TelemetrySource`] is the
//! seam where a real reader would plug in. The bundled [`SimulatedSession`]
//! produces plausible traces from sine-based signal generators so the HUD can
//! run standalone.
//!
//! # Unit conventions
//!
//! The host hands out wind direction in degrees with 0 at north, car heading
//! in radians with 0 at south, and surface grip as a 0..1 fraction. All three
//! are normalized at the source boundary: wind to radians, heading shifted by
//! +π so 0 means north, grip scaled to percent. Everything downstream works
//! in radians-at-north and percent.

use std::f32::consts::PI;

/// Session status reported by the host (raw values 0..3).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Status {
    #[default]
    Off,
    Replay,
    Live,
    Pause,
}

impl Status {
    /// Decode the host's raw status integer. Unknown values map to `Off`.
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Replay,
            2 => Self::Live,
            3 => Self::Pause,
            _ => Self::Off,
        }
    }
}

/// One telemetry reading, immutable per tick.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Sample {
    /// Wind provenance in radians, 0 at north.
    pub wind_dir: f32,
    /// Wind speed in km/h.
    pub wind_speed: f32,
    /// Car heading in radians, 0 at north.
    pub car_heading: f32,
    /// Ambient air temperature in °C.
    pub air_temp: f32,
    /// Track surface temperature in °C.
    pub road_temp: f32,
    /// Surface grip in percent.
    pub track_grip: f32,
}

/// Where the HUD polls its data each fast tick.
pub trait TelemetrySource {
    fn status(&self) -> Status;
    fn sample(&self) -> Sample;
}

// =============================================================================
// Host Unit Conversions
// =============================================================================

/// Wind direction: host degrees (0 = north) to radians.
#[inline]
pub fn wind_dir_rad(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

/// Car heading: host radians (0 = south) shifted so 0 = north.
#[inline]
pub fn heading_rad(raw: f32) -> f32 {
    raw + PI
}

/// Surface grip: host 0..1 fraction to percent.
#[inline]
pub fn grip_percent(fraction: f32) -> f32 {
    fraction * 100.0
}

// =============================================================================
// Simulated Session
// =============================================================================

/// Stand-in telemetry source with slowly evolving fake readings.
///
/// Wind and heading rotate at different rates so the relative angle sweeps
/// the full circle; temperatures and grip drift inside realistic bands.
pub struct SimulatedSession {
    t: f32,
    replay: bool,
}

impl SimulatedSession {
    pub const fn new() -> Self {
        Self { t: 0.0, replay: false }
    }

    /// Advance the signal clock by the frame delta.
    pub fn tick(&mut self, dt: f32) {
        self.t += dt;
    }

    /// Toggle replay mode (greyed indicator, dashed readouts).
    pub fn toggle_replay(&mut self) -> bool {
        self.replay = !self.replay;
        self.replay
    }
}

impl Default for SimulatedSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetrySource for SimulatedSession {
    fn status(&self) -> Status {
        if self.replay { Status::Replay } else { Status::Live }
    }

    fn sample(&self) -> Sample {
        // Host-style raw values first, then the same conversions a real
        // shared-memory reader would apply.
        let wind_dir_deg = (self.t * 9.0) % 360.0;
        let heading_raw = (self.t * 0.25).sin() * PI;

        Sample {
            wind_dir: wind_dir_rad(wind_dir_deg),
            wind_speed: fake_signal(self.t, 0.0, 38.0, 0.05),
            car_heading: heading_rad(heading_raw),
            air_temp: fake_signal(self.t, 17.0, 27.0, 0.02),
            road_temp: fake_signal(self.t, 21.0, 36.0, 0.015),
            track_grip: grip_percent(fake_signal(self.t, 0.95, 1.0, 0.01)),
        }
    }
}

fn fake_signal(t: f32, min: f32, max: f32, freq: f32) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}

// =============================================================================
// Unit Tests
// =============================================================================
