//! Frame pacing and the dual-rate tick timers.
//!
//! The HUD samples the host at two cadences: a fast tick (30 Hz) for the
//! orientation model and a slow tick (1 Hz) for the text readouts, which only
//! track slowly changing telemetry. Both timers are simple accumulators fed
//! the per-frame delta; when one fires, a single period is subtracted rather
//! than resetting to zero, so the phase carries across frames.

use std::time::Duration;

/// Target frame time (~50 FPS). The main loop sleeps if a frame finishes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Fast tick period in seconds: orientation updates at 30 Hz.
pub const FAST_PERIOD: f32 = 1.0 / 30.0;

/// Slow tick period in seconds: label refresh at 1 Hz.
pub const SLOW_PERIOD: f32 = 1.0;

/// Which tiers fired this frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Ticks {
    pub fast: bool,
    pub slow: bool,
}

/// Accumulator pair driving the two refresh rates.
#[derive(Debug, Default)]
pub struct TickTimers {
    fast_acc: f32,
    slow_acc: f32,
}

impl TickTimers {
    pub const fn new() -> Self {
        Self { fast_acc: 0.0, slow_acc: 0.0 }
    }

    /// Advance both timers by `dt` seconds and report which fired.
    ///
    /// At most one tick per tier per frame; a frame longer than a period
    /// leaves the excess in the accumulator instead of dropping it.
    pub fn advance(&mut self, dt: f32) -> Ticks {
        self.fast_acc += dt;
        self.slow_acc += dt;

        let mut ticks = Ticks::default();
        if self.fast_acc > FAST_PERIOD {
            self.fast_acc -= FAST_PERIOD;
            ticks.fast = true;
        }
        if self.slow_acc > SLOW_PERIOD {
            self.slow_acc -= SLOW_PERIOD;
            ticks.slow = true;
        }
        ticks
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tick_before_period() {
        let mut timers = TickTimers::new();
        let ticks = timers.advance(0.01);
        assert!(!ticks.fast, "Fast tick should not fire before 1/30 s");
        assert!(!ticks.slow, "Slow tick should not fire before 1 s");
    }

    #[test]
    fn test_fast_tick_fires_at_30hz() {
        let mut timers = TickTimers::new();
        let mut fast_count = 0;
        // One simulated second at 20 ms frames
        for _ in 0..50 {
            if timers.advance(0.02).fast {
                fast_count += 1;
            }
        }
        assert!(
            (29..=31).contains(&fast_count),
            "Expected ~30 fast ticks in one second, got {fast_count}"
        );
    }

    #[test]
    fn test_slow_tick_fires_at_1hz() {
        let mut timers = TickTimers::new();
        let mut slow_count = 0;
        // Ten simulated seconds
        for _ in 0..500 {
            if timers.advance(0.02).slow {
                slow_count += 1;
            }
        }
        assert!(
            (9..=10).contains(&slow_count),
            "Expected ~10 slow ticks in ten seconds, got {slow_count}"
        );
    }

    #[test]
    fn test_phase_preserved_on_fire() {
        let mut timers = TickTimers::new();
        // 0.04 > 1/30: the excess (0.04 - 1/30) must remain in the accumulator
        let ticks = timers.advance(0.04);
        assert!(ticks.fast);
        let expected_remainder = 0.04 - FAST_PERIOD;
        assert!(
            (timers.fast_acc - expected_remainder).abs() < 1e-6,
            "Firing should subtract one period, not reset"
        );
    }

    #[test]
    fn test_both_tiers_fire_together_on_long_frame() {
        let mut timers = TickTimers::new();
        let ticks = timers.advance(1.5);
        assert!(ticks.fast && ticks.slow, "A long frame fires both tiers");
    }
}
