// Crate-level lints: pixel math intentionally casts between f32/i32/u32
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

//! Track conditions HUD for a racing simulator.
//!
//! Shows wind direction relative to the focused car as a rotated arrow whose
//! color runs green (headwind) through yellow (sidewind) to red (tailwind),
//! next to grip, wind speed, and road/air temperature readouts. The
//! orientation model refreshes at 30 Hz; the text rows, which track slowly
//! changing telemetry, at 1 Hz.
//!
//! The host simulator's shared-memory and windowing APIs are out of scope,
//! so the widget renders into an embedded-graphics simulator window and is
//! fed by a simulated telemetry session.
//!
//! # Keys
//!
//! - `M`: toggle the arrow between blows-from and blows-to display
//! - `R`: toggle replay mode (greyed arrow, dashed readouts)

mod colors;
mod config;
mod geometry;
mod hud;
mod indicator;
mod styles;
mod telemetry;
mod timing;
mod widgets;

use std::path::Path;
use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{info, warn};

use crate::colors::BLACK;
use crate::config::{CONFIG_FILE, HudConfig};
use crate::hud::HudContext;
use crate::telemetry::SimulatedSession;
use crate::timing::FRAME_TIME;

fn main() {
    env_logger::init();

    let config_path = Path::new(CONFIG_FILE);
    let (mut cfg, mut cfg_dirty) = HudConfig::load(config_path);

    let mut hud = HudContext::new(&cfg);
    let layout = *hud.layout();
    info!("window {}x{} at scale {}", layout.width, layout.height, cfg.window_scale);

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(layout.width, layout.height));
    let output_settings = OutputSettingsBuilder::new().scale(cfg.window_scale).build();
    let mut window = Window::new("Track Conditions", &output_settings);

    // The SDL window is created lazily on the first update; events() panics
    // until one frame has been pushed.
    display.clear(BLACK).ok();
    window.update(&display);

    let mut session = SimulatedSession::new();
    let mut prev_frame = Instant::now();

    'running: loop {
        let frame_start = Instant::now();
        let dt = frame_start.duration_since(prev_frame).as_secs_f32();
        prev_frame = frame_start;

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::M => {
                            cfg.arrow_mode = hud.toggle_arrow_mode();
                            cfg_dirty = true;
                            info!("arrow mode: {:?}", cfg.arrow_mode);
                        }
                        Keycode::R => {
                            let replay = session.toggle_replay();
                            info!("replay: {}", if replay { "on" } else { "off" });
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        session.tick(dt);
        hud.advance(dt, &session);

        display.clear(BLACK).ok();
        hud.draw(&mut display);
        window.update(&display);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }

    if cfg_dirty {
        match cfg.save(config_path) {
            Ok(()) => info!("preferences saved to {}", config_path.display()),
            Err(e) => warn!("failed to save preferences: {e}"),
        }
    }
}
