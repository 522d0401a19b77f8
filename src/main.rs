//! Desktop simulator for The Emu Pages.
//!
//! Runs the viewer core in an `embedded-graphics-simulator` window at 60 FPS
//! using the built-in manual as content.
//!
//! # Controls
//!
//! | Key | Button | Action |
//! |-----|--------|--------|
//! | Arrows | D-pad | Select / scroll / previous-next page |
//! | `X`, `Enter` | A | Open page, skip boot |
//! | `Z`, `Backspace` | B | Back to contents |
//! | `Q`, `PageUp` / `W`, `PageDown` | L / R | Page up / down |
//! | `Space` | Start | Back to contents |
//! | `F5` | | Restart from the boot sequence |
//!
//! Set `RUST_LOG=debug` to trace navigation.

mod config;
mod host;
mod manual;

use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use config::{FRAME_TIME, WINDOW_SCALE, WINDOW_TITLE};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, Window};
use emu_pages_common::colors::BORDER;
use emu_pages_common::config::{FRAME_PIXELS, SCREEN_HEIGHT, SCREEN_WIDTH};
use emu_pages_common::{Session, av_info, system_info};
use host::SimHost;
use log::{error, info};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let system = system_info();
    let av = av_info();
    info!(
        "{} {} ({}x{} @ {} fps)",
        system.library_name, system.library_version, av.geometry.base_width, av.geometry.base_height, av.timing.fps
    );

    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    // The window must be shown once before it delivers events
    display.clear(BORDER).ok();
    window.update(&display);

    let mut host = SimHost::new(display, window);
    let mut session = Session::new();
    if let Err(err) = session.load(&mut host, manual::catalog()) {
        error!("Failed to start: {err}");
        return ExitCode::FAILURE;
    }

    let mut framebuffer = vec![0u32; FRAME_PIXELS];

    // ==========================================================================
    // Main Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        session.run_frame(&mut host, &mut framebuffer);
        if host.quit_requested() {
            break;
        }
        if host.take_reset() {
            session.reset();
        }

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }

    session.unload();
    ExitCode::SUCCESS
}
