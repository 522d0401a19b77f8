//! Desktop host backed by the embedded-graphics simulator window.
//!
//! Keyboard state is collected from window events when the session polls
//! input, so every button reads the same value for the whole frame. Finished
//! frames are copied into a `SimulatorDisplay` and shown immediately; audio is
//! accepted and dropped.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{SimulatorDisplay, SimulatorEvent, Window};
use emu_pages_common::canvas::unpack;
use emu_pages_common::{Button, ButtonSet, Device, Host, PixelFormat};
use log::debug;

use crate::config::{RESET_KEY, button_for};

pub struct SimHost {
    display: SimulatorDisplay<Rgb888>,
    window: Window,
    held: ButtonSet,
    reset_requested: bool,
    quit_requested: bool,
}

impl SimHost {
    /// Take over a display and a window that has been updated at least once.
    pub fn new(
        display: SimulatorDisplay<Rgb888>,
        window: Window,
    ) -> Self {
        Self {
            display,
            window,
            held: ButtonSet::EMPTY,
            reset_requested: false,
            quit_requested: false,
        }
    }

    /// Whether the window was closed.
    pub fn quit_requested(&self) -> bool { self.quit_requested }

    /// Consume a pending reset request.
    pub fn take_reset(&mut self) -> bool { std::mem::take(&mut self.reset_requested) }

    fn set_held(
        &mut self,
        button: Button,
        down: bool,
    ) {
        if down {
            self.held.insert(button);
        } else {
            self.held.remove(button);
        }
    }
}

impl Host for SimHost {
    fn set_pixel_format(
        &mut self,
        format: PixelFormat,
    ) -> bool {
        matches!(format, PixelFormat::Xrgb8888)
    }

    fn poll_input(&mut self) {
        let events: Vec<SimulatorEvent> = self.window.events().collect();
        for ev in events {
            match ev {
                SimulatorEvent::Quit => self.quit_requested = true,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Auto-repeat is handled by the core
                    if repeat {
                        continue;
                    }
                    if keycode == RESET_KEY {
                        debug!("Reset requested");
                        self.reset_requested = true;
                    } else if let Some(button) = button_for(keycode) {
                        self.set_held(button, true);
                    }
                }
                SimulatorEvent::KeyUp { keycode, .. } => {
                    if let Some(button) = button_for(keycode) {
                        self.set_held(button, false);
                    }
                }
                _ => {}
            }
        }
    }

    fn input_state(
        &mut self,
        port: u32,
        device: Device,
        button: Button,
    ) -> i16 {
        if port != 0 || device != Device::Joypad {
            return 0;
        }
        i16::from(self.held.contains(button))
    }

    fn video_refresh(
        &mut self,
        frame: &[u32],
        width: u32,
        height: u32,
        pitch: usize,
    ) {
        let stride = (pitch / 4).max(1);
        let area = Rectangle::new(Point::zero(), Size::new(width, height));
        let colors = frame
            .chunks(stride)
            .take(height as usize)
            .flat_map(|row| row.iter().take(width as usize))
            .map(|&word| unpack(word));
        self.display.fill_contiguous(&area, colors).ok();
        self.window.update(&self.display);
    }

    fn audio_batch(
        &mut self,
        samples: &[i16],
    ) -> usize {
        samples.len() / 2
    }
}
