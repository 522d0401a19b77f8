//! Simulator configuration: window, pacing and keyboard mapping.
//!
//! Screen geometry and frame rate are fixed by the core (see
//! [`emu_pages_common::config`]); only the desktop-side presentation lives here.

use std::time::Duration;

use embedded_graphics_simulator::sdl2::Keycode;
use emu_pages_common::Button;

// =============================================================================
// Window Configuration
// =============================================================================

/// Window title.
pub const WINDOW_TITLE: &str = "The Emu Pages";

/// Integer pixel scale of the simulator window.
pub const WINDOW_SCALE: u32 = 2;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (60 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / 60);

// =============================================================================
// Keyboard Mapping
// =============================================================================

/// Key that restarts the session from the boot sequence.
pub const RESET_KEY: Keycode = Keycode::F5;

/// Joypad button for a keyboard key.
///
/// | Key | Button |
/// |-----|--------|
/// | Arrows | D-pad |
/// | `X` / `Enter` | A |
/// | `Z` / `Backspace` | B |
/// | `S` | X |
/// | `A` | Y |
/// | `Q` / `PageUp` | L |
/// | `W` / `PageDown` | R |
/// | `Space` | Start |
/// | `Right Shift` | Select |
pub fn button_for(key: Keycode) -> Option<Button> {
    let button = match key {
        Keycode::Up => Button::Up,
        Keycode::Down => Button::Down,
        Keycode::Left => Button::Left,
        Keycode::Right => Button::Right,
        Keycode::X | Keycode::Return => Button::A,
        Keycode::Z | Keycode::Backspace => Button::B,
        Keycode::S => Button::X,
        Keycode::A => Button::Y,
        Keycode::Q | Keycode::PageUp => Button::L,
        Keycode::W | Keycode::PageDown => Button::R,
        Keycode::Space => Button::Start,
        Keycode::RShift => Button::Select,
        _ => return None,
    };
    Some(button)
}
