//! Joypad buttons and per-button press/auto-repeat detection.
//!
//! The host reports raw held state once per frame. [`InputRepeat`] turns that
//! into logical presses: one on the first held frame, then one every
//! [`REPEAT_RATE`] frames once the button has been held for [`REPEAT_DELAY`]
//! frames.
//!
//! ```text
//! held frame:  1  2 ... 23 24 25 26 27 28 ...
//! press:       x          x           x
//! ```

use crate::config::{REPEAT_DELAY, REPEAT_RATE};

// =============================================================================
// Buttons
// =============================================================================

/// Standard joypad button, numbered with the usual retro-core device ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Button {
    B = 0,
    Y = 1,
    Select = 2,
    Start = 3,
    Up = 4,
    Down = 5,
    Left = 6,
    Right = 7,
    A = 8,
    X = 9,
    L = 10,
    R = 11,
    L2 = 12,
    R2 = 13,
    L3 = 14,
    R3 = 15,
}

impl Button {
    /// Number of joypad buttons.
    pub const COUNT: usize = 16;

    /// Every button in id order.
    pub const ALL: [Button; Self::COUNT] = [
        Button::B,
        Button::Y,
        Button::Select,
        Button::Start,
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::A,
        Button::X,
        Button::L,
        Button::R,
        Button::L2,
        Button::R2,
        Button::L3,
        Button::R3,
    ];

    /// Device id of the button.
    #[inline]
    pub const fn id(self) -> u8 { self as u8 }

    #[inline]
    const fn mask(self) -> u16 { 1 << self as u16 }
}

/// Set of buttons packed into one word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonSet(u16);

impl ButtonSet {
    /// No buttons.
    pub const EMPTY: Self = Self(0);

    /// Set holding exactly `buttons`.
    pub fn of(buttons: &[Button]) -> Self { buttons.iter().fold(Self::EMPTY, |set, &b| set.with(b)) }

    /// Copy of the set with `button` added.
    #[must_use]
    pub const fn with(
        self,
        button: Button,
    ) -> Self {
        Self(self.0 | button.mask())
    }

    /// Add `button` in place.
    pub fn insert(
        &mut self,
        button: Button,
    ) {
        self.0 |= button.mask();
    }

    /// Remove `button` in place.
    pub fn remove(
        &mut self,
        button: Button,
    ) {
        self.0 &= !button.mask();
    }

    /// Whether `button` is in the set.
    pub const fn contains(
        self,
        button: Button,
    ) -> bool {
        self.0 & button.mask() != 0
    }

    /// Whether the set holds no buttons.
    pub const fn is_empty(self) -> bool { self.0 == 0 }

    /// Raw bitmask, bit `n` = button id `n`.
    pub const fn bits(self) -> u16 { self.0 }
}

// =============================================================================
// Repeat State
// =============================================================================

/// Held-frame counters for every button.
///
/// Call [`InputRepeat::sample`] exactly once per frame with the raw held set.
#[derive(Clone, Debug)]
pub struct InputRepeat {
    /// Consecutive frames each button has read down (0 = up).
    held: [u16; Button::COUNT],

    /// Buttons that were down when the counters were last cleared. They stay
    /// silent until released.
    latched: ButtonSet,
}

impl InputRepeat {
    /// All counters at zero.
    pub const fn new() -> Self {
        Self {
            held: [0; Button::COUNT],
            latched: ButtonSet::EMPTY,
        }
    }

    /// Advance one frame and return the buttons that fire a logical press.
    pub fn sample(
        &mut self,
        down: ButtonSet,
    ) -> ButtonSet {
        let mut pressed = ButtonSet::EMPTY;
        for button in Button::ALL {
            let counter = &mut self.held[button as usize];
            if !down.contains(button) {
                *counter = 0;
                self.latched.remove(button);
                continue;
            }
            *counter = counter.saturating_add(1);
            if !self.latched.contains(button) && fires(*counter) {
                pressed.insert(button);
            }
        }
        pressed
    }

    /// Zero every counter; buttons currently `down` produce nothing until released.
    pub fn clear(
        &mut self,
        down: ButtonSet,
    ) {
        self.held = [0; Button::COUNT];
        self.latched = down;
    }

    /// Held-frame count for one button.
    pub fn held_frames(
        &self,
        button: Button,
    ) -> u16 {
        self.held[button as usize]
    }
}

impl Default for InputRepeat {
    fn default() -> Self { Self::new() }
}

/// Press rule: first held frame, then every `REPEAT_RATE` frames from `REPEAT_DELAY`.
#[inline]
pub const fn fires(counter: u16) -> bool {
    counter == 1 || (counter >= REPEAT_DELAY && (counter - REPEAT_DELAY) % REPEAT_RATE == 0)
}
