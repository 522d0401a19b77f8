//! Color palette for the viewer.
//!
//! A blue home-computer theme: lavender text on a deep blue field inside a
//! lighter blue border.
//!
//! ## Rgb888 Color Format
//!
//! All colors are 8 bits per channel. The canvas stores them as XRGB8888 words
//! (`0xFFRRGGBB`); see [`crate::canvas::pack`].

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

// =============================================================================
// Screen Structure
// =============================================================================

/// Outer border around the text area.
pub const BORDER: Rgb888 = Rgb888::new(0x6C, 0x5E, 0xB5);

/// Inner text area background.
pub const BACKGROUND: Rgb888 = Rgb888::new(0x40, 0x39, 0xA4);

// =============================================================================
// Text Colors
// =============================================================================

/// Body text.
pub const FOREGROUND: Rgb888 = Rgb888::new(0xA0, 0xA0, 0xE0);

/// Page titles and banners.
pub const TITLE: Rgb888 = Rgb888::WHITE;

/// Fill behind the selected contents entry.
pub const HIGHLIGHT: Rgb888 = Rgb888::new(0x70, 0xE0, 0x70);

/// Text drawn on top of [`HIGHLIGHT`].
pub const CURSOR_FG: Rgb888 = Rgb888::new(0x20, 0x20, 0xA0);

/// Second-level headings.
pub const HEADING2: Rgb888 = Rgb888::new(0xE0, 0xE0, 0x50);

/// Third-level headings.
pub const HEADING3: Rgb888 = Rgb888::new(0xC8, 0xC8, 0xE0);

/// Rules, scroll indicators and footer hints.
pub const DIM: Rgb888 = Rgb888::new(0x70, 0x70, 0xC0);

// =============================================================================
// Boot Screen
// =============================================================================

/// Tape-loader red used for the progress bar segments.
pub const BAR: Rgb888 = Rgb888::new(0x92, 0x4A, 0x40);
