//! Fixed geometry, timing and input constants.
//!
//! Everything here is part of the host contract (640x480 at 60 fps, 44.1 kHz
//! audio) or of the text-mode layout built on top of it. Nothing is runtime
//! configurable; layout math is resolved at compile time so the per-frame code
//! only indexes.
//!
//! ```text
//! ┌──────────────────────────── 80 cols x 30 rows ───────────────────────────┐
//! │ border (1 row)                                                           │
//! │  ┌─────────────────────── 76 x 28 inner text area ───────────────────┐   │
//! │  │ row 0   header                                                    │   │
//! │  │ row 2.. content (25 rows)                                         │   │
//! │  │ row 26  rule                                                      │   │
//! │  │ row 27  footer hints                                              │   │
//! │  └───────────────────────────────────────────────────────────────────┘   │
//! └──────────────────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Display Configuration
// =============================================================================

/// Frame width in pixels.
pub const SCREEN_WIDTH: u32 = 640;

/// Frame height in pixels.
pub const SCREEN_HEIGHT: u32 = 480;

/// Number of pixels in one frame.
pub const FRAME_PIXELS: usize = (SCREEN_WIDTH * SCREEN_HEIGHT) as usize;

/// Bytes per framebuffer row handed to the host (XRGB8888, no padding).
pub const FRAME_PITCH: usize = SCREEN_WIDTH as usize * 4;

/// Display aspect ratio.
pub const ASPECT_RATIO: f32 = 4.0 / 3.0;

// =============================================================================
// Text-Mode Grid
// =============================================================================

/// Glyph cell width in pixels.
pub const GLYPH_WIDTH: u32 = 8;

/// Glyph cell height in pixels (8px bitmap rows doubled).
pub const GLYPH_HEIGHT: u32 = 16;

/// Terminal columns covering the frame.
pub const TERM_COLS: usize = (SCREEN_WIDTH / GLYPH_WIDTH) as usize;

/// Terminal rows covering the frame.
pub const TERM_ROWS: usize = (SCREEN_HEIGHT / GLYPH_HEIGHT) as usize;

/// Border glyph columns on each side.
pub const BORDER_COLS: usize = 2;

/// Border glyph rows at the top and bottom.
pub const BORDER_ROWS: usize = 1;

/// Inner text area width in glyphs.
pub const TEXT_COLS: usize = TERM_COLS - 2 * BORDER_COLS;

/// Inner text area height in glyphs.
pub const TEXT_ROWS: usize = TERM_ROWS - 2 * BORDER_ROWS;

/// Header row (title bar) in inner coordinates.
pub const HEADER_ROW: usize = 0;

/// First row of scrollable content.
pub const CONTENT_START: usize = 2;

/// Footer row holding the control hints.
pub const FOOTER_ROW: usize = TEXT_ROWS - 1;

/// Rows available to scrollable content (rows 2..=26).
pub const CONTENT_ROWS: usize = 25;

/// Entries visible in the contents list (banner, summary and rule take 3 rows).
pub const LIST_ROWS: usize = CONTENT_ROWS - 3;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Video refresh rate declared to the host.
pub const FRAME_RATE: f64 = 60.0;

/// Audio sample rate declared to the host.
pub const AUDIO_RATE: u32 = 44_100;

/// Stereo audio frames emitted per video frame (44100 / 60).
pub const AUDIO_FRAMES: usize = 735;

/// Boot frames before the contents screen opens on its own (10 s).
pub const BOOT_FRAMES: u32 = 600;

// =============================================================================
// Input Repeat
// =============================================================================

/// Held frames before auto-repeat starts (~400 ms).
pub const REPEAT_DELAY: u16 = 24;

/// Frames between auto-repeat presses (~67 ms).
pub const REPEAT_RATE: u16 = 4;
