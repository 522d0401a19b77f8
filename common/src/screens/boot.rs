//! Scripted boot sequence.
//!
//! The whole sequence is a pure function of the boot frame counter: every frame
//! is redrawn from scratch, so any frame can be rendered in isolation and two
//! renders of the same frame are identical.
//!
//! # Timeline
//!
//! ```text
//! frame   0  banner                         (row 1, centered)
//! frame   2  memory line                    (row 3, centered)
//! frame  10  READY.                         (row 5)
//! frame  20  LOAD command types, 4 f/char   (row 6, blinking caret)
//! frame 100  caret leaves the LOAD line
//! frame 110  SEARCHING FOR ...              (row 8)
//! frame 230  LOADING                        (row 9)
//! frame 340  READY.                         (row 11)
//! frame 345  RUN types                      (row 12, blinking caret)
//! frame 360  splash: mascot fades in, progress bar, caption
//! frame 560  resting frame (mascot opaque, bar full)
//! ```
//!
//! The choreography never decides when to leave; the session does that.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::colors::{BACKGROUND, BAR, DIM, FOREGROUND, TITLE};
use crate::config::{BORDER_ROWS, GLYPH_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH, TEXT_ROWS};
use crate::screens::mascot::{MASCOT_HEIGHT, draw_mascot};
use crate::terminal::{Terminal, centered_col};

// =============================================================================
// Script
// =============================================================================

const BANNER: &str = "**** COMMODORE 64 BASIC V2 ****";
const MEMORY: &str = "64K RAM SYSTEM  38911 BASIC BYTES FREE";
const READY: &str = "READY.";
const LOAD_COMMAND: &str = "LOAD \"EMUPAGES\",8,1";
const SEARCHING: &str = "SEARCHING FOR EMUPAGES";
const LOADING: &str = "LOADING";
const RUN_COMMAND: &str = "RUN";
const CAPTION: &str = "LOADING THE EMU PAGES...";

/// Frames per typed character.
const TYPE_RATE: u32 = 4;

/// Caret blink half-period in frames.
const BLINK_FRAMES: u32 = 30;

/// First frame of the splash phase.
pub const SPLASH_START: u32 = 360;

/// First frame of the resting phase.
pub const REST_START: u32 = 560;

// =============================================================================
// Splash Layout
// =============================================================================

/// Mascot center: horizontally centered, 40px above the screen center.
const MASCOT_CENTER: Point = Point::new((SCREEN_WIDTH / 2) as i32, (SCREEN_HEIGHT / 2) as i32 - 40);

/// Progress bar center line, 55px below the mascot's bottom edge.
const BAR_CENTER_Y: i32 = MASCOT_CENTER.y + (MASCOT_HEIGHT / 2) as i32 + 55;

const BAR_WIDTH: i32 = 320;
const BAR_HEIGHT: i32 = 12;
const BAR_SEGMENTS: i32 = 20;
const SEGMENT_WIDTH: i32 = BAR_WIDTH / BAR_SEGMENTS;

/// Progress units for a full bar.
pub const FULL_PROGRESS: u32 = 256;

/// Frames (splash-local) over which the mascot fades in.
const FADE_FRAMES: u32 = 60;

/// Splash-local frame where the bar starts filling, and the fill duration.
const BAR_START: u32 = 30;
const BAR_FRAMES: u32 = 150;

/// Caption appears once the splash-local frame passes this.
const CAPTION_AFTER: u32 = 20;

/// Phase of the boot sequence at a given frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootPhase {
    /// BASIC prompt with typed commands.
    Prompt,
    /// Mascot and progress bar; carries the splash-local frame.
    Splash(u32),
    /// Final resting frame.
    Rest,
}

impl BootPhase {
    pub const fn at(frame: u32) -> Self {
        if frame < SPLASH_START {
            Self::Prompt
        } else if frame < REST_START {
            Self::Splash(frame - SPLASH_START)
        } else {
            Self::Rest
        }
    }
}

/// Mascot opacity for a splash-local frame.
pub const fn fade_alpha(local: u32) -> u8 {
    let alpha = local * 255 / FADE_FRAMES;
    if alpha > 255 { 255 } else { alpha as u8 }
}

/// Bar progress in `0..=FULL_PROGRESS` for a splash-local frame.
pub const fn bar_progress(local: u32) -> u32 {
    if local <= BAR_START {
        return 0;
    }
    let progress = (local - BAR_START) * FULL_PROGRESS / BAR_FRAMES;
    if progress > FULL_PROGRESS { FULL_PROGRESS } else { progress }
}

/// Render boot frame `frame` into the terminal.
pub fn draw_boot(
    term: &mut Terminal<'_>,
    frame: u32,
) {
    term.clear();
    match BootPhase::at(frame) {
        BootPhase::Prompt => draw_prompt(term, frame),
        BootPhase::Splash(local) => draw_splash(term, fade_alpha(local), bar_progress(local), local > CAPTION_AFTER),
        BootPhase::Rest => draw_splash(term, 255, FULL_PROGRESS, true),
    }
}

// =============================================================================
// Prompt Phase
// =============================================================================

fn draw_prompt(
    term: &mut Terminal<'_>,
    frame: u32,
) {
    term.text(centered_col(BANNER), 1, BANNER, TITLE);
    if frame >= 2 {
        term.text(centered_col(MEMORY), 3, MEMORY, FOREGROUND);
    }
    if frame >= 10 {
        term.text(0, 5, READY, FOREGROUND);
    }

    if frame >= 20 {
        let typed = typed_chars(LOAD_COMMAND, frame - 20);
        type_line(term, LOAD_COMMAND, 6, typed);
        if typed < LOAD_COMMAND.len() || frame < 100 {
            caret(term, typed, 6, frame);
        }
    }

    if frame >= 110 {
        term.text(0, 8, SEARCHING, FOREGROUND);
    }
    if frame >= 230 {
        term.text(0, 9, LOADING, FOREGROUND);
    }
    if frame >= 340 {
        term.text(0, 11, READY, FOREGROUND);
    }

    if frame >= 345 {
        let typed = typed_chars(RUN_COMMAND, frame - 345);
        type_line(term, RUN_COMMAND, 12, typed);
        caret(term, typed, 12, frame);
    }
}

/// Characters of `command` visible `elapsed` frames after typing began.
const fn typed_chars(
    command: &str,
    elapsed: u32,
) -> usize {
    let chars = (elapsed / TYPE_RATE) as usize;
    if chars > command.len() { command.len() } else { chars }
}

fn type_line(
    term: &mut Terminal<'_>,
    command: &str,
    row: usize,
    chars: usize,
) {
    let shown = command.get(..chars).unwrap_or(command);
    term.text(0, row, shown, FOREGROUND);
}

/// Solid caret, visible during the first half of each blink cycle.
fn caret(
    term: &mut Terminal<'_>,
    col: usize,
    row: usize,
    frame: u32,
) {
    if (frame / BLINK_FRAMES) % 2 == 0 {
        term.block(col, row, FOREGROUND);
    }
}

// =============================================================================
// Splash Phase
// =============================================================================

fn draw_splash(
    term: &mut Terminal<'_>,
    alpha: u8,
    progress: u32,
    caption: bool,
) {
    draw_mascot(term.canvas(), MASCOT_CENTER, alpha);
    draw_progress_bar(term, BAR_CENTER_Y, progress);

    if caption {
        let row = (BAR_CENTER_Y - 20) / GLYPH_HEIGHT as i32 - BORDER_ROWS as i32;
        if (0..TEXT_ROWS as i32).contains(&row) {
            term.text(centered_col(CAPTION), row as usize, CAPTION, DIM);
        }
    }
}

/// Framed, segmented bar; `progress` is in `0..=FULL_PROGRESS`.
fn draw_progress_bar(
    term: &mut Terminal<'_>,
    center_y: i32,
    progress: u32,
) {
    let canvas = term.canvas();
    let x0 = (SCREEN_WIDTH as i32 - BAR_WIDTH) / 2;
    let y0 = center_y - BAR_HEIGHT / 2;

    Rectangle::new(Point::new(x0 - 2, y0 - 2), Size::new(BAR_WIDTH as u32 + 4, BAR_HEIGHT as u32 + 4))
        .into_styled(PrimitiveStyle::with_fill(DIM))
        .draw(canvas)
        .ok();
    Rectangle::new(Point::new(x0, y0), Size::new(BAR_WIDTH as u32, BAR_HEIGHT as u32))
        .into_styled(PrimitiveStyle::with_fill(BACKGROUND))
        .draw(canvas)
        .ok();

    let filled = BAR_WIDTH * progress.min(FULL_PROGRESS) as i32 / FULL_PROGRESS as i32;
    for i in 0..BAR_SEGMENTS {
        let start = i * SEGMENT_WIDTH;
        if start >= filled {
            break;
        }
        // 1px gap after each segment
        let width = (SEGMENT_WIDTH - 1).min(filled - start);
        Rectangle::new(Point::new(x0 + start, y0 + 1), Size::new(width as u32, BAR_HEIGHT as u32 - 2))
            .into_styled(PrimitiveStyle::with_fill(BAR))
            .draw(canvas)
            .ok();
    }
}
