//! Emu mascot sprite for the boot splash.
//!
//! Stored as character rows against a small palette and drawn as 4x4 pixel
//! blocks. `.` cells are transparent and leave the frame untouched.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::canvas::blend;
use crate::colors::BACKGROUND;

/// Screen pixels per sprite cell.
pub const SCALE: u32 = 4;

const ROWS: [&str; 28] = [
    "............KKK.........",
    "...........KNNNK........",
    "..........KNNWNNKK......",
    "..........KNNKNNOOK.....",
    "..........KNNNNNKK......",
    "...........KNNNK........",
    "...........KNNK.........",
    "...........KNNK.........",
    "...........KNNK.........",
    "...........KNNK.........",
    "..........KBNNBK........",
    "......KKKKBBBBBBKK......",
    "....KKBBbBBBbBBBBBK.....",
    "...KBBbBBBbBBBbBBBBK....",
    "..KBbBBBbBBBbBBBbBBBK...",
    "..KBBBbBBBbBBBbBBBbBK...",
    ".KBBbBBBbBBBbBBBbBBBBK..",
    ".KBBBBbBBBbBBBbBBBbBBK..",
    "..KBBbBBBbBBBbBBBBBBK...",
    "...KBBBbBBBbBBBbBBBK....",
    "....KKBBBBBBBBBBKK......",
    "......KKKOKKOKKK........",
    ".........O..O...........",
    ".........O..O...........",
    ".........O..O...........",
    ".........O..O...........",
    "........OO..OO..........",
    ".......OOO.OOO..........",
];

/// Sprite width in cells.
pub const CELLS_WIDE: u32 = 24;

/// Sprite height in cells.
pub const CELLS_HIGH: u32 = ROWS.len() as u32;

/// Drawn width in pixels.
pub const MASCOT_WIDTH: u32 = CELLS_WIDE * SCALE;

/// Drawn height in pixels.
pub const MASCOT_HEIGHT: u32 = CELLS_HIGH * SCALE;

fn palette(cell: u8) -> Option<Rgb888> {
    match cell {
        b'K' => Some(Rgb888::new(0x20, 0x18, 0x10)),
        b'B' => Some(Rgb888::new(0x8B, 0x6B, 0x4A)),
        b'b' => Some(Rgb888::new(0xB0, 0x8A, 0x60)),
        b'N' => Some(Rgb888::new(0x6A, 0x7F, 0xA8)),
        b'W' => Some(Rgb888::new(0xF0, 0xF0, 0xF0)),
        b'O' => Some(Rgb888::new(0xE0, 0xA0, 0x40)),
        _ => None,
    }
}

/// Draw the mascot centered on `center`, faded toward the background by `alpha`
/// (0 = invisible, 255 = full color).
pub fn draw_mascot<D>(
    display: &mut D,
    center: Point,
    alpha: u8,
) where
    D: DrawTarget<Color = Rgb888>,
{
    let top_left = center - Point::new((MASCOT_WIDTH / 2) as i32, (MASCOT_HEIGHT / 2) as i32);
    let cell = Size::new(SCALE, SCALE);

    for (y, row) in ROWS.iter().enumerate() {
        for (x, &code) in row.as_bytes().iter().enumerate() {
            let Some(color) = palette(code) else {
                continue;
            };
            let origin = top_left + Point::new(x as i32 * SCALE as i32, y as i32 * SCALE as i32);
            display
                .fill_solid(&Rectangle::new(origin, cell), blend(BACKGROUND, color, alpha))
                .ok();
        }
    }
}
