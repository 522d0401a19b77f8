//! Text-mode terminal over the canvas.
//!
//! The frame is an 80x30 grid of 8x16 cells. A two-column, one-row border
//! surrounds a 76x28 inner text area, and every call here takes inner-area
//! coordinates. Text is clipped at the inner right edge, never wrapped.
//!
//! # Example
//!
//! ```ignore
//! let mut term = Terminal::new(&mut framebuffer);
//! term.clear();
//! term.text(0, 0, "READY.", FOREGROUND);
//! term.rule(1, '-', DIM);
//! ```

use core::fmt::{self, Write};

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use heapless::String;

use crate::canvas::Canvas;
use crate::colors::{BACKGROUND, BORDER};
use crate::config::{BORDER_COLS, BORDER_ROWS, GLYPH_HEIGHT, GLYPH_WIDTH, TEXT_COLS, TEXT_ROWS};
use crate::glyph::Glyph;

/// One formatted row of terminal text.
pub type RowText = String<TEXT_COLS>;

/// `fmt::Write` adapter that drops whatever does not fit instead of failing.
pub struct Clipped<'s, const N: usize>(pub &'s mut String<N>);

impl<const N: usize> Write for Clipped<'_, N> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Format a row without allocating; overlong output is truncated.
pub fn format_row(args: fmt::Arguments<'_>) -> RowText {
    let mut row = RowText::new();
    Clipped(&mut row).write_fmt(args).ok();
    row
}

/// Column that centers `s` in the inner area.
pub fn centered_col(s: &str) -> usize { TEXT_COLS.saturating_sub(s.chars().count()) / 2 }

/// Pixel origin of an inner-area cell.
#[inline]
pub const fn cell_origin(
    col: usize,
    row: usize,
) -> Point {
    Point::new(
        ((col + BORDER_COLS) as u32 * GLYPH_WIDTH) as i32,
        ((row + BORDER_ROWS) as u32 * GLYPH_HEIGHT) as i32,
    )
}

const INNER_AREA: Rectangle = Rectangle::new(
    cell_origin(0, 0),
    Size::new(TEXT_COLS as u32 * GLYPH_WIDTH, TEXT_ROWS as u32 * GLYPH_HEIGHT),
);

/// Character-cell view of one frame.
pub struct Terminal<'a> {
    canvas: Canvas<'a>,
}

impl<'a> Terminal<'a> {
    /// Start drawing into a framebuffer.
    pub fn new(pixels: &'a mut [u32]) -> Self { Self { canvas: Canvas::new(pixels) } }

    /// Pixel-level access for sprites and bars.
    pub fn canvas(&mut self) -> &mut Canvas<'a> { &mut self.canvas }

    /// Border everywhere, background inside the text area.
    pub fn clear(&mut self) {
        self.canvas.clear_buffer(BORDER);
        INNER_AREA
            .into_styled(PrimitiveStyle::with_fill(BACKGROUND))
            .draw(&mut self.canvas)
            .ok();
    }

    /// Draw `s` from (`col`, `row`), clipped at the inner right edge.
    pub fn text(
        &mut self,
        col: usize,
        row: usize,
        s: &str,
        color: Rgb888,
    ) {
        for (i, ch) in s.chars().take(TEXT_COLS.saturating_sub(col)).enumerate() {
            Glyph::new(ch, cell_origin(col + i, row), color)
                .draw(&mut self.canvas)
                .ok();
        }
    }

    /// Fill the row from `col` to the inner right edge with `bg`, then draw `s` in `fg`.
    pub fn text_inverted(
        &mut self,
        col: usize,
        row: usize,
        s: &str,
        fg: Rgb888,
        bg: Rgb888,
    ) {
        let width = TEXT_COLS.saturating_sub(col) as u32 * GLYPH_WIDTH;
        Rectangle::new(cell_origin(col, row), Size::new(width, GLYPH_HEIGHT))
            .into_styled(PrimitiveStyle::with_fill(bg))
            .draw(&mut self.canvas)
            .ok();
        self.text(col, row, s, fg);
    }

    /// Repeat `ch` across the full inner width.
    pub fn rule(
        &mut self,
        row: usize,
        ch: char,
        color: Rgb888,
    ) {
        for col in 0..TEXT_COLS {
            Glyph::new(ch, cell_origin(col, row), color)
                .draw(&mut self.canvas)
                .ok();
        }
    }

    /// Solid cell, used for the blinking caret.
    pub fn block(
        &mut self,
        col: usize,
        row: usize,
        color: Rgb888,
    ) {
        Rectangle::new(cell_origin(col, row), Size::new(GLYPH_WIDTH, GLYPH_HEIGHT))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.canvas)
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::pack;
    use crate::colors::{DIM, FOREGROUND, HIGHLIGHT};
    use crate::config::FRAME_PIXELS;

    fn frame() -> Vec<u32> { vec![0u32; FRAME_PIXELS] }

    /// Whether any pixel inside a cell has `color`.
    fn cell_has(
        term: &mut Terminal<'_>,
        col: usize,
        row: usize,
        color: Rgb888,
    ) -> bool {
        let origin = cell_origin(col, row);
        let canvas = term.canvas();
        (0..GLYPH_HEIGHT as i32).any(|y| {
            (0..GLYPH_WIDTH as i32).any(|x| canvas.pixel(origin.x + x, origin.y + y) == Some(pack(color)))
        })
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    #[test]
    fn test_cell_origin_includes_border() {
        assert_eq!(cell_origin(0, 0), Point::new(16, 16));
        assert_eq!(cell_origin(75, 27), Point::new(616, 448));
    }

    #[test]
    fn test_centered_col() {
        assert_eq!(centered_col(""), 38);
        assert_eq!(centered_col("READY."), 35);
        let long = "x".repeat(100);
        assert_eq!(centered_col(&long), 0);
    }

    #[test]
    fn test_clear_paints_border_and_inner() {
        let mut buf = frame();
        let mut term = Terminal::new(&mut buf);
        term.clear();
        let canvas = term.canvas();

        assert_eq!(canvas.pixel(0, 0), Some(pack(BORDER)));
        assert_eq!(canvas.pixel(15, 100), Some(pack(BORDER)));
        assert_eq!(canvas.pixel(16, 16), Some(pack(BACKGROUND)));
        assert_eq!(canvas.pixel(623, 463), Some(pack(BACKGROUND)));
        assert_eq!(canvas.pixel(624, 463), Some(pack(BORDER)));
        assert_eq!(canvas.pixel(623, 464), Some(pack(BORDER)));
    }

    // -------------------------------------------------------------------------
    // Text
    // -------------------------------------------------------------------------

    #[test]
    fn test_text_clips_at_inner_edge() {
        let mut buf = frame();
        let mut term = Terminal::new(&mut buf);
        term.clear();
        term.text(74, 3, "####", FOREGROUND);

        assert!(cell_has(&mut term, 74, 3, FOREGROUND));
        assert!(cell_has(&mut term, 75, 3, FOREGROUND));
        // The next two cells would land in the border
        let canvas = term.canvas();
        for x in 624..640 {
            for y in 64..80 {
                assert_eq!(canvas.pixel(x, y), Some(pack(BORDER)), "leak at ({x},{y})");
            }
        }
    }

    #[test]
    fn test_text_beyond_width_draws_nothing() {
        let mut buf = frame();
        let mut term = Terminal::new(&mut buf);
        term.text(80, 0, "####", FOREGROUND);
        assert!(buf.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_inverted_fills_row_to_edge() {
        let mut buf = frame();
        let mut term = Terminal::new(&mut buf);
        term.clear();
        term.text_inverted(0, 4, " > A", BACKGROUND, HIGHLIGHT);
        let canvas = term.canvas();

        let origin = cell_origin(0, 4);
        assert_eq!(canvas.pixel(origin.x, origin.y), Some(pack(HIGHLIGHT)));
        assert_eq!(canvas.pixel(623, origin.y + 15), Some(pack(HIGHLIGHT)));
        assert_eq!(canvas.pixel(624, origin.y), Some(pack(BORDER)));
        assert_eq!(canvas.pixel(origin.x, origin.y + 16), Some(pack(BACKGROUND)));
        assert!(cell_has(&mut term, 3, 4, BACKGROUND), "text glyph drawn over fill");
    }

    #[test]
    fn test_rule_spans_inner_width() {
        let mut buf = frame();
        let mut term = Terminal::new(&mut buf);
        term.clear();
        term.rule(3, '-', DIM);
        for col in 0..TEXT_COLS {
            assert!(cell_has(&mut term, col, 3, DIM), "rule missing at col {col}");
        }
    }

    #[test]
    fn test_block_fills_cell() {
        let mut buf = frame();
        let mut term = Terminal::new(&mut buf);
        term.block(2, 5, FOREGROUND);
        let painted = buf.iter().filter(|&&p| p == pack(FOREGROUND)).count();
        assert_eq!(painted, 8 * 16);
    }

    // -------------------------------------------------------------------------
    // Row formatting
    // -------------------------------------------------------------------------

    #[test]
    fn test_format_row_truncates() {
        let long = "y".repeat(200);
        let row = format_row(format_args!("   {long}"));
        assert_eq!(row.len(), TEXT_COLS);
        assert!(row.starts_with("   yyy"));
    }

    #[test]
    fn test_format_row_pads() {
        let row = format_row(format_args!(" > {:<10}|", "AB"));
        assert_eq!(row.as_str(), " > AB        |");
    }
}
