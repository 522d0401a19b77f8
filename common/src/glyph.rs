//! 8x16 bitmap glyphs built from the public-domain 8x8 basic font.
//!
//! Each 8px source row is painted twice, giving the tall, chunky look of a
//! home-computer text mode. Bit 0 of a row byte is the leftmost pixel. Only set
//! bits are painted, so glyphs overlay whatever is already in the frame.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use font8x8::legacy::BASIC_LEGACY;

use crate::config::{GLYPH_HEIGHT, GLYPH_WIDTH};

/// Code drawn for anything outside the 7-bit table.
pub const FALLBACK: u8 = b'?';

/// Map a character to its table index.
#[inline]
pub const fn glyph_code(ch: char) -> u8 { if ch.is_ascii() { ch as u8 } else { FALLBACK } }

/// Source rows for a table index; out-of-table codes get the fallback glyph.
#[inline]
pub fn glyph_rows(code: u8) -> [u8; 8] {
    let code = if code < 128 { code } else { FALLBACK };
    BASIC_LEGACY[code as usize]
}

/// One character cell ready to be drawn at a pixel origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    code: u8,
    origin: Point,
    color: Rgb888,
}

impl Glyph {
    /// Glyph for `ch` with its top-left corner at `origin`.
    pub const fn new(
        ch: char,
        origin: Point,
        color: Rgb888,
    ) -> Self {
        Self {
            code: glyph_code(ch),
            origin,
            color,
        }
    }

    /// Glyph from a raw table code (codes >= 128 fall back to `?`).
    pub const fn from_code(
        code: u8,
        origin: Point,
        color: Rgb888,
    ) -> Self {
        Self { code, origin, color }
    }

    fn pixels(&self) -> impl Iterator<Item = Pixel<Rgb888>> {
        let rows = glyph_rows(self.code);
        let origin = self.origin;
        let color = self.color;
        (0..GLYPH_HEIGHT as i32).flat_map(move |y| {
            let bits = rows[(y / 2) as usize];
            (0..GLYPH_WIDTH as i32)
                .filter(move |&x| bits & (1u8 << x) != 0)
                .map(move |x| Pixel(origin + Point::new(x, y), color))
        })
    }
}

impl Drawable for Glyph {
    type Color = Rgb888;
    type Output = ();

    fn draw<D>(
        &self,
        target: &mut D,
    ) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        target.draw_iter(self.pixels())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Canvas, pack};
    use crate::config::FRAME_PIXELS;

    const INK: Rgb888 = Rgb888::new(0xA0, 0xA0, 0xE0);

    #[test]
    fn test_glyph_code_ascii() {
        assert_eq!(glyph_code('A'), b'A');
        assert_eq!(glyph_code(' '), b' ');
        assert_eq!(glyph_code('~'), b'~');
    }

    #[test]
    fn test_glyph_code_fallback() {
        assert_eq!(glyph_code('é'), FALLBACK);
        assert_eq!(glyph_code('→'), FALLBACK);
        assert_eq!(glyph_rows(200), glyph_rows(FALLBACK));
    }

    #[test]
    fn test_letter_a_first_row() {
        // 'A' top row is 0x0C: pixels 2 and 3 lit
        assert_eq!(glyph_rows(b'A')[0], 0x0C);

        let mut buf = vec![0u32; FRAME_PIXELS];
        let mut canvas = Canvas::new(&mut buf);
        Glyph::new('A', Point::new(0, 0), INK).draw(&mut canvas).ok();

        assert_eq!(canvas.pixel(2, 0), Some(pack(INK)));
        assert_eq!(canvas.pixel(3, 0), Some(pack(INK)));
        assert_eq!(canvas.pixel(1, 0), Some(0));
        assert_eq!(canvas.pixel(4, 0), Some(0));
    }

    #[test]
    fn test_rows_are_doubled() {
        let mut buf = vec![0u32; FRAME_PIXELS];
        let mut canvas = Canvas::new(&mut buf);
        Glyph::new('W', Point::new(16, 32), INK).draw(&mut canvas).ok();

        for src_row in 0..8 {
            for x in 0..8 {
                let top = canvas.pixel(16 + x, 32 + src_row * 2);
                let bottom = canvas.pixel(16 + x, 32 + src_row * 2 + 1);
                assert_eq!(top, bottom, "row {src_row} col {x} not doubled");
            }
        }
    }

    #[test]
    fn test_pixel_count_matches_bitmap() {
        let mut buf = vec![0u32; FRAME_PIXELS];
        let mut canvas = Canvas::new(&mut buf);
        Glyph::new('#', Point::new(100, 100), INK).draw(&mut canvas).ok();

        let expected: u32 = glyph_rows(b'#').iter().map(|r| r.count_ones() * 2).sum();
        let painted = buf.iter().filter(|&&p| p != 0).count() as u32;
        assert_eq!(painted, expected);
    }

    #[test]
    fn test_space_paints_nothing() {
        let mut buf = vec![0u32; FRAME_PIXELS];
        let mut canvas = Canvas::new(&mut buf);
        Glyph::new(' ', Point::new(8, 16), INK).draw(&mut canvas).ok();
        assert!(buf.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_partially_offscreen_glyph_clips() {
        let mut buf = vec![0u32; FRAME_PIXELS];
        let mut canvas = Canvas::new(&mut buf);
        Glyph::new('#', Point::new(636, 472), INK).draw(&mut canvas).ok();
        Glyph::new('#', Point::new(-4, -8), INK).draw(&mut canvas).ok();
        assert!(buf.iter().any(|&p| p != 0), "visible part should be painted");
    }

    #[test]
    fn test_from_code_high_byte_uses_fallback() {
        let mut a = vec![0u32; FRAME_PIXELS];
        let mut b = vec![0u32; FRAME_PIXELS];
        Glyph::from_code(0xE9, Point::new(0, 0), INK).draw(&mut Canvas::new(&mut a)).ok();
        Glyph::new('?', Point::new(0, 0), INK).draw(&mut Canvas::new(&mut b)).ok();
        assert_eq!(a, b);
    }
}
