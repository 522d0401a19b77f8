//! Bounds-checked XRGB8888 canvas over a host-provided framebuffer.
//!
//! [`Canvas`] implements `DrawTarget`, so every primitive the screens draw
//! (rectangles, glyphs, sprite cells) goes through one clipping point. The
//! framebuffer itself belongs to the host; the canvas only borrows it for the
//! duration of a frame.
//!
//! # Pixel Format
//!
//! Each pixel is a `u32` laid out as `0xFFRRGGBB`. The top byte is ignored by
//! XRGB8888 consumers but is written as `0xFF` so the buffer is also valid ARGB.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::pixelcolor::raw::RawU24;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

const WIDTH: usize = SCREEN_WIDTH as usize;
const HEIGHT: usize = SCREEN_HEIGHT as usize;
const OPAQUE: u32 = 0xFF00_0000;

/// Pack a color into the framebuffer word format.
#[inline]
pub fn pack(color: Rgb888) -> u32 { OPAQUE | color.into_storage() }

/// Unpack a framebuffer word, ignoring the top byte.
#[inline]
pub fn unpack(word: u32) -> Rgb888 { Rgb888::from(RawU24::new(word & 0x00FF_FFFF)) }

/// Linear blend from `base` toward `color`; `alpha` 0 keeps `base`, 255 gives `color`.
pub fn blend(
    base: Rgb888,
    color: Rgb888,
    alpha: u8,
) -> Rgb888 {
    let mix = |b: u8, c: u8| -> u8 {
        let b = i32::from(b);
        let c = i32::from(c);
        (b + (c - b) * i32::from(alpha) / 255) as u8
    };
    Rgb888::new(mix(base.r(), color.r()), mix(base.g(), color.g()), mix(base.b(), color.b()))
}

/// Drawing surface over one 640x480 frame.
///
/// Shorter buffers are tolerated: writes past the end are discarded like any
/// other out-of-bounds write.
pub struct Canvas<'a> {
    pixels: &'a mut [u32],
}

impl<'a> Canvas<'a> {
    /// Wrap a framebuffer for drawing.
    pub fn new(pixels: &'a mut [u32]) -> Self { Self { pixels } }

    /// Fill the whole buffer with one color.
    pub fn clear_buffer(
        &mut self,
        color: Rgb888,
    ) {
        self.pixels.fill(pack(color));
    }

    /// Set a pixel, silently clipping anything off-frame.
    #[inline]
    pub fn set_pixel(
        &mut self,
        x: i32,
        y: i32,
        color: Rgb888,
    ) {
        if x >= 0 && x < WIDTH as i32 && y >= 0 && y < HEIGHT as i32 {
            let idx = y as usize * WIDTH + x as usize;
            if let Some(px) = self.pixels.get_mut(idx) {
                *px = pack(color);
            }
        }
    }

    /// Read back a pixel word, `None` when off-frame.
    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> Option<u32> {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return None;
        }
        self.pixels.get(y as usize * WIDTH + x as usize).copied()
    }

    /// Raw frame words, row-major.
    pub fn as_words(&self) -> &[u32] { self.pixels }
}

impl OriginDimensions for Canvas<'_> {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for Canvas<'_> {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let drawable_area = area.intersection(&self.bounding_box());
        if drawable_area.size == Size::zero() {
            return Ok(());
        }

        let word = pack(color);
        let x_start = drawable_area.top_left.x as usize;
        let x_end = x_start + drawable_area.size.width as usize;

        for y in drawable_area.rows() {
            let row_start = y as usize * WIDTH;
            let end = (row_start + x_end).min(self.pixels.len());
            if let Some(row) = self.pixels.get_mut(row_start + x_start..end) {
                row.fill(word);
            }
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.clear_buffer(color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::PrimitiveStyle;

    use super::*;
    use crate::config::FRAME_PIXELS;

    const RED: Rgb888 = Rgb888::new(0xFF, 0, 0);

    #[test]
    fn test_pack_layout() {
        assert_eq!(pack(Rgb888::new(0x12, 0x34, 0x56)), 0xFF12_3456);
        assert_eq!(unpack(0x0012_3456), Rgb888::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_blend_endpoints() {
        let base = Rgb888::new(0x40, 0x39, 0xA4);
        let top = Rgb888::new(0xFF, 0x00, 0x10);
        assert_eq!(blend(base, top, 0), base);
        assert_eq!(blend(base, top, 255), top);
    }

    #[test]
    fn test_blend_midpoint() {
        let mid = blend(Rgb888::new(0, 0, 0), Rgb888::new(254, 254, 254), 128);
        assert_eq!(mid, Rgb888::new(127, 127, 127));
    }

    #[test]
    fn test_set_pixel_clips() {
        let mut buf = vec![0u32; FRAME_PIXELS];
        let mut canvas = Canvas::new(&mut buf);
        canvas.set_pixel(-1, 0, RED);
        canvas.set_pixel(0, -1, RED);
        canvas.set_pixel(640, 0, RED);
        canvas.set_pixel(0, 480, RED);
        assert!(buf.iter().all(|&p| p == 0), "off-frame writes must be discarded");
    }

    #[test]
    fn test_set_pixel_writes() {
        let mut buf = vec![0u32; FRAME_PIXELS];
        let mut canvas = Canvas::new(&mut buf);
        canvas.set_pixel(639, 479, RED);
        assert_eq!(canvas.pixel(639, 479), Some(pack(RED)));
        assert_eq!(canvas.pixel(640, 479), None);
    }

    #[test]
    fn test_fill_solid_clips_to_frame() {
        let mut buf = vec![0u32; FRAME_PIXELS];
        let mut canvas = Canvas::new(&mut buf);
        Rectangle::new(Point::new(630, 470), Size::new(40, 40))
            .into_styled(PrimitiveStyle::with_fill(RED))
            .draw(&mut canvas)
            .ok();

        assert_eq!(canvas.pixel(630, 470), Some(pack(RED)));
        assert_eq!(canvas.pixel(639, 479), Some(pack(RED)));
        assert_eq!(canvas.pixel(629, 470), Some(0));
        let painted = buf.iter().filter(|&&p| p != 0).count();
        assert_eq!(painted, 10 * 10);
    }

    #[test]
    fn test_short_buffer_is_tolerated() {
        let mut buf = vec![0u32; 16];
        let mut canvas = Canvas::new(&mut buf);
        canvas.clear_buffer(RED);
        canvas.set_pixel(100, 100, RED);
        Rectangle::new(Point::new(0, 0), Size::new(640, 2))
            .into_styled(PrimitiveStyle::with_fill(RED))
            .draw(&mut canvas)
            .ok();
        assert!(buf.iter().all(|&p| p == pack(RED)));
    }
}
