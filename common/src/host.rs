//! Host runtime contract.
//!
//! The host owns the clock, the window and the audio device. Each frame it
//! calls into the session, which polls input once, renders one complete frame
//! and hands back exactly one video frame and one audio block.

use crate::config::{AUDIO_RATE, ASPECT_RATIO, FRAME_RATE, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::input::Button;

/// Pixel formats the core can ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    /// 32-bit `0x??RRGGBB`, written as `0xFFRRGGBB`.
    Xrgb8888,
}

/// Input device classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Device {
    Joypad,
}

/// Video standard reported to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Ntsc,
    Pal,
}

/// Callbacks the session drives every frame.
pub trait Host {
    /// Ask the host to accept a pixel format; `false` means rejected.
    fn set_pixel_format(
        &mut self,
        format: PixelFormat,
    ) -> bool;

    /// Latch input for this frame.
    fn poll_input(&mut self);

    /// State of one button; non-zero means down.
    fn input_state(
        &mut self,
        port: u32,
        device: Device,
        button: Button,
    ) -> i16;

    /// Present one finished frame. `pitch` is in bytes.
    fn video_refresh(
        &mut self,
        frame: &[u32],
        width: u32,
        height: u32,
        pitch: usize,
    );

    /// Queue interleaved stereo samples; returns the frames consumed.
    fn audio_batch(
        &mut self,
        samples: &[i16],
    ) -> usize;
}

// =============================================================================
// Static Descriptions
// =============================================================================

/// Library identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SystemInfo {
    pub library_name: &'static str,
    pub library_version: &'static str,
    /// Content file extensions, `|`-separated.
    pub valid_extensions: &'static str,
    /// The host must pass a path rather than loaded bytes.
    pub need_fullpath: bool,
}

/// Video geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub base_width: u32,
    pub base_height: u32,
    pub max_width: u32,
    pub max_height: u32,
    pub aspect_ratio: f32,
}

/// Frame and sample rates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub fps: f64,
    pub sample_rate: f64,
}

/// Audio/video description handed to the host before the first frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AvInfo {
    pub geometry: Geometry,
    pub timing: Timing,
}

/// Identity of this core.
pub const fn system_info() -> SystemInfo {
    SystemInfo {
        library_name: "The Emu Pages",
        library_version: env!("CARGO_PKG_VERSION"),
        valid_extensions: "emupages",
        need_fullpath: true,
    }
}

/// Fixed 640x480 geometry at 60 fps with 44.1 kHz audio.
pub const fn av_info() -> AvInfo {
    AvInfo {
        geometry: Geometry {
            base_width: SCREEN_WIDTH,
            base_height: SCREEN_HEIGHT,
            max_width: SCREEN_WIDTH,
            max_height: SCREEN_HEIGHT,
            aspect_ratio: ASPECT_RATIO,
        },
        timing: Timing {
            fps: FRAME_RATE,
            sample_rate: AUDIO_RATE as f64,
        },
    }
}

/// Region is always NTSC (60 Hz).
pub const fn region() -> Region { Region::Ntsc }
