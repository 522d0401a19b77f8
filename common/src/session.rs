//! Viewer session: navigation state machine and the per-frame host loop.
//!
//! A [`Session`] owns every piece of mutable state (current screen, boot
//! counter, cursors, input repeat counters). The host owns the framebuffer and
//! passes it in each frame; nothing here allocates.
//!
//! # State Machine
//!
//! ```text
//!            any button / frame 600
//!  Booting ──────────────────────────► Contents ◄──┐
//!     ▲                                  │         │ B / Start
//!     │ load / reset            A/Right/Left       │
//!     │                                  ▼         │
//!     └──────────────────────────────  Viewing ────┘
//! ```
//!
//! # Frame Order
//!
//! 1. Poll input once and read all 16 joypad buttons
//! 2. Update state (at most one screen transition per frame)
//! 3. Render the resulting screen into the framebuffer
//! 4. Hand the frame and one block of silent audio to the host

use log::{debug, error, info, warn};

use crate::config::{AUDIO_FRAMES, BOOT_FRAMES, FRAME_PITCH, LIST_ROWS, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::content::Catalog;
use crate::error::{SessionError, Unsupported};
use crate::host::{Device, Host, PixelFormat};
use crate::input::{Button, ButtonSet, InputRepeat};
use crate::screens::{PageView, draw_boot, draw_contents, draw_viewer, handle_contents, handle_viewer};
use crate::scroll::ListPosition;
use crate::terminal::Terminal;

/// Active screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Booting,
    Contents,
    Viewing,
}

/// Complete viewer state for one loaded catalog.
pub struct Session {
    screen: Screen,
    boot_frame: u32,
    contents: ListPosition,
    view: PageView,
    repeat: InputRepeat,
    /// `None` until content is loaded.
    catalog: Option<&'static Catalog>,
    silence: [i16; AUDIO_FRAMES * 2],
}

impl Session {
    /// Unloaded session; [`Session::run_frame`] does nothing until [`Session::load`] succeeds.
    pub const fn new() -> Self {
        Self {
            screen: Screen::Booting,
            boot_frame: 0,
            contents: ListPosition::new(),
            view: PageView::open(0),
            repeat: InputRepeat::new(),
            catalog: None,
            silence: [0; AUDIO_FRAMES * 2],
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Start a session on `catalog`, negotiating the pixel format with the host.
    ///
    /// On failure the previous state is left as it was.
    pub fn load<H: Host>(
        &mut self,
        host: &mut H,
        catalog: Option<&'static Catalog>,
    ) -> Result<(), SessionError> {
        let Some(catalog) = catalog else {
            error!("No content provided");
            return Err(SessionError::MissingContent);
        };

        if !host.set_pixel_format(PixelFormat::Xrgb8888) {
            error!("XRGB8888 not supported by host");
            return Err(SessionError::PixelFormatRejected);
        }

        self.catalog = Some(catalog);
        self.restart();
        info!("Loaded {} pages", catalog.len());
        Ok(())
    }

    /// Drop the loaded content. Later frames do nothing.
    pub fn unload(&mut self) {
        if self.catalog.take().is_some() {
            debug!("Content unloaded");
        }
    }

    /// Back to the start of the boot sequence with all cursors zeroed.
    pub fn reset(&mut self) {
        self.restart();
        debug!("Session reset");
    }

    fn restart(&mut self) {
        self.screen = Screen::Booting;
        self.boot_frame = 0;
        self.contents = ListPosition::new();
        self.view = PageView::open(0);
        self.repeat = InputRepeat::new();
    }

    // =========================================================================
    // Per-Frame
    // =========================================================================

    /// Run one frame against the host: input, update, render, present.
    pub fn run_frame<H: Host>(
        &mut self,
        host: &mut H,
        framebuffer: &mut [u32],
    ) {
        if self.catalog.is_none() {
            return;
        }

        host.poll_input();
        let mut down = ButtonSet::EMPTY;
        for button in Button::ALL {
            if host.input_state(0, Device::Joypad, button) != 0 {
                down.insert(button);
            }
        }

        self.update(down);
        self.render(framebuffer);

        host.video_refresh(framebuffer, SCREEN_WIDTH, SCREEN_HEIGHT, FRAME_PITCH);
        host.audio_batch(&self.silence);
    }

    /// Advance the state machine by one frame given the buttons held down.
    pub fn update(
        &mut self,
        down: ButtonSet,
    ) {
        let Some(catalog) = self.catalog else {
            return;
        };

        match self.screen {
            Screen::Booting => {
                self.boot_frame = self.boot_frame.saturating_add(1);
                if self.boot_frame >= BOOT_FRAMES || !down.is_empty() {
                    self.screen = Screen::Contents;
                    self.repeat.clear(down);
                    debug!("Boot finished at frame {}", self.boot_frame);
                }
            }
            Screen::Contents => {
                let pressed = self.repeat.sample(down);
                if let Some(index) = handle_contents(&mut self.contents, pressed, catalog.len()) {
                    self.view = PageView::open(index);
                    self.screen = Screen::Viewing;
                    debug!("Opening page {index}");
                }
            }
            Screen::Viewing => {
                let pressed = self.repeat.sample(down);
                if handle_viewer(&mut self.view, pressed, catalog) {
                    self.contents.select(self.view.document, catalog.len(), LIST_ROWS);
                    self.screen = Screen::Contents;
                    debug!("Back to contents at page {}", self.view.document);
                }
            }
        }
    }

    /// Draw the current screen into `framebuffer`.
    pub fn render(
        &self,
        framebuffer: &mut [u32],
    ) {
        let Some(catalog) = self.catalog else {
            return;
        };
        let mut term = Terminal::new(framebuffer);
        match self.screen {
            Screen::Booting => draw_boot(&mut term, self.boot_frame),
            Screen::Contents => draw_contents(&mut term, catalog, &self.contents),
            Screen::Viewing => draw_viewer(&mut term, catalog, &self.view),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn is_loaded(&self) -> bool { self.catalog.is_some() }

    pub fn screen(&self) -> Screen { self.screen }

    pub fn boot_frame(&self) -> u32 { self.boot_frame }

    /// Contents cursor and scroll offset.
    pub fn contents_position(&self) -> ListPosition { self.contents }

    /// Open document and its scroll offset.
    pub fn page_view(&self) -> PageView { self.view }

    // =========================================================================
    // Unsupported Capabilities
    // =========================================================================

    /// Save states are not offered.
    pub fn serialize_size(&self) -> usize { 0 }

    pub fn serialize(
        &self,
        _buffer: &mut [u8],
    ) -> Result<(), Unsupported> {
        warn!("Save states are not supported");
        Err(Unsupported)
    }

    pub fn unserialize(
        &mut self,
        _data: &[u8],
    ) -> Result<(), Unsupported> {
        warn!("Save states are not supported");
        Err(Unsupported)
    }

    /// Multi-part content loading is not offered.
    pub fn load_special(
        &mut self,
        _kind: u32,
        _parts: &[&'static Catalog],
    ) -> Result<(), Unsupported> {
        warn!("Special content loading is not supported");
        Err(Unsupported)
    }

    /// No memory regions are exposed.
    pub fn memory_data(
        &self,
        _id: u32,
    ) -> Option<&[u8]> {
        None
    }

    pub fn memory_size(
        &self,
        _id: u32,
    ) -> usize {
        0
    }

    /// Cheats are accepted and ignored.
    pub fn cheat_reset(&mut self) {}

    pub fn cheat_set(
        &mut self,
        _index: u32,
        _enabled: bool,
        _code: &str,
    ) {
    }
}

impl Default for Session {
    fn default() -> Self { Self::new() }
}
