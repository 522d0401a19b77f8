//! Presentation engine for the Emu Pages document viewer.
//!
//! This crate holds everything that does not depend on a concrete host, so the
//! desktop simulator and any other frontend share one implementation:
//!
//! - [`canvas`]: bounds-checked XRGB8888 `DrawTarget` over the host framebuffer
//! - [`glyph`]: 8x16 bitmap glyphs
//! - [`terminal`]: 80x30 text grid with a bordered 76x28 inner area
//! - [`scroll`]: follow/snap scroll-window math
//! - [`input`]: joypad buttons and press/auto-repeat detection
//! - [`content`]: pre-baked documents and the catalog
//! - [`screens`]: boot, contents and viewer screens
//! - [`session`]: navigation state machine and per-frame loop
//! - [`host`]: host callback trait and static AV/system descriptions
//! - [`colors`], [`config`]: palette and fixed constants
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests and never allocates. Per-frame
//! buffers are fixed-size arrays or borrowed from the host.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod canvas;
pub mod colors;
pub mod config;
pub mod content;
pub mod error;
pub mod glyph;
pub mod host;
pub mod input;
pub mod screens;
pub mod scroll;
pub mod session;
pub mod terminal;

// Re-export commonly used items
pub use content::{Catalog, Document, Line};
pub use error::{SessionError, Unsupported};
pub use host::{AvInfo, Device, Host, PixelFormat, Region, SystemInfo, av_info, region, system_info};
pub use input::{Button, ButtonSet};
pub use session::{Screen, Session};
