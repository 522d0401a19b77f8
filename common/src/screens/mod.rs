//! Screen renderers and their per-frame input handling.
//!
//! - [`boot`]: scripted boot sequence (pure function of the frame counter)
//! - [`contents`]: table of contents list
//! - [`viewer`]: single-document viewer
//! - [`mascot`]: splash sprite used by the boot sequence

pub mod boot;
pub mod contents;
pub mod mascot;
pub mod viewer;

pub use boot::draw_boot;
pub use contents::{draw_contents, handle_contents};
pub use viewer::{PageView, draw_viewer, handle_viewer};
