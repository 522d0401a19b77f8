//! Error types.

use thiserror::Error;

/// Reasons a session fails to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The host passed no content to load.
    #[error("no content catalog supplied")]
    MissingContent,

    /// The host does not accept 32-bit XRGB8888 frames.
    #[error("host rejected the XRGB8888 pixel format")]
    PixelFormatRejected,
}

/// Answer to a capability this core declares but does not provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation not supported")]
pub struct Unsupported;
