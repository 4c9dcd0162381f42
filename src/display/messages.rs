// src/display/messages.rs

//! Message types exchanged between the engine and a presentation surface.
//!
//! All communication happens via ownership transfer: a `Frame` travels to
//! the surface inside `Present` and comes back inside `PresentComplete` (or
//! inside the error), so the pixel storage is never lost.

use crate::framebuffer::Frame;
use thiserror::Error;

/// Requests sent to a `PresentSurface`.
#[derive(Debug, Clone)]
pub enum SurfaceRequest {
    /// Ask for the current logical size of the surface.
    /// Surface responds with `Dimensions`.
    QueryDimensions,

    /// Display the frame. The surface takes ownership and responds with
    /// `PresentComplete`, handing the frame back for reuse.
    Present(Frame),
}

/// Responses sent back from a `PresentSurface`.
#[derive(Debug)]
pub enum SurfaceResponse {
    Dimensions { width_px: u32, height_px: u32 },

    /// Presentation complete, frame ownership returned.
    PresentComplete(Frame),
}

#[derive(Error, Debug)]
pub enum SurfaceError {
    /// Presentation failed; the frame is returned so its buffer can be reused.
    #[error("presentation failed: {reason}")]
    PresentationFailed { frame: Frame, reason: String },

    #[error("surface unavailable: {0}")]
    Unavailable(String),
}
