// src/display/driver.rs

//! PresentSurface trait - the engine's only view of the host display.
//!
//! A surface supplies the logical dimensions for each frame and accepts the
//! finished pixels. Its transfer format is the framebuffer's own layout:
//! row-major packed RGBA `u32` cells, no color-space conversion.
//!
//! ## Request/Response Pairs
//! - `QueryDimensions` → `Dimensions`
//! - `Present(frame)` → `PresentComplete(frame)`

use crate::display::messages::{SurfaceError, SurfaceRequest, SurfaceResponse};

pub trait PresentSurface {
    /// Handle one request.
    ///
    /// Returns `SurfaceError` rather than `anyhow::Error` so a failed
    /// `Present` can hand the frame back via
    /// `SurfaceError::PresentationFailed`.
    fn handle_request(&mut self, request: SurfaceRequest) -> Result<SurfaceResponse, SurfaceError>;
}

impl<S: PresentSurface + ?Sized> PresentSurface for Box<S> {
    fn handle_request(&mut self, request: SurfaceRequest) -> Result<SurfaceResponse, SurfaceError> {
        (**self).handle_request(request)
    }
}
