// src/display/drivers/headless.rs

//! Headless presentation surface.
//!
//! Stands in for a real window in tests and in the demo binary: it reports
//! a configurable size and keeps a copy of the last frame it was shown.

use crate::display::driver::PresentSurface;
use crate::display::messages::{SurfaceError, SurfaceRequest, SurfaceResponse};
use crate::framebuffer::Frame;
use log::{info, trace};

#[derive(Debug, Default)]
pub struct HeadlessSurface {
    width_px: u32,
    height_px: u32,
    frames_presented: u64,
    last_frame: Option<Frame>,
    fail_next_present: Option<String>,
    detached: bool,
}

impl HeadlessSurface {
    pub fn new(width_px: u32, height_px: u32) -> Self {
        info!("HeadlessSurface::new() {}x{}", width_px, height_px);
        Self {
            width_px,
            height_px,
            ..Self::default()
        }
    }

    /// Changes the size reported to the next `QueryDimensions`.
    pub fn resize(&mut self, width_px: u32, height_px: u32) {
        info!("HeadlessSurface: resize to {}x{}", width_px, height_px);
        self.width_px = width_px;
        self.height_px = height_px;
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Copy of the most recently presented frame.
    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }

    /// While detached, every request fails with `SurfaceError::Unavailable`
    /// and presented frames are dropped.
    pub fn set_detached(&mut self, detached: bool) {
        info!("HeadlessSurface: detached={}", detached);
        self.detached = detached;
    }

    /// Makes the next `Present` fail with `reason`.
    pub fn fail_next_present(&mut self, reason: impl Into<String>) {
        self.fail_next_present = Some(reason.into());
    }
}

impl PresentSurface for HeadlessSurface {
    fn handle_request(&mut self, request: SurfaceRequest) -> Result<SurfaceResponse, SurfaceError> {
        if self.detached {
            return Err(SurfaceError::Unavailable(
                "headless surface is detached".to_string(),
            ));
        }
        match request {
            SurfaceRequest::QueryDimensions => Ok(SurfaceResponse::Dimensions {
                width_px: self.width_px,
                height_px: self.height_px,
            }),
            SurfaceRequest::Present(frame) => {
                if let Some(reason) = self.fail_next_present.take() {
                    info!("HeadlessSurface: failing Present: {}", reason);
                    return Err(SurfaceError::PresentationFailed { frame, reason });
                }
                trace!(
                    "HeadlessSurface: Present {}x{}",
                    frame.width(),
                    frame.height()
                );
                // A real surface would copy the pixels out here.
                self.last_frame = Some(frame.clone());
                self.frames_presented += 1;
                Ok(SurfaceResponse::PresentComplete(frame))
            }
        }
    }
}
