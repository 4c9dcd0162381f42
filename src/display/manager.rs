// src/display/manager.rs

//! DisplayManager - synchronous, typed wrapper around a PresentSurface.

use crate::display::driver::PresentSurface;
use crate::display::messages::{SurfaceError, SurfaceRequest, SurfaceResponse};
use crate::error::{RasterError, Result};
use crate::framebuffer::Frame;
use log::{debug, trace};

/// Logical surface size reported for a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMetrics {
    pub width_px: u32,
    pub height_px: u32,
}

/// Owns the surface and turns its request/response protocol into plain calls.
pub struct DisplayManager<S: PresentSurface> {
    surface: S,
    metrics: Option<DisplayMetrics>,
}

impl<S: PresentSurface> DisplayManager<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            metrics: None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Metrics from the most recent `query_metrics` call.
    pub fn metrics(&self) -> Option<DisplayMetrics> {
        self.metrics
    }

    /// Asks the surface for its current size.
    pub fn query_metrics(&mut self) -> Result<DisplayMetrics> {
        let response = self
            .surface
            .handle_request(SurfaceRequest::QueryDimensions)
            .map_err(|e| RasterError::Surface(e.to_string()))?;

        match response {
            SurfaceResponse::Dimensions {
                width_px,
                height_px,
            } => {
                let metrics = DisplayMetrics {
                    width_px,
                    height_px,
                };
                if self.metrics != Some(metrics) {
                    debug!("DisplayManager: surface is {}x{} px", width_px, height_px);
                }
                self.metrics = Some(metrics);
                Ok(metrics)
            }
            other => Err(RasterError::Surface(format!(
                "expected Dimensions response, got {:?}",
                other
            ))),
        }
    }

    /// Sends a frame to the surface.
    ///
    /// The frame comes back in every case where the surface returns it, even
    /// on failure, so the caller can recycle the storage before reporting.
    pub fn present(&mut self, frame: Frame) -> (Option<Frame>, Result<()>) {
        trace!("DisplayManager: presenting {}x{}", frame.width(), frame.height());
        match self.surface.handle_request(SurfaceRequest::Present(frame)) {
            Ok(SurfaceResponse::PresentComplete(frame)) => (Some(frame), Ok(())),
            Ok(other) => (
                None,
                Err(RasterError::Surface(format!(
                    "expected PresentComplete response, got {:?}",
                    other
                ))),
            ),
            Err(SurfaceError::PresentationFailed { frame, reason }) => (
                Some(frame),
                Err(RasterError::Surface(format!("presentation failed: {}", reason))),
            ),
            Err(e) => (None, Err(RasterError::Surface(e.to_string()))),
        }
    }
}

#[cfg(test)]
mod tests;
