// src/framebuffer.rs

//! CPU-side pixel buffer for a single frame.
//!
//! ## Lifecycle
//! 1. `start_frame(w, h, clear)` - fixes the buffer shape, (re)allocates on
//!    resize, optionally clears.
//! 2. `put_pixel` / `get_pixel` / `clear` - only valid while a frame is active.
//! 3. `end_frame()` - moves the buffer out as an immutable [`Frame`].
//! 4. `reclaim(frame)` - optional; hands a presented frame's storage back so
//!    the next frame can reuse it (and keep its contents when not clearing).
//!
//! Writes outside the buffer are dropped silently; reads outside it fail with
//! [`RasterError::OutOfBounds`].

use crate::color::Color;
use crate::error::{RasterError, Result};
use log::{debug, trace, warn};

/// Whether the framebuffer currently accepts drawing calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameState {
    /// No frame in progress: never started, or ended and not yet restarted.
    Idle,
    /// Between `start_frame` and `end_frame`.
    Active,
}

/// A completed frame, ready for presentation.
///
/// Pixels are row-major packed RGBA values, index `x + y * width`, the same
/// layout the [`Framebuffer`] wrote them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Box<[u32]>,
}

impl Frame {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        index_of(x, y, self.width, self.height).map(|i| Color::from_packed(self.pixels[i]))
    }

    /// Byte stream in R, G, B, A order per cell, for surfaces that take bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|&p| Color::from_packed(p).to_bytes())
            .collect()
    }

    pub fn into_pixels(self) -> Box<[u32]> {
        self.pixels
    }
}

/// Row-major index for `(x, y)`, or `None` when outside `width x height`.
#[inline]
fn index_of(x: i32, y: i32, width: u32, height: u32) -> Option<usize> {
    if x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height {
        Some(x as usize + y as usize * width as usize)
    } else {
        None
    }
}

/// Owns the pixel storage written during one frame.
#[derive(Debug)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    /// `None` while the storage is out on presentation.
    pixels: Option<Box<[u32]>>,
    state: FrameState,
    clear_color: Color,
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: None,
            state: FrameState::Idle,
            clear_color: Color::TRANSPARENT,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == FrameState::Active
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Value written to every cell by `start_frame(.., true)`.
    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        index_of(x, y, self.width, self.height).is_some()
    }

    /// Begins a frame of `width x height` pixels.
    ///
    /// A dimension change (or missing storage) allocates a fresh transparent
    /// buffer; otherwise the previous contents are kept unless `clear` is set.
    pub fn start_frame(&mut self, width: u32, height: u32, clear: bool) -> Result<()> {
        self.require_idle("start_frame")?;

        let len = width as usize * height as usize;
        let reuse = self.width == width
            && self.height == height
            && self.pixels.as_ref().is_some_and(|p| p.len() == len);

        if !reuse {
            debug!(
                "Framebuffer: allocating {}x{} (was {}x{}, storage {})",
                width,
                height,
                self.width,
                self.height,
                if self.pixels.is_some() { "held" } else { "absent" }
            );
            self.pixels = Some(vec![Color::TRANSPARENT.to_packed(); len].into_boxed_slice());
            self.width = width;
            self.height = height;
        }

        if clear {
            self.fill(self.clear_color);
        }

        self.state = FrameState::Active;
        trace!("Framebuffer: frame started {}x{} clear={}", width, height, clear);
        Ok(())
    }

    /// Writes `color` at `(x, y)`. Out-of-bounds coordinates are ignored.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<()> {
        let index = index_of(x, y, self.width, self.height);
        let pixels = self.active_pixels_mut("put_pixel")?;
        if let Some(i) = index {
            pixels[i] = color.to_packed();
        }
        Ok(())
    }

    /// Reads the pixel at `(x, y)`; unlike writes, this rejects coordinates
    /// outside the buffer.
    pub fn get_pixel(&self, x: i32, y: i32) -> Result<Color> {
        let pixels = self.active_pixels("get_pixel")?;
        let i = index_of(x, y, self.width, self.height).ok_or(RasterError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        Ok(Color::from_packed(pixels[i]))
    }

    /// Sets every cell of the active frame to `color`.
    pub fn clear(&mut self, color: Color) -> Result<()> {
        self.ensure_active("clear")?;
        self.fill(color);
        Ok(())
    }

    /// Finishes the frame and hands its storage out for presentation.
    pub fn end_frame(&mut self) -> Result<Frame> {
        self.ensure_active("end_frame")?;
        let pixels = self.pixels.take().ok_or(RasterError::InvalidFrameState {
            operation: "end_frame",
            state: self.state,
        })?;
        self.state = FrameState::Idle;
        trace!("Framebuffer: frame ended {}x{}", self.width, self.height);
        Ok(Frame {
            width: self.width,
            height: self.height,
            pixels,
        })
    }

    /// Takes back the storage of a presented frame.
    ///
    /// Frames whose shape no longer matches are dropped; the next
    /// `start_frame` allocates anyway.
    pub fn reclaim(&mut self, frame: Frame) {
        if self.is_active() {
            warn!("Framebuffer: reclaim during an active frame, dropping returned buffer");
            return;
        }
        if frame.width != self.width || frame.height != self.height {
            debug!(
                "Framebuffer: dropping returned {}x{} buffer, current shape is {}x{}",
                frame.width, frame.height, self.width, self.height
            );
            return;
        }
        self.pixels = Some(frame.pixels);
    }

    fn fill(&mut self, color: Color) {
        if let Some(pixels) = self.pixels.as_mut() {
            pixels.fill(color.to_packed());
        }
    }

    pub(crate) fn ensure_active(&self, operation: &'static str) -> Result<()> {
        match self.state {
            FrameState::Active => Ok(()),
            state => Err(RasterError::InvalidFrameState { operation, state }),
        }
    }

    fn require_idle(&self, operation: &'static str) -> Result<()> {
        match self.state {
            FrameState::Idle => Ok(()),
            state => Err(RasterError::InvalidFrameState { operation, state }),
        }
    }

    fn active_pixels(&self, operation: &'static str) -> Result<&[u32]> {
        self.ensure_active(operation)?;
        self.pixels
            .as_deref()
            .ok_or(RasterError::InvalidFrameState {
                operation,
                state: self.state,
            })
    }

    fn active_pixels_mut(&mut self, operation: &'static str) -> Result<&mut [u32]> {
        self.ensure_active(operation)?;
        let state = self.state;
        self.pixels
            .as_deref_mut()
            .ok_or(RasterError::InvalidFrameState { operation, state })
    }
}

#[cfg(test)]
mod tests;
