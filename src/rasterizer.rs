// src/rasterizer.rs

//! Point, line and triangle drawing on top of a [`Framebuffer`].
//!
//! ```text
//! draw_line / draw_triangle  →  [Rasterizer]  →  Framebuffer::put_pixel
//!   (integer geometry)                              (clips silently)
//! ```
//!
//! The rasterizer owns its framebuffer outright; there is no shared or
//! global render target. Every drawing call fails with
//! [`RasterError::InvalidFrameState`](crate::error::RasterError) outside a
//! frame and never fails because of coordinates.

pub mod line;
pub mod triangle;

use crate::color::Color;
use crate::error::Result;
use crate::framebuffer::{Frame, FrameState, Framebuffer};
use serde::{Deserialize, Serialize};

pub use line::BresenhamLine;
pub use triangle::{doubled_signed_area, fill_spans, Span};

/// Integer pixel coordinate. Origin top-left, x right, y down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Software rasterizer bound to one framebuffer.
#[derive(Debug, Default)]
pub struct Rasterizer {
    framebuffer: Framebuffer,
}

impl Rasterizer {
    pub fn new() -> Self {
        Self::with_framebuffer(Framebuffer::new())
    }

    pub fn with_framebuffer(framebuffer: Framebuffer) -> Self {
        Self { framebuffer }
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.framebuffer
    }

    pub fn into_framebuffer(self) -> Framebuffer {
        self.framebuffer
    }

    pub fn state(&self) -> FrameState {
        self.framebuffer.state()
    }

    pub fn start_frame(&mut self, width: u32, height: u32, clear: bool) -> Result<()> {
        self.framebuffer.start_frame(width, height, clear)
    }

    pub fn end_frame(&mut self) -> Result<Frame> {
        self.framebuffer.end_frame()
    }

    pub fn reclaim(&mut self, frame: Frame) {
        self.framebuffer.reclaim(frame);
    }

    pub fn clear(&mut self, color: Color) -> Result<()> {
        self.framebuffer.clear(color)
    }

    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<()> {
        self.framebuffer.put_pixel(x, y, color)
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Result<Color> {
        self.framebuffer.get_pixel(x, y)
    }

    pub fn draw_point(&mut self, p: Point, color: Color) -> Result<()> {
        self.framebuffer.put_pixel(p.x, p.y, color)
    }

    /// Bresenham line from `p0` to `p1`, both endpoints included.
    pub fn draw_line(&mut self, p0: Point, p1: Point, color: Color) -> Result<()> {
        for p in BresenhamLine::new(p0, p1) {
            self.framebuffer.put_pixel(p.x, p.y, color)?;
        }
        Ok(())
    }

    /// Draws the outline (three lines) or the top-left-rule fill of a triangle.
    ///
    /// Vertex order and winding do not matter. Zero-area triangles draw
    /// their remaining edges in outline mode and nothing when filled.
    pub fn draw_triangle(
        &mut self,
        p0: Point,
        p1: Point,
        p2: Point,
        color: Color,
        filled: bool,
    ) -> Result<()> {
        if !filled {
            self.draw_line(p0, p1, color)?;
            self.draw_line(p1, p2, color)?;
            return self.draw_line(p2, p0, color);
        }

        // Spans may be empty, so the frame check cannot be left to put_pixel.
        self.framebuffer.ensure_active("draw_triangle")?;

        let (width, height) = (self.framebuffer.width(), self.framebuffer.height());
        for span in fill_spans(p0, p1, p2, width, height) {
            for x in span.x_start..=span.x_end {
                self.framebuffer.put_pixel(x, span.y, color)?;
            }
        }
        Ok(())
    }
}
