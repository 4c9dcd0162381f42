// src/engine.rs

//! Per-frame session: the host calls `start_frame`, draws through the
//! returned [`Rasterizer`], then calls `end_frame`.
//!
//! ```text
//! start_frame ─► query surface size ─► Framebuffer::start_frame (resize/clear)
//!      │
//!      ▼
//!   caller draws (draw_line / draw_triangle / put_pixel)
//!      │
//!      ▼
//! end_frame ─► Framebuffer::end_frame ─► Present(frame) ─► reclaim(frame)
//! ```
//!
//! The engine never schedules frames itself and holds no global state; a
//! host that wants two frames in flight runs two engines.

use crate::config::Config;
use crate::display::{DisplayManager, PresentSurface};
use crate::error::Result;
use crate::rasterizer::Rasterizer;
use log::{debug, trace, warn};

pub struct Engine<S: PresentSurface> {
    display: DisplayManager<S>,
    rasterizer: Rasterizer,
    config: Config,
    frames_presented: u64,
}

impl<S: PresentSurface> Engine<S> {
    pub fn new(surface: S, config: Config) -> Self {
        let mut rasterizer = Rasterizer::new();
        rasterizer
            .framebuffer_mut()
            .set_clear_color(config.frame.clear_color);
        debug!(
            "Engine: created (clear_each_frame={}, clear_color={})",
            config.frame.clear_each_frame, config.frame.clear_color
        );
        Self {
            display: DisplayManager::new(surface),
            rasterizer,
            config,
            frames_presented: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn surface(&self) -> &S {
        self.display.surface()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.display.surface_mut()
    }

    pub fn rasterizer(&self) -> &Rasterizer {
        &self.rasterizer
    }

    /// Drawing handle. Calls fail with `InvalidFrameState` outside a frame.
    pub fn rasterizer_mut(&mut self) -> &mut Rasterizer {
        &mut self.rasterizer
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Sizes the framebuffer to the surface and opens a frame.
    pub fn start_frame(&mut self, clear: bool) -> Result<&mut Rasterizer> {
        let metrics = self.display.query_metrics()?;
        self.rasterizer
            .start_frame(metrics.width_px, metrics.height_px, clear)?;
        Ok(&mut self.rasterizer)
    }

    /// `start_frame` with the configured clear policy.
    pub fn start_frame_with_config(&mut self) -> Result<&mut Rasterizer> {
        let clear = self.config.frame.clear_each_frame;
        self.start_frame(clear)
    }

    /// Closes the frame and presents it.
    ///
    /// The buffer returned by the surface is handed back to the framebuffer
    /// before any presentation error is reported.
    pub fn end_frame(&mut self) -> Result<()> {
        let frame = self.rasterizer.end_frame()?;
        let (returned, outcome) = self.display.present(frame);
        match returned {
            Some(frame) => self.rasterizer.reclaim(frame),
            None => warn!("Engine: surface kept the frame buffer, next frame reallocates"),
        }
        outcome?;
        self.frames_presented += 1;
        trace!("Engine: frame {} presented", self.frames_presented);
        Ok(())
    }

    /// Runs one full frame, yielding the rasterizer to `draw` in between.
    ///
    /// If `draw` fails the frame is still ended (and presented) so the
    /// engine is ready for the next one; the drawing error is returned.
    pub fn render_frame<F>(&mut self, clear: bool, draw: F) -> Result<()>
    where
        F: FnOnce(&mut Rasterizer) -> Result<()>,
    {
        let drawn = draw(self.start_frame(clear)?);
        let ended = self.end_frame();
        drawn.and(ended)
    }
}
