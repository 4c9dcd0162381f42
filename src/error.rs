// src/error.rs

//! Error type shared by every layer of the rasterizer.
//!
//! Writes never fail on coordinates (they clip silently), so the variants
//! here only cover explicit reads, parsing and frame lifecycle misuse.

use crate::framebuffer::FrameState;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    #[error("failed to parse color '{input}': {reason}")]
    Parse { input: String, reason: &'static str },

    #[error("pixel ({x}, {y}) is outside the {width}x{height} framebuffer")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("{operation} is not allowed while the framebuffer is {state:?}")]
    InvalidFrameState {
        operation: &'static str,
        state: FrameState,
    },

    #[error("presentation surface error: {0}")]
    Surface(String),
}

pub type Result<T> = std::result::Result<T, RasterError>;
