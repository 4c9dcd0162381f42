// src/lib.rs

//! Software rasterizer: a CPU-side framebuffer with pixel-exact point, line
//! and triangle drawing, presented to a host surface once per frame.

pub mod color;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod framebuffer;
pub mod rasterizer;

pub use color::{Channel, Color};
pub use config::Config;
pub use display::{HeadlessSurface, PresentSurface};
pub use engine::Engine;
pub use error::{RasterError, Result};
pub use framebuffer::{Frame, FrameState, Framebuffer};
pub use rasterizer::{BresenhamLine, Point, Rasterizer, Span};
