// src/display/mod.rs

//! Message-based presentation layer.
//!
//! - PresentSurface: host-specific primitives (query size, present pixels)
//! - DisplayManager: typed wrapper used by the engine
//! - Messages: Request/Response protocol for communication

pub mod driver;
pub mod drivers;
pub mod manager;
pub mod messages;

pub use driver::PresentSurface;
pub use drivers::HeadlessSurface;
pub use manager::{DisplayManager, DisplayMetrics};
pub use messages::{SurfaceError, SurfaceRequest, SurfaceResponse};
