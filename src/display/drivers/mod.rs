// src/display/drivers/mod.rs

//! Presentation surface implementations.

pub mod headless;

pub use headless::HeadlessSurface;
