// src/main.rs

//! Demo host: renders the reference scene into a headless surface.
//!
//! Usage: `core-raster [config.json] [frames]`

use core_raster::{Color, Config, Engine, HeadlessSurface, Point};

use anyhow::Context;
use log::info;
use std::path::PathBuf;

const DEFAULT_FRAME_COUNT: u32 = 1;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let frame_count = match args.next() {
        Some(n) => n
            .parse::<u32>()
            .with_context(|| format!("Invalid frame count '{}'", n))?,
        None => DEFAULT_FRAME_COUNT,
    };

    // --- Configuration ---
    // Read before the logger starts; it supplies the default filter.
    let config = match &config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // Default filter comes from the config if RUST_LOG is not set.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.filter.as_str()),
    )
    .format_timestamp_micros()
    .init();

    info!("Starting core-raster demo...");
    match &config_path {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => info!("Configuration loaded (using default)."),
    }

    let surface = HeadlessSurface::new(config.surface.width_px, config.surface.height_px);
    let mut engine = Engine::new(surface, config);

    // --- Frame loop ---
    let square = Color::rgb(255, 0, 0);
    let outline = Color::from_channels(0, 0, 0, 200);
    for _ in 0..frame_count {
        let clear = engine.config().frame.clear_each_frame;
        engine
            .render_frame(clear, |r| {
                for y in 10..100 {
                    for x in 10..100 {
                        r.put_pixel(x, y, square)?;
                    }
                }
                r.draw_triangle(
                    Point::new(100, 100),
                    Point::new(150, 150),
                    Point::new(10, 100),
                    outline,
                    false,
                )
            })
            .context("Failed to render frame")?;
    }

    let surface = engine.surface();
    if let Some(frame) = surface.last_frame() {
        let painted = frame.pixels().iter().filter(|&&p| p != 0).count();
        info!(
            "Presented {} frame(s) of {}x{}; last frame has {} painted pixels",
            surface.frames_presented(),
            frame.width(),
            frame.height(),
            painted
        );
    }
    info!("core-raster exited successfully.");

    Ok(())
}
