// src/config.rs

//! Configuration structures for the rasterizer engine and its demo host.
//!
//! Every struct derives `Deserialize` with `#[serde(default)]`, so a config
//! file only needs the keys it wants to change. Files are JSON.

use serde::{Deserialize, Serialize};
use std::path::Path;

use anyhow::Context;
use log::warn;

use crate::color::Color;

// --- Top-Level Configuration Structure ---

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Size of the headless surface used by the demo host.
    pub surface: SurfaceConfig,
    /// Per-frame behavior.
    pub frame: FrameConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse configuration JSON")
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_json_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Loads `path` if given, falling back to defaults when it is absent or
    /// unreadable.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load(path).unwrap_or_else(|e| {
                warn!("{:#}. Using default configuration.", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

// --- Surface Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width_px: u32,
    pub height_px: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        SurfaceConfig {
            width_px: 640,
            height_px: 480,
        }
    }
}

// --- Frame Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FrameConfig {
    /// Clear the buffer at the start of every frame. Disable for persistent
    /// trails.
    pub clear_each_frame: bool,
    /// Value written by a clear, as `#rrggbb` or `#rrggbbaa`.
    pub clear_color: Color,
}

impl Default for FrameConfig {
    fn default() -> Self {
        FrameConfig {
            clear_each_frame: true,
            clear_color: Color::TRANSPARENT,
        }
    }
}

// --- Logging Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `env_logger` filter used when `RUST_LOG` is not set.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "info".to_string(),
        }
    }
}
