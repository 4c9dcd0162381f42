// src/color.rs

//! Packed 32-bit RGBA color.
//!
//! The byte order is fixed for the whole crate: red occupies the most
//! significant byte and alpha the least significant one.
//!
//! ```text
//!  31      24 23      16 15       8 7        0
//! +----------+----------+----------+----------+
//! |   red    |  green   |   blue   |  alpha   |
//! +----------+----------+----------+----------+
//! ```
//!
//! The framebuffer stores exactly this value per cell and presentation
//! surfaces receive it unchanged.

use crate::error::RasterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One 8-bit slice of a packed [`Color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    /// Bit offset of the channel inside the packed value.
    pub const fn shift(self) -> u32 {
        match self {
            Channel::Red => 24,
            Channel::Green => 16,
            Channel::Blue => 8,
            Channel::Alpha => 0,
        }
    }
}

/// A color packed into a single `u32` (RGBA, red most significant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn from_channels(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color((r as u32) << 24 | (g as u32) << 16 | (b as u32) << 8 | a as u32)
    }

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_channels(r, g, b, 0xFF)
    }

    pub const fn from_packed(packed: u32) -> Self {
        Color(packed)
    }

    pub const fn to_packed(self) -> u32 {
        self.0
    }

    pub const fn channel(self, channel: Channel) -> u8 {
        (self.0 >> channel.shift()) as u8
    }

    /// Replaces one channel, leaving the other three untouched.
    pub fn set_channel(&mut self, channel: Channel, value: u8) {
        let shift = channel.shift();
        self.0 = (self.0 & !(0xFF << shift)) | ((value as u32) << shift);
    }

    pub const fn red(self) -> u8 {
        self.channel(Channel::Red)
    }

    pub const fn green(self) -> u8 {
        self.channel(Channel::Green)
    }

    pub const fn blue(self) -> u8 {
        self.channel(Channel::Blue)
    }

    pub const fn alpha(self) -> u8 {
        self.channel(Channel::Alpha)
    }

    pub fn set_red(&mut self, value: u8) {
        self.set_channel(Channel::Red, value);
    }

    pub fn set_green(&mut self, value: u8) {
        self.set_channel(Channel::Green, value);
    }

    pub fn set_blue(&mut self, value: u8) {
        self.set_channel(Channel::Blue, value);
    }

    pub fn set_alpha(&mut self, value: u8) {
        self.set_channel(Channel::Alpha, value);
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.set_alpha(alpha);
        self
    }

    /// Channels in memory-transfer order: `[r, g, b, a]`.
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// `#rrggbb`, alpha dropped.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())
    }

    /// `#rrggbbaa`.
    pub fn to_hex_alpha(self) -> String {
        format!("#{:08x}", self.0)
    }

    pub fn to_css_rgb(self) -> String {
        format!("rgb({},{},{})", self.red(), self.green(), self.blue())
    }

    pub fn to_css_rgba(self) -> String {
        format!(
            "rgba({},{},{},{})",
            self.red(),
            self.green(),
            self.blue(),
            self.alpha()
        )
    }

    /// Parses `rrggbb` or `rrggbbaa`, with an optional leading `#`.
    /// A six-digit string is treated as fully opaque.
    pub fn from_hex_str(input: &str) -> Result<Self, RasterError> {
        let parse_error = |reason| RasterError::Parse {
            input: input.to_string(),
            reason,
        };

        let digits = input.strip_prefix('#').unwrap_or(input);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(parse_error("expected only hexadecimal digits"));
        }

        let value = |s: &str| u32::from_str_radix(s, 16).map_err(|_| parse_error("invalid hex"));
        match digits.len() {
            6 => Ok(Color((value(digits)? << 8) | 0xFF)),
            8 => Ok(Color(value(digits)?)),
            _ => Err(parse_error("expected 6 or 8 hex digits")),
        }
    }
}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Color(packed)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl FromStr for Color {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex_str(s)
    }
}

impl TryFrom<String> for Color {
    type Error = RasterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex_str(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex_alpha()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_alpha())
    }
}
