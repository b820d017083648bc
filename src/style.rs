//! Colors and drawing style

use crate::error::{Error, Result};
use crossterm::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An RGB color, written as a CSS color name or `#rrggbb` / `#rgb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn named(name: &str) -> Option<Self> {
        let (r, g, b) = match name {
            "black" => (0, 0, 0),
            "white" => (255, 255, 255),
            "red" => (255, 0, 0),
            "darkred" => (139, 0, 0),
            "green" => (0, 128, 0),
            "lime" => (0, 255, 0),
            "darkgreen" => (0, 100, 0),
            "forestgreen" => (34, 139, 34),
            "blue" => (0, 0, 255),
            "navy" => (0, 0, 128),
            "darkblue" => (0, 0, 139),
            "steelblue" => (70, 130, 180),
            "skyblue" => (135, 206, 235),
            "yellow" => (255, 255, 0),
            "gold" => (255, 215, 0),
            "orange" => (255, 165, 0),
            "cyan" | "aqua" => (0, 255, 255),
            "teal" => (0, 128, 128),
            "magenta" | "fuchsia" => (255, 0, 255),
            "purple" => (128, 0, 128),
            "pink" => (255, 192, 203),
            "brown" => (165, 42, 42),
            "grey" | "gray" => (128, 128, 128),
            "lightgrey" | "lightgray" => (211, 211, 211),
            "darkgrey" | "darkgray" => (169, 169, 169),
            "dimgrey" | "dimgray" => (105, 105, 105),
            "silver" => (192, 192, 192),
            _ => return None,
        };
        Some(Self::new(r, g, b))
    }

    fn hex(digits: &str) -> Option<Self> {
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
                Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok().map(|v| v * 17);
                Some(Self::new(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => None,
        }
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        let parsed = match name.strip_prefix('#') {
            Some(digits) => Self::hex(digits),
            None => Self::named(&name),
        };
        parsed.ok_or_else(|| Error::Color(s.to_string()))
    }
}

impl TryFrom<String> for Rgb {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb { r: c.r, g: c.g, b: c.b }
    }
}

/// Drawing style for one globe.
///
/// `line_width` is measured in hundredths of the globe radius and `scale` is
/// the globe diameter as a fraction of the smaller canvas side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub graticule_color: Rgb,
    pub line_color: Rgb,
    pub dot_color: Rgb,
    pub background_color: Rgb,
    pub line_width: f64,
    pub scale: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            graticule_color: Rgb::new(211, 211, 211),
            line_color: Rgb::new(0, 0, 0),
            dot_color: Rgb::new(255, 0, 0),
            background_color: Rgb::new(255, 255, 255),
            line_width: 0.1,
            scale: 0.7,
        }
    }
}

impl Style {
    /// Colors that read well on a dark terminal background.
    pub fn terminal() -> Self {
        Self {
            graticule_color: Rgb::new(105, 105, 105),
            line_color: Rgb::new(50, 205, 50),
            dot_color: Rgb::new(255, 215, 0),
            background_color: Rgb::new(0, 0, 0),
            ..Self::default()
        }
    }

    /// Returns a description of the first invalid field, if any.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(format!("line_width must be positive, got {}", self.line_width));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(format!("scale must be positive, got {}", self.scale));
        }
        Ok(())
    }
}
