//! Core types for the rasterizer
//!
//! The palette is closed: every pixel on a screen holds one of the named
//! `Color`s below, and each name maps to a fixed RGB triple.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::RasterError;

/// RGB triple (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to [u8; 3] for byte-oriented consumers
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Named palette color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red = 0,
    Green = 1,
    Blue = 2,
    Yellow = 3,
    Orange = 4,
    Purple = 5,
    Brown = 6,
    Black = 7,
    White = 8,
}

/// Color table, indexed by `Color as usize`
pub static COLOR_TABLE: [Rgb; 9] = [
    Rgb::new(255, 0, 0),     // red
    Rgb::new(0, 255, 0),     // green
    Rgb::new(0, 0, 255),     // blue
    Rgb::new(255, 255, 0),   // yellow
    Rgb::new(255, 164, 0),   // orange
    Rgb::new(128, 0, 128),   // purple
    Rgb::new(165, 42, 42),   // brown
    Rgb::new(0, 0, 0),       // black
    Rgb::new(255, 255, 255), // white
];

impl Color {
    pub const ALL: [Color; 9] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Orange,
        Color::Purple,
        Color::Brown,
        Color::Black,
        Color::White,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Purple => "purple",
            Color::Brown => "brown",
            Color::Black => "black",
            Color::White => "white",
        }
    }

    /// Look up this color in the color table.
    ///
    /// Returns `None` only if the table is missing an entry, which the
    /// screenshot treats as a hard error rather than guessing a default.
    pub fn lookup(self) -> Option<Rgb> {
        COLOR_TABLE.get(self as usize).copied()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Color {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Color::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RasterError::UnknownColor(s.to_string()))
    }
}
