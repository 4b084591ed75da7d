//! Framebuffer and PPM output
//! The pixel store shapes draw into, and its plain-text (P3) serialization

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::error::RasterError;
use super::math::in_range;
use super::screen::Screen;
use super::types::Color;
use super::{MAX_PIXELS, PPM_EXTENSION};

/// Framebuffer for software rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: Vec<Color>, // row-major, max_x per row
    max_x: usize,
    max_y: usize,
}

/// Cell count of a `max_x` by `max_y` screen, if it fits under `MAX_PIXELS`
pub fn check_dimensions(max_x: usize, max_y: usize) -> Result<usize, RasterError> {
    max_x
        .checked_mul(max_y)
        .filter(|&cells| cells <= MAX_PIXELS)
        .ok_or(RasterError::ScreenTooLarge { max_x, max_y })
}

impl Framebuffer {
    /// White screen of `max_x` by `max_y`; fails for oversized dimensions
    pub fn new(max_x: usize, max_y: usize) -> Result<Self, RasterError> {
        let cells = check_dimensions(max_x, max_y)?;
        Ok(Self {
            pixels: vec![Color::White; cells],
            max_x,
            max_y,
        })
    }

    /// All pixels, row 0 first
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// One row of pixels, left to right
    pub fn row(&self, y: usize) -> Option<&[Color]> {
        if y >= self.max_y {
            return None;
        }
        let start = y * self.max_x;
        Some(&self.pixels[start..start + self.max_x])
    }

    fn index(&self, x: i32, y: i32) -> Result<usize, RasterError> {
        if in_range(x as i64, self.max_x) && in_range(y as i64, self.max_y) {
            Ok(y as usize * self.max_x + x as usize)
        } else {
            Err(RasterError::PixelOutOfBounds {
                x,
                y,
                max_x: self.max_x,
                max_y: self.max_y,
            })
        }
    }

    /// Count pixels holding `color`
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    /// Render the screen as a P3 document.
    ///
    /// Every pixel is written as `R G B ` and every row ends with a newline.
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> Result<(), RasterError> {
        write!(out, "P3\n{} {}\n255\n", self.max_x, self.max_y)?;
        for y in 0..self.max_y {
            for x in 0..self.max_x {
                let color = self.pixels[y * self.max_x + x];
                let rgb = color.lookup().ok_or(RasterError::InvalidColor { x, y })?;
                write!(out, "{} {} {} ", rgb.r, rgb.g, rgb.b)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Render the screen as a P3 string
    pub fn to_ppm_string(&self) -> Result<String, RasterError> {
        let mut buf = Vec::new();
        self.write_ppm(&mut buf)?;
        // write_ppm only emits ASCII
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self {
            pixels: Vec::new(),
            max_x: 0,
            max_y: 0,
        }
    }
}

/// `name` with the PPM extension appended (never replaced)
pub fn screenshot_path(name: &Path) -> PathBuf {
    let mut s = OsString::from(name.as_os_str());
    s.push(".");
    s.push(PPM_EXTENSION);
    PathBuf::from(s)
}

impl Screen for Framebuffer {
    fn initialize(&mut self, max_x: usize, max_y: usize) -> Result<(), RasterError> {
        *self = Framebuffer::new(max_x, max_y)?;
        Ok(())
    }

    fn draw_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), RasterError> {
        let idx = self.index(x, y)?;
        self.pixels[idx] = color;
        Ok(())
    }

    fn get_pixel(&self, x: i32, y: i32) -> Result<Color, RasterError> {
        let idx = self.index(x, y)?;
        Ok(self.pixels[idx])
    }

    fn clear_screen(&mut self) {
        self.pixels.fill(Color::White);
    }

    /// Written to a sibling temp file first and renamed into place, so
    /// `<name>.ppm` is either the previous file or a complete new one.
    fn screen_shot(&self, name: &Path) -> Result<(), RasterError> {
        let path = screenshot_path(name);
        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let written = File::create(&tmp)
            .map_err(RasterError::from)
            .and_then(|file| {
                let mut out = BufWriter::new(file);
                self.write_ppm(&mut out)?;
                out.flush()?;
                Ok(())
            })
            .and_then(|()| fs::rename(&tmp, &path).map_err(RasterError::from));

        if written.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        written
    }

    fn max_xy(&self) -> (usize, usize) {
        (self.max_x, self.max_y)
    }
}
