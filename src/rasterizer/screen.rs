//! Screen capability
//!
//! Shapes only ever see a `dyn Screen`; the concrete pixel store behind it is
//! `Framebuffer`, but nothing in the shape code depends on that.

use std::path::Path;

use super::error::RasterError;
use super::types::Color;

pub trait Screen {
    /// Replace the pixel store with a `max_x` by `max_y` grid of white.
    /// Oversized dimensions fail and leave the current store as it was.
    fn initialize(&mut self, max_x: usize, max_y: usize) -> Result<(), RasterError>;

    /// Write `color` at column `x`, row `y`.
    fn draw_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), RasterError>;

    /// Read the color at column `x`, row `y`.
    fn get_pixel(&self, x: i32, y: i32) -> Result<Color, RasterError>;

    /// Reset every pixel to white.
    fn clear_screen(&mut self);

    /// Save the screen as `<name>.ppm`.
    fn screen_shot(&self, name: &Path) -> Result<(), RasterError>;

    /// Current `(max_x, max_y)`.
    fn max_xy(&self) -> (usize, usize);
}
