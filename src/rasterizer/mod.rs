//! Minimal software rasterizer
//!
//! Features:
//! - Closed named palette with a fixed RGB table
//! - Bounds-checked framebuffer behind the `Screen` capability
//! - Filled rectangles, disks and scanline-filled triangles
//! - Plain-text PPM (P3) screenshots

mod error;
mod geometry;
mod math;
mod render;
mod screen;
mod triangle;
mod types;

pub use error::*;
pub use geometry::*;
pub use math::*;
pub use render::*;
pub use screen::*;
pub use triangle::*;
pub use types::*;

/// Extension appended to every screenshot name
pub const PPM_EXTENSION: &str = "ppm";

/// Largest screen, in cells, a framebuffer will allocate
pub const MAX_PIXELS: usize = 8192 * 8192;

/// Default screen dimensions
pub const WIDTH: usize = 1024;
pub const HEIGHT: usize = 1024;
