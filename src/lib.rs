//! Shape Raster: minimal software rasterizer
//!
//! Paints filled rectangles, disks and triangles onto a grid of named
//! colors and saves the result as a plain-text PPM (P3) image.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod rasterizer;
pub mod scene;
