//! Rasterizer error type

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("pixel ({x}, {y}) out of bounds for {max_x}x{max_y} screen")]
    PixelOutOfBounds {
        x: i32,
        y: i32,
        max_x: usize,
        max_y: usize,
    },

    #[error("{shape}: geometry out of bounds for {max_x}x{max_y} screen")]
    GeometryOutOfBounds {
        shape: &'static str,
        max_x: usize,
        max_y: usize,
    },

    #[error("{max_x}x{max_y} screen exceeds the pixel limit")]
    ScreenTooLarge { max_x: usize, max_y: usize },

    #[error("unknown color `{0}`")]
    UnknownColor(String),

    #[error("invalid color at pixel [{x}, {y}]")]
    InvalidColor { x: usize, y: usize },

    #[error("screenshot failed: {0}")]
    Io(#[from] std::io::Error),
}

impl RasterError {
    /// True for both the per-pixel and the whole-shape bounds failures
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(
            self,
            RasterError::PixelOutOfBounds { .. } | RasterError::GeometryOutOfBounds { .. }
        )
    }
}
