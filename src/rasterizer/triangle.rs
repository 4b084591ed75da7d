//! Triangle scanline fill
//!
//! Vertices are sorted by Y, then each edge is walked one row at a time to
//! get its X on that row. The long edge (v0 -> v2) bounds one side of every
//! row; the two short edges (v0 -> v1 -> v2) joined together bound the other.
//! Which side is left is decided per row, so crossings and zero-area
//! triangles never yield an inverted span.

use serde::{Deserialize, Serialize};

use super::error::RasterError;
use super::geometry::{out_of_bounds, Geometry};
use super::math::{interpolate, sort_by_y, Point};
use super::screen::Screen;
use super::types::Color;

/// Filled triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangle {
    pub pt0: Point,
    pub pt1: Point,
    pub pt2: Point,
    pub color: Color,
}

impl Triangle {
    pub fn new(pt0: Point, pt1: Point, pt2: Point, color: Color) -> Self {
        Self { pt0, pt1, pt2, color }
    }

    /// Inclusive `(left, right)` X span for every row from the top vertex's
    /// Y to the bottom vertex's Y, plus that first row.
    pub fn spans(&self) -> (i32, Vec<(i32, i32)>) {
        sorted_spans(sort_by_y(self.pt0, self.pt1, self.pt2))
    }
}

/// First row and per-row spans of vertices already sorted by Y
fn sorted_spans([p0, p1, p2]: [Point; 3]) -> (i32, Vec<(i32, i32)>) {
    let (long, short) = edges(p0, p1, p2);
    (p0.y, scanline_spans(&long, &short))
}

/// X per row of the long edge v0 -> v2, and of the short edges v0 -> v1 -> v2
/// joined into one list. Vertices must already be sorted by Y.
///
/// Row `y1` appears in both short edges; the value from v1 -> v2 is kept
/// since it starts exactly at `x1`, which keeps a flat top's first row whole.
pub fn edges(p0: Point, p1: Point, p2: Point) -> (Vec<i32>, Vec<i32>) {
    let x02 = interpolate(p0.y, p0.x, p2.y, p2.x);

    let mut x012 = interpolate(p0.y, p0.x, p1.y, p1.x);
    x012.pop();
    x012.extend(interpolate(p1.y, p1.x, p2.y, p2.x));

    (x02, x012)
}

/// Pair two row-aligned edges into inclusive `(left, right)` spans
pub fn scanline_spans(a: &[i32], b: &[i32]) -> Vec<(i32, i32)> {
    a.iter()
        .zip(b)
        .map(|(&xa, &xb)| (xa.min(xb), xa.max(xb)))
        .collect()
}

impl Geometry for Triangle {
    fn draw(&self, screen: &mut dyn Screen) -> Result<(), RasterError> {
        let sorted = sort_by_y(self.pt0, self.pt1, self.pt2);
        let (max_x, max_y) = screen.max_xy();
        if !sorted.iter().all(|p| p.within(max_x, max_y)) {
            return Err(out_of_bounds(self.shape(), screen));
        }

        let (top, spans) = sorted_spans(sorted);
        for (y, (left, right)) in (top..).zip(spans) {
            for x in left..=right {
                screen.draw_pixel(x, y, self.color)?;
            }
        }
        Ok(())
    }

    fn shape(&self) -> &'static str {
        "Triangle"
    }
}
