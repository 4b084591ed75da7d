//! Integer screen-space math
//!
//! Points are plain integer coordinates; whether they are valid depends on the
//! screen they get drawn to. Edge interpolation walks a polygon edge one
//! scanline at a time, which is what the triangle fill is built on.

use serde::{Deserialize, Serialize};

/// 2D integer coordinate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check if the point addresses a cell of a `max_x` by `max_y` grid
    pub fn within(self, max_x: usize, max_y: usize) -> bool {
        in_range(self.x as i64, max_x) && in_range(self.y as i64, max_y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// `0 <= v < max`, without overflow for any `i64` / `usize` pair
pub fn in_range(v: i64, max: usize) -> bool {
    v >= 0 && (v as u64) < max as u64
}

/// Sort three points by ascending Y with the fixed swap sequence
/// (0,1), (0,2), (1,2). X travels with its Y. Points with equal Y keep
/// their relative order.
pub fn sort_by_y(mut p0: Point, mut p1: Point, mut p2: Point) -> [Point; 3] {
    if p1.y < p0.y {
        std::mem::swap(&mut p0, &mut p1);
    }
    if p2.y < p0.y {
        std::mem::swap(&mut p0, &mut p2);
    }
    if p2.y < p1.y {
        std::mem::swap(&mut p1, &mut p2);
    }
    [p0, p1, p2]
}

/// X value of the edge `(xa, ya) -> (xb, yb)` at every Y in `ya..=yb`.
///
/// Row `k` is the exact value `xa + k * (xb - xa) / (yb - ya)` truncated
/// toward zero, so the last row is always `xb`. A flat edge
/// (`ya == yb`) yields just `xa`. Returns an empty list when `yb < ya`.
pub fn interpolate(ya: i32, xa: i32, yb: i32, xb: i32) -> Vec<i32> {
    if yb < ya {
        return Vec::new();
    }
    if ya == yb {
        return vec![xa];
    }

    // Exact rational form of xa + k * (dx / dy); i64 division truncates
    // toward zero and cannot miss an endpoint by a rounding step.
    let dx = xb as i64 - xa as i64;
    let dy = yb as i64 - ya as i64;
    (0..=dy)
        .map(|k| ((xa as i64 * dy + k * dx) / dy) as i32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_vertical() {
        assert_eq!(interpolate(0, 3, 4, 3), vec![3, 3, 3, 3, 3]);
    }

    #[test]
    fn test_interpolate_truncates() {
        // slope 2/3: 0, 0.67, 1.33, 2.0
        assert_eq!(interpolate(0, 0, 3, 2), vec![0, 0, 1, 2]);
        // slope -2/3: 5, 4.33, 3.67, 3.0
        assert_eq!(interpolate(2, 5, 5, 3), vec![5, 4, 3, 3]);
    }

    #[test]
    fn test_interpolate_shallow_edge_ends_on_endpoint() {
        // 1/49 summed in floating point lands just under 1 at the last row
        let xs = interpolate(0, 0, 49, 1);
        assert_eq!(xs.len(), 50);
        assert!(xs[..49].iter().all(|&x| x == 0));
        assert_eq!(xs[49], 1);
    }

    #[test]
    fn test_interpolate_flat_edge() {
        assert_eq!(interpolate(7, 2, 7, 9), vec![2]);
    }

    #[test]
    fn test_interpolate_reversed_range() {
        assert!(interpolate(5, 0, 2, 0).is_empty());
    }

    #[test]
    fn test_sort_by_y() {
        let [a, b, c] = sort_by_y(Point::new(1, 9), Point::new(2, 3), Point::new(3, 5));
        assert_eq!((a, b, c), (Point::new(2, 3), Point::new(3, 5), Point::new(1, 9)));
    }

    #[test]
    fn test_sort_by_y_equal_keys() {
        let [a, b, c] = sort_by_y(Point::new(4, 0), Point::new(0, 4), Point::new(0, 0));
        assert_eq!((a, b, c), (Point::new(4, 0), Point::new(0, 0), Point::new(0, 4)));
    }

    #[test]
    fn test_within() {
        assert!(Point::new(0, 0).within(1, 1));
        assert!(!Point::new(1, 0).within(1, 1));
        assert!(!Point::new(-1, 0).within(4, 4));
        assert!(!Point::ORIGIN.within(0, 0));
    }
}
