//! Geometry capability and the axis-aligned shapes
//!
//! A shape checks its whole extent against the screen before it writes a
//! single pixel, so a rejected draw leaves the screen untouched.

use serde::{Deserialize, Serialize};

use super::error::RasterError;
use super::math::{in_range, Point};
use super::screen::Screen;
use super::triangle::Triangle;
use super::types::Color;

pub trait Geometry {
    /// Paint the shape onto `screen`, or fail without painting anything.
    fn draw(&self, screen: &mut dyn Screen) -> Result<(), RasterError>;

    /// Human-readable kind tag
    fn shape(&self) -> &'static str;
}

/// Shorthand for the shape-level bounds failure
pub(crate) fn out_of_bounds(shape: &'static str, screen: &dyn Screen) -> RasterError {
    let (max_x, max_y) = screen.max_xy();
    RasterError::GeometryOutOfBounds { shape, max_x, max_y }
}

/// Filled axis-aligned rectangle, corners inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Lower-left corner
    pub ll: Point,
    /// Upper-right corner
    pub ur: Point,
    pub color: Color,
}

impl Rectangle {
    pub fn new(ll: Point, ur: Point, color: Color) -> Self {
        Self { ll, ur, color }
    }
}

impl Geometry for Rectangle {
    /// An inverted rectangle (`ur` left of or below `ll`) paints nothing.
    fn draw(&self, screen: &mut dyn Screen) -> Result<(), RasterError> {
        let (max_x, max_y) = screen.max_xy();
        if self.ll.x < 0
            || self.ll.y < 0
            || self.ur.x as i64 >= max_x as i64
            || self.ur.y as i64 >= max_y as i64
        {
            return Err(out_of_bounds(self.shape(), screen));
        }

        for y in self.ll.y..=self.ur.y {
            for x in self.ll.x..=self.ur.x {
                screen.draw_pixel(x, y, self.color)?;
            }
        }
        Ok(())
    }

    fn shape(&self) -> &'static str {
        "Rectangle"
    }
}

/// Filled disk: every pixel within `radius` of `center`, boundary included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: u32,
    pub color: Color,
}

impl Circle {
    pub fn new(center: Point, radius: u32, color: Color) -> Self {
        Self { center, radius, color }
    }
}

impl Geometry for Circle {
    fn draw(&self, screen: &mut dyn Screen) -> Result<(), RasterError> {
        let (max_x, max_y) = screen.max_xy();
        let (cx, cy) = (self.center.x as i64, self.center.y as i64);
        let r = self.radius as i64;

        // bounding square must fit
        if !in_range(cx - r, max_x)
            || !in_range(cx + r, max_x)
            || !in_range(cy - r, max_y)
            || !in_range(cy + r, max_y)
        {
            return Err(out_of_bounds(self.shape(), screen));
        }

        // All offsets now fit in i32 since the square is on screen.
        let r_sq = r * r;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r_sq {
                    screen.draw_pixel((cx + dx) as i32, (cy + dy) as i32, self.color)?;
                }
            }
        }
        Ok(())
    }

    fn shape(&self) -> &'static str {
        "Circle"
    }
}

/// Any drawable shape, as stored in a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Triangle(Triangle),
}

impl Shape {
    pub fn color(&self) -> Color {
        match self {
            Shape::Rectangle(r) => r.color,
            Shape::Circle(c) => c.color,
            Shape::Triangle(t) => t.color,
        }
    }

    fn as_geometry(&self) -> &dyn Geometry {
        match self {
            Shape::Rectangle(r) => r,
            Shape::Circle(c) => c,
            Shape::Triangle(t) => t,
        }
    }
}

impl Geometry for Shape {
    fn draw(&self, screen: &mut dyn Screen) -> Result<(), RasterError> {
        self.as_geometry().draw(screen)
    }

    fn shape(&self) -> &'static str {
        self.as_geometry().shape()
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Triangle> for Shape {
    fn from(t: Triangle) -> Self {
        Shape::Triangle(t)
    }
}
