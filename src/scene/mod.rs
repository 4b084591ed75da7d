//! Scene module - what to draw, and where the picture goes
//!
//! A scene is the whole configuration of a run: screen size, screenshot
//! name and an ordered list of shapes. Shapes are drawn in list order, so
//! later shapes paint over earlier ones.

mod file;

pub use file::*;

use serde::{Deserialize, Serialize};

use crate::rasterizer::{
    check_dimensions, Circle, Color, Framebuffer, Geometry, Point, RasterError, Rectangle, Screen, Shape, Triangle,
    HEIGHT, WIDTH,
};

fn default_width() -> usize {
    WIDTH
}

fn default_height() -> usize {
    HEIGHT
}

fn default_output() -> String {
    "output".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    /// Screenshot name, without the `.ppm` extension
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

/// Result of drawing one shape of a scene
#[derive(Debug)]
pub struct DrawOutcome {
    pub index: usize,
    pub kind: &'static str,
    pub result: Result<(), RasterError>,
}

impl Scene {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            output: default_output(),
            shapes: Vec::new(),
        }
    }

    pub fn with_shape(mut self, shape: impl Into<Shape>) -> Self {
        self.shapes.push(shape.into());
        self
    }

    /// Built-in demonstration picture
    pub fn demo() -> Self {
        Scene::new(WIDTH, HEIGHT)
            .with_shape(Rectangle::new(Point::new(100, 300), Point::new(600, 900), Color::Red))
            .with_shape(Circle::new(Point::new(500, 500), 200, Color::Green))
            .with_shape(Triangle::new(
                Point::new(100, 100),
                Point::new(600, 300),
                Point::new(859, 850),
                Color::Yellow,
            ))
            .with_shape(Rectangle::new(Point::new(700, 50), Point::new(950, 200), Color::Blue))
            .with_shape(Circle::new(Point::new(850, 950), 60, Color::Purple))
            .with_shape(Triangle::new(
                Point::new(20, 1000),
                Point::new(300, 1000),
                Point::new(160, 940),
                Color::Brown,
            ))
    }

    /// Reject dimensions no framebuffer can hold
    pub fn validate(&self) -> Result<(), RasterError> {
        check_dimensions(self.width, self.height)?;
        Ok(())
    }

    /// Fresh white framebuffer sized for this scene
    pub fn framebuffer(&self) -> Result<Framebuffer, RasterError> {
        Framebuffer::new(self.width, self.height)
    }

    /// Draw every shape in order onto `screen`, which is initialized first.
    ///
    /// Stops at the first failure. Shapes drawn before it stay on screen; the
    /// failing shape itself paints nothing.
    pub fn draw(&self, screen: &mut dyn Screen) -> Result<(), RasterError> {
        screen.initialize(self.width, self.height)?;
        for shape in &self.shapes {
            shape.draw(screen)?;
        }
        Ok(())
    }

    /// Draw every shape in order, carrying on past shape failures.
    /// Only a screen that cannot be initialized fails the whole call.
    pub fn draw_all(&self, screen: &mut dyn Screen) -> Result<Vec<DrawOutcome>, RasterError> {
        screen.initialize(self.width, self.height)?;
        Ok(self
            .shapes
            .iter()
            .enumerate()
            .map(|(index, shape)| DrawOutcome {
                index,
                kind: shape.shape(),
                result: shape.draw(screen),
            })
            .collect())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Scene::new(WIDTH, HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_draws_cleanly() {
        let scene = Scene::demo();
        let mut fb = scene.framebuffer().unwrap();
        scene.draw(&mut fb).unwrap();
        assert_eq!(fb.max_xy(), (WIDTH, HEIGHT));
        assert_eq!(fb.get_pixel(500, 500).unwrap(), Color::Green);
        assert_eq!(fb.get_pixel(600, 300).unwrap(), Color::Yellow);
        assert_eq!(fb.get_pixel(800, 100).unwrap(), Color::Blue);
        assert_eq!(fb.get_pixel(850, 950).unwrap(), Color::Purple);
        assert_eq!(fb.get_pixel(1000, 1000).unwrap(), Color::White);
    }

    #[test]
    fn test_later_shapes_paint_over() {
        let scene = Scene::new(6, 6)
            .with_shape(Rectangle::new(Point::new(0, 0), Point::new(5, 5), Color::Black))
            .with_shape(Rectangle::new(Point::new(2, 2), Point::new(3, 3), Color::Orange));
        let mut fb = Framebuffer::default();
        scene.draw(&mut fb).unwrap();
        assert_eq!(fb.count(Color::Orange), 4);
        assert_eq!(fb.count(Color::Black), 32);
    }

    #[test]
    fn test_draw_stops_at_first_failure() {
        let scene = Scene::new(5, 5)
            .with_shape(Rectangle::new(Point::new(0, 0), Point::new(0, 0), Color::Red))
            .with_shape(Circle::new(Point::new(0, 0), 3, Color::Blue))
            .with_shape(Rectangle::new(Point::new(4, 4), Point::new(4, 4), Color::Red));
        let mut fb = Framebuffer::default();
        let err = scene.draw(&mut fb).unwrap_err();
        assert!(err.is_out_of_bounds());
        assert_eq!(fb.count(Color::Red), 1);
        assert_eq!(fb.count(Color::Blue), 0);
    }

    #[test]
    fn test_oversized_scene_fails_before_drawing() {
        let scene = Scene::new(1 << 32, 1 << 32)
            .with_shape(Rectangle::new(Point::new(0, 0), Point::new(0, 0), Color::Red));
        assert!(scene.validate().is_err());
        assert!(scene.framebuffer().is_err());

        let mut fb = Framebuffer::new(3, 3).unwrap();
        fb.draw_pixel(1, 1, Color::Blue).unwrap();
        let before = fb.clone();
        let err = scene.draw(&mut fb).unwrap_err();
        assert!(matches!(err, RasterError::ScreenTooLarge { .. }));
        assert!(scene.draw_all(&mut fb).is_err());
        assert_eq!(fb, before);
    }

    #[test]
    fn test_draw_all_keeps_going() {
        let scene = Scene::new(5, 5)
            .with_shape(Circle::new(Point::new(0, 0), 3, Color::Blue))
            .with_shape(Rectangle::new(Point::new(4, 4), Point::new(4, 4), Color::Red));
        let mut fb = Framebuffer::default();
        let outcomes = scene.draw_all(&mut fb).unwrap();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].kind, "Circle");
        assert!(outcomes[0].result.is_err());
        assert!(outcomes[1].result.is_ok());
        assert_eq!(fb.get_pixel(4, 4).unwrap(), Color::Red);
    }
}
